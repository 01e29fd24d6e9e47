
#[allow(dead_code)]
pub fn is_lower_hex(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

#[allow(dead_code)]
pub fn is_serial_shape(s: &str) -> bool {
    match s.split_once('-') {
        Some((a, b)) => a.len() >= 4 && b.len() >= 4 && is_lower_hex(a) && is_lower_hex(b),
        None => false,
    }
}
