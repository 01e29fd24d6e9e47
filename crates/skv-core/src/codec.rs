use crate::serial::SerialCode;

/// Bias subtracted from the second accumulator per folded byte (0xbc).
const BYTE_BIAS: u32 = 188;

/// Incremental serial checksum over identifier bytes.
///
/// Two unsigned 32-bit accumulators, updated per byte in input order:
/// - `hash_a` += byte * 8
/// - `hash_b` += byte * byte - 188
///
/// All arithmetic wraps modulo 2^32 (unsigned overflow semantics). Feeding
/// the same bytes in the same order always yields the same serial, no matter
/// how the input is split across `update` calls.
#[derive(Debug, Clone, Copy)]
pub struct SerialDigest {
    hash_a: u32,
    hash_b: u32,
    empty: bool,
}

impl SerialDigest {
    pub fn new() -> Self {
        Self {
            hash_a: 0,
            hash_b: 0,
            empty: true,
        }
    }

    /// Fold bytes into both accumulators, first to last.
    ///
    /// Bytes are taken as unsigned values 0-255; `b * b` is at most 65025 and
    /// never wraps on its own, only the running totals do.
    pub fn update(&mut self, bytes: &[u8]) {
        if !bytes.is_empty() {
            self.empty = false;
        }
        for &b in bytes {
            let b = u32::from(b);
            self.hash_a = self.hash_a.wrapping_add(b * 8);
            self.hash_b = self.hash_b.wrapping_add(b * b).wrapping_sub(BYTE_BIAS);
        }
    }

    /// Render the accumulators as the canonical serial.
    ///
    /// An identifier that contributed no bytes at all is folded as a single
    /// zero byte (`+0` to `hash_a`, `0 - 188` wrapped into `hash_b`), so the
    /// empty identifier maps to `0000-ffffff44` instead of being rejected.
    pub fn finalize(mut self) -> SerialCode {
        if self.empty {
            self.update(&[0]);
        }
        SerialCode::from_parts(self.hash_a, self.hash_b)
    }
}

impl Default for SerialDigest {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the canonical serial for an identifier in one shot.
pub fn derive(identifier: &[u8]) -> SerialCode {
    let mut digest = SerialDigest::new();
    digest.update(identifier);
    digest.finalize()
}

/// Check a candidate serial against an identifier by recomputation.
///
/// The candidate must equal the derived serial exactly; see
/// [`SerialCode::matches`].
pub fn validate(identifier: &[u8], candidate: &str) -> bool {
    derive(identifier).matches(candidate)
}
