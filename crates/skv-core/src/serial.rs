use core::fmt;

use serde::{Deserialize, Serialize};

/// A derived serial in canonical form.
///
/// Shape is `XXXX-YYYY`: both accumulator values as lowercase hex,
/// left-zero-padded to a minimum of 4 digits each. Values that need more
/// than 4 digits keep all of them. Stored as an owned `String` so wide
/// accumulators are never clipped to a fixed buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SerialCode(String);

impl SerialCode {
    /// Canonical rendering of an accumulator pair.
    pub(crate) fn from_parts(hash_a: u32, hash_b: u32) -> Self {
        Self(format!("{hash_a:04x}-{hash_b:04x}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Exact comparison against a candidate string.
    ///
    /// Byte-for-byte: no trimming, no case folding. A candidate that differs
    /// in case, padding width, or length never matches.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl fmt::Display for SerialCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SerialCode> for String {
    fn from(code: SerialCode) -> Self {
        code.0
    }
}
