//! `skv-core` is the serial-key codec: a deterministic checksum that maps an
//! identifier (an email-like byte string) to a canonical `XXXX-YYYY`
//! lowercase-hex serial, plus validation of candidate serials by
//! recomputation and exact comparison.
//!
//! This crate intentionally contains **no** I/O, persistence, or prompting.
//! Those belong in higher layers (the `skv` CLI). `skv-core` focuses on:
//! - the accumulator arithmetic
//! - canonical serial formatting
//! - recomputation-based validation
//!
//! The checksum is not a MAC and claims no cryptographic strength; serials
//! are predictable from the identifier by construction.

pub mod codec;
pub mod serial;

pub use codec::{SerialDigest, derive, validate};
pub use serial::SerialCode;
