//! Text decoding helpers for legacy byte strings.
//!
//! Only an approximation of the legacy multi-byte character set is provided:
//! ASCII passes through and the first non-ASCII byte switches to one UTF-8
//! fallback pass. Group-escape tables are not decoded.

pub mod legacy;
