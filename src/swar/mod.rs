//! SWAR (SIMD-within-a-register) packed fields.
//!
//! Several small counters or flag sets share one u64 and are processed in
//! parallel with ordinary shifts, masks and adds.
pub mod bits;
pub use bits::*;

pub mod count;
pub use count::*;

pub mod swar;
pub use swar::*;
