//! Hand category detectors and head-to-head comparators.
//!
//! Detectors take counted or rank-presence views of a [`CSet`] and report
//! whether a category applies. Comparators reduce two hands' detector
//! outputs to a signed result: positive when hand 1 is better, negative
//! when hand 2 is, zero to fall through to the next comparator.
//!
//! [`CSet`]: crate::cards::CSet
pub mod comparison;
pub use comparison::*;

pub mod flush;
pub use flush::*;

pub mod hint;
pub use hint::*;

pub mod house;
pub use house::*;

pub mod kickers;
pub use kickers::*;

pub mod straight;
pub use straight::*;
