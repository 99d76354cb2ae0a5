//! Bit-parallel poker hand category detection and comparison.
//!
//! A set of cards is packed twice into a single pair of words: once with one
//! field per suit, once with one field per rank. Per-field population
//! counts and threshold tricks then answer "is there a flush", "is there a
//! full house" or "whose kicker is better" in a handful of word operations,
//! with no per-card loops.
//!
//! ## Core Types
//!
//! - [`Swar`]: A u64 split into equal-width fields
//! - [`Counted`]: Per-field population counts of a [`Swar`]
//! - [`CSet`]: A card set held in by-suit and by-rank packed views
//! - [`Card`], [`Rank`], [`Suit`]: Value types and parsing
//!
//! ## Evaluation
//!
//! - [`flushes`], [`straights`], [`is_full_house`], [`four_of_a_kinds`]: Detectors
//! - [`best_kicker`], [`best_kickers`], [`best_four_of_a_kind`],
//!   [`best_full_house`], [`best_flush`], [`best_straight`]: Comparators
//!
//! Ranks are indexed high-to-low (the Ace is 0), so "best" always means the
//! lowest set bit, and comparators return `index2 - index1`.
pub mod cards;
pub mod evaluation;
pub mod swar;
pub mod util;

pub use cards::*;
pub use evaluation::*;
pub use swar::*;
pub use util::*;
