use std::cmp::Ordering;

/// Signed head-to-head result from two "best" indices.
///
/// Lower indices are better, so a positive value means hand 1 wins, a
/// negative value means hand 2 wins, and zero means undecided: the caller
/// falls through to the next comparator.
#[inline(always)]
pub const fn positive_index1_better(index1: usize, index2: usize) -> i32 {
    index2 as i32 - index1 as i32
}

/// Collapses a signed comparator result into hand 1's `Ordering`.
pub fn ordering(decision: i32) -> Ordering {
    decision.cmp(&0)
}
