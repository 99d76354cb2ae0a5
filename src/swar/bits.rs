/// Index of the lowest set bit.
///
/// With ranks indexed high-to-low this is the best rank present.
/// Undefined on zero: callers check truthiness first.
#[inline(always)]
pub const fn best_bit(x: u64) -> usize {
    debug_assert!(x != 0, "best_bit of an empty mask");
    x.trailing_zeros() as usize
}
