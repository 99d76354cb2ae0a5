#[cold]
#[inline(never)]
fn cold() {}

/// Tells the optimizer the taken branch is statistically unlikely.
///
/// Most hands are not flushes or full houses, so the detectors for those
/// categories route their hit path through a `#[cold]` call. Returns `b`
/// unchanged.
#[inline(always)]
pub fn rare(b: bool) -> bool {
    if b {
        cold();
    }
    b
}
