use crate::swar::Swar;
use crate::swar::greater_equal;

/// A packed container after per-field population counting.
///
/// Field `i` holds how many bits were set in field `i` of the source,
/// which never exceeds W. Threshold views produced by
/// [`Counted::greater_equal`] are also `Counted`: their fields are
/// non-zero exactly where the original count passed the threshold.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Counted<const W: u32>(Swar<W>);

impl<const W: u32> Counted<W> {
    pub const fn counts(&self) -> Swar<W> {
        self.0
    }
    /// Count held by a single field.
    pub const fn count(&self, index: usize) -> u64 {
        self.0.field(index)
    }
    /// Fields whose count is at least N. Constant time in field count.
    #[inline(always)]
    pub const fn greater_equal<const N: u64>(&self) -> Self {
        Self(Swar::<W>::new(greater_equal::<N, W>(self.0.value())))
    }
    /// True iff any field is non-zero.
    #[inline(always)]
    pub const fn any(&self) -> bool {
        self.0.value() != 0
    }
    /// Lowest field index with a non-zero count, which is the best rank
    /// (or suit) under the high-to-low index convention.
    ///
    /// Meaningless on an all-zero value; check [`Counted::any`] first.
    #[inline(always)]
    pub const fn best_index(&self) -> usize {
        self.0.lowest()
    }
    /// Zeroes one field, excluding an already-consumed rank.
    #[inline(always)]
    pub const fn clear_at(&self, index: usize) -> Self {
        Self(self.0.clear(index))
    }
}

impl<const W: u32> From<Swar<W>> for Counted<W> {
    fn from(bits: Swar<W>) -> Self {
        Self(bits.popcount())
    }
}
impl<const W: u32> From<Counted<W>> for Swar<W> {
    fn from(c: Counted<W>) -> Self {
        c.0
    }
}
impl<const W: u32> From<Counted<W>> for bool {
    fn from(c: Counted<W>) -> Self {
        c.any()
    }
}

impl<const W: u32> std::fmt::Display for Counted<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks(fields: &[(usize, usize)]) -> Swar<4> {
        fields
            .iter()
            .fold(Swar::<4>::empty(), |s, &(f, b)| s.set(f, b))
    }

    #[test]
    fn counts_each_field() {
        let c = Counted::from(ranks(&[(0, 0), (0, 1), (0, 2), (3, 3), (12, 0), (12, 2)]));
        assert_eq!(c.count(0), 3);
        assert_eq!(c.count(3), 1);
        assert_eq!(c.count(12), 2);
        assert_eq!(c.count(5), 0);
    }

    #[test]
    fn count_never_exceeds_width() {
        let c = Counted::from(Swar::<4>::from(u64::MAX));
        assert!((0..16).all(|i| c.count(i) == 4));
    }

    #[test]
    fn threshold_flags_fields() {
        let c = Counted::from(ranks(&[(2, 0), (2, 1), (5, 0), (5, 1), (5, 2), (7, 3)]));
        let pairs = c.greater_equal::<2>();
        assert!(pairs.any());
        assert_eq!(pairs.best_index(), 2);
        let trips = c.greater_equal::<3>();
        assert_eq!(trips.best_index(), 5);
        assert!(!c.greater_equal::<4>().any());
    }

    #[test]
    fn clear_excludes_field() {
        let c = Counted::from(ranks(&[(1, 0), (4, 2)]));
        assert_eq!(c.best_index(), 1);
        let d = c.clear_at(1);
        assert_eq!(d.best_index(), 4);
        assert_eq!(c.best_index(), 1);
        assert!(!d.clear_at(4).any());
    }

    #[test]
    fn truthiness() {
        assert!(!bool::from(Counted::from(Swar::<16>::empty())));
        assert!(bool::from(Counted::from(Swar::<16>::empty().set(2, 7))));
    }
}
