use super::count;

/// A u64 subdivided into equal fields of W bits.
///
/// Field `i` occupies bits `[i * W, i * W + W)`. Every operation returns a
/// new value; nothing is mutated in place. W must be a power of two.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swar<const W: u32>(u64);

impl<const W: u32> Swar<W> {
    /// Number of whole fields that fit in the backing word.
    pub const FIELDS: u32 = u64::BITS / W;

    pub const fn new(bits: u64) -> Self {
        Self(bits)
    }
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn value(&self) -> u64 {
        self.0
    }
    /// Raises `bit` within `field`.
    pub const fn set(&self, field: usize, bit: usize) -> Self {
        debug_assert!(bit < W as usize);
        Self(self.0 | 1 << (field * W as usize + bit))
    }
    /// Zeroes every bit of `field`.
    pub const fn clear(&self, field: usize) -> Self {
        Self(self.0 & !(Self::ones() << (field * W as usize)))
    }
    /// The raw bits of `field`, shifted down to the low end.
    pub const fn field(&self, field: usize) -> u64 {
        (self.0 >> (field * W as usize)) & Self::ones()
    }
    /// Per-field population count.
    pub const fn popcount(&self) -> Self {
        Self(count::popcount::<W>(self.0))
    }
    /// Lowest field holding any set bit.
    pub const fn lowest(&self) -> usize {
        super::best_bit(self.0) / W as usize
    }

    const fn ones() -> u64 {
        u64::MAX >> (u64::BITS - W)
    }
}

/// u64 isomorphism
impl<const W: u32> From<u64> for Swar<W> {
    fn from(n: u64) -> Self {
        Self(n)
    }
}
impl<const W: u32> From<Swar<W>> for u64 {
    fn from(s: Swar<W>) -> Self {
        s.0
    }
}

impl<const W: u32> std::ops::BitAnd for Swar<W> {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}
impl<const W: u32> std::ops::BitOr for Swar<W> {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}
impl<const W: u32> std::ops::BitXor for Swar<W> {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

/// fields printed high to low, separated by underscores
impl<const W: u32> std::fmt::Display for Swar<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let fields = (0..Self::FIELDS as usize)
            .rev()
            .map(|i| format!("{:0width$b}", self.field(i), width = W as usize))
            .collect::<Vec<String>>()
            .join("_");
        write!(f, "{}", fields)
    }
}
