use super::card::Card;
use super::counted::Counted;
use super::rank::Rank;
use super::suit::Suit;
use crate::swar::Swar;
use crate::util::Arbitrary;
use crate::util::NRANKS;
use crate::util::NSUITS;
use crate::util::RANK_BITS;
use crate::util::RANK_MASK;
use crate::util::SUIT_BITS;

/// One field per suit, one bit per rank within it.
pub type SuitSwar = Swar<SUIT_BITS>;
/// One field per rank, one bit per suit within it.
pub type RankSwar = Swar<RANK_BITS>;
/// Cards per suit.
pub type SuitCounts = Counted<SUIT_BITS>;
/// Cards per rank.
pub type RankCounts = Counted<RANK_BITS>;

/// A set of cards held in two dual packed views.
///
/// `by_suit` answers "which ranks does this suit hold", `by_rank` answers
/// "which suits hold this rank". Card (r, s) is in one view iff it is in
/// the other. Counting either view per field gives suit counts or rank
/// counts in a handful of word operations.
///
/// Bit `r * 4 + s` of `by_rank` is exactly the byte encoding of [`Card`],
/// so the by-rank view doubles as the 52-bit card mask.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CSet {
    by_suit: SuitSwar,
    by_rank: RankSwar,
}

impl CSet {
    pub const fn empty() -> Self {
        Self {
            by_suit: SuitSwar::empty(),
            by_rank: RankSwar::empty(),
        }
    }
    pub const fn by_suit(&self) -> SuitSwar {
        self.by_suit
    }
    pub const fn by_rank(&self) -> RankSwar {
        self.by_rank
    }

    /// A new set with the card added to both views.
    pub const fn include(&self, rank: Rank, suit: Suit) -> Self {
        Self {
            by_suit: self.by_suit.set(suit.index(), rank.index()),
            by_rank: self.by_rank.set(rank.index(), suit.index()),
        }
    }
    pub fn insert(&self, card: Card) -> Self {
        self.include(card.rank(), card.suit())
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.by_rank.field(card.rank().index()) & (1 << card.suit().index()) != 0
    }
    pub const fn size(&self) -> usize {
        self.by_rank.value().count_ones() as usize
    }

    pub fn suit_counts(&self) -> SuitCounts {
        Counted::from(self.by_suit)
    }
    pub fn number_counts(&self) -> RankCounts {
        Counted::from(self.by_rank)
    }
    /// Rank-presence mask of a single suit.
    pub const fn suit(&self, suit: Suit) -> u32 {
        self.by_suit.field(suit.index()) as u32 & RANK_MASK
    }
    /// Rank-presence mask across all suits.
    pub const fn number_set(&self) -> u32 {
        Self::number_set_of(self.by_suit.value())
    }
    /// Folds every suit field of a raw by-suit word onto the lowest one.
    pub const fn number_set_of(bits: u64) -> u32 {
        let mut ranks = bits;
        let mut fold = bits;
        let mut n = 1;
        while n < NSUITS {
            fold >>= SUIT_BITS;
            ranks |= fold;
            n += 1;
        }
        ranks as u32 & RANK_MASK
    }

    /// Uniformly random set of `n` distinct cards.
    pub fn sample(n: usize) -> Self {
        let ref mut rng = rand::rng();
        rand::seq::index::sample(rng, (NRANKS * NSUITS) as usize, n)
            .into_iter()
            .map(|i| Card::from(i as u8))
            .collect()
    }
}

impl Arbitrary for CSet {
    fn random() -> Self {
        Self::sample(7)
    }
}

impl std::ops::BitOr for CSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self {
            by_suit: self.by_suit | rhs.by_suit,
            by_rank: self.by_rank | rhs.by_rank,
        }
    }
}
impl std::ops::BitAnd for CSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self {
            by_suit: self.by_suit & rhs.by_suit,
            by_rank: self.by_rank & rhs.by_rank,
        }
    }
}
impl std::ops::BitXor for CSet {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self {
        Self {
            by_suit: self.by_suit ^ rhs.by_suit,
            by_rank: self.by_rank ^ rhs.by_rank,
        }
    }
}

impl From<Card> for CSet {
    fn from(card: Card) -> Self {
        Self::empty().insert(card)
    }
}
impl FromIterator<Card> for CSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, card| set.insert(card))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted best-first)
impl From<Vec<Card>> for CSet {
    fn from(cards: Vec<Card>) -> Self {
        cards.into_iter().collect()
    }
}
impl From<CSet> for Vec<Card> {
    fn from(set: CSet) -> Self {
        let mut bits = set.by_rank.value();
        let mut cards = Vec::with_capacity(set.size());
        while bits > 0 {
            cards.push(Card::from(bits.trailing_zeros() as u8));
            bits &= bits - 1;
        }
        cards
    }
}

/// str isomorphism
/// rejects repeated cards
impl TryFrom<&str> for CSet {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Card::parse(s)?
            .into_iter()
            .try_fold(Self::empty(), |set, card| match set.contains(&card) {
                true => Err(format!("duplicate card: {}", card)),
                false => Ok(set.insert(card)),
            })
    }
}

impl std::fmt::Display for CSet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in Vec::<Card>::from(*self) {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
