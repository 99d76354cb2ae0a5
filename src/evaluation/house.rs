use super::comparison::positive_index1_better;
use super::hint::rare;
use crate::cards::Rank;
use crate::cards::RankCounts;

/// Rank indices of a full house: the best triple and the best pair left
/// once that triple's rank is excluded.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FullHouse {
    pub triple: usize,
    pub pair: usize,
}

impl FullHouse {
    pub fn ranks(&self) -> (Rank, Rank) {
        (Rank::from(self.triple), Rank::from(self.pair))
    }
}

/// Finds the best full house in a set of rank counts.
///
/// The triple's rank is cleared before looking for the pair, so one rank
/// can't fill both roles. A second triple does qualify as the pair.
pub fn is_full_house(counts: RankCounts) -> Option<FullHouse> {
    let trips = counts.greater_equal::<3>();
    if rare(trips.any()) {
        let triple = trips.best_index();
        let pairs = counts.clear_at(triple).greater_equal::<2>();
        if rare(pairs.any()) {
            let pair = pairs.best_index();
            return Some(FullHouse { triple, pair });
        }
    }
    None
}

/// Triples first, then pairs.
pub fn best_full_house(h1: FullHouse, h2: FullHouse) -> i32 {
    match positive_index1_better(h1.triple, h2.triple) {
        0 => positive_index1_better(h1.pair, h2.pair),
        diff => diff,
    }
}

impl std::fmt::Display for FullHouse {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (triple, pair) = self.ranks();
        write!(f, "{}{}{}{}{}", triple, triple, triple, pair, pair)
    }
}
