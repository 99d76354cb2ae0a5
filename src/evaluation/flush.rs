use super::comparison::positive_index1_better;
use crate::cards::SuitCounts;
use crate::swar::best_bit;
use crate::util::HAND_SIZE;

/// Suits holding at least five cards.
#[inline(always)]
pub fn flushes(suits: SuitCounts) -> SuitCounts {
    suits.greater_equal::<{ HAND_SIZE as u64 }>()
}

/// Compares two flushes card by card, best card first.
///
/// Each round removes the compared top card from both masks, so the five
/// rounds walk down the five best cards of each flush. Stops early if
/// either mask runs out.
pub fn best_flush(p1: u32, p2: u32) -> i32 {
    let mut p1 = p1;
    let mut p2 = p2;
    for _ in 0..HAND_SIZE {
        if p1 == 0 || p2 == 0 {
            break;
        }
        let best1 = best_bit(u64::from(p1));
        let best2 = best_bit(u64::from(p2));
        let diff = positive_index1_better(best1, best2);
        if diff != 0 {
            return diff;
        }
        p1 &= p1 - 1;
        p2 &= p2 - 1;
    }
    0
}
