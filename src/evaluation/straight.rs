use super::comparison::positive_index1_better;
use crate::cards::Rank;
use crate::swar::best_bit;
use crate::util::NRANKS;
use crate::util::RANK_MASK;

/// Marks every five-card straight in a rank-presence mask.
///
/// Each set bit of the result is the top card of a completed straight, so
/// the best straight is its lowest set bit. Zero means no straight.
///
/// ```text
///  2 1 0 9 8 7 6 5 4 3 2 1 0   bit index
///  2 3 4 5 6 7 8 9 T J Q K A   rank
///  ranks & ranks >> 1          pairs in sequence
///  ... twice more              fours in sequence, marked at their top card
///  | ace << (NRANKS - 3)       a virtual 4-3-2-A run, marked at the Four
///  & run >> 1                  fives in sequence
/// ```
///
/// The injected bit can only complete a straight together with the
/// natural 5-4-3-2 run, so the ace plays low exactly once, in the wheel.
#[inline(always)]
pub fn straights(ranks: u32) -> u32 {
    let ranks = ranks & RANK_MASK;
    let ace = (ranks & u32::from(Rank::Ace)) << (NRANKS - 3);
    let mut run = ranks;
    run &= run >> 1;
    run &= run >> 1;
    run &= run >> 1;
    run |= ace;
    run &= run >> 1;
    run
}

/// Compares the lowest marker bit of two [`straights`] masks. Both must be
/// non-zero.
#[inline(always)]
pub fn best_straight(s1: u32, s2: u32) -> i32 {
    positive_index1_better(best_bit(u64::from(s1)), best_bit(u64::from(s2)))
}

#[cfg(test)]
#[cfg(not(feature = "shortdeck"))]
mod tests {
    use super::*;
    use crate::cards::CSet;
    use crate::cards::Suit;
    use crate::evaluation::flushes;
    use crate::util::Arbitrary;

    fn ranks(s: &str) -> u32 {
        CSet::try_from(s).unwrap().number_set()
    }

    /// per-rank reference: a straight tops out at i if i..i+5 are all present,
    /// or at the Five if the wheel is present
    fn naive(mask: u32) -> u32 {
        let has = |i: u32| mask & (1 << i) != 0;
        let mut out = 0;
        for top in 0..=NRANKS - 5 {
            if (top..top + 5).all(has) {
                out |= 1 << top;
            }
        }
        let five = Rank::Five.index() as u32;
        if has(0) && (five..NRANKS).all(has) {
            out |= 1 << five;
        }
        out
    }

    #[test]
    fn matches_reference_on_every_mask() {
        for mask in 0..=RANK_MASK {
            assert_eq!(straights(mask), naive(mask), "mask {:013b}", mask);
        }
    }

    #[test]
    fn no_run_of_four_no_straight() {
        for mask in 0..=RANK_MASK {
            let fours = mask & mask >> 1 & mask >> 2 & mask >> 3;
            let wheel = mask & 1 != 0 && (9..13).all(|i| mask & 1 << i != 0);
            if fours == 0 && !wheel {
                assert_eq!(straights(mask), 0);
            }
        }
    }

    #[test]
    fn broadway() {
        let s = straights(ranks("As Kh Qd Jc Ts"));
        assert_eq!(best_bit(u64::from(s)), Rank::Ace.index());
    }

    #[test]
    fn wheel() {
        let s = straights(ranks("As 2h 3d 4c 5s"));
        assert!(s != 0);
        assert_eq!(best_bit(u64::from(s)), Rank::wheel().index());
    }

    #[test]
    fn ace_does_not_wrap_around() {
        assert_eq!(straights(ranks("As 6h 5d 4c 3s")), 0);
        assert_eq!(straights(ranks("Qs Kh As 2d 3c")), 0);
    }

    #[test]
    fn six_high_beats_wheel() {
        let s = straights(ranks("As 2h 3d 4c 5s 6h"));
        assert_eq!(best_bit(u64::from(s)), Rank::Six.index());
        assert!(s & u32::from(Rank::Five) != 0);
    }

    #[test]
    fn four_in_a_row_is_not_enough() {
        assert_eq!(straights(ranks("9s Th Jd Qc 2s 3h")), 0);
    }

    #[test]
    fn ignores_bits_above_the_deck() {
        assert_eq!(straights(0xF << NRANKS), 0);
    }

    #[test]
    fn compare_straights() {
        let broadway = straights(ranks("As Kh Qd Jc Ts"));
        let wheel = straights(ranks("As 2h 3d 4c 5s"));
        assert!(best_straight(broadway, wheel) > 0);
        assert!(best_straight(wheel, broadway) < 0);
        assert_eq!(best_straight(wheel, wheel), 0);
    }

    #[test]
    fn antisymmetric_over_random_hands() {
        let hands = (0..512)
            .map(|_| straights(CSet::random().number_set()))
            .filter(|s| *s != 0)
            .collect::<Vec<_>>();
        for pair in hands.windows(2) {
            assert_eq!(best_straight(pair[0], pair[1]), -best_straight(pair[1], pair[0]));
            assert_eq!(best_straight(pair[0], pair[0]), 0);
        }
    }

    #[test]
    fn straight_flush() {
        let cards = CSet::try_from("9h Th Jh Qh Kh 2c 2d").unwrap();
        let flush = flushes(cards.suit_counts());
        assert!(flush.any());
        assert_eq!(Suit::from(flush.best_index()), Suit::Heart);
        let s = straights(cards.suit(Suit::Heart));
        assert_eq!(best_bit(u64::from(s)), Rank::King.index());
    }

    #[test]
    fn straight_in_ranks_but_not_in_suit() {
        let cards = CSet::try_from("9h Th Jh Qh Kc 2h 3h").unwrap();
        assert!(straights(cards.number_set()) != 0);
        assert_eq!(straights(cards.suit(Suit::Heart)), 0);
    }
}
