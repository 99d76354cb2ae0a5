use super::comparison::positive_index1_better;
use crate::cards::RankCounts;

/// Ranks holding all four suits.
#[inline(always)]
pub fn four_of_a_kinds(counts: RankCounts) -> RankCounts {
    counts.greater_equal::<4>()
}

/// Compares the single best remaining rank of each hand.
#[inline(always)]
pub fn best_kicker(p1s: RankCounts, p2s: RankCounts) -> i32 {
    positive_index1_better(p1s.best_index(), p2s.best_index())
}

/// Compares quads by rank, then by the best remaining kicker.
///
/// `p1s`/`p2s` are full rank counts; `p1foaks`/`p2foaks` are their
/// [`four_of_a_kinds`] views and must be non-zero. Two hands can't share a
/// quad rank from one deck, but the kicker tiebreak still runs with each
/// side's own quad rank cleared.
pub fn best_four_of_a_kind(
    p1s: RankCounts,
    p2s: RankCounts,
    p1foaks: RankCounts,
    p2foaks: RankCounts,
) -> i32 {
    let p1best = p1foaks.best_index();
    let p2best = p2foaks.best_index();
    match positive_index1_better(p1best, p2best) {
        0 => best_kicker(p1s.clear_at(p1best), p2s.clear_at(p2best)),
        diff => diff,
    }
}

/// Compares up to N kickers, best first.
///
/// Each round clears each hand's own best rank before the next. Stops at
/// the first difference, after N rounds, or when either hand runs out of
/// ranks.
pub fn best_kickers<const N: usize>(p1s: RankCounts, p2s: RankCounts) -> i32 {
    let mut p1s = p1s;
    let mut p2s = p2s;
    for _ in 0..N {
        if !p1s.any() || !p2s.any() {
            break;
        }
        let p1best = p1s.best_index();
        let p2best = p2s.best_index();
        let diff = positive_index1_better(p1best, p2best);
        if diff != 0 {
            return diff;
        }
        p1s = p1s.clear_at(p1best);
        p2s = p2s.clear_at(p2best);
    }
    0
}

#[cfg(test)]
#[cfg(not(feature = "shortdeck"))]
mod tests {
    use super::*;
    use crate::cards::CSet;
    use crate::cards::Rank;
    use crate::util::Arbitrary;

    fn counts(s: &str) -> RankCounts {
        CSet::try_from(s).unwrap().number_counts()
    }

    #[test]
    fn single_kicker() {
        assert!(best_kicker(counts("As 7d"), counts("Ks Qd")) > 0);
        assert!(best_kicker(counts("Ks Qd"), counts("As 7d")) < 0);
        assert_eq!(best_kicker(counts("As 7d"), counts("Ah 2d")), 0);
    }

    #[test]
    fn quads_by_rank() {
        let p1 = counts("9s 9h 9d 9c 2d");
        let p2 = counts("8s 8h 8d 8c Ad");
        let d = best_four_of_a_kind(p1, p2, four_of_a_kinds(p1), four_of_a_kinds(p2));
        assert!(d > 0);
        let d = best_four_of_a_kind(p2, p1, four_of_a_kinds(p2), four_of_a_kinds(p1));
        assert!(d < 0);
    }

    #[test]
    fn shared_quads_fall_back_to_kicker() {
        // a board of quads plays for both hands
        let p1 = counts("9s 9h 9d 9c Kd");
        let p2 = counts("9s 9h 9d 9c Qd");
        let d = best_four_of_a_kind(p1, p2, four_of_a_kinds(p1), four_of_a_kinds(p2));
        assert!(d > 0);
    }

    #[test]
    fn no_quads_is_empty() {
        assert!(!four_of_a_kinds(counts("As Ah Ad Kc")).any());
        let quads = four_of_a_kinds(counts("As Ah Ad Ac"));
        assert_eq!(quads.best_index(), Rank::Ace.index());
    }

    #[test]
    fn kickers_walk_down() {
        let p1 = counts("As Kd 9h 7c 4s");
        let p2 = counts("Ah Kc 9d 7s 3s");
        assert_eq!(best_kickers::<4>(p1, p2), 0);
        assert!(best_kickers::<5>(p1, p2) > 0);
        assert!(best_kickers::<5>(p2, p1) < 0);
    }

    #[test]
    fn kickers_clear_each_side() {
        let p1 = counts("As Qd");
        let p2 = counts("Ah Kc");
        assert!(best_kickers::<2>(p1, p2) < 0);
    }

    #[test]
    fn paired_rank_counts_once() {
        let p1 = counts("As Ad Kh Jh");
        let p2 = counts("Ac Kd Qh");
        assert!(best_kickers::<3>(p1, p2) < 0);
    }

    #[test]
    fn kickers_stop_when_exhausted() {
        assert_eq!(best_kickers::<5>(counts("As Kd"), counts("Ah Kc")), 0);
    }

    #[test]
    fn antisymmetric_over_random_hands() {
        for _ in 0..256 {
            let p1 = CSet::random().number_counts();
            let p2 = CSet::random().number_counts();
            assert_eq!(best_kicker(p1, p2), -best_kicker(p2, p1));
            assert_eq!(best_kickers::<5>(p1, p2), -best_kickers::<5>(p2, p1));
            assert_eq!(best_kicker(p1, p1), 0);
        }
    }

    #[test]
    fn quads_antisymmetric() {
        let hands = ["9s 9h 9d 9c Kd", "9s 9h 9d 9c Qd", "As Ah Ad Ac 2d", "2s 2h 2d 2c Ad"];
        for a in hands {
            for b in hands {
                let (p1, p2) = (counts(a), counts(b));
                let d12 = best_four_of_a_kind(p1, p2, four_of_a_kinds(p1), four_of_a_kinds(p2));
                let d21 = best_four_of_a_kind(p2, p1, four_of_a_kinds(p2), four_of_a_kinds(p1));
                assert_eq!(d12, -d21);
            }
        }
    }
}
