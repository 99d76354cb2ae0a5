use crate::util::NRANKS;
use crate::util::RANK_MASK;

/// A card rank, indexed high-to-low.
///
/// The discriminant is the rank's bit index in every packed view, so the
/// Ace sits at bit 0 and lower indices are better. `Ord` follows strength,
/// not the discriminant: `Rank::Ace > Rank::King`.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    #[default]
    Ace = 0,
    King = 1,
    Queen = 2,
    Jack = 3,
    Ten = 4,
    Nine = 5,
    Eight = 6,
    Seven = 7,
    Six = 8,
    Five = 9,
    Four = 10,
    Three = 11,
    Two = 12,
}

impl Rank {
    /// Every rank in the deck, best first.
    pub fn all() -> impl Iterator<Item = Rank> {
        (0..NRANKS as u8).map(Rank::from)
    }
    /// Bit index in packed views. Lower is better.
    pub const fn index(&self) -> usize {
        *self as usize
    }
    /// Top card of the ace-low straight (the wheel).
    pub const fn wheel() -> Rank {
        match NRANKS {
            9 => Rank::Nine,
            _ => Rank::Five,
        }
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.index().cmp(&self.index())
    }
}
impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        debug_assert!((n as u32) < NRANKS, "rank index out of deck: {}", n);
        match n {
            0 => Rank::Ace,
            1 => Rank::King,
            2 => Rank::Queen,
            3 => Rank::Jack,
            4 => Rank::Ten,
            5 => Rank::Nine,
            6 => Rank::Eight,
            7 => Rank::Seven,
            8 => Rank::Six,
            9 => Rank::Five,
            10 => Rank::Four,
            11 => Rank::Three,
            12 => Rank::Two,
            _ => panic!("invalid rank u8: {}", n),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// usize isomorphism, for field indices
impl From<usize> for Rank {
    fn from(n: usize) -> Rank {
        Rank::from(n as u8)
    }
}

/// u32 rank-presence masks
///
/// one bit per rank. the inverse picks the best rank present
impl From<Rank> for u32 {
    fn from(r: Rank) -> u32 {
        1 << r.index()
    }
}
impl From<u32> for Rank {
    fn from(n: u32) -> Rank {
        Rank::from((n & RANK_MASK).trailing_zeros() as u8)
    }
}

/// str isomorphism
impl TryFrom<&str> for Rank {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let rank = match s {
            "A" => Rank::Ace,
            "K" => Rank::King,
            "Q" => Rank::Queen,
            "J" => Rank::Jack,
            "T" => Rank::Ten,
            "9" => Rank::Nine,
            "8" => Rank::Eight,
            "7" => Rank::Seven,
            "6" => Rank::Six,
            "5" => Rank::Five,
            "4" => Rank::Four,
            "3" => Rank::Three,
            "2" => Rank::Two,
            _ => return Err(format!("invalid rank str: {}", s)),
        };
        match (rank.index() as u32) < NRANKS {
            true => Ok(rank),
            false => Err(format!("rank not in deck: {}", s)),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Ace => "A",
                Rank::King => "K",
                Rank::Queen => "Q",
                Rank::Jack => "J",
                Rank::Ten => "T",
                Rank::Nine => "9",
                Rank::Eight => "8",
                Rank::Seven => "7",
                Rank::Six => "6",
                Rank::Five => "5",
                Rank::Four => "4",
                Rank::Three => "3",
                Rank::Two => "2",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let rank = Rank::Nine;
        assert!(rank == Rank::from(u8::from(rank)));
    }

    #[test]
    fn bijective_u32() {
        let rank = Rank::Nine;
        assert!(rank == Rank::from(u32::from(rank)));
    }

    #[test]
    fn best_of_mask() {
        let mask = u32::from(Rank::Queen) | u32::from(Rank::Nine);
        assert_eq!(Rank::from(mask), Rank::Queen);
    }

    #[test]
    fn ordered_by_strength() {
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Ten > Rank::Nine);
        assert!(Rank::Ace.index() < Rank::King.index());
    }

    #[test]
    fn all_best_first() {
        let ranks = Rank::all().collect::<Vec<_>>();
        assert_eq!(ranks.len(), NRANKS as usize);
        assert_eq!(ranks.first(), Some(&Rank::Ace));
        assert!(ranks.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Rank::try_from("X").is_err());
        assert_eq!(Rank::try_from("T"), Ok(Rank::Ten));
    }

    #[test]
    #[cfg(feature = "shortdeck")]
    fn shortdeck_has_no_deuce() {
        assert!(Rank::try_from("2").is_err());
        assert!(Rank::try_from("6").is_ok());
    }
}
