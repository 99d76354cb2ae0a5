use super::rank::Rank;
use super::suit::Suit;
use crate::util::NSUITS;

/// A playing card encoded as a single byte.
///
/// The encoding is `rank * 4 + suit`, with ranks indexed high-to-low, so
/// the Ace of clubs is 0 and cards sort best-first by rank, then by suit.
///
/// Cards parse from two-character strings like `"As"` (ace of spades) or
/// `"T♣"` (ten of clubs). Use [`Card::parse`] for several at once.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / NSUITS as u8)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % NSUITS as u8)
    }

    /// Parses a string of concatenated card notations into a vector of cards.
    ///
    /// Whitespace is ignored. Each card is two characters: rank then suit.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.replace(char::is_whitespace, "")
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|pair| Self::try_from(pair.as_str()))
            .collect::<Result<Vec<Self>, _>>()
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * NSUITS as u8 + u8::from(s))
    }
}
impl From<Card> for (Rank, Suit) {
    fn from(c: Card) -> Self {
        (c.rank(), c.suit())
    }
}

/// u8 isomorphism
/// As
/// 3
/// 0b00000011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self(n)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(u), None) => {
                let rank = Rank::try_from(r.to_string().as_str())?;
                let suit = Suit::try_from(u.to_string().as_str())?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(format!("card needs 2 characters: {}", s)),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}
