/// Glyph for each bit position of a rank mask, best rank first.
/// Positions past the deck's ranks get punctuation so stray bits stay visible.
const GLYPHS: &[u8; 32] = b"AKQJT98765432!@#$%^&*()+=[]{}<>?";

/// A raw rank-presence mask, printed as 32 positions from bit 31 down to
/// bit 0. Present ranks show their glyph, absent ones a dash.
///
/// Ranks(0b1_0000_0001_0001)
/// -------------------2-------T---A
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranks(pub u32);

impl From<u32> for Ranks {
    fn from(mask: u32) -> Self {
        Self(mask)
    }
}

impl std::fmt::Display for Ranks {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for i in (0..GLYPHS.len()).rev() {
            match self.0 & (1 << i) {
                0 => write!(f, "-")?,
                _ => write!(f, "{}", GLYPHS[i] as char)?,
            }
        }
        Ok(())
    }
}
