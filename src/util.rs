//! Constants, traits, and runtime helpers shared across the crate.
//!
//! The board geometry lives here so that every packed representation
//! agrees on field widths and index conventions.

// ============================================================================
// BOARD GEOMETRY
// Ranks are indexed high-to-low: 0 is the Ace, NRANKS - 1 is the lowest rank.
// ============================================================================
/// Number of ranks in the deck.
#[cfg(not(feature = "shortdeck"))]
pub const NRANKS: u32 = 13;
/// Number of ranks in the deck (A K Q J T 9 8 7 6).
#[cfg(feature = "shortdeck")]
pub const NRANKS: u32 = 9;
/// Number of suits in the deck.
pub const NSUITS: u32 = 4;
/// Width of one suit field in the by-suit packed view.
/// Must be a power of two no smaller than NRANKS.
pub const SUIT_BITS: u32 = 16;
/// Width of one rank field in the by-rank packed view.
pub const RANK_BITS: u32 = NSUITS;
/// Isolates the NRANKS low bits of a rank-presence mask.
pub const RANK_MASK: u32 = (1 << NRANKS) - 1;
/// Cards needed for a made flush or straight.
pub const HAND_SIZE: usize = 5;

const _: () = assert!(SUIT_BITS.is_power_of_two() && SUIT_BITS >= NRANKS);
const _: () = assert!(RANK_BITS.is_power_of_two() && RANK_BITS * NRANKS <= 64);

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}
