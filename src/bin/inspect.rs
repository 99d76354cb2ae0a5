//! Inspect Binary
//!
//! Parses hands from the command line and reports which categories the
//! packed detectors find, or how two hands compare within shared categories.

use anyhow::Context;
use clap::Parser;
use swarpoker::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = "info", help = "Log level filter")]
    level: log::LevelFilter,
    #[command(subcommand)]
    query: Query,
}

#[derive(clap::Subcommand)]
enum Query {
    #[command(about = "Show the packed views and detected categories of a hand", alias = "cat")]
    Categories {
        #[arg(required = true)]
        hand: String,
    },
    #[command(about = "Compare two hands within every category they share", alias = "cmp")]
    Compare {
        #[arg(required = true)]
        hand1: String,
        #[arg(required = true)]
        hand2: String,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    swarpoker::log(args.level)?;
    match args.query {
        Query::Categories { hand } => categories(parse(&hand)?),
        Query::Compare { hand1, hand2 } => compare(parse(&hand1)?, parse(&hand2)?),
    }
    Ok(())
}

fn parse(s: &str) -> anyhow::Result<CSet> {
    let hand = CSet::try_from(s)
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("invalid hand: {}", s))?;
    log::debug!("parsed {} as {} cards", hand, hand.size());
    Ok(hand)
}

fn categories(hand: CSet) {
    let suits = hand.suit_counts();
    let ranks = hand.number_counts();
    log::info!("hand       {}", hand);
    log::info!("by suit    {}", hand.by_suit());
    log::info!("by rank    {}", hand.by_rank());
    log::info!("ranks      {}", Ranks(hand.number_set()));
    let flush = flushes(suits);
    match flush.any() {
        true => {
            let suit = Suit::from(flush.best_index());
            log::info!("flush      {} {}", suit, Ranks(hand.suit(suit)));
            let straight = straights(hand.suit(suit));
            if straight != 0 {
                log::info!("str flush  {}", Rank::from(straight));
            }
        }
        false => log::info!("flush      -"),
    }
    match straights(hand.number_set()) {
        0 => log::info!("straight   -"),
        s => log::info!("straight   {} high", Rank::from(s)),
    }
    match four_of_a_kinds(ranks) {
        quads if quads.any() => log::info!("quads      {}", Rank::from(quads.best_index())),
        _ => log::info!("quads      -"),
    }
    match is_full_house(ranks) {
        Some(house) => log::info!("full house {}", house),
        None => log::info!("full house -"),
    }
}

fn compare(h1: CSet, h2: CSet) {
    let (r1, r2) = (h1.number_counts(), h2.number_counts());
    let (f1, f2) = (flushes(h1.suit_counts()), flushes(h2.suit_counts()));
    let (s1, s2) = (straights(h1.number_set()), straights(h2.number_set()));
    let (q1, q2) = (four_of_a_kinds(r1), four_of_a_kinds(r2));
    if q1.any() && q2.any() {
        report("quads", best_four_of_a_kind(r1, r2, q1, q2));
    }
    if let (Some(a), Some(b)) = (is_full_house(r1), is_full_house(r2)) {
        report("full house", best_full_house(a, b));
    }
    if f1.any() && f2.any() {
        let m1 = h1.suit(Suit::from(f1.best_index()));
        let m2 = h2.suit(Suit::from(f2.best_index()));
        report("flush", best_flush(m1, m2));
    }
    if s1 != 0 && s2 != 0 {
        report("straight", best_straight(s1, s2));
    }
    report("kickers", best_kickers::<{ HAND_SIZE }>(r1, r2));
}

fn report(category: &str, decision: i32) {
    let verdict = match ordering(decision) {
        std::cmp::Ordering::Greater => "hand 1",
        std::cmp::Ordering::Less => "hand 2",
        std::cmp::Ordering::Equal => "tie",
    };
    log::info!("{:<10} {:>3} {}", category, decision, verdict);
}
