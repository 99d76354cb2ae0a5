pub mod card;
pub use card::*;

pub mod counted;
pub use counted::*;

pub mod cset;
pub use cset::*;

pub mod rank;
pub use rank::*;

pub mod ranks;
pub use ranks::*;

pub mod suit;
pub use suit::*;
