//! Coin purse domain module.
//!
//! Holds counts of the three wizarding denominations and derives their total
//! value (in knuts) and weight (in grams). Pure, deterministic logic only.

pub mod denomination;
pub mod purse;

pub use denomination::{Denomination, KNUTS_PER_SICKLE, SICKLES_PER_GALLEON};
pub use purse::CoinPurse;
