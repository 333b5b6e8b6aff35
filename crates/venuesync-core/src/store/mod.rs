// ── Session store ──

pub(crate) mod collection;
mod market;

pub use market::{MarketStore, MonthlyEarnings};
