// ── Venue and inquiry search ──

pub mod criteria;
pub mod filter;

pub use criteria::{InquiryCriteria, SearchCriteria, TRENDING};
pub use filter::{filter_inquiries, filter_venues};
