// venuesync-core: domain layer between local storage and consumers (CLI).

pub mod catalog;
pub mod error;
pub mod model;
pub mod pricing;
pub mod search;
pub mod storage;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use catalog::Catalog;
pub use error::CoreError;
pub use pricing::{Quote, TimeOfDay, quote};
pub use search::{InquiryCriteria, SearchCriteria};
pub use storage::{MemoryStorage, StorageKey, StoragePort};
pub use store::{MarketStore, MonthlyEarnings};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    // Venues
    Amenity, PricingUpdate, Venue, VenueDetail, VenueType,
    // Inquiries
    AttendeeRange, BudgetRange, Inquiry,
    // Bookings
    Booking, BookingStatus, PaymentCard,
    // Availability calendar
    AvailabilityBlock,
    // Messaging
    Conversation, Message, SenderRole,
    // Session
    Session, UserRole,
};
