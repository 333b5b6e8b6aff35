// ── Unified domain model ──
//
// Every type in this module is the canonical representation of a
// marketplace entity. Serde shapes match the persisted JSON layout of
// the VenueSync web client byte-for-byte in field naming (camelCase keys,
// display-form range strings), so a storage directory written by one
// version is readable by the other.

pub mod booking;
pub mod calendar;
pub mod common;
pub mod inquiry;
pub mod message;
pub mod session;
pub mod venue;

// ── Re-exports ──────────────────────────────────────────────────────
// Flat access: `use venuesync_core::model::*` gives you everything.

pub use booking::{Booking, BookingStatus, PaymentCard};
pub use calendar::AvailabilityBlock;
pub use inquiry::{AttendeeRange, BudgetRange, Inquiry};
pub use message::{Conversation, Message, SenderRole};
pub use session::{Session, UserRole};
pub use venue::{Amenity, PricingUpdate, Venue, VenueDetail, VenueType};

pub(crate) use common::entity_id;
