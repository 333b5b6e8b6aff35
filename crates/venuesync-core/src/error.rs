// ── Core error types ──
//
// User-facing errors from venuesync-core. Storage-layer failures never
// appear here -- per the persistence contract they degrade to empty
// collections at the boundary and are only logged. What *does* surface
// is invalid user input and lookups against ids that don't exist.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Booking input errors ─────────────────────────────────────────
    #[error("Invalid time '{value}': expected HH:MM in 24-hour format")]
    InvalidTime { value: String },

    #[error("Invalid time range: end {end} is not after start {start}")]
    InvalidTimeRange { start: String, end: String },

    #[error("Payment information incomplete: all card fields are required")]
    PaymentIncomplete,

    // ── Lookup errors ────────────────────────────────────────────────
    #[error("Venue not found: {identifier}")]
    VenueNotFound { identifier: String },

    #[error("Booking not found: {identifier}")]
    BookingNotFound { identifier: String },

    #[error("Inquiry not found: {identifier}")]
    InquiryNotFound { identifier: String },

    #[error("Conversation not found: {identifier}")]
    ConversationNotFound { identifier: String },

    #[error("Availability block not found: {identifier}")]
    BlockNotFound { identifier: String },

    // ── Availability errors ──────────────────────────────────────────
    #[error("'{venue}' is unavailable on {date}: {reason}")]
    DateUnavailable {
        venue: String,
        date: String,
        reason: String,
    },

    // ── Validation errors ────────────────────────────────────────────
    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    // ── State errors ─────────────────────────────────────────────────
    #[error("Not logged in: {action} requires an active session")]
    NotLoggedIn { action: String },
}

impl CoreError {
    pub(crate) fn validation(field: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
