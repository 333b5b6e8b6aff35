// ── Host availability calendar ──

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One date a host has taken off the market for a venue. Booking
/// requests for a blocked date are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityBlock {
    pub id: String,
    pub venue_id: String,
    /// Denormalized for display, like the other persisted records.
    pub venue_name: String,
    pub date: NaiveDate,
    /// Host-entered note shown on the calendar, e.g. "Maintenance".
    pub reason: String,
}
