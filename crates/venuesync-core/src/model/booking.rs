// ── Booking domain types ──

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::CoreError;

/// Lifecycle of a booking request. Transitions are driven exclusively
/// by host accept/decline actions; there is no expiry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Declined,
}

/// A guest's reservation request against a venue.
///
/// Pricing fields are denormalized from the quote that produced the
/// booking, so the record stays self-describing after venue edits.
/// Invariants: `total == subtotal + tax` and `hours >= ` the venue's
/// minimum at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    /// Human-shown reference, e.g. `"VSYNC-483920"`.
    pub reference: String,
    pub venue_id: String,
    pub venue_name: String,
    pub host_id: String,
    pub host_name: String,
    pub date: DateTime<Utc>,
    /// `"HH:MM"` 24-hour form.
    pub start_time: String,
    pub end_time: String,
    pub hours: f64,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Generate a booking reference with a random 6-digit suffix.
pub(crate) fn booking_reference() -> String {
    let suffix: u32 = rand::thread_rng().gen_range(100_000..1_000_000);
    format!("VSYNC-{suffix}")
}

/// Payment form state. No field is validated beyond presence and
/// nothing is ever transmitted -- the all-or-nothing presence check is
/// the entirety of the web client's "payment processing", kept
/// as-is.
#[derive(Debug, Clone, Default)]
pub struct PaymentCard {
    pub card_number: String,
    pub card_name: String,
    pub expiry: String,
    pub cvv: String,
    pub billing_zip: String,
}

impl PaymentCard {
    /// All-or-nothing completeness check. Deliberately returns no
    /// field-level detail, matching the web client's single validation
    /// message.
    pub fn validate(&self) -> Result<(), CoreError> {
        let complete = [
            &self.card_number,
            &self.card_name,
            &self.expiry,
            &self.cvv,
            &self.billing_zip,
        ]
        .iter()
        .all(|field| !field.trim().is_empty());

        if complete {
            Ok(())
        } else {
            Err(CoreError::PaymentIncomplete)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_card() -> PaymentCard {
        PaymentCard {
            card_number: "4242 4242 4242 4242".into(),
            card_name: "John Smith".into(),
            expiry: "12/27".into(),
            cvv: "123".into(),
            billing_zip: "90210".into(),
        }
    }

    #[test]
    fn booking_reference_shape() {
        let reference = booking_reference();
        let suffix = reference.strip_prefix("VSYNC-").expect("prefixed");
        assert_eq!(suffix.len(), 6);
        assert!(suffix.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn complete_card_validates() {
        assert!(complete_card().validate().is_ok());
    }

    #[test]
    fn any_missing_field_blocks_payment() {
        for blank in 0..5 {
            let mut card = complete_card();
            match blank {
                0 => card.card_number.clear(),
                1 => card.card_name.clear(),
                2 => card.expiry.clear(),
                3 => card.cvv.clear(),
                _ => card.billing_zip.clear(),
            }
            assert!(matches!(card.validate(), Err(CoreError::PaymentIncomplete)));
        }
    }

    #[test]
    fn whitespace_only_fields_do_not_count() {
        let mut card = complete_card();
        card.cvv = "   ".into();
        assert!(card.validate().is_err());
    }

    #[test]
    fn status_round_trips_as_persisted_strings() {
        let json = serde_json::to_value(BookingStatus::Pending).expect("serializes");
        assert_eq!(json, "Pending");
        let status: BookingStatus =
            serde_json::from_value(serde_json::json!("Confirmed")).expect("parses");
        assert_eq!(status, BookingStatus::Confirmed);
    }
}
