// ── Venue domain types ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Venue category. The string forms are what the catalog, the filter
/// engine, and the persisted favorites records all carry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum VenueType {
    Club,
    Warehouse,
    #[serde(rename = "Banquet Hall")]
    #[strum(to_string = "Banquet Hall", serialize = "banquet-hall")]
    BanquetHall,
    Cafe,
    Restaurant,
    Bar,
    Loft,
    Studio,
}

impl VenueType {
    /// Case-insensitive match against a free-form category string
    /// (e.g. a `?category=club` query value).
    pub fn matches_keyword(self, keyword: &str) -> bool {
        self.to_string().eq_ignore_ascii_case(keyword)
            || self.to_string().replace(' ', "-").eq_ignore_ascii_case(keyword)
    }
}

/// A bookable amenity, as listed on a venue detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amenity(pub String);

impl From<&str> for Amenity {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

/// A venue as it appears in the searchable catalog (and, denormalized,
/// in the persisted favorites collection).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: String,
    pub name: String,
    /// Free-text location, matched by case-insensitive substring.
    pub location: String,
    #[serde(rename = "type")]
    pub venue_type: VenueType,
    pub capacity: u32,
    pub price_per_hour: f64,
    /// 0.0 to 5.0.
    pub rating: f64,
    pub images: Vec<String>,
}

/// Extended information shown on a venue's detail page and consumed by
/// the booking flow (minimum-hours floor, host identity).
///
/// The catalog only carries details for a subset of venues; lookups
/// for other ids fall back to the first detail record, mirroring the
/// web client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueDetail {
    pub id: String,
    pub square_feet: u32,
    /// Booking duration floor. Shorter requests are clamped up to this.
    pub min_hours: f64,
    pub reviews: u32,
    pub description: String,
    pub host_rules: Vec<String>,
    pub amenities: Vec<Amenity>,
    pub host_id: String,
    pub host_name: String,
    /// Hourly rate on Saturdays and Sundays. Display-only for now; the
    /// quote path prices every day at the card rate.
    pub weekend_rate: f64,
    pub cleaning_fee: f64,
    pub security_deposit: f64,
    /// Whether the host auto-accepts booking requests.
    pub instant_book: bool,
}

/// Partial edit of a venue's pricing settings. Absent fields keep
/// their current value; `price_per_hour` additionally updates the
/// searchable card.
#[derive(Debug, Clone, Default)]
pub struct PricingUpdate {
    pub price_per_hour: Option<f64>,
    pub min_hours: Option<f64>,
    pub weekend_rate: Option<f64>,
    pub cleaning_fee: Option<f64>,
    pub security_deposit: Option<f64>,
    pub instant_book: Option<bool>,
}

impl PricingUpdate {
    pub fn is_empty(&self) -> bool {
        self.price_per_hour.is_none()
            && self.min_hours.is_none()
            && self.weekend_rate.is_none()
            && self.cleaning_fee.is_none()
            && self.security_deposit.is_none()
            && self.instant_book.is_none()
    }

    /// Rates and the hour floor must be positive; fees may be zero.
    pub fn validate(&self) -> Result<(), crate::error::CoreError> {
        for (field, value) in [
            ("price", self.price_per_hour),
            ("min-hours", self.min_hours),
            ("weekend-rate", self.weekend_rate),
        ] {
            if value.is_some_and(|v| !v.is_finite() || v <= 0.0) {
                return Err(crate::error::CoreError::validation(field, "must be positive"));
            }
        }
        for (field, value) in [
            ("cleaning-fee", self.cleaning_fee),
            ("security-deposit", self.security_deposit),
        ] {
            if value.is_some_and(|v| !v.is_finite() || v < 0.0) {
                return Err(crate::error::CoreError::validation(field, "must not be negative"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn venue_type_keyword_matching_is_case_insensitive() {
        assert!(VenueType::Club.matches_keyword("club"));
        assert!(VenueType::Club.matches_keyword("CLUB"));
        assert!(VenueType::BanquetHall.matches_keyword("banquet hall"));
        assert!(VenueType::BanquetHall.matches_keyword("banquet-hall"));
        assert!(!VenueType::Bar.matches_keyword("club"));
    }

    #[test]
    fn venue_serializes_with_persisted_field_names() {
        let venue = Venue {
            id: "venue-1".into(),
            name: "Skyline Lounge".into(),
            location: "Downtown Los Angeles".into(),
            venue_type: VenueType::Club,
            capacity: 250,
            price_per_hour: 350.0,
            rating: 4.8,
            images: vec!["/skyline1.png".into()],
        };

        let json = serde_json::to_value(&venue).expect("serializes");
        assert_eq!(json["type"], "Club");
        assert_eq!(json["pricePerHour"], 350.0);
        assert_eq!(json["capacity"], 250);
    }

    #[test]
    fn pricing_update_rejects_nonpositive_rates() {
        let update = PricingUpdate { price_per_hour: Some(0.0), ..PricingUpdate::default() };
        assert!(update.validate().is_err());

        let update = PricingUpdate { min_hours: Some(-1.0), ..PricingUpdate::default() };
        assert!(update.validate().is_err());

        // A zero fee is a valid setting.
        let update = PricingUpdate { cleaning_fee: Some(0.0), ..PricingUpdate::default() };
        assert!(update.validate().is_ok());
        assert!(PricingUpdate::default().is_empty());
    }

    #[test]
    fn banquet_hall_round_trips_with_space() {
        let json = serde_json::json!("Banquet Hall");
        let vt: VenueType = serde_json::from_value(json).expect("parses");
        assert_eq!(vt, VenueType::BanquetHall);
        assert_eq!(vt.to_string(), "Banquet Hall");
    }
}
