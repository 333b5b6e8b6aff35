// ── Inquiry domain types ──
//
// The web client keeps budget and attendee ranges as display
// strings ("$100-200/hr", "30-50") and re-parsed them with regexes at
// every filter site. Here they are parsed once at the input boundary
// into typed ranges; the display strings survive only as the serde
// form, for persisted-layout parity.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use super::venue::VenueType;
use crate::error::CoreError;

/// An hourly budget window, persisted as `"$MIN-MAX/hr"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetRange {
    pub min: f64,
    pub max: f64,
}

impl BudgetRange {
    pub fn new(min: f64, max: f64) -> Result<Self, CoreError> {
        if min < 0.0 || max < min {
            return Err(CoreError::validation(
                "budget",
                format!("invalid range {min}-{max}"),
            ));
        }
        Ok(Self { min, max })
    }

    /// True when the two windows share any price point (inclusive).
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min <= other.max && self.max >= other.min
    }
}

impl fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}-{}/hr", self.min, self.max)
    }
}

impl FromStr for BudgetRange {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || CoreError::validation("budget", format!("expected \"$MIN-MAX/hr\", got {s:?}"));
        let inner = s
            .trim()
            .strip_prefix('$')
            .and_then(|rest| rest.strip_suffix("/hr"))
            .ok_or_else(bad)?;
        let (min, max) = inner.split_once('-').ok_or_else(bad)?;
        let min: f64 = min.trim().parse().map_err(|_| bad())?;
        let max: f64 = max.trim().parse().map_err(|_| bad())?;
        Self::new(min, max)
    }
}

impl Serialize for BudgetRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BudgetRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// An expected attendee window, persisted as `"MIN-MAX"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendeeRange {
    pub min: u32,
    pub max: u32,
}

impl AttendeeRange {
    pub fn new(min: u32, max: u32) -> Result<Self, CoreError> {
        if max < min {
            return Err(CoreError::validation(
                "attendees",
                format!("invalid range {min}-{max}"),
            ));
        }
        Ok(Self { min, max })
    }

    /// True when this range sits entirely inside the given bounds.
    /// `None` bounds are unconstrained.
    pub fn within(&self, min_bound: Option<u32>, max_bound: Option<u32>) -> bool {
        let min_ok = min_bound.is_none_or(|b| self.min >= b);
        let max_ok = max_bound.is_none_or(|b| self.max <= b);
        min_ok && max_ok
    }
}

impl fmt::Display for AttendeeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl FromStr for AttendeeRange {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || CoreError::validation("attendees", format!("expected \"MIN-MAX\", got {s:?}"));
        let (min, max) = s.trim().split_once('-').ok_or_else(bad)?;
        let min: u32 = min.trim().parse().map_err(|_| bad())?;
        let max: u32 = max.trim().parse().map_err(|_| bad())?;
        Self::new(min, max)
    }
}

impl Serialize for AttendeeRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AttendeeRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// A guest's event inquiry, broadcast to hosts.
///
/// Created, edited, and deleted only by its creator -- "enforced" by
/// the data never leaving the device.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: String,
    pub event_type: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Display time span, e.g. `"10:00 - 14:00"`. Empty when unset.
    #[serde(default)]
    pub time: String,
    pub budget: BudgetRange,
    pub attendees: AttendeeRange,
    pub venue_types: Vec<VenueType>,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn budget_range_round_trips_through_display_form() {
        let range: BudgetRange = "$100-200/hr".parse().expect("parses");
        assert_eq!(range, BudgetRange { min: 100.0, max: 200.0 });
        assert_eq!(range.to_string(), "$100-200/hr");

        let json = serde_json::to_string(&range).expect("serializes");
        assert_eq!(json, "\"$100-200/hr\"");
        let back: BudgetRange = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, range);
    }

    #[test]
    fn budget_range_rejects_malformed_strings() {
        assert!("100-200".parse::<BudgetRange>().is_err());
        assert!("$100-200".parse::<BudgetRange>().is_err());
        assert!("$abc-200/hr".parse::<BudgetRange>().is_err());
        assert!("$300-100/hr".parse::<BudgetRange>().is_err());
    }

    #[test]
    fn budget_overlap_is_inclusive() {
        let a = BudgetRange { min: 100.0, max: 200.0 };
        let b = BudgetRange { min: 200.0, max: 400.0 };
        let c = BudgetRange { min: 250.0, max: 300.0 };
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn attendee_range_round_trips() {
        let range: AttendeeRange = "30-50".parse().expect("parses");
        assert_eq!(range, AttendeeRange { min: 30, max: 50 });
        assert_eq!(range.to_string(), "30-50");
    }

    #[test]
    fn attendee_within_honors_open_bounds() {
        let range = AttendeeRange { min: 30, max: 50 };
        assert!(range.within(None, None));
        assert!(range.within(Some(20), None));
        assert!(range.within(None, Some(60)));
        assert!(!range.within(Some(40), None));
        assert!(!range.within(None, Some(40)));
    }

    #[test]
    fn inquiry_serializes_with_persisted_field_names() {
        let inquiry = Inquiry {
            id: "inq-1".into(),
            event_type: "Birthday Party".into(),
            location: "Downtown Los Angeles".into(),
            date: None,
            time: String::new(),
            budget: BudgetRange { min: 100.0, max: 200.0 },
            attendees: AttendeeRange { min: 30, max: 50 },
            venue_types: vec![VenueType::Club, VenueType::Bar],
            description: "Bar and dance floor wanted.".into(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&inquiry).expect("serializes");
        assert_eq!(json["eventType"], "Birthday Party");
        assert_eq!(json["budget"], "$100-200/hr");
        assert_eq!(json["attendees"], "30-50");
        assert_eq!(json["venueTypes"][0], "Club");
    }
}
