// ── Search criteria ──
//
// Every field is optional; absence means "no constraint". The raw
// constructors mirror the web client's URL-parameter parsing, including
// its permissiveness: a numeric field that fails to parse silently
// becomes unconstrained rather than an error.

use std::str::FromStr;

use crate::model::{BudgetRange, VenueType};

/// Sentinel category meaning "no category constraint, rank by rating".
pub const TRENDING: &str = "trending";

/// Criteria set for catalog searches. Fields combine conjunctively.
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    /// Category keyword, matched case-insensitively against the venue
    /// type. [`TRENDING`] acts as absent-plus-rating-sort.
    pub category: Option<String>,
    /// Case-insensitive substring of the venue location.
    pub location: Option<String>,
    /// Inclusive hourly-price bounds.
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// Minimum venue capacity.
    pub attendees: Option<u32>,
    /// Allowed venue types from the advanced filter. Empty = any.
    pub venue_types: Vec<VenueType>,
    /// Requested amenities. Parsed and carried, but inert in matching:
    /// catalog cards don't carry amenity data, so honoring this would
    /// silently drop every venue. See `filter::amenities_constrain`.
    pub amenities: Vec<String>,
}

impl SearchCriteria {
    /// Build from raw query-string style values. Numeric fields parse
    /// permissively; comma lists split and drop unknown entries.
    pub fn from_raw(
        category: Option<&str>,
        location: Option<&str>,
        min_price: Option<&str>,
        max_price: Option<&str>,
        attendees: Option<&str>,
        venue_types: Option<&str>,
        amenities: Option<&str>,
    ) -> Self {
        Self {
            category: category.map(str::to_owned),
            location: location.map(str::to_owned),
            min_price: min_price.and_then(parse_constraint),
            max_price: max_price.and_then(parse_constraint),
            attendees: attendees.and_then(parse_constraint),
            venue_types: venue_types.map(parse_type_list).unwrap_or_default(),
            amenities: amenities
                .map(|s| s.split(',').map(|a| a.trim().to_owned()).collect())
                .unwrap_or_default(),
        }
    }

    /// True when no field constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        let category_absent = self
            .category
            .as_deref()
            .is_none_or(|c| c.eq_ignore_ascii_case(TRENDING));
        category_absent
            && self.location.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.attendees.is_none()
            && self.venue_types.is_empty()
    }

    /// Whether results should be ranked by rating: category absent or
    /// the [`TRENDING`] sentinel.
    pub fn wants_rating_sort(&self) -> bool {
        self.category
            .as_deref()
            .is_none_or(|c| c.eq_ignore_ascii_case(TRENDING))
    }
}

/// Criteria for a host's inquiry inbox.
#[derive(Debug, Clone, Default)]
pub struct InquiryCriteria {
    /// Event-type keywords; an inquiry matches if any keyword is a
    /// case-insensitive substring of its event type.
    pub event_types: Vec<String>,
    /// Budget window; inquiries whose range overlaps it match.
    pub budget: Option<BudgetRange>,
    /// Attendee containment bounds.
    pub min_attendees: Option<u32>,
    pub max_attendees: Option<u32>,
}

/// Permissive numeric parse: failures degrade to "constraint absent".
fn parse_constraint<T: FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse().ok()
}

/// Parse a comma-separated venue-type list, dropping tokens that don't
/// name a known type.
fn parse_type_list(raw: &str) -> Vec<VenueType> {
    raw.split(',')
        .filter_map(|token| VenueType::from_str(token.trim()).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_numeric_strings_become_absent() {
        let criteria =
            SearchCriteria::from_raw(None, None, Some("abc"), Some("12x"), Some("-"), None, None);
        assert_eq!(criteria.min_price, None);
        assert_eq!(criteria.max_price, None);
        assert_eq!(criteria.attendees, None);
    }

    #[test]
    fn valid_numeric_strings_parse() {
        let criteria =
            SearchCriteria::from_raw(None, None, Some("100"), Some("500"), Some("50"), None, None);
        assert_eq!(criteria.min_price, Some(100.0));
        assert_eq!(criteria.max_price, Some(500.0));
        assert_eq!(criteria.attendees, Some(50));
    }

    #[test]
    fn type_list_drops_unknown_tokens() {
        let criteria = SearchCriteria::from_raw(
            None,
            None,
            None,
            None,
            None,
            Some("Club, Banquet Hall, Castle"),
            None,
        );
        assert_eq!(
            criteria.venue_types,
            vec![VenueType::Club, VenueType::BanquetHall]
        );
    }

    #[test]
    fn trending_counts_as_unconstrained() {
        let trending = SearchCriteria {
            category: Some("trending".into()),
            ..SearchCriteria::default()
        };
        assert!(trending.is_unconstrained());
        assert!(trending.wants_rating_sort());

        let club = SearchCriteria {
            category: Some("club".into()),
            ..SearchCriteria::default()
        };
        assert!(!club.is_unconstrained());
        assert!(!club.wants_rating_sort());
    }
}
