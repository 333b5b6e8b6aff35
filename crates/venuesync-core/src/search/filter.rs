// ── Filter engine ──
//
// Pure, single-pass-per-criterion narrowing over the venue catalog.
// Criteria apply in a fixed order: category, location substring, price
// bounds, attendee minimum, venue-type set, amenities (inert). Each
// step is O(n); the catalog is small and unindexed.

use crate::model::{Inquiry, Venue};

use super::criteria::{InquiryCriteria, SearchCriteria};

/// Apply a criteria set to a venue list, returning the matching subset.
///
/// When the category is absent or `"trending"`, results are ranked by
/// rating descending; the sort is stable, so venues with equal ratings
/// keep their catalog order. No-match returns an empty vec, never an
/// error.
pub fn filter_venues(venues: &[Venue], criteria: &SearchCriteria) -> Vec<Venue> {
    // An unconstrained set matches everything; skip the per-venue
    // checks and go straight to ranking.
    let mut filtered: Vec<Venue> = if criteria.is_unconstrained() {
        venues.to_vec()
    } else {
        venues
            .iter()
            .filter(|venue| matches(venue, criteria))
            .cloned()
            .collect()
    };

    if criteria.wants_rating_sort() {
        // Stable sort: equal ratings preserve relative catalog order.
        filtered.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    filtered
}

fn matches(venue: &Venue, criteria: &SearchCriteria) -> bool {
    category_matches(venue, criteria)
        && location_matches(venue, criteria)
        && price_in_bounds(venue, criteria)
        && capacity_sufficient(venue, criteria)
        && type_allowed(venue, criteria)
        && amenities_constrain(venue, criteria)
}

fn category_matches(venue: &Venue, criteria: &SearchCriteria) -> bool {
    match criteria.category.as_deref() {
        None => true,
        Some(c) if c.eq_ignore_ascii_case(super::TRENDING) => true,
        Some(c) => venue.venue_type.matches_keyword(c),
    }
}

fn location_matches(venue: &Venue, criteria: &SearchCriteria) -> bool {
    match criteria.location.as_deref() {
        None => true,
        Some(needle) => venue
            .location
            .to_lowercase()
            .contains(&needle.to_lowercase()),
    }
}

fn price_in_bounds(venue: &Venue, criteria: &SearchCriteria) -> bool {
    let above_min = criteria.min_price.is_none_or(|min| venue.price_per_hour >= min);
    let below_max = criteria.max_price.is_none_or(|max| venue.price_per_hour <= max);
    above_min && below_max
}

fn capacity_sufficient(venue: &Venue, criteria: &SearchCriteria) -> bool {
    criteria.attendees.is_none_or(|needed| venue.capacity >= needed)
}

fn type_allowed(venue: &Venue, criteria: &SearchCriteria) -> bool {
    criteria.venue_types.is_empty() || criteria.venue_types.contains(&venue.venue_type)
}

/// Amenity criterion: currently inert. Catalog cards carry no amenity
/// data (only detail records do, for a subset), so matching against it
/// would filter out every venue. Matches unconditionally until the
/// card records grow an amenities list.
fn amenities_constrain(_venue: &Venue, _criteria: &SearchCriteria) -> bool {
    true
}

/// Filter a host's inquiry inbox: event-type keyword substring match,
/// budget-window overlap, attendee-range containment.
pub fn filter_inquiries(inquiries: &[Inquiry], criteria: &InquiryCriteria) -> Vec<Inquiry> {
    inquiries
        .iter()
        .filter(|inquiry| {
            let event_type_ok = criteria.event_types.is_empty()
                || criteria.event_types.iter().any(|keyword| {
                    inquiry
                        .event_type
                        .to_lowercase()
                        .contains(&keyword.to_lowercase())
                });

            let budget_ok = criteria
                .budget
                .as_ref()
                .is_none_or(|window| inquiry.budget.overlaps(window));

            let attendees_ok = inquiry
                .attendees
                .within(criteria.min_attendees, criteria.max_attendees);

            event_type_ok && budget_ok && attendees_ok
        })
        .cloned()
        .collect()
}
