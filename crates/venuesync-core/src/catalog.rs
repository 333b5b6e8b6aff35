// ── Static venue catalog ──
//
// The searchable seed data. Card records cover the whole catalog;
// detail records (minimum hours, host identity, amenities, pricing
// settings) exist for a subset. Detail lookups for ids without one
// fall back to the first record -- the web client behaves the same
// way.

use crate::model::{Amenity, Venue, VenueDetail, VenueType};

/// The seeded venue catalog: search and the booking flow both start
/// from its session copies inside [`crate::MarketStore`], where host
/// edits replace records for the life of the process. The id-or-first
/// detail fallback lives on the store's lookup, not here.
#[derive(Debug, Clone)]
pub struct Catalog {
    venues: Vec<Venue>,
    details: Vec<VenueDetail>,
}

impl Catalog {
    /// Build the seeded marketplace catalog.
    pub fn seeded() -> Self {
        Self {
            venues: seed_venues(),
            details: seed_details(),
        }
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn details(&self) -> &[VenueDetail] {
        &self.details
    }
}

fn placeholder_images() -> Vec<String> {
    vec![
        "/placeholder.svg?height=300&width=400".into(),
        "/placeholder.svg?height=300&width=400".into(),
        "/placeholder.svg?height=300&width=400".into(),
    ]
}

fn venue(
    id: &str,
    name: &str,
    location: &str,
    venue_type: VenueType,
    capacity: u32,
    price_per_hour: f64,
    rating: f64,
) -> Venue {
    Venue {
        id: id.into(),
        name: name.into(),
        location: location.into(),
        venue_type,
        capacity,
        price_per_hour,
        rating,
        images: placeholder_images(),
    }
}

#[rustfmt::skip]
fn seed_venues() -> Vec<Venue> {
    vec![
        venue("venue-1",  "Skyline Lounge",    "Downtown Los Angeles",        VenueType::Club,        250, 350.0, 4.8),
        venue("venue-2",  "Warehouse 213",     "Arts District, Los Angeles",  VenueType::Warehouse,   500, 450.0, 4.6),
        venue("venue-3",  "Grand Ballroom",    "Beverly Hills",               VenueType::BanquetHall, 300, 550.0, 4.9),
        venue("venue-4",  "Coastal Cafe",      "Santa Monica",                VenueType::Cafe,         80, 150.0, 4.5),
        venue("venue-5",  "Sunset Restaurant", "Malibu",                      VenueType::Restaurant,  120, 250.0, 4.7),
        venue("venue-6",  "Whiskey Bar",       "Hollywood",                   VenueType::Bar,         150, 200.0, 4.4),
        venue("venue-7",  "Echo Nightclub",    "Culver City",                 VenueType::Club,        300, 400.0, 4.3),
        venue("venue-8",  "Industrial Space",  "Long Beach",                  VenueType::Warehouse,   400, 350.0, 4.2),
        venue("venue-9",  "Pasadena Hall",     "Pasadena",                    VenueType::BanquetHall, 250, 500.0, 4.7),
        venue("venue-10", "Morning Brew",      "Glendale",                    VenueType::Cafe,         60, 120.0, 4.4),
        venue("venue-11", "Gourmet Kitchen",   "West Hollywood",              VenueType::Restaurant,  100, 300.0, 4.8),
        venue("venue-12", "Speakeasy",         "Downtown Los Angeles",        VenueType::Bar,          80, 180.0, 4.6),
    ]
}

fn seed_details() -> Vec<VenueDetail> {
    vec![
        VenueDetail {
            id: "venue-1".into(),
            square_feet: 3500,
            min_hours: 4.0,
            reviews: 42,
            description: "A modern rooftop venue with panoramic views of downtown LA, perfect \
                for parties and corporate events. Features state-of-the-art sound system and \
                lighting."
                .into(),
            host_rules: vec![
                "No smoking indoors".into(),
                "Music must end by 2AM".into(),
                "No decorations on walls".into(),
                "Cleaning fee applies".into(),
                "Security deposit required".into(),
            ],
            amenities: vec![
                Amenity::from("WiFi"),
                Amenity::from("Sound System"),
                Amenity::from("Parking"),
                Amenity::from("Bar Service"),
            ],
            host_id: "host-1".into(),
            host_name: "Michael Johnson".into(),
            weekend_rate: 425.0,
            cleaning_fee: 150.0,
            security_deposit: 500.0,
            instant_book: true,
        },
        VenueDetail {
            id: "venue-2".into(),
            square_feet: 6000,
            min_hours: 6.0,
            reviews: 38,
            description: "An industrial warehouse space with exposed brick walls and high \
                ceilings. Perfect for large events, art exhibitions, and photo shoots."
                .into(),
            host_rules: vec![
                "No open flames".into(),
                "Load-in/out times must be scheduled".into(),
                "No drilling into walls".into(),
                "Cleaning fee applies".into(),
            ],
            amenities: vec![
                Amenity::from("WiFi"),
                Amenity::from("Sound System"),
                Amenity::from("Parking"),
            ],
            host_id: "host-2".into(),
            host_name: "Sarah Williams".into(),
            weekend_rate: 550.0,
            cleaning_fee: 250.0,
            security_deposit: 1000.0,
            instant_book: false,
        },
        VenueDetail {
            id: "venue-3".into(),
            square_feet: 4500,
            min_hours: 5.0,
            reviews: 56,
            description: "An elegant ballroom with crystal chandeliers and marble floors. \
                Ideal for weddings, galas, and upscale corporate events."
                .into(),
            host_rules: vec![
                "No confetti".into(),
                "No tape on walls".into(),
                "Outside catering allowed with approval".into(),
                "Security deposit required".into(),
            ],
            amenities: vec![
                Amenity::from("WiFi"),
                Amenity::from("Sound System"),
                Amenity::from("Parking"),
                Amenity::from("Kitchen"),
            ],
            host_id: "host-3".into(),
            host_name: "David Chen".into(),
            weekend_rate: 650.0,
            cleaning_fee: 200.0,
            security_deposit: 750.0,
            instant_book: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_unique_ids() {
        let catalog = Catalog::seeded();
        let mut ids: Vec<_> = catalog.venues().iter().map(|v| v.id.as_str()).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn details_reference_catalog_venues() {
        let catalog = Catalog::seeded();
        for detail in catalog.details() {
            assert!(
                catalog.venues().iter().any(|v| v.id == detail.id),
                "{} has no card",
                detail.id
            );
        }
    }

    #[test]
    fn ratings_are_in_range() {
        for venue in Catalog::seeded().venues() {
            assert!((0.0..=5.0).contains(&venue.rating), "{}", venue.id);
        }
    }
}
