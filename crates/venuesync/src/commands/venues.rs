//! Venue catalog command handlers.

use serde::Serialize;
use tabled::Tabled;

use venuesync_core::{PricingUpdate, SearchCriteria, Venue, VenueDetail};

use crate::cli::{GlobalOpts, VenueFilterArgs, VenuesArgs, VenuesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
pub(super) struct VenueRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    venue_type: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Capacity")]
    capacity: u32,
    #[tabled(rename = "Price/hr")]
    price: String,
    #[tabled(rename = "Rating")]
    rating: String,
}

impl From<&Venue> for VenueRow {
    fn from(v: &Venue) -> Self {
        Self {
            id: v.id.clone(),
            name: v.name.clone(),
            venue_type: v.venue_type.to_string(),
            location: v.location.clone(),
            capacity: v.capacity,
            price: util::money(v.price_per_hour),
            rating: format!("{:.1}", v.rating),
        }
    }
}

/// Combined card + detail record for `venues show`.
#[derive(Serialize)]
struct VenueProfile {
    venue: Venue,
    detail: VenueDetail,
}

/// Pricing settings view for `venues pricing`. Carries the card rate
/// alongside the detail-record settings.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PricingView {
    venue_id: String,
    venue_name: String,
    price_per_hour: f64,
    min_hours: f64,
    weekend_rate: f64,
    cleaning_fee: f64,
    security_deposit: f64,
    instant_book: bool,
}

impl PricingView {
    fn new(venue: &Venue, detail: &VenueDetail) -> Self {
        Self {
            venue_id: venue.id.clone(),
            venue_name: venue.name.clone(),
            price_per_hour: venue.price_per_hour,
            min_hours: detail.min_hours,
            weekend_rate: detail.weekend_rate,
            cleaning_fee: detail.cleaning_fee,
            security_deposit: detail.security_deposit,
            instant_book: detail.instant_book,
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(
    store: &venuesync_core::MarketStore,
    args: VenuesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        VenuesCommand::List(filter) => {
            let criteria = criteria_from_flags(&filter);
            let venues = store.search(&criteria);
            let out = output::render_list(
                &global.output,
                &venues,
                |v| VenueRow::from(v),
                |v| v.id.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        VenuesCommand::Show { venue } => {
            let venue = util::resolve_venue(store, &venue)?;
            let detail = store.venue_detail(&venue.id)?;
            let profile = VenueProfile {
                venue: Venue::clone(&venue),
                detail,
            };
            let out = output::render_single(
                &global.output,
                &profile,
                render_profile,
                |p| p.venue.id.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        VenuesCommand::Edit {
            venue,
            name,
            location,
            price,
            capacity,
        } => {
            let current = util::resolve_venue(store, &venue)?;
            let mut updated = Venue::clone(&current);
            if let Some(name) = name {
                updated.name = name;
            }
            if let Some(location) = location {
                updated.location = location;
            }
            if let Some(price) = price {
                updated.price_per_hour = price;
            }
            if let Some(capacity) = capacity {
                updated.capacity = capacity;
            }
            store.update_venue(updated)?;
            if !global.quiet {
                eprintln!("Updated '{}' (changes last for this session)", current.name);
            }
            Ok(())
        }

        VenuesCommand::Pricing {
            venue,
            price,
            min_hours,
            weekend_rate,
            cleaning_fee,
            security_deposit,
            instant_book,
        } => {
            let resolved = util::resolve_venue(store, &venue)?;
            let update = PricingUpdate {
                price_per_hour: price,
                min_hours,
                weekend_rate,
                cleaning_fee,
                security_deposit,
                instant_book,
            };

            let detail = if update.is_empty() {
                store.venue_detail(&resolved.id)?
            } else {
                let detail = store.update_pricing(&resolved.id, &update)?;
                if !global.quiet {
                    eprintln!(
                        "Updated pricing for '{}' (changes last for this session)",
                        resolved.name
                    );
                }
                detail
            };

            // Re-fetch the card: a new hourly rate lands there.
            let card = store.venue(&resolved.id)?;
            let view = PricingView::new(&card, &detail);
            let out = output::render_single(
                &global.output,
                &view,
                render_pricing,
                |p| p.venue_id.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}

fn criteria_from_flags(filter: &VenueFilterArgs) -> SearchCriteria {
    SearchCriteria::from_raw(
        filter.category.as_deref(),
        filter.location.as_deref(),
        filter.min_price.as_deref(),
        filter.max_price.as_deref(),
        filter.attendees.as_deref(),
        filter.venue_types.as_deref(),
        filter.amenities.as_deref(),
    )
}

fn render_profile(p: &VenueProfile) -> String {
    let mut out = String::new();
    let v = &p.venue;
    let d = &p.detail;

    out.push_str(&format!("{} ({})\n", v.name, v.id));
    out.push_str(&format!("  Type:      {}\n", v.venue_type));
    out.push_str(&format!("  Location:  {}\n", v.location));
    out.push_str(&format!(
        "  Capacity:  {} guests / {} sq ft\n",
        v.capacity, d.square_feet
    ));
    out.push_str(&format!(
        "  Rate:      {}/hr (minimum {} hours, weekend {}/hr)\n",
        util::money(v.price_per_hour),
        d.min_hours,
        util::money(d.weekend_rate)
    ));
    out.push_str(&format!(
        "  Fees:      {} cleaning, {} deposit\n",
        util::money(d.cleaning_fee),
        util::money(d.security_deposit)
    ));
    out.push_str(&format!("  Rating:    {:.1} ({} reviews)\n", v.rating, d.reviews));
    out.push_str(&format!("  Host:      {} ({})\n", d.host_name, d.host_id));
    out.push_str(&format!("\n{}\n", d.description));

    if !d.amenities.is_empty() {
        let amenities: Vec<&str> = d.amenities.iter().map(|a| a.0.as_str()).collect();
        out.push_str(&format!("\nAmenities: {}\n", amenities.join(", ")));
    }
    if !d.host_rules.is_empty() {
        out.push_str("\nHouse rules:\n");
        for rule in &d.host_rules {
            out.push_str(&format!("  - {rule}\n"));
        }
    }

    out.trim_end().to_owned()
}

fn render_pricing(p: &PricingView) -> String {
    format!(
        "Pricing for {} ({})\n\
         \x20 Hourly rate:      {} (weekend {})\n\
         \x20 Minimum hours:    {}\n\
         \x20 Cleaning fee:     {}\n\
         \x20 Security deposit: {}\n\
         \x20 Instant book:     {}",
        p.venue_name,
        p.venue_id,
        util::money(p.price_per_hour),
        util::money(p.weekend_rate),
        p.min_hours,
        util::money(p.cleaning_fee),
        util::money(p.security_deposit),
        if p.instant_book { "yes" } else { "no" }
    )
}
