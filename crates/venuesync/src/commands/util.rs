//! Shared helpers for command handlers.

use std::io::IsTerminal;
use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDate;

use venuesync_core::{MarketStore, TimeOfDay, Venue, VenueType};

use crate::error::CliError;

/// Resolve a venue identifier (ID or case-insensitive name) via snapshot lookup.
pub fn resolve_venue(store: &MarketStore, identifier: &str) -> Result<Arc<Venue>, CliError> {
    let snap = store.venues_snapshot();
    for venue in snap.iter() {
        if venue.id == identifier || venue.name.eq_ignore_ascii_case(identifier) {
            return Ok(Arc::clone(venue));
        }
    }
    Err(CliError::NotFound {
        resource_type: "venue".into(),
        identifier: identifier.into(),
        list_command: "venues list".into(),
    })
}

/// Parse an `HH:MM` time argument.
pub fn parse_time(raw: &str) -> Result<TimeOfDay, CliError> {
    Ok(raw.parse::<TimeOfDay>()?)
}

/// Parse a `YYYY-MM-DD` date argument.
pub fn parse_date(raw: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| CliError::Validation {
        field: "date".into(),
        reason: format!("'{raw}' is not a valid YYYY-MM-DD date"),
    })
}

/// Parse a comma-separated venue-type list, strictly: unknown names are
/// an error here, unlike the permissive catalog search.
pub fn parse_venue_types(raw: &str) -> Result<Vec<VenueType>, CliError> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            VenueType::from_str(token).map_err(|_| CliError::Validation {
                field: "types".into(),
                reason: format!("unknown venue type '{token}'"),
            })
        })
        .collect()
}

/// Dollar amount for table cells.
pub fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
/// Without a terminal there is nobody to ask, so `--yes` is required.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: message.trim_end_matches('?').to_owned(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}
