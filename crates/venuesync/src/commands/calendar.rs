//! Host availability calendar handlers.

use tabled::Tabled;

use venuesync_core::{AvailabilityBlock, MarketStore};

use crate::cli::{CalendarArgs, CalendarCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct BlockRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Venue")]
    venue: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

impl From<&AvailabilityBlock> for BlockRow {
    fn from(b: &AvailabilityBlock) -> Self {
        Self {
            id: b.id.clone(),
            venue: format!("{} ({})", b.venue_name, b.venue_id),
            date: b.date.to_string(),
            reason: b.reason.clone(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(store: &MarketStore, args: CalendarArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        CalendarCommand::List { venue } => {
            let venue = venue
                .map(|v| util::resolve_venue(store, &v))
                .transpose()?;
            let blocks = store.blocked_dates(venue.as_deref().map(|v| v.id.as_str()));
            let out = output::render_list(&global.output, &blocks, |b| BlockRow::from(b), |b| b.id.clone());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CalendarCommand::Block { venue, date, reason } => {
            let venue = util::resolve_venue(store, &venue)?;
            let date = util::parse_date(&date)?;
            let block = store.block_date(&venue.id, date, &reason)?;
            if !global.quiet {
                eprintln!("Blocked {} for '{}' ({})", block.date, block.venue_name, block.id);
            }
            Ok(())
        }

        CalendarCommand::Unblock { id } => {
            if !util::confirm(&format!("Remove availability block {id}?"), global.yes)? {
                return Ok(());
            }
            store.unblock_date(&id)?;
            if !global.quiet {
                eprintln!("Removed block {id}");
            }
            Ok(())
        }
    }
}
