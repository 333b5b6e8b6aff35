//! Booking command handlers.

use tabled::Tabled;

use venuesync_core::{Booking, MarketStore, MonthlyEarnings, PaymentCard, Quote};

use crate::cli::{BookingsArgs, BookingsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct BookingRow {
    #[tabled(rename = "Reference")]
    reference: String,
    #[tabled(rename = "Venue")]
    venue: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Hours")]
    hours: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Booking> for BookingRow {
    fn from(b: &Booking) -> Self {
        Self {
            reference: b.reference.clone(),
            venue: b.venue_name.clone(),
            date: b.date.format("%Y-%m-%d").to_string(),
            time: format!("{} - {}", b.start_time, b.end_time),
            hours: format!("{:.2}", b.hours),
            total: util::money(b.total),
            status: b.status.to_string(),
        }
    }
}

#[derive(Tabled)]
struct EarningsRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Bookings")]
    bookings: u32,
    #[tabled(rename = "Total")]
    total: String,
}

impl From<&MonthlyEarnings> for EarningsRow {
    fn from(e: &MonthlyEarnings) -> Self {
        Self {
            month: e.month.clone(),
            bookings: e.bookings,
            total: util::money(e.total),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(store: &MarketStore, args: BookingsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        BookingsCommand::List => {
            let snap = store.bookings_snapshot();
            let bookings: Vec<Booking> = snap.iter().map(|b| Booking::clone(b)).collect();
            let out = output::render_list(
                &global.output,
                &bookings,
                |b| BookingRow::from(b),
                |b| b.reference.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        BookingsCommand::Quote { venue, start, end } => {
            let venue = util::resolve_venue(store, &venue)?;
            let quote =
                store.quote_for_venue(&venue.id, util::parse_time(&start)?, util::parse_time(&end)?)?;
            let out = output::render_single(
                &global.output,
                &quote,
                |q| render_quote(&venue.name, q),
                |q| util::money(q.total),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        BookingsCommand::Request {
            venue,
            date,
            start,
            end,
            card_number,
            card_name,
            expiry,
            cvv,
            billing_zip,
        } => {
            let venue = util::resolve_venue(store, &venue)?;
            let card = PaymentCard {
                card_number,
                card_name,
                expiry,
                cvv,
                billing_zip,
            };
            let booking = store.request_booking(
                &venue.id,
                util::parse_date(&date)?,
                util::parse_time(&start)?,
                util::parse_time(&end)?,
                &card,
            )?;
            let out = output::render_single(
                &global.output,
                &booking,
                render_booking,
                |b| b.reference.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        BookingsCommand::Accept { booking } => {
            let accepted = store.accept_booking(&booking)?;
            if !global.quiet {
                eprintln!("Booking {} confirmed", accepted.reference);
            }
            Ok(())
        }

        BookingsCommand::Decline { booking } => {
            if !util::confirm(&format!("Decline booking '{booking}'?"), global.yes)? {
                return Ok(());
            }
            let declined = store.decline_booking(&booking)?;
            if !global.quiet {
                eprintln!("Booking {} declined", declined.reference);
            }
            Ok(())
        }

        BookingsCommand::Earnings => {
            let earnings = store.earnings_by_month();
            let out = output::render_list(
                &global.output,
                &earnings,
                |e| EarningsRow::from(e),
                |e| format!("{} {}", e.month, e.total),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}

fn render_quote(venue_name: &str, q: &Quote) -> String {
    format!(
        "Quote for {venue_name}\n\
         \x20 Billable hours: {:.2}\n\
         \x20 Subtotal:       {}\n\
         \x20 Tax:            {}\n\
         \x20 Total:          {}",
        q.hours,
        util::money(q.subtotal),
        util::money(q.tax),
        util::money(q.total)
    )
}

fn render_booking(b: &Booking) -> String {
    format!(
        "Booking {} ({})\n\
         \x20 Venue:   {} (host {})\n\
         \x20 Date:    {} {} - {}\n\
         \x20 Hours:   {:.2}\n\
         \x20 Total:   {} ({} + {} tax)\n\
         \x20 Status:  {}",
        b.reference,
        b.id,
        b.venue_name,
        b.host_name,
        b.date.format("%Y-%m-%d"),
        b.start_time,
        b.end_time,
        b.hours,
        util::money(b.total),
        util::money(b.subtotal),
        util::money(b.tax),
        b.status
    )
}
