//! Inquiry command handlers.

use chrono::Utc;
use tabled::Tabled;

use venuesync_core::{AttendeeRange, BudgetRange, Inquiry, InquiryCriteria, MarketStore};

use crate::cli::{GlobalOpts, InquiriesArgs, InquiriesCommand, InquiryEditFields, InquiryFields};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct InquiryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Event")]
    event_type: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Attendees")]
    attendees: String,
    #[tabled(rename = "Types")]
    venue_types: String,
}

impl From<&Inquiry> for InquiryRow {
    fn from(i: &Inquiry) -> Self {
        Self {
            id: i.id.clone(),
            event_type: i.event_type.clone(),
            location: i.location.clone(),
            date: i.date.map(|d| d.to_string()).unwrap_or_default(),
            budget: i.budget.to_string(),
            attendees: i.attendees.to_string(),
            venue_types: i
                .venue_types
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(store: &MarketStore, args: InquiriesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        InquiriesCommand::List {
            event_types,
            budget,
            min_attendees,
            max_attendees,
        } => {
            let criteria = InquiryCriteria {
                event_types: event_types.unwrap_or_default(),
                budget: budget.as_deref().map(str::parse).transpose()?,
                min_attendees,
                max_attendees,
            };
            let inquiries = store.filter_inquiries(&criteria);
            let out = output::render_list(
                &global.output,
                &inquiries,
                |i| InquiryRow::from(i),
                |i| i.id.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        InquiriesCommand::Submit(fields) => {
            let inquiry = build_inquiry(fields)?;
            let submitted = store.submit_inquiry(inquiry);
            if !global.quiet {
                eprintln!("Inquiry submitted: {}", submitted.id);
            }
            Ok(())
        }

        InquiriesCommand::Edit { id, fields } => {
            let mut inquiry = Inquiry::clone(&*store.inquiry(&id)?);
            apply_edits(&mut inquiry, fields)?;
            store.edit_inquiry(inquiry)?;
            if !global.quiet {
                eprintln!("Inquiry updated: {id}");
            }
            Ok(())
        }

        InquiriesCommand::Delete { id } => {
            if !util::confirm(&format!("Delete inquiry '{id}'?"), global.yes)? {
                return Ok(());
            }
            store.delete_inquiry(&id)?;
            if !global.quiet {
                eprintln!("Inquiry deleted: {id}");
            }
            Ok(())
        }
    }
}

fn build_inquiry(fields: InquiryFields) -> Result<Inquiry, CliError> {
    let budget: BudgetRange = fields.budget.parse()?;
    let attendees: AttendeeRange = fields.attendees.parse()?;
    let date = fields.date.as_deref().map(util::parse_date).transpose()?;
    let venue_types = fields
        .venue_types
        .as_deref()
        .map(util::parse_venue_types)
        .transpose()?
        .unwrap_or_default();

    Ok(Inquiry {
        // Assigned by the store on submission.
        id: String::new(),
        event_type: fields.event_type,
        location: fields.location,
        date,
        time: fields.time.unwrap_or_default(),
        budget,
        attendees,
        venue_types,
        description: fields.description,
        created_at: Utc::now(),
    })
}

fn apply_edits(inquiry: &mut Inquiry, fields: InquiryEditFields) -> Result<(), CliError> {
    if let Some(event_type) = fields.event_type {
        inquiry.event_type = event_type;
    }
    if let Some(location) = fields.location {
        inquiry.location = location;
    }
    if let Some(date) = fields.date.as_deref() {
        inquiry.date = Some(util::parse_date(date)?);
    }
    if let Some(time) = fields.time {
        inquiry.time = time;
    }
    if let Some(budget) = fields.budget.as_deref() {
        inquiry.budget = budget.parse()?;
    }
    if let Some(attendees) = fields.attendees.as_deref() {
        inquiry.attendees = attendees.parse()?;
    }
    if let Some(types) = fields.venue_types.as_deref() {
        inquiry.venue_types = util::parse_venue_types(types)?;
    }
    if let Some(description) = fields.description {
        inquiry.description = description;
    }
    Ok(())
}
