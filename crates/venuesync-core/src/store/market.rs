// ── Central marketplace session store ──
//
// Owns one reactive collection per entity type, hydrates user
// collections from the storage port at startup, and writes through on
// every mutation. Mutations are broadcast to subscribers via `watch`
// channels. The venue catalog (cards and detail records) lives here
// too as a session copy: host edits replace records for the life of
// the process but are never persisted (the catalog is not part of the
// stored key layout).

use std::sync::{Arc, RwLock};

use chrono::{Datelike, NaiveDate, NaiveTime, Utc};
use tokio::sync::watch;

use crate::catalog::Catalog;
use crate::error::CoreError;
use crate::model::booking::booking_reference;
use crate::model::{
    AvailabilityBlock, Booking, BookingStatus, Conversation, Inquiry, Message, PaymentCard,
    PricingUpdate, Session, UserRole, Venue, VenueDetail, entity_id,
};
use crate::pricing::{Quote, TimeOfDay, quote};
use crate::search::{InquiryCriteria, SearchCriteria, filter_inquiries, filter_venues};
use crate::storage::{StorageKey, StoragePort, read_collection, write_collection};

use super::collection::{EntityCollection, Keyed};

impl Keyed for Venue {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Inquiry {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Booking {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Message {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for AvailabilityBlock {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Aggregated earnings for one calendar month, derived from confirmed
/// bookings.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MonthlyEarnings {
    /// `"YYYY-MM"` sort key.
    pub month: String,
    pub total: f64,
    pub bookings: u32,
}

/// Central session store for all marketplace entities.
pub struct MarketStore {
    port: Arc<dyn StoragePort>,
    venues: EntityCollection<Venue>,
    /// Session copy of the catalog's detail records; pricing edits
    /// land here (and materialize a record for fallback-only ids).
    details: RwLock<Vec<VenueDetail>>,
    favorites: EntityCollection<Venue>,
    inquiries: EntityCollection<Inquiry>,
    bookings: EntityCollection<Booking>,
    messages: EntityCollection<Message>,
    blocks: EntityCollection<AvailabilityBlock>,
    session: RwLock<Session>,
    tax_rate: f64,
}

impl MarketStore {
    /// Seed the catalog and hydrate user collections from storage.
    pub fn open(port: Arc<dyn StoragePort>, tax_rate: f64) -> Self {
        let catalog = Catalog::seeded();
        let venues = EntityCollection::seeded(catalog.venues().to_vec());
        let details = RwLock::new(catalog.details().to_vec());
        let favorites =
            EntityCollection::seeded(read_collection(port.as_ref(), StorageKey::Favorites));
        let inquiries =
            EntityCollection::seeded(read_collection(port.as_ref(), StorageKey::Inquiries));
        let bookings =
            EntityCollection::seeded(read_collection(port.as_ref(), StorageKey::Bookings));
        let messages =
            EntityCollection::seeded(read_collection(port.as_ref(), StorageKey::Messages));
        let blocks =
            EntityCollection::seeded(read_collection(port.as_ref(), StorageKey::BlockedDates));
        let session = Session::from_flags(
            port.load(StorageKey::LoggedIn.as_str()).as_deref(),
            port.load(StorageKey::UserType.as_str()).as_deref(),
        );

        tracing::debug!(
            favorites = favorites.len(),
            inquiries = inquiries.len(),
            bookings = bookings.len(),
            messages = messages.len(),
            blocks = blocks.len(),
            "hydrated session store"
        );

        Self {
            port,
            venues,
            details,
            favorites,
            inquiries,
            bookings,
            messages,
            blocks,
            session: RwLock::new(session),
            tax_rate,
        }
    }

    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }

    // ── Venues ───────────────────────────────────────────────────────

    pub fn venues_snapshot(&self) -> Arc<Vec<Arc<Venue>>> {
        self.venues.snapshot()
    }

    pub fn venue(&self, id: &str) -> Result<Arc<Venue>, CoreError> {
        self.venues.get(id).ok_or_else(|| CoreError::VenueNotFound {
            identifier: id.to_owned(),
        })
    }

    /// Venue detail, with the first-record fallback for ids that have
    /// no detail of their own (the web client's lookup).
    pub fn venue_detail(&self, id: &str) -> Result<VenueDetail, CoreError> {
        let details = self
            .details
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        details
            .iter()
            .find(|d| d.id == id)
            .or_else(|| details.first())
            .cloned()
            .ok_or_else(|| CoreError::VenueNotFound { identifier: id.to_owned() })
    }

    /// Host edit of a venue's pricing settings. Session-only, like
    /// [`Self::update_venue`]. Editing a venue that only had the
    /// fallback detail gives it a detail record of its own; a new
    /// hourly rate also updates the searchable card.
    pub fn update_pricing(
        &self,
        venue_id: &str,
        update: &PricingUpdate,
    ) -> Result<VenueDetail, CoreError> {
        let venue = self.venue(venue_id)?;
        update.validate()?;

        let detail = {
            let mut details = self
                .details
                .write()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            let mut detail = details
                .iter()
                .find(|d| d.id == venue.id)
                .or_else(|| details.first())
                .cloned()
                .ok_or_else(|| CoreError::VenueNotFound { identifier: venue.id.clone() })?;
            detail.id.clone_from(&venue.id);
            if let Some(hours) = update.min_hours {
                detail.min_hours = hours;
            }
            if let Some(rate) = update.weekend_rate {
                detail.weekend_rate = rate;
            }
            if let Some(fee) = update.cleaning_fee {
                detail.cleaning_fee = fee;
            }
            if let Some(deposit) = update.security_deposit {
                detail.security_deposit = deposit;
            }
            if let Some(instant) = update.instant_book {
                detail.instant_book = instant;
            }
            match details.iter_mut().find(|d| d.id == venue.id) {
                Some(slot) => *slot = detail.clone(),
                None => details.push(detail.clone()),
            }
            detail
        };

        if let Some(rate) = update.price_per_hour {
            let mut card = Venue::clone(&venue);
            card.price_per_hour = rate;
            self.venues.replace(card);
        }

        tracing::info!(venue = %venue.id, "pricing settings replaced");
        Ok(detail)
    }

    /// Run the filter engine over the session's venue list.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<Venue> {
        filter_venues(&self.venues.to_vec(), criteria)
    }

    /// Host edit: replace a venue record wholesale, session-only.
    pub fn update_venue(&self, venue: Venue) -> Result<(), CoreError> {
        let id = venue.id.clone();
        if self.venues.replace(venue) {
            tracing::info!(venue = %id, "venue record replaced");
            Ok(())
        } else {
            Err(CoreError::VenueNotFound { identifier: id })
        }
    }

    // ── Favorites ────────────────────────────────────────────────────

    pub fn favorites_snapshot(&self) -> Arc<Vec<Arc<Venue>>> {
        self.favorites.snapshot()
    }

    pub fn subscribe_favorites(&self) -> watch::Receiver<Arc<Vec<Arc<Venue>>>> {
        self.favorites.subscribe()
    }

    pub fn is_favorite(&self, venue_id: &str) -> bool {
        self.favorites.contains(venue_id)
    }

    /// Add or remove a favorite. Returns `true` when the venue is a
    /// favorite *after* the call. The favorite record is a denormalized
    /// copy of the venue card.
    pub fn toggle_favorite(&self, venue_id: &str) -> Result<bool, CoreError> {
        let now_favorite = if self.favorites.remove(venue_id).is_some() {
            false
        } else {
            let venue = self.venue(venue_id)?;
            self.favorites.push(Venue::clone(&venue));
            true
        };
        write_collection(self.port.as_ref(), StorageKey::Favorites, &self.favorites.to_vec());
        Ok(now_favorite)
    }

    // ── Inquiries ────────────────────────────────────────────────────

    pub fn inquiries_snapshot(&self) -> Arc<Vec<Arc<Inquiry>>> {
        self.inquiries.snapshot()
    }

    pub fn filter_inquiries(&self, criteria: &InquiryCriteria) -> Vec<Inquiry> {
        filter_inquiries(&self.inquiries.to_vec(), criteria)
    }

    /// Append a new inquiry. The id and creation timestamp are
    /// assigned here; range fields arrive already typed.
    pub fn submit_inquiry(&self, mut inquiry: Inquiry) -> Inquiry {
        inquiry.id = entity_id("inq");
        inquiry.created_at = Utc::now();
        self.inquiries.push(inquiry.clone());
        self.persist_inquiries();
        tracing::info!(inquiry = %inquiry.id, "inquiry submitted");
        inquiry
    }

    /// Full-record edit of an existing inquiry.
    pub fn edit_inquiry(&self, inquiry: Inquiry) -> Result<(), CoreError> {
        let id = inquiry.id.clone();
        if self.inquiries.replace(inquiry) {
            self.persist_inquiries();
            Ok(())
        } else {
            Err(CoreError::InquiryNotFound { identifier: id })
        }
    }

    pub fn inquiry(&self, id: &str) -> Result<Arc<Inquiry>, CoreError> {
        self.inquiries
            .get(id)
            .ok_or_else(|| CoreError::InquiryNotFound { identifier: id.to_owned() })
    }

    /// Delete exactly the inquiry with the given id.
    pub fn delete_inquiry(&self, id: &str) -> Result<(), CoreError> {
        self.inquiries
            .remove(id)
            .ok_or_else(|| CoreError::InquiryNotFound { identifier: id.to_owned() })?;
        self.persist_inquiries();
        Ok(())
    }

    // ── Bookings ─────────────────────────────────────────────────────

    pub fn bookings_snapshot(&self) -> Arc<Vec<Arc<Booking>>> {
        self.bookings.snapshot()
    }

    pub fn subscribe_bookings(&self) -> watch::Receiver<Arc<Vec<Arc<Booking>>>> {
        self.bookings.subscribe()
    }

    /// Price a prospective booking against a venue's rate and
    /// minimum-hours floor.
    pub fn quote_for_venue(
        &self,
        venue_id: &str,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Result<Quote, CoreError> {
        let venue = self.venue(venue_id)?;
        let detail = self.venue_detail(venue_id)?;
        quote(start, end, venue.price_per_hour, detail.min_hours, self.tax_rate)
    }

    /// Complete a reservation: requires a session and a complete
    /// payment card, then appends a Pending booking priced by
    /// [`Self::quote_for_venue`].
    pub fn request_booking(
        &self,
        venue_id: &str,
        date: NaiveDate,
        start: TimeOfDay,
        end: TimeOfDay,
        card: &PaymentCard,
    ) -> Result<Booking, CoreError> {
        if !self.session().logged_in {
            return Err(CoreError::NotLoggedIn { action: "booking".into() });
        }
        card.validate()?;

        let venue = self.venue(venue_id)?;
        if let Some(block) = self.find_block(&venue.id, date) {
            return Err(CoreError::DateUnavailable {
                venue: venue.name.clone(),
                date: date.to_string(),
                reason: block.reason.clone(),
            });
        }
        let detail = self.venue_detail(venue_id)?;
        let priced = quote(start, end, venue.price_per_hour, detail.min_hours, self.tax_rate)?;

        let booking = Booking {
            id: entity_id("book"),
            reference: booking_reference(),
            venue_id: venue.id.clone(),
            venue_name: venue.name.clone(),
            host_id: detail.host_id.clone(),
            host_name: detail.host_name.clone(),
            date: date.and_time(NaiveTime::MIN).and_utc(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            hours: priced.hours,
            subtotal: priced.subtotal,
            tax: priced.tax,
            total: priced.total,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        };

        self.bookings.push(booking.clone());
        self.persist_bookings();
        tracing::info!(booking = %booking.id, reference = %booking.reference, "booking requested");
        Ok(booking)
    }

    /// Host accepts a booking request.
    pub fn accept_booking(&self, identifier: &str) -> Result<Arc<Booking>, CoreError> {
        self.set_booking_status(identifier, BookingStatus::Confirmed)
    }

    /// Host declines a booking request.
    pub fn decline_booking(&self, identifier: &str) -> Result<Arc<Booking>, CoreError> {
        self.set_booking_status(identifier, BookingStatus::Declined)
    }

    fn set_booking_status(
        &self,
        identifier: &str,
        status: BookingStatus,
    ) -> Result<Arc<Booking>, CoreError> {
        let id = self
            .resolve_booking_id(identifier)
            .ok_or_else(|| CoreError::BookingNotFound { identifier: identifier.to_owned() })?;

        let updated = self
            .bookings
            .update(&id, |booking| Booking { status, ..booking.clone() })
            .ok_or_else(|| CoreError::BookingNotFound { identifier: identifier.to_owned() })?;

        self.persist_bookings();
        tracing::info!(booking = %updated.id, status = %status, "booking status changed");
        Ok(updated)
    }

    /// Accept either the internal id or the human-shown reference.
    fn resolve_booking_id(&self, identifier: &str) -> Option<String> {
        self.bookings
            .snapshot()
            .iter()
            .find(|b| b.id == identifier || b.reference == identifier)
            .map(|b| b.id.clone())
    }

    /// Monthly totals over confirmed bookings, oldest month first.
    pub fn earnings_by_month(&self) -> Vec<MonthlyEarnings> {
        let mut months: Vec<MonthlyEarnings> = Vec::new();

        for booking in self.bookings.snapshot().iter() {
            if booking.status != BookingStatus::Confirmed {
                continue;
            }
            let month = format!("{:04}-{:02}", booking.date.year(), booking.date.month());
            match months.iter_mut().find(|m| m.month == month) {
                Some(entry) => {
                    entry.total += booking.total;
                    entry.bookings += 1;
                }
                None => months.push(MonthlyEarnings {
                    month,
                    total: booking.total,
                    bookings: 1,
                }),
            }
        }

        months.sort_by(|a, b| a.month.cmp(&b.month));
        months
    }

    // ── Availability calendar ────────────────────────────────────────

    /// Blocked dates, optionally narrowed to one venue, in block order.
    pub fn blocked_dates(&self, venue_id: Option<&str>) -> Vec<AvailabilityBlock> {
        self.blocks
            .to_vec()
            .into_iter()
            .filter(|b| venue_id.is_none_or(|id| b.venue_id == id))
            .collect()
    }

    /// Host takes a date off the market for a venue. One block per
    /// venue and date; the reason is required, as on the calendar form.
    pub fn block_date(
        &self,
        venue_id: &str,
        date: NaiveDate,
        reason: &str,
    ) -> Result<AvailabilityBlock, CoreError> {
        let venue = self.venue(venue_id)?;
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(CoreError::validation("reason", "a blocked date needs a reason"));
        }
        if self.find_block(&venue.id, date).is_some() {
            return Err(CoreError::validation(
                "date",
                format!("{date} is already blocked for '{}'", venue.name),
            ));
        }

        let block = AvailabilityBlock {
            id: entity_id("block"),
            venue_id: venue.id.clone(),
            venue_name: venue.name.clone(),
            date,
            reason: reason.to_owned(),
        };
        self.blocks.push(block.clone());
        self.persist_blocks();
        tracing::info!(block = %block.id, venue = %block.venue_id, date = %date, "date blocked");
        Ok(block)
    }

    /// Remove an availability block, putting the date back on the
    /// market.
    pub fn unblock_date(&self, id: &str) -> Result<(), CoreError> {
        self.blocks
            .remove(id)
            .ok_or_else(|| CoreError::BlockNotFound { identifier: id.to_owned() })?;
        self.persist_blocks();
        tracing::info!(block = %id, "date unblocked");
        Ok(())
    }

    fn find_block(&self, venue_id: &str, date: NaiveDate) -> Option<Arc<AvailabilityBlock>> {
        self.blocks
            .snapshot()
            .iter()
            .find(|b| b.venue_id == venue_id && b.date == date)
            .cloned()
    }

    // ── Messaging ────────────────────────────────────────────────────

    pub fn messages_snapshot(&self) -> Arc<Vec<Arc<Message>>> {
        self.messages.snapshot()
    }

    /// Conversations derived from the flat message log. Unread flags
    /// count from the session role's side of each thread.
    pub fn conversations(&self) -> Vec<Conversation> {
        Conversation::group(&self.messages.to_vec(), self.session().role.into())
    }

    /// Single conversation lookup by derived thread id.
    pub fn conversation(&self, id: &str) -> Result<Conversation, CoreError> {
        self.conversations()
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| CoreError::ConversationNotFound { identifier: id.to_owned() })
    }

    /// Send a message to a venue's host. The conversation id is
    /// derived from the host id, so repeated messages to the same host
    /// thread together.
    pub fn send_message(&self, venue_id: &str, text: &str) -> Result<Message, CoreError> {
        let session = self.session();
        if !session.logged_in {
            return Err(CoreError::NotLoggedIn { action: "messaging".into() });
        }
        if text.trim().is_empty() {
            return Err(CoreError::validation("message", "text must not be empty"));
        }

        let venue = self.venue(venue_id)?;
        let detail = self.venue_detail(venue_id)?;

        let message = Message {
            id: entity_id("msg"),
            conversation_id: format!("conv-{}", detail.host_id),
            with: venue.name.clone(),
            with_id: detail.host_id.clone(),
            with_name: detail.host_name.clone(),
            sender: session.role.into(),
            text: text.trim().to_owned(),
            timestamp: Utc::now(),
        };

        self.messages.push(message.clone());
        write_collection(self.port.as_ref(), StorageKey::Messages, &self.messages.to_vec());
        Ok(message)
    }

    // ── Session ──────────────────────────────────────────────────────

    pub fn session(&self) -> Session {
        *self
            .session
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    pub fn log_in(&self, role: UserRole) {
        self.set_session(Session { logged_in: true, role });
    }

    pub fn log_out(&self) {
        let role = self.session().role;
        self.set_session(Session { logged_in: false, role });
    }

    fn set_session(&self, session: Session) {
        {
            let mut current = self
                .session
                .write()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            *current = session;
        }
        let (logged_in, role) = session.to_flags();
        self.port.store(StorageKey::LoggedIn.as_str(), &logged_in);
        self.port.store(StorageKey::UserType.as_str(), &role);
    }

    // ── Persistence helpers ──────────────────────────────────────────

    fn persist_inquiries(&self) {
        write_collection(self.port.as_ref(), StorageKey::Inquiries, &self.inquiries.to_vec());
    }

    fn persist_bookings(&self) {
        write_collection(self.port.as_ref(), StorageKey::Bookings, &self.bookings.to_vec());
    }

    fn persist_blocks(&self) {
        write_collection(self.port.as_ref(), StorageKey::BlockedDates, &self.blocks.to_vec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AttendeeRange, BudgetRange};
    use crate::storage::MemoryStorage;
    use pretty_assertions::assert_eq;

    const TAX: f64 = 0.08;

    fn store() -> MarketStore {
        MarketStore::open(Arc::new(MemoryStorage::new()), TAX)
    }

    fn logged_in_store() -> MarketStore {
        let store = store();
        store.log_in(UserRole::Guest);
        store
    }

    fn card() -> PaymentCard {
        PaymentCard {
            card_number: "4242".into(),
            card_name: "Guest".into(),
            expiry: "12/27".into(),
            cvv: "123".into(),
            billing_zip: "90210".into(),
        }
    }

    fn t(s: &str) -> TimeOfDay {
        s.parse().expect("valid time")
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 15).expect("valid date")
    }

    fn draft_inquiry() -> Inquiry {
        Inquiry {
            id: String::new(),
            event_type: "Birthday Party".into(),
            location: "Downtown Los Angeles".into(),
            date: Some(date()),
            time: "19:00 - 23:00".into(),
            budget: BudgetRange { min: 100.0, max: 200.0 },
            attendees: AttendeeRange { min: 30, max: 50 },
            venue_types: vec![],
            description: "Bar and dance floor wanted.".into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn toggle_favorite_twice_restores_original_state() {
        let port = Arc::new(MemoryStorage::new());
        let store = MarketStore::open(Arc::clone(&port) as Arc<dyn StoragePort>, TAX);

        assert!(store.toggle_favorite("venue-1").expect("add"));
        assert!(store.is_favorite("venue-1"));
        let stored: Vec<Venue> = read_collection(port.as_ref(), StorageKey::Favorites);
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, "venue-1");

        assert!(!store.toggle_favorite("venue-1").expect("remove"));
        assert!(!store.is_favorite("venue-1"));
        let stored: Vec<Venue> = read_collection(port.as_ref(), StorageKey::Favorites);
        assert!(stored.is_empty());
    }

    #[test]
    fn toggle_favorite_unknown_venue_fails() {
        assert!(matches!(
            store().toggle_favorite("venue-99"),
            Err(CoreError::VenueNotFound { .. })
        ));
    }

    #[test]
    fn favorites_survive_reopen() {
        let port = Arc::new(MemoryStorage::new());
        {
            let store = MarketStore::open(Arc::clone(&port) as Arc<dyn StoragePort>, TAX);
            store.toggle_favorite("venue-3").expect("add");
        }
        let reopened = MarketStore::open(port, TAX);
        assert!(reopened.is_favorite("venue-3"));
    }

    #[test]
    fn delete_inquiry_removes_exactly_that_record() {
        let port = Arc::new(MemoryStorage::new());
        let store = MarketStore::open(Arc::clone(&port) as Arc<dyn StoragePort>, TAX);

        let first = store.submit_inquiry(draft_inquiry());
        let mut other = draft_inquiry();
        other.event_type = "Corporate Meeting".into();
        let second = store.submit_inquiry(other);

        store.delete_inquiry(&first.id).expect("deletes");

        let stored: Vec<Inquiry> = read_collection(port.as_ref(), StorageKey::Inquiries);
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, second.id);
        assert_eq!(stored[0].event_type, "Corporate Meeting");
    }

    #[test]
    fn delete_unknown_inquiry_fails() {
        assert!(matches!(
            store().delete_inquiry("inq-missing"),
            Err(CoreError::InquiryNotFound { .. })
        ));
    }

    #[test]
    fn edit_inquiry_replaces_full_record() {
        let store = store();
        let submitted = store.submit_inquiry(draft_inquiry());

        let mut edited = Inquiry::clone(&submitted);
        edited.description = "Rooftop preferred.".into();
        store.edit_inquiry(edited).expect("edits");

        assert_eq!(
            store.inquiry(&submitted.id).expect("present").description,
            "Rooftop preferred."
        );
    }

    #[test]
    fn booking_lifecycle_pending_to_confirmed() {
        let store = logged_in_store();

        // venue-6: $200/hr; detail falls back to venue-1 (min 4h).
        let booking = store
            .request_booking("venue-6", date(), t("10:00"), t("14:00"), &card())
            .expect("books");
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.hours, 4.0);
        assert_eq!(booking.subtotal, 800.0);
        assert_eq!(booking.tax, 64.0);
        assert_eq!(booking.total, 864.0);
        assert!(booking.reference.starts_with("VSYNC-"));

        let confirmed = store.accept_booking(&booking.id).expect("accepts");
        assert_eq!(confirmed.status, BookingStatus::Confirmed);
    }

    #[test]
    fn booking_resolves_by_reference_too() {
        let store = logged_in_store();
        let booking = store
            .request_booking("venue-1", date(), t("10:00"), t("15:00"), &card())
            .expect("books");

        let declined = store.decline_booking(&booking.reference).expect("declines");
        assert_eq!(declined.status, BookingStatus::Declined);
        assert_eq!(declined.id, booking.id);
    }

    #[test]
    fn booking_requires_login() {
        let store = store();
        let err = store
            .request_booking("venue-1", date(), t("10:00"), t("14:00"), &card())
            .expect_err("blocked");
        assert!(matches!(err, CoreError::NotLoggedIn { .. }));
    }

    #[test]
    fn booking_requires_complete_payment_card() {
        let store = logged_in_store();
        let incomplete = PaymentCard { cvv: String::new(), ..card() };
        let err = store
            .request_booking("venue-1", date(), t("10:00"), t("14:00"), &incomplete)
            .expect_err("blocked");
        assert!(matches!(err, CoreError::PaymentIncomplete));
        assert!(store.bookings_snapshot().is_empty());
    }

    #[test]
    fn short_booking_clamps_to_venue_minimum() {
        let store = logged_in_store();
        // venue-2 detail: min 6 hours at $450/hr.
        let booking = store
            .request_booking("venue-2", date(), t("10:00"), t("11:00"), &card())
            .expect("books");
        assert_eq!(booking.hours, 6.0);
        assert_eq!(booking.subtotal, 2700.0);
    }

    #[test]
    fn quote_rejects_inverted_range() {
        let store = store();
        assert!(matches!(
            store.quote_for_venue("venue-1", t("14:00"), t("10:00")),
            Err(CoreError::InvalidTimeRange { .. })
        ));
    }

    #[test]
    fn earnings_aggregate_confirmed_bookings_only() {
        let store = logged_in_store();
        let a = store
            .request_booking("venue-1", date(), t("10:00"), t("14:00"), &card())
            .expect("books");
        let b = store
            .request_booking("venue-1", date(), t("15:00"), t("19:00"), &card())
            .expect("books");
        store.accept_booking(&a.id).expect("accepts");
        store.decline_booking(&b.id).expect("declines");

        let earnings = store.earnings_by_month();
        assert_eq!(earnings.len(), 1);
        assert_eq!(earnings[0].month, "2025-05");
        assert_eq!(earnings[0].bookings, 1);
        assert_eq!(earnings[0].total, a.total);
    }

    #[test]
    fn messages_thread_by_host() {
        let store = logged_in_store();
        store.send_message("venue-1", "Is the 15th free?").expect("sends");
        store.send_message("venue-1", "For about 100 guests.").expect("sends");
        store.send_message("venue-2", "Photo shoot next week?").expect("sends");

        let conversations = store.conversations();
        assert_eq!(conversations.len(), 2);
        let with_host_1 = conversations
            .iter()
            .find(|c| c.id == "conv-host-1")
            .expect("thread exists");
        assert_eq!(with_host_1.messages.len(), 2);
        assert_eq!(with_host_1.last_message, "For about 100 guests.");
        // Threads where the viewer spoke last read as handled.
        assert!(!with_host_1.unread);
    }

    #[test]
    fn host_reply_marks_thread_unread_for_guest() {
        let port = Arc::new(MemoryStorage::new());
        let log = vec![Message {
            id: "msg-1".into(),
            conversation_id: "conv-host-1".into(),
            with: "Skyline Lounge".into(),
            with_id: "host-1".into(),
            with_name: "Michael Johnson".into(),
            sender: crate::model::SenderRole::Host,
            text: "The 15th is open.".into(),
            timestamp: Utc::now(),
        }];
        write_collection(port.as_ref(), StorageKey::Messages, &log);

        // Default session role is guest.
        let store = MarketStore::open(port, TAX);
        assert!(store.conversation("conv-host-1").expect("thread exists").unread);
    }

    #[test]
    fn conversation_lookup_by_unknown_id_fails() {
        assert!(matches!(
            store().conversation("conv-host-9"),
            Err(CoreError::ConversationNotFound { .. })
        ));
    }

    #[test]
    fn message_log_grows_per_send() {
        let store = logged_in_store();
        store.send_message("venue-1", "Is the 15th free?").expect("sends");
        store.send_message("venue-1", "For about 100 guests.").expect("sends");
        assert_eq!(store.messages_snapshot().len(), 2);
    }

    #[test]
    fn sending_blank_message_fails() {
        let store = logged_in_store();
        assert!(store.send_message("venue-1", "   ").is_err());
    }

    #[test]
    fn session_flags_persist() {
        let port = Arc::new(MemoryStorage::new());
        {
            let store = MarketStore::open(Arc::clone(&port) as Arc<dyn StoragePort>, TAX);
            store.log_in(UserRole::Host);
        }
        assert_eq!(port.load("isLoggedIn").as_deref(), Some("true"));
        assert_eq!(port.load("userType").as_deref(), Some("host"));

        let reopened = MarketStore::open(port, TAX);
        assert!(reopened.session().logged_in);
        assert_eq!(reopened.session().role, UserRole::Host);
    }

    #[test]
    fn host_edit_replaces_venue_in_session_only() {
        let port = Arc::new(MemoryStorage::new());
        let store = MarketStore::open(Arc::clone(&port) as Arc<dyn StoragePort>, TAX);

        let mut edited = Venue::clone(&store.venue("venue-1").expect("present"));
        edited.price_per_hour = 999.0;
        store.update_venue(edited).expect("updates");

        assert_eq!(store.venue("venue-1").expect("present").price_per_hour, 999.0);
        // Catalog edits are session-only: nothing hits storage.
        assert!(port.load("venues").is_none());

        let reopened = MarketStore::open(port, TAX);
        assert_eq!(reopened.venue("venue-1").expect("present").price_per_hour, 350.0);
    }

    #[test]
    fn search_uses_session_venue_list() {
        let store = store();
        let criteria = SearchCriteria {
            category: Some("club".into()),
            ..SearchCriteria::default()
        };
        let result = store.search(&criteria);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn subscribers_observe_booking_mutations() {
        let store = logged_in_store();
        let mut rx = store.subscribe_bookings();
        rx.borrow_and_update();

        store
            .request_booking("venue-1", date(), t("10:00"), t("14:00"), &card())
            .expect("books");
        assert!(rx.has_changed().expect("sender alive"));
        assert_eq!(rx.borrow_and_update().len(), 1);
    }

    #[test]
    fn subscribers_observe_favorite_toggles() {
        let store = store();
        let mut rx = store.subscribe_favorites();
        rx.borrow_and_update();

        store.toggle_favorite("venue-1").expect("adds");
        assert!(rx.has_changed().expect("sender alive"));
        assert_eq!(rx.borrow_and_update().len(), 1);
    }

    #[test]
    fn submitted_inquiries_snapshot_in_submission_order() {
        let store = store();
        let first = store.submit_inquiry(draft_inquiry());
        let second = store.submit_inquiry(draft_inquiry());

        let snapshot = store.inquiries_snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].id, first.id);
        assert_eq!(snapshot[1].id, second.id);
    }

    #[test]
    fn pricing_edit_is_session_only() {
        let port = Arc::new(MemoryStorage::new());
        let store = MarketStore::open(Arc::clone(&port) as Arc<dyn StoragePort>, TAX);

        let update = PricingUpdate {
            price_per_hour: Some(400.0),
            cleaning_fee: Some(175.0),
            instant_book: Some(false),
            ..PricingUpdate::default()
        };
        let detail = store.update_pricing("venue-1", &update).expect("updates");
        assert_eq!(detail.cleaning_fee, 175.0);
        assert!(!detail.instant_book);
        // The new hourly rate reaches the searchable card too.
        assert_eq!(store.venue("venue-1").expect("present").price_per_hour, 400.0);

        let reopened = MarketStore::open(port, TAX);
        assert_eq!(reopened.venue_detail("venue-1").expect("present").cleaning_fee, 150.0);
        assert_eq!(reopened.venue("venue-1").expect("present").price_per_hour, 350.0);
    }

    #[test]
    fn pricing_edit_materializes_detail_for_fallback_venue() {
        let store = logged_in_store();

        // venue-6 starts on the fallback detail (venue-1, min 4h).
        let update = PricingUpdate { min_hours: Some(2.0), ..PricingUpdate::default() };
        let detail = store.update_pricing("venue-6", &update).expect("updates");
        assert_eq!(detail.id, "venue-6");

        // The new floor feeds the quote path; venue-1 keeps its own.
        let booking = store
            .request_booking("venue-6", date(), t("10:00"), t("11:00"), &card())
            .expect("books");
        assert_eq!(booking.hours, 2.0);
        assert_eq!(store.venue_detail("venue-1").expect("present").min_hours, 4.0);
    }

    #[test]
    fn pricing_edit_rejects_bad_input() {
        let store = store();
        let negative = PricingUpdate { price_per_hour: Some(-5.0), ..PricingUpdate::default() };
        assert!(matches!(
            store.update_pricing("venue-1", &negative),
            Err(CoreError::Validation { .. })
        ));
        assert!(matches!(
            store.update_pricing("venue-99", &PricingUpdate::default()),
            Err(CoreError::VenueNotFound { .. })
        ));
    }

    #[test]
    fn blocked_dates_round_trip_and_persist() {
        let port = Arc::new(MemoryStorage::new());
        let store = MarketStore::open(Arc::clone(&port) as Arc<dyn StoragePort>, TAX);

        let block = store.block_date("venue-1", date(), "Maintenance").expect("blocks");
        assert_eq!(store.blocked_dates(Some("venue-1")).len(), 1);
        assert!(store.blocked_dates(Some("venue-2")).is_empty());

        let reopened = MarketStore::open(port, TAX);
        let stored = reopened.blocked_dates(None);
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, block.id);
        assert_eq!(stored[0].reason, "Maintenance");
    }

    #[test]
    fn duplicate_or_unreasoned_blocks_are_rejected() {
        let store = store();
        store.block_date("venue-1", date(), "Maintenance").expect("blocks");
        assert!(matches!(
            store.block_date("venue-1", date(), "Personal Use"),
            Err(CoreError::Validation { .. })
        ));
        assert!(matches!(
            store.block_date("venue-2", date(), "   "),
            Err(CoreError::Validation { .. })
        ));
        assert!(matches!(
            store.block_date("venue-99", date(), "Maintenance"),
            Err(CoreError::VenueNotFound { .. })
        ));
    }

    #[test]
    fn booking_rejected_on_blocked_date_until_unblocked() {
        let store = logged_in_store();
        let block = store.block_date("venue-1", date(), "Personal Use").expect("blocks");

        let err = store
            .request_booking("venue-1", date(), t("10:00"), t("14:00"), &card())
            .expect_err("blocked");
        assert!(matches!(err, CoreError::DateUnavailable { .. }));

        store.unblock_date(&block.id).expect("unblocks");
        assert!(store.request_booking("venue-1", date(), t("10:00"), t("14:00"), &card()).is_ok());

        assert!(matches!(
            store.unblock_date("block-missing"),
            Err(CoreError::BlockNotFound { .. })
        ));
    }

    #[test]
    fn corrupt_stored_bookings_degrade_to_empty() {
        let port = Arc::new(MemoryStorage::new());
        port.store("bookings", "deliberately not json");
        let store = MarketStore::open(port, TAX);
        assert!(store.bookings_snapshot().is_empty());
    }
}
