//! In-memory booking collection with change observers

use crate::domain::normalize_booking;
use crate::schemas::{Booking, BookingStatus};

/// Handle returned by [`BookingStore::subscribe`]
pub type SubscriptionId = u64;

type Observer = Box<dyn Fn(&[Booking]) + Send>;

/// The locally held booking list.
///
/// Every mutation notifies all current observers with the full list. Records
/// are normalized on the way in.
#[derive(Default)]
pub struct BookingStore {
    bookings: Vec<Booking>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: SubscriptionId,
}

impl std::fmt::Debug for BookingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingStore")
            .field("bookings", &self.bookings.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store without notifying anyone.
    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        BookingStore {
            bookings: bookings.into_iter().map(normalize_booking).collect(),
            ..Self::default()
        }
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.has_id(key))
    }

    /// Replace the whole list.
    pub fn replace_all(&mut self, bookings: Vec<Booking>) {
        self.bookings = bookings.into_iter().map(normalize_booking).collect();
        self.notify();
    }

    /// Replace the booking with the same id, or append it.
    pub fn upsert(&mut self, booking: Booking) {
        let booking = normalize_booking(booking);
        let existing = booking.id.as_ref().and_then(|id| {
            self.bookings
                .iter()
                .position(|b| b.id.as_ref() == Some(id) || b.has_id(&id.to_string()))
        });
        match existing {
            Some(index) => self.bookings[index] = booking,
            None => self.bookings.push(booking),
        }
        self.notify();
    }

    pub fn remove(&mut self, key: &str) -> Option<Booking> {
        let index = self.bookings.iter().position(|b| b.has_id(key))?;
        let removed = self.bookings.remove(index);
        self.notify();
        Some(removed)
    }

    /// Set a booking's status, returning the raw status it had before.
    pub fn set_status(&mut self, key: &str, status: BookingStatus) -> Option<String> {
        self.replace_status(key, status.to_string())
    }

    /// Put back a raw status captured by [`BookingStore::set_status`].
    pub fn restore_status(&mut self, key: &str, raw: String) -> bool {
        self.replace_status(key, raw).is_some()
    }

    fn replace_status(&mut self, key: &str, raw: String) -> Option<String> {
        let booking = self.bookings.iter_mut().find(|b| b.has_id(key))?;
        let previous = std::mem::replace(&mut booking.status, raw);
        self.notify();
        Some(previous)
    }

    pub fn filter_by_status(&self, status: BookingStatus) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| b.status() == Some(status))
            .collect()
    }

    /// Case-insensitive substring search over name, phone, email and service.
    pub fn search(&self, query: &str) -> Vec<&Booking> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.bookings.iter().collect();
        }
        self.bookings
            .iter()
            .filter(|b| {
                [&b.name, &b.phone, &b.email, &b.service]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Count bookings in a status; `None` counts everything.
    pub fn count_by_status(&self, status: Option<BookingStatus>) -> usize {
        match status {
            Some(status) => self.bookings.iter().filter(|b| b.status() == Some(status)).count(),
            None => self.bookings.len(),
        }
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: Fn(&[Booking]) + Send + 'static,
    {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    fn notify(&self) {
        for (_, observer) in &self.observers {
            observer(&self.bookings);
        }
    }
}
