use hbs_types::{Booking, BookingId};
use tracing::{debug, warn};

use crate::config::LedgerConfig;
use crate::error::LedgerError;
use crate::traits::{BookingReader, BookingWriter};

/// In-memory ledger holding at most `capacity` bookings.
///
/// Bookings are kept in insertion order until [`sort_by_stay_duration`] is
/// called. All data is dropped with the ledger.
///
/// [`sort_by_stay_duration`]: BookingWriter::sort_by_stay_duration
#[derive(Debug)]
pub struct InMemoryLedger {
    config: LedgerConfig,
    bookings: Vec<Booking>,
}

impl InMemoryLedger {
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            bookings: Vec::with_capacity(config.capacity.min(1024)),
            config,
        }
    }

    /// A ledger with default settings and the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(LedgerConfig::with_capacity(capacity))
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    fn position(&self, id: BookingId, owner: &str) -> Result<usize, LedgerError> {
        self.bookings
            .iter()
            .position(|b| b.is_owned_by(id, owner))
            .ok_or(LedgerError::NotFoundOrUnauthorized { id })
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new(LedgerConfig::default())
    }
}

impl BookingWriter for InMemoryLedger {
    fn insert(&mut self, booking: Booking) -> Result<(), LedgerError> {
        if self.is_full() {
            warn!(id = %booking.id(), capacity = self.config.capacity, "insert rejected: ledger full");
            return Err(LedgerError::CapacityExceeded {
                capacity: self.config.capacity,
            });
        }

        if self.config.reject_duplicate_ids && self.get(booking.id()).is_some() {
            warn!(id = %booking.id(), "insert rejected: duplicate id");
            return Err(LedgerError::DuplicateId { id: booking.id() });
        }

        debug!(id = %booking.id(), owner = booking.owner_name(), "booking inserted");
        self.bookings.push(booking);
        Ok(())
    }

    fn delete(&mut self, id: BookingId, owner: &str) -> Result<Booking, LedgerError> {
        let index = self.position(id, owner).inspect_err(|_| {
            warn!(%id, "delete rejected: no booking matches id and owner");
        })?;

        debug!(%id, "booking deleted");
        Ok(self.bookings.remove(index))
    }

    fn update_status(
        &mut self,
        id: BookingId,
        new_status: &str,
        owner: &str,
    ) -> Result<String, LedgerError> {
        let index = self.position(id, owner).inspect_err(|_| {
            warn!(%id, "status update rejected: no booking matches id and owner");
        })?;

        let booking = &mut self.bookings[index];
        let previous = booking.status().to_string();
        booking.set_status(new_status);
        debug!(%id, from = %previous, to = new_status, "booking status updated");
        Ok(previous)
    }

    fn sort_by_stay_duration(&mut self) {
        // `sort_by_key` is stable, so equal stays keep their relative order.
        self.bookings
            .sort_by_key(|b| std::cmp::Reverse(b.stay_duration()));
        debug!(count = self.bookings.len(), "bookings sorted by stay duration");
    }
}

impl BookingReader for InMemoryLedger {
    fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    fn capacity(&self) -> usize {
        self.config.capacity
    }
}
