use hbs_types::{Booking, BookingId};

use crate::error::LedgerError;

/// Write boundary for ledger mutations.
pub trait BookingWriter {
    /// Append a booking. Fails without changing the ledger when it is full.
    fn insert(&mut self, booking: Booking) -> Result<(), LedgerError>;

    /// Remove the first booking matching both `id` and `owner` and return it.
    fn delete(&mut self, id: BookingId, owner: &str) -> Result<Booking, LedgerError>;

    /// Overwrite the status of the first booking matching both `id` and
    /// `owner`. Returns the previous status.
    fn update_status(
        &mut self,
        id: BookingId,
        new_status: &str,
        owner: &str,
    ) -> Result<String, LedgerError>;

    /// Reorder all bookings by descending stay duration. Ties keep their
    /// relative order.
    fn sort_by_stay_duration(&mut self);
}

/// Read boundary for ledger queries.
pub trait BookingReader {
    /// All bookings in ledger order.
    fn bookings(&self) -> &[Booking];

    fn capacity(&self) -> usize;

    fn count(&self) -> usize {
        self.bookings().len()
    }

    fn is_full(&self) -> bool {
        self.count() >= self.capacity()
    }

    /// First booking with `id`, regardless of owner.
    fn get(&self, id: BookingId) -> Option<&Booking> {
        self.bookings().iter().find(|b| b.id() == id)
    }

    /// Bookings whose owner is `owner`, in ledger order.
    fn list_by_customer(&self, owner: &str) -> Vec<&Booking> {
        self.bookings()
            .iter()
            .filter(|b| b.owner_name() == owner)
            .collect()
    }

    /// The booking with the longest stay, or `None` when the ledger is empty.
    ///
    /// On ties the earliest booking in ledger order wins.
    fn longest_stay(&self) -> Option<&Booking> {
        self.bookings().iter().fold(None, |best: Option<&Booking>, b| match best {
            Some(current) if current.stay_duration() >= b.stay_duration() => Some(current),
            _ => Some(b),
        })
    }
}
