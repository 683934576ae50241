use hbs_types::BookingId;

/// Errors produced by ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("ledger is full: capacity of {capacity} bookings reached")]
    CapacityExceeded { capacity: usize },

    /// No booking matched both the id and the owner name. Does not reveal
    /// whether the id exists under another owner.
    #[error("booking {id} not found or not authorized")]
    NotFoundOrUnauthorized { id: BookingId },

    #[error("a booking with id {id} already exists")]
    DuplicateId { id: BookingId },
}
