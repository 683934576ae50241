//! Foundation types for the hotel booking ledger.
//!
//! This crate provides the booking record and the small value types it is
//! built from. The ledger and the interactive shell both depend on
//! `hbs-types`.
//!
//! # Key Types
//!
//! - [`Booking`] - One reservation; only its status changes after creation
//! - [`NewBooking`] - Unvalidated booking fields as collected from a user
//! - [`BookingId`] - Caller-supplied booking identifier
//! - [`StayDate`] - `YYYY-MM-DD` date with approximate (365/30) day arithmetic

pub mod booking;
pub mod date;
pub mod error;
pub mod id;

pub use booking::{status, Booking, NewBooking, DEFAULT_STATUS};
pub use date::StayDate;
pub use error::TypeError;
pub use id::BookingId;
