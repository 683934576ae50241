//! Reservation ledger for the hotel booking system.
//!
//! This crate holds the bookings of a single hotel. It provides:
//! - `BookingReader` / `BookingWriter` trait boundaries
//! - `InMemoryLedger`, a capacity-bounded, insertion-ordered implementation
//! - `LedgerConfig` for capacity and duplicate-id handling
//! - `LedgerError` for rejected inserts and unmatched mutations

pub mod config;
pub mod error;
pub mod memory;
pub mod traits;

pub use config::LedgerConfig;
pub use error::LedgerError;
pub use memory::InMemoryLedger;
pub use traits::{BookingReader, BookingWriter};
