use serde::{Deserialize, Serialize};

/// Configuration for an [`InMemoryLedger`](crate::InMemoryLedger).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Maximum number of bookings the ledger will hold.
    pub capacity: usize,
    /// When `true`, inserting a booking whose id is already present fails
    /// with [`LedgerError::DuplicateId`](crate::LedgerError::DuplicateId).
    /// Off by default: duplicate ids are stored and lookups act on the
    /// first match.
    pub reject_duplicate_ids: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            reject_duplicate_ids: false,
        }
    }
}

impl LedgerConfig {
    /// The default configuration with an explicit capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Default::default()
        }
    }
}
