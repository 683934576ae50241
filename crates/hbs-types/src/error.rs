use thiserror::Error;

/// Errors produced while constructing booking types.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TypeError {
    #[error("invalid date {input:?}: {reason}")]
    InvalidDate { input: String, reason: String },

    #[error("invalid room rate {0}: must be a finite, non-negative amount")]
    InvalidRate(f64),

    #[error("invalid booking id: {0}")]
    InvalidBookingId(String),
}
