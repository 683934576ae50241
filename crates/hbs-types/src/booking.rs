use std::fmt;

use serde::{Deserialize, Serialize};

use crate::date::StayDate;
use crate::error::TypeError;
use crate::id::BookingId;

/// Status assigned when a request carries no status at all. An empty string
/// is a status like any other and is kept.
pub const DEFAULT_STATUS: &str = "Confirmed";

/// Conventional status values. The ledger accepts any string.
pub mod status {
    pub const CONFIRMED: &str = "Confirmed";
    pub const PENDING: &str = "Pending";
    pub const CANCELLED: &str = "Cancelled";
}

/// The raw fields of a booking before validation.
///
/// Dates are kept as text here and parsed by [`Booking::new`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewBooking {
    pub id: BookingId,
    pub customer_name: String,
    pub room_type: String,
    pub booking_date: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub room_rate: f64,
    #[serde(default)]
    pub status: Option<String>,
    /// Name that must be presented to update or delete the booking.
    pub owner_name: String,
}

/// One guest reservation.
///
/// Every field except `status` is fixed once the booking exists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NewBooking")]
pub struct Booking {
    id: BookingId,
    customer_name: String,
    room_type: String,
    booking_date: StayDate,
    check_in_date: StayDate,
    check_out_date: StayDate,
    room_rate: f64,
    status: String,
    owner_name: String,
}

impl Booking {
    /// Validate a request and build the booking.
    ///
    /// Fails when any date is not `YYYY-MM-DD` or the rate is negative or not
    /// finite. Check-out is not required to follow check-in.
    pub fn new(request: NewBooking) -> Result<Self, TypeError> {
        if !request.room_rate.is_finite() || request.room_rate < 0.0 {
            return Err(TypeError::InvalidRate(request.room_rate));
        }

        let status = request
            .status
            .unwrap_or_else(|| DEFAULT_STATUS.to_string());

        Ok(Self {
            id: request.id,
            customer_name: request.customer_name,
            room_type: request.room_type,
            booking_date: StayDate::parse(&request.booking_date)?,
            check_in_date: StayDate::parse(&request.check_in_date)?,
            check_out_date: StayDate::parse(&request.check_out_date)?,
            room_rate: request.room_rate,
            status,
            owner_name: request.owner_name,
        })
    }

    pub fn id(&self) -> BookingId {
        self.id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn room_type(&self) -> &str {
        &self.room_type
    }

    pub fn booking_date(&self) -> &StayDate {
        &self.booking_date
    }

    pub fn check_in_date(&self) -> &StayDate {
        &self.check_in_date
    }

    pub fn check_out_date(&self) -> &StayDate {
        &self.check_out_date
    }

    pub fn room_rate(&self) -> f64 {
        self.room_rate
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// The name authorized to mutate this booking.
    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    /// Overwrite the status. Any string is accepted and there is no
    /// transition graph.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Approximate nights between check-in and check-out.
    ///
    /// See [`StayDate::ordinal`] for the 365/30 day model.
    pub fn stay_duration(&self) -> i64 {
        self.check_in_date.days_until(&self.check_out_date)
    }

    /// Returns `true` if `id` and `owner` both match this booking.
    pub fn is_owned_by(&self, id: BookingId, owner: &str) -> bool {
        self.id == id && self.owner_name == owner
    }
}

impl TryFrom<NewBooking> for Booking {
    type Error = TypeError;

    fn try_from(request: NewBooking) -> Result<Self, Self::Error> {
        Self::new(request)
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Booking ID: {}", self.id)?;
        writeln!(f, "Customer Name: {}", self.customer_name)?;
        writeln!(f, "Room Type: {}", self.room_type)?;
        writeln!(f, "Booking Date: {}", self.booking_date)?;
        writeln!(f, "Check-in Date: {}", self.check_in_date)?;
        writeln!(f, "Check-out Date: {}", self.check_out_date)?;
        writeln!(f, "Room Rate: ${}", self.room_rate)?;
        write!(f, "Status: {}", self.status)
    }
}
