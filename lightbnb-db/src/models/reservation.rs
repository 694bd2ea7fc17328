//! Reservation rows joined with their property

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use super::Property;

/// A guest's reservation with the reserved property and its rating.
///
/// `average_rating` covers every review of the property, not only reviews
/// tied to this reservation.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ReservationListing {
    pub reservation_id: i32,
    pub guest_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[sqlx(flatten)]
    pub property: Property,
    pub average_rating: Option<f64>,
}

impl ReservationListing {
    /// Number of nights booked.
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}
