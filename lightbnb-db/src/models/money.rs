//! Money amounts. Stored as integer cents to avoid floating-point error.

use serde::{Deserialize, Serialize};

/// Amount in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cents(i64);

impl Cents {
    pub fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Convert a whole-currency amount (e.g. dollars per night) to cents.
    pub fn from_whole_units(units: u32) -> Self {
        Self(i64::from(units) * 100)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_units_to_cents() {
        assert_eq!(Cents::from_whole_units(50).get(), 5_000);
        assert_eq!(Cents::from_whole_units(150).get(), 15_000);
        assert_eq!(Cents::from_whole_units(u32::MAX).get(), 429_496_729_500);
    }

    #[test]
    fn orders_by_amount() {
        assert!(Cents::new(9_299) < Cents::from_whole_units(93));
    }
}
