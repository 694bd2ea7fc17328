//! Row records and insert records
//!
//! Insert records are checked with `validate()` before they reach the store.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod limit;
pub mod money;
pub mod user;
pub mod property;
pub mod reservation;

pub use validation::ValidationError;
pub use limit::Limit;
pub use money::Cents;
pub use user::{NewUser, User};
pub use property::{NewProperty, Property, PropertyListing, PropertySearch};
pub use reservation::ReservationListing;
