//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows the shared pool; one method per use case
//! - Inserts return the stored row via `RETURNING *`
//! - Constraint violations are classified, not pre-checked

pub mod users;
pub mod reservations;
pub mod properties;

pub use users::UserRepo;
pub use reservations::ReservationRepo;
pub use properties::PropertyRepo;
