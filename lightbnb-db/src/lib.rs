//! lightbnb-db: data access for the LightBnB rental application
//!
//! Fetches users, reservations and properties, and inserts users and
//! properties, on PostgreSQL via a shared sqlx pool.
//!
//! ```ignore
//! use lightbnb_db::{DbConfig, LightBnb, Limit, PropertySearch};
//!
//! let db = LightBnb::connect(&DbConfig::from_env()?).await?;
//! let cheap = db
//!     .get_all_properties(&PropertySearch::default().in_city("Vancouver").max_price(150), Limit::default())
//!     .await?;
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod query;
pub mod store;

pub use config::DbConfig;
pub use error::{DbError, Result};
pub use models::{
    Cents, Limit, NewProperty, NewUser, Property, PropertyListing, PropertySearch,
    ReservationListing, User, ValidationError,
};
pub use store::LightBnb;

/// Schema migrations bundled with the crate.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
