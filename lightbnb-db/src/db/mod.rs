//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - One shared `PgPool`; concurrency is bounded by its connection limit
//! - Every value is a bind parameter, never spliced into SQL
//! - Rely on DB constraints, classify violations - no check-then-insert
//! - Ratings are aggregated with LEFT JOINs in the same statement - no N+1

pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
