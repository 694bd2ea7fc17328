//! SQL assembly for queries whose shape depends on caller input
//!
//! Only the property search is dynamic. Every predicate is a variant of a
//! fixed enum and every value goes through `push_bind`, so caller text never
//! reaches the SQL string.

pub mod property_search;

pub use property_search::{PriceRange, PropertyFilter, PropertyQuery};
