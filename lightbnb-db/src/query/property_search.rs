//! Property search: named predicates assembled with `sqlx::QueryBuilder`

use sqlx::{Postgres, QueryBuilder};

use crate::models::{Cents, Limit, PropertySearch};

const SELECT_LISTINGS: &str = "SELECT properties.*, AVG(property_reviews.rating)::float8 AS average_rating \
FROM properties \
LEFT JOIN property_reviews ON property_reviews.property_id = properties.id";

/// Bounds on `cost_per_night`, already in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceRange {
    Between { min: Cents, max: Cents },
    AtLeast(Cents),
    AtMost(Cents),
}

impl PriceRange {
    /// Combine optional whole-unit bounds. `None` when neither is given.
    pub fn from_whole_units(min: Option<u32>, max: Option<u32>) -> Option<Self> {
        let min = min.filter(|p| *p > 0).map(Cents::from_whole_units);
        let max = max.filter(|p| *p > 0).map(Cents::from_whole_units);
        match (min, max) {
            (Some(min), Some(max)) => Some(Self::Between { min, max }),
            (Some(min), None) => Some(Self::AtLeast(min)),
            (None, Some(max)) => Some(Self::AtMost(max)),
            (None, None) => None,
        }
    }
}

/// One WHERE predicate on `properties`.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyFilter {
    Owner(i32),
    /// Substring match on city; LIKE wildcards in the input match literally.
    CityContains(String),
    Price(PriceRange),
}

impl PropertyFilter {
    /// Append this predicate, binding its values as the next parameters.
    pub fn push_onto(&self, qb: &mut QueryBuilder<'static, Postgres>) {
        match self {
            Self::Owner(owner_id) => {
                qb.push("properties.owner_id = ").push_bind(*owner_id);
            }
            Self::CityContains(city) => {
                qb.push("properties.city LIKE ")
                    .push_bind(format!("%{}%", escape_like(city)));
            }
            Self::Price(PriceRange::Between { min, max }) => {
                qb.push("properties.cost_per_night BETWEEN ")
                    .push_bind(min.get())
                    .push(" AND ")
                    .push_bind(max.get());
            }
            Self::Price(PriceRange::AtLeast(min)) => {
                qb.push("properties.cost_per_night >= ").push_bind(min.get());
            }
            Self::Price(PriceRange::AtMost(max)) => {
                qb.push("properties.cost_per_night <= ").push_bind(max.get());
            }
        }
    }

    /// The predicate on its own, numbered from `$1`.
    pub fn to_sql(&self) -> String {
        let mut qb = QueryBuilder::new("");
        self.push_onto(&mut qb);
        qb.sql().to_owned()
    }
}

/// A complete property search: WHERE predicates, an optional minimum
/// average rating and a row limit.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyQuery {
    filters: Vec<PropertyFilter>,
    minimum_rating: Option<f64>,
    limit: Limit,
}

impl PropertyQuery {
    /// Translate caller options. Zero and empty values are dropped.
    pub fn new(search: &PropertySearch, limit: Limit) -> Self {
        let mut filters = Vec::new();

        if let Some(owner_id) = search.owner_id.filter(|id| *id != 0) {
            filters.push(PropertyFilter::Owner(owner_id));
        }
        if let Some(city) = search.city.as_deref().filter(|c| !c.is_empty()) {
            filters.push(PropertyFilter::CityContains(city.to_owned()));
        }
        if let Some(range) = PriceRange::from_whole_units(
            search.minimum_price_per_night,
            search.maximum_price_per_night,
        ) {
            filters.push(PropertyFilter::Price(range));
        }

        let minimum_rating = search
            .minimum_rating
            .filter(|r| r.is_finite() && *r > 0.0);

        Self {
            filters,
            minimum_rating,
            limit,
        }
    }

    pub fn filters(&self) -> &[PropertyFilter] {
        &self.filters
    }

    pub fn minimum_rating(&self) -> Option<f64> {
        self.minimum_rating
    }

    pub fn limit(&self) -> Limit {
        self.limit
    }

    /// Assemble the statement. Rows come back cheapest first.
    pub fn build(&self) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new(SELECT_LISTINGS);

        for (i, filter) in self.filters.iter().enumerate() {
            qb.push(if i == 0 { " WHERE " } else { " AND " });
            filter.push_onto(&mut qb);
        }

        qb.push(" GROUP BY properties.id");

        if let Some(rating) = self.minimum_rating {
            qb.push(" HAVING AVG(property_reviews.rating)::float8 >= ")
                .push_bind(rating);
        }

        qb.push(" ORDER BY properties.cost_per_night, properties.id LIMIT ")
            .push_bind(self.limit.as_i64());
        qb
    }
}

/// Escape `%`, `_` and the escape character itself for a LIKE pattern.
fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
