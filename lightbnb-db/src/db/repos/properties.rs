//! Property repository
//!
//! - search: dynamic WHERE/HAVING built by [`PropertyQuery`]
//! - create: full INSERT, always active

use sqlx::PgPool;

use crate::error::{DbError, Result};
use crate::models::{Limit, NewProperty, Property, PropertyListing, PropertySearch};
use crate::query::PropertyQuery;

/// Property repository
pub struct PropertyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PropertyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Search properties, cheapest first, with their average rating.
    pub async fn search(
        &self,
        search: &PropertySearch,
        limit: Limit,
    ) -> Result<Vec<PropertyListing>> {
        let query = PropertyQuery::new(search, limit);
        let mut builder = query.build();
        tracing::debug!(sql = builder.sql(), filters = query.filters().len(), "property search");

        let rows = builder
            .build_query_as::<PropertyListing>()
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    /// Insert a property and return the stored row.
    ///
    /// An unknown `owner_id` yields [`DbError::MissingReference`].
    pub async fn create(&self, property: &NewProperty) -> Result<Property> {
        property.validate()?;

        sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (
                owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
                country, street, city, province, post_code, active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, TRUE)
            RETURNING *
            "#,
        )
        .bind(property.owner_id)
        .bind(&property.title)
        .bind(&property.description)
        .bind(&property.thumbnail_photo_url)
        .bind(&property.cover_photo_url)
        .bind(property.cost_per_night)
        .bind(property.parking_spaces)
        .bind(property.number_of_bathrooms)
        .bind(property.number_of_bedrooms)
        .bind(&property.country)
        .bind(&property.street)
        .bind(&property.city)
        .bind(&property.province)
        .bind(&property.post_code)
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::on_insert("property", e))
    }
}
