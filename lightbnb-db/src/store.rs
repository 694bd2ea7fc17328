//! The LightBnB data-access facade
//!
//! [`LightBnb`] owns the pool and exposes one method per use case. Every
//! failure is logged here before it is returned, so callers may branch on the
//! error or simply propagate it.

use sqlx::PgPool;
use tracing::instrument;

use crate::config::DbConfig;
use crate::db::{create_pool, PropertyRepo, ReservationRepo, UserRepo};
use crate::error::{DbError, Result};
use crate::models::{
    Limit, NewProperty, NewUser, Property, PropertyListing, PropertySearch, ReservationListing,
    User,
};

/// Shared handle to the LightBnB database. Cheap to clone.
#[derive(Clone, Debug)]
pub struct LightBnb {
    pool: PgPool,
}

impl LightBnb {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool from configuration.
    pub async fn connect(config: &DbConfig) -> Result<Self> {
        let pool = logged("connect", create_pool(config).await)?;
        tracing::info!(db = %config.target(), "connected");
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Apply the bundled schema migrations.
    pub async fn migrate(&self) -> Result<()> {
        logged(
            "migrate",
            crate::MIGRATOR.run(&self.pool).await.map_err(DbError::from),
        )
    }

    /// Close every connection. Pending queries finish first.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Look up a user by exact email. `Ok(None)` when nobody has it.
    #[instrument(skip(self))]
    pub async fn get_user_with_email(&self, email: &str) -> Result<Option<User>> {
        logged(
            "get_user_with_email",
            UserRepo::new(&self.pool).find_by_email(email).await,
        )
    }

    #[instrument(skip(self))]
    pub async fn get_user_with_id(&self, id: i32) -> Result<Option<User>> {
        logged(
            "get_user_with_id",
            UserRepo::new(&self.pool).find_by_id(id).await,
        )
    }

    #[instrument(skip_all, fields(email = %user.email))]
    pub async fn add_user(&self, user: &NewUser) -> Result<User> {
        logged("add_user", UserRepo::new(&self.pool).create(user).await)
    }

    /// A guest's reservations, earliest first, at most `limit` rows.
    #[instrument(skip(self))]
    pub async fn get_all_reservations(
        &self,
        guest_id: i32,
        limit: Limit,
    ) -> Result<Vec<ReservationListing>> {
        logged(
            "get_all_reservations",
            ReservationRepo::new(&self.pool)
                .list_for_guest(guest_id, limit)
                .await,
        )
    }

    /// Properties matching `search`, cheapest first, at most `limit` rows.
    #[instrument(skip(self))]
    pub async fn get_all_properties(
        &self,
        search: &PropertySearch,
        limit: Limit,
    ) -> Result<Vec<PropertyListing>> {
        logged(
            "get_all_properties",
            PropertyRepo::new(&self.pool).search(search, limit).await,
        )
    }

    #[instrument(skip_all, fields(owner_id = property.owner_id, title = %property.title))]
    pub async fn add_property(&self, property: &NewProperty) -> Result<Property> {
        logged(
            "add_property",
            PropertyRepo::new(&self.pool).create(property).await,
        )
    }
}

fn logged<T>(operation: &'static str, result: Result<T>) -> Result<T> {
    match &result {
        Err(err @ DbError::Validation(_)) => {
            tracing::warn!(operation, error = %err, "rejected input");
        }
        Err(err) => {
            tracing::error!(operation, error = %err, "database operation failed");
        }
        Ok(_) => {}
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ValidationError;

    #[test]
    fn logged_passes_results_through() {
        assert_eq!(logged("noop", Ok(3)).unwrap(), 3);

        let err = logged::<()>(
            "add_user",
            Err(ValidationError::Empty { field: "email" }.into()),
        )
        .unwrap_err();
        assert!(matches!(err, DbError::Validation(_)));
    }

    #[tokio::test]
    async fn validation_happens_before_the_store() {
        // Lazy pool never connects; an invalid record must fail without it.
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://nobody@127.0.0.1:1/none")
            .unwrap();
        let db = LightBnb::new(pool);

        let err = db
            .add_user(&NewUser::new("", "a@b.c", "hash"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DbError::Validation(ValidationError::Empty { field: "name" })
        ));
    }
}
