//! Location repository - CRUD operations for campus locations
//!
//! Reads join the `categories` table so every returned `Location` embeds its
//! full category. Saving a location requires its category to be persisted
//! already; a dangling or missing category id is a constraint violation.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::StoreError;
use crate::models::{Location, LocationRow};

const LOCATION_SELECT: &str = r#"
SELECT l.id, l.name, l.description, l.category_id,
       c.name AS category_name, c.description AS category_description,
       l.latitude, l.longitude
FROM locations l
JOIN categories c ON c.id = l.category_id
"#;

#[derive(Clone, Debug)]
pub struct LocationRepository {
    pool: SqlitePool,
}

impl LocationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert the location when it has no id yet, otherwise update the
    /// existing row. Returns the persisted record with its identifier
    /// assigned.
    pub async fn save(&self, location: &Location) -> Result<Location, StoreError> {
        let category_id = location.category.id.ok_or_else(|| {
            StoreError::Constraint(format!(
                "location '{}' references a category without an id",
                location.name
            ))
        })?;

        match location.id {
            None => {
                let id = sqlx::query_scalar::<_, i64>(
                    r#"INSERT INTO locations (name, description, category_id, latitude, longitude) VALUES ($1, $2, $3, $4, $5) RETURNING id"#,
                )
                .bind(&location.name)
                .bind(&location.description)
                .bind(category_id)
                .bind(location.latitude)
                .bind(location.longitude)
                .fetch_one(&self.pool)
                .await
                .map_err(StoreError::from_sqlx)?;

                info!("Created location {} '{}'", id, location.name);

                let mut saved = location.clone();
                saved.id = Some(id);
                Ok(saved)
            }
            Some(id) => {
                sqlx::query(
                    r#"UPDATE locations SET name = $1, description = $2, category_id = $3, latitude = $4, longitude = $5 WHERE id = $6"#,
                )
                .bind(&location.name)
                .bind(&location.description)
                .bind(category_id)
                .bind(location.latitude)
                .bind(location.longitude)
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(StoreError::from_sqlx)?;

                Ok(location.clone())
            }
        }
    }

    /// Every persisted location with its category, in no guaranteed order.
    pub async fn find_all(&self) -> Result<Vec<Location>, StoreError> {
        let rows = sqlx::query_as::<_, LocationRow>(LOCATION_SELECT)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)?;

        Ok(rows.into_iter().map(Location::from).collect())
    }

    /// `None` when no location has the given id; never an error.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Location>, StoreError> {
        let query = format!("{LOCATION_SELECT} WHERE l.id = $1");
        let row = sqlx::query_as::<_, LocationRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)?;

        Ok(row.map(Location::from))
    }

    /// Every location whose category reference equals the given id. An id
    /// matching no category yields an empty vec, not an error.
    pub async fn find_by_category_id(&self, category_id: i64) -> Result<Vec<Location>, StoreError> {
        let query = format!("{LOCATION_SELECT} WHERE l.category_id = $1");
        let rows = sqlx::query_as::<_, LocationRow>(&query)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)?;

        Ok(rows.into_iter().map(Location::from).collect())
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query(r#"DELETE FROM locations WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)?;

        if result.rows_affected() > 0 {
            info!("Deleted location {}", id);
        }
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, location: &Location) -> Result<bool, StoreError> {
        match location.id {
            Some(id) => self.delete_by_id(id).await,
            None => Ok(false),
        }
    }

    pub async fn delete_all(&self) -> Result<u64, StoreError> {
        let result = sqlx::query(r#"DELETE FROM locations"#)
            .execute(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)?;

        Ok(result.rows_affected())
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, StoreError> {
        sqlx::query_scalar::<_, bool>(r#"SELECT EXISTS(SELECT 1 FROM locations WHERE id = $1)"#)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)
    }

    pub async fn count(&self) -> Result<i64, StoreError> {
        sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM locations"#)
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)
    }
}
