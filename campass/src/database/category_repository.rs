//! Category repository - CRUD operations for location categories

use sqlx::SqlitePool;
use tracing::info;

use crate::error::StoreError;
use crate::models::Category;

#[derive(Clone, Debug)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert the category when it has no id yet, otherwise update the
    /// existing row. Returns the persisted record with its identifier
    /// assigned. A duplicate name surfaces as `StoreError::Constraint`.
    pub async fn save(&self, category: &Category) -> Result<Category, StoreError> {
        match category.id {
            None => {
                let saved = sqlx::query_as::<_, Category>(
                    r#"INSERT INTO categories (name, description) VALUES ($1, $2) RETURNING id, name, description"#,
                )
                .bind(&category.name)
                .bind(&category.description)
                .fetch_one(&self.pool)
                .await
                .map_err(StoreError::from_sqlx)?;

                info!(
                    "Created category {} '{}'",
                    saved.id.unwrap_or_default(),
                    saved.name
                );
                Ok(saved)
            }
            Some(id) => {
                sqlx::query(r#"UPDATE categories SET name = $1, description = $2 WHERE id = $3"#)
                    .bind(&category.name)
                    .bind(&category.description)
                    .bind(id)
                    .execute(&self.pool)
                    .await
                    .map_err(StoreError::from_sqlx)?;

                Ok(category.clone())
            }
        }
    }

    /// Every persisted category, in no guaranteed order.
    pub async fn find_all(&self) -> Result<Vec<Category>, StoreError> {
        sqlx::query_as::<_, Category>(r#"SELECT id, name, description FROM categories"#)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)
    }

    /// `None` when no category has the given id; never an error.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Category>, StoreError> {
        sqlx::query_as::<_, Category>(
            r#"SELECT id, name, description FROM categories WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::from_sqlx)
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query(r#"DELETE FROM categories WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)?;

        if result.rows_affected() > 0 {
            info!("Deleted category {}", id);
        }
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, category: &Category) -> Result<bool, StoreError> {
        match category.id {
            Some(id) => self.delete_by_id(id).await,
            None => Ok(false),
        }
    }

    pub async fn delete_all(&self) -> Result<u64, StoreError> {
        let result = sqlx::query(r#"DELETE FROM categories"#)
            .execute(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)?;

        Ok(result.rows_affected())
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, StoreError> {
        sqlx::query_scalar::<_, bool>(r#"SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)"#)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)
    }

    pub async fn count(&self) -> Result<i64, StoreError> {
        sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM categories"#)
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)
    }
}
