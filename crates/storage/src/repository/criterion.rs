use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::criterion::{CreateCriterionRequest, UpdateCriterionRequest};
use crate::error::{Result, StorageError};
use crate::models::Criterion;

const DUPLICATE_NAME: &str = "A criterion with this name already exists in the category";
const MISSING_CATEGORY: &str = "Category does not exist";

/// Repository for Criterion database operations
pub struct CriterionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CriterionRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List criteria, optionally restricted to one category, in display order
    pub async fn list(&self, category_id: Option<Uuid>) -> Result<Vec<Criterion>> {
        let criteria = sqlx::query_as::<_, Criterion>(
            r#"
            SELECT criterion_id, category_id, name, max_points, display_order, created_at
            FROM criteria
            WHERE ($1::uuid IS NULL OR category_id = $1)
            ORDER BY display_order, name
            "#,
        )
        .bind(category_id)
        .fetch_all(self.pool)
        .await?;

        Ok(criteria)
    }

    pub async fn list_by_category(&self, category_id: Uuid) -> Result<Vec<Criterion>> {
        self.list(Some(category_id)).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Criterion> {
        sqlx::query_as::<_, Criterion>(
            r#"
            SELECT criterion_id, category_id, name, max_points, display_order, created_at
            FROM criteria
            WHERE criterion_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Create a criterion. Without an explicit `display_order` it is placed
    /// after the last criterion of its category.
    pub async fn create(&self, req: &CreateCriterionRequest) -> Result<Criterion> {
        sqlx::query_as::<_, Criterion>(
            r#"
            INSERT INTO criteria (category_id, name, max_points, display_order)
            VALUES (
                $1, $2, $3,
                COALESCE(
                    $4,
                    (SELECT COALESCE(MAX(display_order), 0) + 1 FROM criteria WHERE category_id = $1)
                )
            )
            RETURNING criterion_id, category_id, name, max_points, display_order, created_at
            "#,
        )
        .bind(req.category_id)
        .bind(req.name.trim())
        .bind(req.max_points)
        .bind(req.display_order)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from_write(e, DUPLICATE_NAME, MISSING_CATEGORY))
    }

    pub async fn update(&self, id: Uuid, req: &UpdateCriterionRequest) -> Result<Criterion> {
        sqlx::query_as::<_, Criterion>(
            r#"
            UPDATE criteria
            SET
                name = COALESCE($2, name),
                max_points = COALESCE($3, max_points),
                display_order = COALESCE($4, display_order)
            WHERE criterion_id = $1
            RETURNING criterion_id, category_id, name, max_points, display_order, created_at
            "#,
        )
        .bind(id)
        .bind(req.name.as_deref().map(str::trim))
        .bind(req.max_points)
        .bind(req.display_order)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::from_write(e, DUPLICATE_NAME, MISSING_CATEGORY))?
        .ok_or(StorageError::NotFound)
    }

    /// Delete a criterion and every mark given on it
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM criteria WHERE criterion_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
