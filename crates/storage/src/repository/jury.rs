use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{JuryMember, NormalizedJuryName};

const DUPLICATE_NAME: &str = "A jury member with this name already exists";

/// Repository for JuryMember database operations
pub struct JuryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> JuryRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<JuryMember>> {
        let jury = sqlx::query_as::<_, JuryMember>(
            r#"
            SELECT jury_member_id, name, created_at
            FROM jury_members
            ORDER BY name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(jury)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<JuryMember> {
        sqlx::query_as::<_, JuryMember>(
            r#"
            SELECT jury_member_id, name, created_at
            FROM jury_members
            WHERE jury_member_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn create(&self, name: &NormalizedJuryName) -> Result<JuryMember> {
        sqlx::query_as::<_, JuryMember>(
            r#"
            INSERT INTO jury_members (name)
            VALUES ($1)
            RETURNING jury_member_id, name, created_at
            "#,
        )
        .bind(name.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from_write(e, DUPLICATE_NAME, "Invalid jury reference"))
    }

    /// Rename a jury member. Their marks follow since marks reference the id.
    pub async fn rename(&self, id: Uuid, name: &NormalizedJuryName) -> Result<JuryMember> {
        sqlx::query_as::<_, JuryMember>(
            r#"
            UPDATE jury_members
            SET name = $2
            WHERE jury_member_id = $1
            RETURNING jury_member_id, name, created_at
            "#,
        )
        .bind(id)
        .bind(name.as_str())
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::from_write(e, DUPLICATE_NAME, "Invalid jury reference"))?
        .ok_or(StorageError::NotFound)
    }

    /// Delete a jury member and every mark they gave
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM jury_members WHERE jury_member_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
