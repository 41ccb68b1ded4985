use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::participant::{CreateParticipantRequest, UpdateParticipantRequest};
use crate::error::{Result, StorageError};
use crate::models::Participant;

const MISSING_CATEGORY: &str = "Category does not exist";

/// Repository for Participant database operations
pub struct ParticipantRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ParticipantRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List participants, optionally restricted to one category, by name
    pub async fn list(&self, category_id: Option<Uuid>) -> Result<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT participant_id, category_id, name, institution, email, created_at
            FROM participants
            WHERE ($1::uuid IS NULL OR category_id = $1)
            ORDER BY name, created_at
            "#,
        )
        .bind(category_id)
        .fetch_all(self.pool)
        .await?;

        Ok(participants)
    }

    pub async fn list_by_category(&self, category_id: Uuid) -> Result<Vec<Participant>> {
        self.list(Some(category_id)).await
    }

    /// Fetch the given participants; unknown ids are silently absent
    pub async fn list_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT participant_id, category_id, name, institution, email, created_at
            FROM participants
            WHERE participant_id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(self.pool)
        .await?;

        Ok(participants)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Participant> {
        sqlx::query_as::<_, Participant>(
            r#"
            SELECT participant_id, category_id, name, institution, email, created_at
            FROM participants
            WHERE participant_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn create(&self, req: &CreateParticipantRequest) -> Result<Participant> {
        sqlx::query_as::<_, Participant>(
            r#"
            INSERT INTO participants (category_id, name, institution, email)
            VALUES ($1, $2, $3, $4)
            RETURNING participant_id, category_id, name, institution, email, created_at
            "#,
        )
        .bind(req.category_id)
        .bind(req.name.trim())
        .bind(&req.institution)
        .bind(&req.email)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from_write(e, "Participant already exists", MISSING_CATEGORY))
    }

    pub async fn update(&self, id: Uuid, req: &UpdateParticipantRequest) -> Result<Participant> {
        sqlx::query_as::<_, Participant>(
            r#"
            UPDATE participants
            SET
                category_id = COALESCE($2, category_id),
                name = COALESCE($3, name),
                institution = COALESCE($4, institution),
                email = COALESCE($5, email)
            WHERE participant_id = $1
            RETURNING participant_id, category_id, name, institution, email, created_at
            "#,
        )
        .bind(id)
        .bind(req.category_id)
        .bind(req.name.as_deref().map(str::trim))
        .bind(&req.institution)
        .bind(&req.email)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::from_write(e, "Participant already exists", MISSING_CATEGORY))?
        .ok_or(StorageError::NotFound)
    }

    /// Delete a participant and all of their marks
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM participants WHERE participant_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
