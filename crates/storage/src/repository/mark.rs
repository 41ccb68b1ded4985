use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::dto::mark::MarkFilter;
use crate::error::{Result, StorageError};
use crate::models::Mark;

const MISSING_REFERENCE: &str = "Participant, criterion or jury member does not exist";

/// Repository for Mark database operations
pub struct MarkRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MarkRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List marks matching the optional jury member / participant filters
    pub async fn list(&self, filter: &MarkFilter) -> Result<Vec<Mark>> {
        let marks = sqlx::query_as::<_, Mark>(
            r#"
            SELECT mark_id, participant_id, criterion_id, jury_member_id, points,
                   created_at, updated_at
            FROM marks
            WHERE ($1::uuid IS NULL OR jury_member_id = $1)
              AND ($2::uuid IS NULL OR participant_id = $2)
            ORDER BY participant_id, criterion_id, updated_at
            "#,
        )
        .bind(filter.jury_member_id)
        .bind(filter.participant_id)
        .fetch_all(self.pool)
        .await?;

        Ok(marks)
    }

    /// All marks, from any jury member, of the given participants
    pub async fn list_for_participants(&self, participant_ids: &[Uuid]) -> Result<Vec<Mark>> {
        let marks = sqlx::query_as::<_, Mark>(
            r#"
            SELECT mark_id, participant_id, criterion_id, jury_member_id, points,
                   created_at, updated_at
            FROM marks
            WHERE participant_id = ANY($1)
            ORDER BY updated_at
            "#,
        )
        .bind(participant_ids)
        .fetch_all(self.pool)
        .await?;

        Ok(marks)
    }

    /// Marks one jury member gave to the given participants
    pub async fn list_for_jury_and_participants(
        &self,
        jury_member_id: Uuid,
        participant_ids: &[Uuid],
    ) -> Result<Vec<Mark>> {
        let marks = sqlx::query_as::<_, Mark>(
            r#"
            SELECT mark_id, participant_id, criterion_id, jury_member_id, points,
                   created_at, updated_at
            FROM marks
            WHERE jury_member_id = $1
              AND participant_id = ANY($2)
            ORDER BY updated_at
            "#,
        )
        .bind(jury_member_id)
        .bind(participant_ids)
        .fetch_all(self.pool)
        .await?;

        Ok(marks)
    }

    /// Insert or overwrite the mark for (participant, criterion, jury member)
    pub async fn upsert(
        &self,
        participant_id: Uuid,
        criterion_id: Uuid,
        jury_member_id: Uuid,
        points: Decimal,
    ) -> Result<Mark> {
        let mut conn = self.pool.acquire().await?;
        Self::upsert_with(&mut conn, participant_id, criterion_id, jury_member_id, points).await
    }

    /// Same as [`MarkRepository::upsert`] on a caller-provided connection, so
    /// several upserts can share one transaction.
    pub async fn upsert_with(
        conn: &mut PgConnection,
        participant_id: Uuid,
        criterion_id: Uuid,
        jury_member_id: Uuid,
        points: Decimal,
    ) -> Result<Mark> {
        sqlx::query_as::<_, Mark>(
            r#"
            INSERT INTO marks (participant_id, criterion_id, jury_member_id, points)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (participant_id, criterion_id, jury_member_id)
            DO UPDATE SET
                points = EXCLUDED.points,
                updated_at = CURRENT_TIMESTAMP
            RETURNING mark_id, participant_id, criterion_id, jury_member_id, points,
                      created_at, updated_at
            "#,
        )
        .bind(participant_id)
        .bind(criterion_id)
        .bind(jury_member_id)
        .bind(points)
        .fetch_one(conn)
        .await
        .map_err(|e| StorageError::from_write(e, "Duplicate mark", MISSING_REFERENCE))
    }
}
