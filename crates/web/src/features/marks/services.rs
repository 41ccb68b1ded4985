use sqlx::PgPool;
use storage::{
    dto::{comparison::ComparisonResponse, mark::{MarkFilter, SubmitMarksRequest}},
    error::Result,
    models::Mark,
    repository::mark::MarkRepository,
    services::{
        comparison,
        mark_submission::{self, SubmitMarksError},
    },
};
use uuid::Uuid;

/// Raw marks matching the filter
pub async fn list_marks(pool: &PgPool, filter: &MarkFilter) -> Result<Vec<Mark>> {
    let repo = MarkRepository::new(pool);
    repo.list(filter).await
}

/// Validate and store a complete set of marks in one transaction
pub async fn submit_marks(
    pool: &PgPool,
    request: &SubmitMarksRequest,
) -> std::result::Result<Vec<Mark>, SubmitMarksError> {
    mark_submission::submit_marks(pool, request).await
}

/// A jury member's own marks for the given participants
pub async fn compare_marks(
    pool: &PgPool,
    jury_member_id: Uuid,
    participant_ids: &[Uuid],
) -> Result<ComparisonResponse> {
    comparison::compare_participants(pool, jury_member_id, participant_ids).await
}
