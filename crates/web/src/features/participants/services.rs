use sqlx::PgPool;
use storage::{
    dto::participant::{CreateParticipantRequest, UpdateParticipantRequest},
    error::Result,
    models::Participant,
    repository::participant::ParticipantRepository,
};
use uuid::Uuid;

/// List participants, optionally for one category
pub async fn list_participants(
    pool: &PgPool,
    category_id: Option<Uuid>,
) -> Result<Vec<Participant>> {
    let repo = ParticipantRepository::new(pool);
    repo.list(category_id).await
}

/// Get participant by ID
pub async fn get_participant(pool: &PgPool, id: Uuid) -> Result<Participant> {
    let repo = ParticipantRepository::new(pool);
    repo.find_by_id(id).await
}

/// Register a new participant
pub async fn create_participant(
    pool: &PgPool,
    request: &CreateParticipantRequest,
) -> Result<Participant> {
    let repo = ParticipantRepository::new(pool);
    repo.create(request).await
}

/// Update a participant
pub async fn update_participant(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateParticipantRequest,
) -> Result<Participant> {
    let repo = ParticipantRepository::new(pool);
    repo.update(id, request).await
}

/// Delete a participant and their marks
pub async fn delete_participant(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = ParticipantRepository::new(pool);
    repo.delete(id).await
}
