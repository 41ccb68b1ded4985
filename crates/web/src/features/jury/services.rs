use sqlx::PgPool;
use storage::{
    error::Result,
    models::{JuryMember, NormalizedJuryName},
    repository::jury::JuryRepository,
};
use uuid::Uuid;

/// List all jury members
pub async fn list_jury(pool: &PgPool) -> Result<Vec<JuryMember>> {
    let repo = JuryRepository::new(pool);
    repo.list().await
}

/// Get jury member by ID
pub async fn get_jury_member(pool: &PgPool, id: Uuid) -> Result<JuryMember> {
    let repo = JuryRepository::new(pool);
    repo.find_by_id(id).await
}

/// Add a jury member under the normalized form of `name`
pub async fn create_jury_member(pool: &PgPool, name: &str) -> Result<JuryMember> {
    let repo = JuryRepository::new(pool);
    repo.create(&NormalizedJuryName::new(name)).await
}

/// Rename a jury member; omitting the name returns the member unchanged
pub async fn update_jury_member(pool: &PgPool, id: Uuid, name: Option<&str>) -> Result<JuryMember> {
    let repo = JuryRepository::new(pool);
    match name {
        Some(name) => repo.rename(id, &NormalizedJuryName::new(name)).await,
        None => repo.find_by_id(id).await,
    }
}

/// Delete a jury member and their marks
pub async fn delete_jury_member(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = JuryRepository::new(pool);
    repo.delete(id).await
}
