use sqlx::PgPool;
use storage::{
    dto::criterion::{CreateCriterionRequest, UpdateCriterionRequest},
    error::Result,
    models::Criterion,
    repository::criterion::CriterionRepository,
};
use uuid::Uuid;

/// List criteria, optionally for one category
pub async fn list_criteria(pool: &PgPool, category_id: Option<Uuid>) -> Result<Vec<Criterion>> {
    let repo = CriterionRepository::new(pool);
    repo.list(category_id).await
}

/// Get criterion by ID
pub async fn get_criterion(pool: &PgPool, id: Uuid) -> Result<Criterion> {
    let repo = CriterionRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new criterion
pub async fn create_criterion(
    pool: &PgPool,
    request: &CreateCriterionRequest,
) -> Result<Criterion> {
    let repo = CriterionRepository::new(pool);
    let criterion = repo.create(request).await?;
    tracing::info!(
        criterion_id = %criterion.criterion_id,
        category_id = %criterion.category_id,
        display_order = criterion.display_order,
        "Criterion created"
    );
    Ok(criterion)
}

/// Update a criterion
pub async fn update_criterion(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateCriterionRequest,
) -> Result<Criterion> {
    let repo = CriterionRepository::new(pool);
    repo.update(id, request).await
}

/// Delete a criterion and its marks
pub async fn delete_criterion(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = CriterionRepository::new(pool);
    repo.delete(id).await
}
