use sqlx::PgPool;
use storage::{
    dto::category::{CreateCategoryRequest, UpdateCategoryRequest},
    error::Result,
    models::{Category, Criterion, Participant},
    repository::{
        category::CategoryRepository, criterion::CriterionRepository,
        participant::ParticipantRepository,
    },
};
use uuid::Uuid;

/// List all categories
pub async fn list_categories(pool: &PgPool) -> Result<Vec<Category>> {
    let repo = CategoryRepository::new(pool);
    repo.list().await
}

/// Get category by ID
pub async fn get_category(pool: &PgPool, id: Uuid) -> Result<Category> {
    let repo = CategoryRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new category
pub async fn create_category(pool: &PgPool, request: &CreateCategoryRequest) -> Result<Category> {
    let repo = CategoryRepository::new(pool);
    let category = repo.create(request).await?;
    tracing::info!(category_id = %category.category_id, name = %category.name, "Category created");
    Ok(category)
}

/// Update a category
pub async fn update_category(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateCategoryRequest,
) -> Result<Category> {
    let repo = CategoryRepository::new(pool);
    repo.update(id, request).await
}

/// Delete a category with its criteria, participants and marks
pub async fn delete_category(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = CategoryRepository::new(pool);
    repo.delete(id).await?;
    tracing::info!(category_id = %id, "Category deleted");
    Ok(())
}

/// Criteria of an existing category, in display order
pub async fn list_category_criteria(pool: &PgPool, id: Uuid) -> Result<Vec<Criterion>> {
    CategoryRepository::new(pool).find_by_id(id).await?;
    CriterionRepository::new(pool).list_by_category(id).await
}

/// Participants of an existing category, by name
pub async fn list_category_participants(pool: &PgPool, id: Uuid) -> Result<Vec<Participant>> {
    CategoryRepository::new(pool).find_by_id(id).await?;
    ParticipantRepository::new(pool).list_by_category(id).await
}
