use sqlx::PgPool;
use storage::{
    dto::admin::AdminOverviewResponse,
    error::Result,
    repository::{admin::AdminRepository, category::CategoryRepository, jury::JuryRepository},
};

/// Everything the administration screen lists
pub async fn get_overview(pool: &PgPool) -> Result<AdminOverviewResponse> {
    let categories = CategoryRepository::new(pool);
    let jury = JuryRepository::new(pool);
    let admin = AdminRepository::new(pool);

    let (categories, criteria, participants, jury) = tokio::try_join!(
        categories.list(),
        admin.list_criteria_with_category(),
        admin.list_participants_with_category(),
        jury.list(),
    )?;

    Ok(AdminOverviewResponse {
        categories,
        criteria,
        participants,
        jury,
    })
}
