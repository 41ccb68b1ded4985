use sqlx::PgPool;

use crate::dto::admin::{CriterionWithCategory, ParticipantWithCategory};
use crate::error::Result;

/// Cross-table listings for the administration screen
pub struct AdminRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_criteria_with_category(&self) -> Result<Vec<CriterionWithCategory>> {
        let criteria = sqlx::query_as::<_, CriterionWithCategory>(
            r#"
            SELECT cr.criterion_id, cr.category_id, c.name AS category_name,
                   cr.name, cr.max_points, cr.display_order
            FROM criteria cr
            INNER JOIN categories c ON c.category_id = cr.category_id
            ORDER BY c.name, cr.display_order, cr.name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(criteria)
    }

    pub async fn list_participants_with_category(&self) -> Result<Vec<ParticipantWithCategory>> {
        let participants = sqlx::query_as::<_, ParticipantWithCategory>(
            r#"
            SELECT p.participant_id, p.category_id, c.name AS category_name,
                   p.name, p.institution, p.email
            FROM participants p
            INNER JOIN categories c ON c.category_id = p.category_id
            ORDER BY p.name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(participants)
    }
}
