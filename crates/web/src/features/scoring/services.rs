use sqlx::PgPool;
use storage::{
    dto::{completeness::UnmarkedParticipantsResponse, leaderboard::LeaderboardResponse},
    error::Result,
    services::{completeness, leaderboard},
};
use uuid::Uuid;

/// Ranked leaderboard of a category
pub async fn get_leaderboard(pool: &PgPool, category_id: Uuid) -> Result<LeaderboardResponse> {
    leaderboard::category_leaderboard(pool, category_id).await
}

/// Participants the jury member still has to mark in a category
pub async fn get_unmarked_participants(
    pool: &PgPool,
    category_id: Uuid,
    jury_member_id: Uuid,
) -> Result<UnmarkedParticipantsResponse> {
    completeness::find_unmarked_participants(pool, category_id, jury_member_id).await
}
