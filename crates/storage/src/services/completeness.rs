use std::collections::{HashMap, HashSet};

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::completeness::UnmarkedParticipantsResponse;
use crate::error::Result;
use crate::models::{Criterion, Mark, Participant};
use crate::repository::{
    category::CategoryRepository, criterion::CriterionRepository, jury::JuryRepository,
    mark::MarkRepository, participant::ParticipantRepository,
};

/// Participants of a category still waiting for marks from `jury_member_id`.
pub async fn find_unmarked_participants(
    pool: &PgPool,
    category_id: Uuid,
    jury_member_id: Uuid,
) -> Result<UnmarkedParticipantsResponse> {
    CategoryRepository::new(pool).find_by_id(category_id).await?;
    JuryRepository::new(pool).find_by_id(jury_member_id).await?;

    let criteria = CriterionRepository::new(pool)
        .list_by_category(category_id)
        .await?;
    let participants = ParticipantRepository::new(pool)
        .list_by_category(category_id)
        .await?;

    let marks = if criteria.is_empty() || participants.is_empty() {
        Vec::new()
    } else {
        let ids: Vec<Uuid> = participants.iter().map(|p| p.participant_id).collect();
        MarkRepository::new(pool)
            .list_for_jury_and_participants(jury_member_id, &ids)
            .await?
    };

    Ok(UnmarkedParticipantsResponse {
        category_id,
        jury_member_id,
        total_criteria: criteria.len(),
        participant_ids: unmarked_participants(&participants, &criteria, &marks, jury_member_id),
    })
}

/// Ids of `participants`, in input order, that lack a mark from
/// `jury_member_id` on at least one of `criteria`.
///
/// Marked criteria are counted as distinct ids, so duplicate rows never make
/// up for a missing criterion. With no criteria there is nothing to mark and
/// the result is empty.
pub fn unmarked_participants(
    participants: &[Participant],
    criteria: &[Criterion],
    marks: &[Mark],
    jury_member_id: Uuid,
) -> Vec<Uuid> {
    if criteria.is_empty() {
        return Vec::new();
    }

    let criterion_ids: HashSet<Uuid> = criteria.iter().map(|c| c.criterion_id).collect();

    let mut marked: HashMap<Uuid, HashSet<Uuid>> = HashMap::new();
    for mark in marks {
        if mark.jury_member_id == jury_member_id && criterion_ids.contains(&mark.criterion_id) {
            marked
                .entry(mark.participant_id)
                .or_default()
                .insert(mark.criterion_id);
        }
    }

    participants
        .iter()
        .filter(|p| {
            marked
                .get(&p.participant_id)
                .map_or(0, HashSet::len)
                < criterion_ids.len()
        })
        .map(|p| p.participant_id)
        .collect()
}
