use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::comparison::{ComparisonResponse, ComparisonRow};
use crate::error::Result;
use crate::models::{Mark, Participant};
use crate::repository::{
    jury::JuryRepository, mark::MarkRepository, participant::ParticipantRepository,
};

/// Side-by-side view of one jury member's own marks for several participants.
pub async fn compare_participants(
    pool: &PgPool,
    jury_member_id: Uuid,
    participant_ids: &[Uuid],
) -> Result<ComparisonResponse> {
    JuryRepository::new(pool).find_by_id(jury_member_id).await?;

    if participant_ids.is_empty() {
        return Ok(ComparisonResponse {
            jury_member_id,
            rows: Vec::new(),
        });
    }

    let participants = ParticipantRepository::new(pool)
        .list_by_ids(participant_ids)
        .await?;
    let marks = MarkRepository::new(pool)
        .list_for_jury_and_participants(jury_member_id, participant_ids)
        .await?;

    Ok(ComparisonResponse {
        jury_member_id,
        rows: comparison_rows(participant_ids, &participants, &marks),
    })
}

/// One row per requested participant, in request order. Ids without a
/// matching participant are skipped; criteria without a mark are left out of
/// the row's map instead of being reported as 0.
pub fn comparison_rows(
    participant_ids: &[Uuid],
    participants: &[Participant],
    marks: &[Mark],
) -> Vec<ComparisonRow> {
    let by_id: HashMap<Uuid, &Participant> =
        participants.iter().map(|p| (p.participant_id, p)).collect();

    let mut by_participant: HashMap<Uuid, HashMap<Uuid, &Mark>> = HashMap::new();
    for mark in marks {
        let row = by_participant.entry(mark.participant_id).or_default();
        let is_latest = row
            .get(&mark.criterion_id)
            .is_none_or(|existing| existing.updated_at <= mark.updated_at);
        if is_latest {
            row.insert(mark.criterion_id, mark);
        }
    }

    participant_ids
        .iter()
        .filter_map(|id| by_id.get(id))
        .map(|participant| ComparisonRow {
            participant_id: participant.participant_id,
            participant_name: participant.name.clone(),
            marks: by_participant
                .get(&participant.participant_id)
                .map(|row| {
                    row.iter()
                        .map(|(criterion_id, mark)| (*criterion_id, mark.points))
                        .collect()
                })
                .unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fixtures::{criterion, mark, mark_at, participant, points};

    #[test]
    fn test_rows_follow_request_order() {
        let category = Uuid::new_v4();
        let a = participant(category, "A");
        let b = participant(category, "B");
        let request = [b.participant_id, a.participant_id];

        let rows = comparison_rows(&request, &[a, b], &[]);

        let names: Vec<&str> = rows.iter().map(|r| r.participant_name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn test_missing_mark_is_absent_not_zero() {
        let category = Uuid::new_v4();
        let jury = Uuid::new_v4();
        let p = participant(category, "P");
        let scored = criterion(category, "Scored", 10.0, 1);
        let zero = criterion(category, "Zero", 10.0, 2);
        let open = criterion(category, "Open", 10.0, 3);
        let marks = vec![mark(&p, &scored, jury, 6.5), mark(&p, &zero, jury, 0.0)];

        let rows = comparison_rows(&[p.participant_id], &[p], &marks);

        let row = &rows[0];
        assert_eq!(row.marks.get(&scored.criterion_id), Some(&points(6.5)));
        assert_eq!(row.marks.get(&zero.criterion_id), Some(&points(0.0)));
        assert!(!row.marks.contains_key(&open.criterion_id));
    }

    #[test]
    fn test_unknown_participants_are_skipped() {
        let category = Uuid::new_v4();
        let p = participant(category, "P");

        let rows = comparison_rows(&[Uuid::new_v4(), p.participant_id], &[p], &[]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].participant_name, "P");
        assert!(rows[0].marks.is_empty());
    }

    #[test]
    fn test_latest_duplicate_wins() {
        let category = Uuid::new_v4();
        let jury = Uuid::new_v4();
        let p = participant(category, "P");
        let c = criterion(category, "C", 10.0, 1);
        let marks = vec![mark_at(&p, &c, jury, 9.0, 30), mark_at(&p, &c, jury, 4.0, 10)];

        let rows = comparison_rows(&[p.participant_id], &[p], &marks);

        assert_eq!(rows[0].marks.get(&c.criterion_id), Some(&points(9.0)));
    }
}
