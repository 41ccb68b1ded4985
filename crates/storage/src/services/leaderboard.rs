use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::leaderboard::{CriterionScore, LeaderboardEntry, LeaderboardResponse};
use crate::error::Result;
use crate::models::{Criterion, Mark, Participant};
use crate::repository::{
    category::CategoryRepository, criterion::CriterionRepository, mark::MarkRepository,
    participant::ParticipantRepository,
};

/// Build the ranked leaderboard of a category.
pub async fn category_leaderboard(pool: &PgPool, category_id: Uuid) -> Result<LeaderboardResponse> {
    let category = CategoryRepository::new(pool).find_by_id(category_id).await?;
    let participants = ParticipantRepository::new(pool)
        .list_by_category(category_id)
        .await?;
    let criteria = CriterionRepository::new(pool)
        .list_by_category(category_id)
        .await?;

    let participant_ids: Vec<Uuid> = participants.iter().map(|p| p.participant_id).collect();
    let marks = if participant_ids.is_empty() {
        Vec::new()
    } else {
        MarkRepository::new(pool)
            .list_for_participants(&participant_ids)
            .await?
    };

    tracing::debug!(
        %category_id,
        participants = participants.len(),
        criteria = criteria.len(),
        marks = marks.len(),
        "Computing leaderboard"
    );

    Ok(LeaderboardResponse {
        category_id: category.category_id,
        category_name: category.name,
        entries: rank_participants(&participants, &criteria, &marks),
    })
}

/// Score and rank participants.
///
/// A criterion's score is the mean of the points given by each distinct jury
/// member (their latest mark if duplicates exist), or 0 when nobody marked
/// it. The total is the sum over `criteria`; marks on any other criterion
/// are ignored. Entries are sorted by total descending with a stable sort,
/// so ties keep the order of `participants`.
pub fn rank_participants(
    participants: &[Participant],
    criteria: &[Criterion],
    marks: &[Mark],
) -> Vec<LeaderboardEntry> {
    let criterion_ids: HashSet<Uuid> = criteria.iter().map(|c| c.criterion_id).collect();

    // (participant, criterion) -> jury member -> latest mark
    let mut by_pair: HashMap<(Uuid, Uuid), HashMap<Uuid, &Mark>> = HashMap::new();
    for mark in marks.iter().filter(|m| criterion_ids.contains(&m.criterion_id)) {
        let per_jury = by_pair
            .entry((mark.participant_id, mark.criterion_id))
            .or_default();
        let is_latest = per_jury
            .get(&mark.jury_member_id)
            .is_none_or(|existing| existing.updated_at <= mark.updated_at);
        if is_latest {
            per_jury.insert(mark.jury_member_id, mark);
        }
    }

    let max_score: f64 = criteria.iter().map(|c| to_f64(c.max_points)).sum();

    let mut entries: Vec<LeaderboardEntry> = participants
        .iter()
        .map(|participant| {
            let mut jury_members = HashSet::new();
            let criteria_scores: Vec<CriterionScore> = criteria
                .iter()
                .map(|criterion| {
                    let per_jury = by_pair.get(&(participant.participant_id, criterion.criterion_id));
                    let (score, jury_count) = match per_jury {
                        Some(per_jury) if !per_jury.is_empty() => {
                            jury_members.extend(per_jury.keys().copied());
                            let sum: f64 = per_jury.values().map(|m| to_f64(m.points)).sum();
                            (sum / per_jury.len() as f64, per_jury.len())
                        }
                        _ => (0.0, 0),
                    };

                    CriterionScore {
                        criterion_id: criterion.criterion_id,
                        criterion_name: criterion.name.clone(),
                        score,
                        max_points: to_f64(criterion.max_points),
                        jury_count,
                    }
                })
                .collect();

            let total_score: f64 = criteria_scores.iter().map(|s| s.score).sum();

            LeaderboardEntry {
                rank: 0,
                participant_id: participant.participant_id,
                participant_name: participant.name.clone(),
                institution: participant.institution.clone(),
                total_score,
                max_score,
                percentage: percentage(total_score, max_score),
                jury_count: jury_members.len(),
                criteria_scores,
            }
        })
        .collect();

    entries.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = index as u32 + 1;
    }

    entries
}

fn percentage(total: f64, max: f64) -> f64 {
    if max > 0.0 { total / max * 100.0 } else { 0.0 }
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fixtures::{criterion, mark, mark_at, participant};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_averages_each_criterion_across_jury_members() {
        let category = Uuid::new_v4();
        let (jury_a, jury_b) = (Uuid::new_v4(), Uuid::new_v4());
        let p = participant(category, "P");
        let c1 = criterion(category, "C1", 10.0, 1);
        let c2 = criterion(category, "C2", 10.0, 2);
        let marks = vec![
            mark(&p, &c1, jury_a, 8.0),
            mark(&p, &c2, jury_a, 6.0),
            mark(&p, &c1, jury_b, 6.0),
            mark(&p, &c2, jury_b, 10.0),
        ];

        let entries = rank_participants(&[p], &[c1, c2], &marks);

        let entry = &entries[0];
        assert_close(entry.criteria_scores[0].score, 7.0);
        assert_close(entry.criteria_scores[1].score, 8.0);
        assert_close(entry.total_score, 15.0);
        assert_close(entry.max_score, 20.0);
        assert_close(entry.percentage, 75.0);
        assert_eq!(entry.jury_count, 2);
        assert_eq!(entry.criteria_scores[0].jury_count, 2);
    }

    #[test]
    fn test_unmarked_participant_scores_zero() {
        let category = Uuid::new_v4();
        let q = participant(category, "Q");
        let criteria = vec![
            criterion(category, "C1", 10.0, 1),
            criterion(category, "C2", 10.0, 2),
        ];

        let entries = rank_participants(&[q], &criteria, &[]);

        assert_close(entries[0].total_score, 0.0);
        assert_close(entries[0].max_score, 20.0);
        assert_close(entries[0].percentage, 0.0);
        assert_eq!(entries[0].jury_count, 0);
    }

    #[test]
    fn test_percentage_is_zero_without_criteria() {
        let category = Uuid::new_v4();
        let entries = rank_participants(&[participant(category, "Solo")], &[], &[]);

        assert_close(entries[0].max_score, 0.0);
        assert_close(entries[0].percentage, 0.0);
        assert!(entries[0].criteria_scores.is_empty());
    }

    #[test]
    fn test_sorted_by_total_descending_with_stable_ties() {
        let category = Uuid::new_v4();
        let jury = Uuid::new_v4();
        let c = criterion(category, "C", 10.0, 1);
        let alpha = participant(category, "Alpha");
        let bravo = participant(category, "Bravo");
        let charlie = participant(category, "Charlie");
        let delta = participant(category, "Delta");
        let marks = vec![
            mark(&alpha, &c, jury, 4.0),
            mark(&bravo, &c, jury, 9.5),
            mark(&charlie, &c, jury, 4.0),
        ];
        let participants = [alpha, bravo, charlie, delta];

        let entries = rank_participants(&participants, &[c], &marks);

        let names: Vec<&str> = entries.iter().map(|e| e.participant_name.as_str()).collect();
        assert_eq!(names, ["Bravo", "Alpha", "Charlie", "Delta"]);
        assert!(entries.windows(2).all(|w| w[0].total_score >= w[1].total_score));
        let ranks: Vec<u32> = entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, [1, 2, 3, 4]);
    }

    #[test]
    fn test_duplicate_rows_count_once_per_jury_member() {
        let category = Uuid::new_v4();
        let (jury_a, jury_b) = (Uuid::new_v4(), Uuid::new_v4());
        let p = participant(category, "P");
        let c = criterion(category, "C", 10.0, 1);
        let marks = vec![
            mark_at(&p, &c, jury_a, 2.0, 10),
            mark_at(&p, &c, jury_a, 6.0, 20),
            mark_at(&p, &c, jury_b, 8.0, 5),
        ];

        let entries = rank_participants(&[p], &[c], &marks);

        assert_close(entries[0].criteria_scores[0].score, 7.0);
        assert_eq!(entries[0].criteria_scores[0].jury_count, 2);
    }

    #[test]
    fn test_marks_on_foreign_criteria_are_ignored() {
        let category = Uuid::new_v4();
        let jury = Uuid::new_v4();
        let p = participant(category, "P");
        let own = criterion(category, "Own", 10.0, 1);
        let foreign = criterion(Uuid::new_v4(), "Foreign", 10.0, 1);
        let marks = vec![mark(&p, &own, jury, 5.0), mark(&p, &foreign, jury, 10.0)];

        let entries = rank_participants(&[p], &[own], &marks);

        assert_close(entries[0].total_score, 5.0);
        assert_close(entries[0].percentage, 50.0);
    }

    #[test]
    fn test_half_points_are_not_rounded() {
        let category = Uuid::new_v4();
        let p = participant(category, "P");
        let c = criterion(category, "C", 10.0, 1);
        let marks = vec![
            mark(&p, &c, Uuid::new_v4(), 7.5),
            mark(&p, &c, Uuid::new_v4(), 8.0),
            mark(&p, &c, Uuid::new_v4(), 8.0),
        ];

        let entries = rank_participants(&[p], &[c], &marks);

        assert_close(entries[0].total_score, 23.5 / 3.0);
    }
}
