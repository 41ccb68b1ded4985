use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::dto::fits_points_column;
use crate::dto::mark::{MarkEntry, SubmitMarksRequest};
use crate::error::StorageError;
use crate::models::{Criterion, Mark};
use crate::repository::{
    criterion::CriterionRepository, jury::JuryRepository, mark::MarkRepository,
    participant::ParticipantRepository,
};

/// Reasons a submission is refused before anything is written
#[derive(Debug, Error, PartialEq)]
pub enum MarkValidationError {
    #[error("The participant's category has no criteria to mark")]
    NoCriteria,

    #[error("Criterion {0} does not belong to the participant's category")]
    ForeignCriterion(Uuid),

    #[error("Criterion {0} is marked more than once")]
    DuplicateCriterion(Uuid),

    #[error("Missing points for criterion '{0}'")]
    MissingCriterion(String),

    #[error("Points for criterion '{criterion}' must be between 0 and {max_points}, got {points}")]
    OutOfRange {
        criterion: String,
        points: Decimal,
        max_points: Decimal,
    },

    #[error("Points for criterion '{criterion}' allow at most 2 decimals, got {points}")]
    TooPrecise { criterion: String, points: Decimal },
}

#[derive(Debug, Error)]
pub enum SubmitMarksError {
    #[error(transparent)]
    Invalid(#[from] MarkValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Store a jury member's complete set of marks for one participant.
///
/// Every entry is validated first; then all upserts run in a single
/// transaction, so either the whole set is stored or nothing is.
pub async fn submit_marks(
    pool: &PgPool,
    req: &SubmitMarksRequest,
) -> Result<Vec<Mark>, SubmitMarksError> {
    let participant = ParticipantRepository::new(pool)
        .find_by_id(req.participant_id)
        .await?;
    let jury_member = JuryRepository::new(pool)
        .find_by_id(req.jury_member_id)
        .await?;
    let criteria = CriterionRepository::new(pool)
        .list_by_category(participant.category_id)
        .await?;

    let validated = validate_submission(&criteria, &req.marks)?;

    let mut tx = pool.begin().await.map_err(StorageError::from)?;
    let mut stored = Vec::with_capacity(validated.len());
    for (criterion_id, points) in validated {
        let mark = MarkRepository::upsert_with(
            &mut *tx,
            participant.participant_id,
            criterion_id,
            jury_member.jury_member_id,
            points,
        )
        .await?;
        stored.push(mark);
    }
    tx.commit().await.map_err(StorageError::from)?;

    tracing::info!(
        participant_id = %participant.participant_id,
        jury_member_id = %jury_member.jury_member_id,
        marks = stored.len(),
        "Marks submitted"
    );

    Ok(stored)
}

/// Check a submission against the criteria of the participant's category.
///
/// Returns `(criterion_id, points)` pairs in display order. The set must
/// cover every criterion exactly once and each value must lie within
/// `0..=max_points` with no more than two decimals.
pub fn validate_submission(
    criteria: &[Criterion],
    entries: &[MarkEntry],
) -> Result<Vec<(Uuid, Decimal)>, MarkValidationError> {
    if criteria.is_empty() {
        return Err(MarkValidationError::NoCriteria);
    }

    let by_id: HashMap<Uuid, &Criterion> = criteria.iter().map(|c| (c.criterion_id, c)).collect();
    let mut seen = HashSet::new();
    let mut points_by_criterion = HashMap::new();

    for entry in entries {
        let criterion = by_id
            .get(&entry.criterion_id)
            .ok_or(MarkValidationError::ForeignCriterion(entry.criterion_id))?;

        if !seen.insert(entry.criterion_id) {
            return Err(MarkValidationError::DuplicateCriterion(entry.criterion_id));
        }

        if entry.points < Decimal::ZERO || entry.points > criterion.max_points {
            return Err(MarkValidationError::OutOfRange {
                criterion: criterion.name.clone(),
                points: entry.points,
                max_points: criterion.max_points,
            });
        }

        if !fits_points_column(&entry.points) {
            return Err(MarkValidationError::TooPrecise {
                criterion: criterion.name.clone(),
                points: entry.points,
            });
        }

        points_by_criterion.insert(entry.criterion_id, entry.points);
    }

    let mut ordered: Vec<&Criterion> = criteria.iter().collect();
    ordered.sort_by_key(|c| c.display_order);

    ordered
        .into_iter()
        .map(|criterion| {
            points_by_criterion
                .get(&criterion.criterion_id)
                .map(|points| (criterion.criterion_id, *points))
                .ok_or_else(|| MarkValidationError::MissingCriterion(criterion.name.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fixtures::{criterion, points};

    fn entry(criterion: &Criterion, value: f64) -> MarkEntry {
        MarkEntry {
            criterion_id: criterion.criterion_id,
            points: points(value),
        }
    }

    #[test]
    fn test_complete_submission_is_returned_in_display_order() {
        let category = Uuid::new_v4();
        let second = criterion(category, "Second", 10.0, 2);
        let first = criterion(category, "First", 5.0, 1);
        let criteria = vec![second.clone(), first.clone()];

        let validated =
            validate_submission(&criteria, &[entry(&second, 10.0), entry(&first, 0.0)]).unwrap();

        assert_eq!(
            validated,
            vec![
                (first.criterion_id, points(0.0)),
                (second.criterion_id, points(10.0))
            ]
        );
    }

    #[test]
    fn test_category_without_criteria_is_rejected() {
        assert_eq!(
            validate_submission(&[], &[]),
            Err(MarkValidationError::NoCriteria)
        );
    }

    #[test]
    fn test_missing_criterion_is_rejected() {
        let category = Uuid::new_v4();
        let c1 = criterion(category, "Design", 10.0, 1);
        let c2 = criterion(category, "Impact", 10.0, 2);

        let result = validate_submission(&[c1.clone(), c2], &[entry(&c1, 4.0)]);

        assert_eq!(
            result,
            Err(MarkValidationError::MissingCriterion("Impact".to_string()))
        );
    }

    #[test]
    fn test_negative_points_are_rejected() {
        let category = Uuid::new_v4();
        let c = criterion(category, "Design", 10.0, 1);

        let result = validate_submission(&[c.clone()], &[entry(&c, -0.5)]);

        assert!(matches!(result, Err(MarkValidationError::OutOfRange { .. })));
    }

    #[test]
    fn test_points_above_max_are_rejected() {
        let category = Uuid::new_v4();
        let c = criterion(category, "Design", 10.0, 1);

        let result = validate_submission(&[c.clone()], &[entry(&c, 10.5)]);

        assert_eq!(
            result,
            Err(MarkValidationError::OutOfRange {
                criterion: "Design".to_string(),
                points: points(10.5),
                max_points: points(10.0),
            })
        );
    }

    #[test]
    fn test_points_with_more_than_two_decimals_are_rejected() {
        let category = Uuid::new_v4();
        let c = criterion(category, "Design", 10.0, 1);
        let too_precise = MarkEntry {
            criterion_id: c.criterion_id,
            points: Decimal::new(7125, 3),
        };

        let result = validate_submission(&[c.clone()], &[too_precise]);

        assert_eq!(
            result,
            Err(MarkValidationError::TooPrecise {
                criterion: "Design".to_string(),
                points: Decimal::new(7125, 3),
            })
        );
    }

    #[test]
    fn test_trailing_zeros_do_not_count_as_precision() {
        let category = Uuid::new_v4();
        let c = criterion(category, "Design", 10.0, 1);
        let entry = MarkEntry {
            criterion_id: c.criterion_id,
            points: Decimal::new(7500, 3),
        };

        assert!(validate_submission(&[c.clone()], &[entry]).is_ok());
    }

    #[test]
    fn test_foreign_criterion_is_rejected() {
        let category = Uuid::new_v4();
        let own = criterion(category, "Own", 10.0, 1);
        let foreign = criterion(Uuid::new_v4(), "Foreign", 10.0, 1);

        let result = validate_submission(&[own.clone()], &[entry(&own, 1.0), entry(&foreign, 1.0)]);

        assert_eq!(
            result,
            Err(MarkValidationError::ForeignCriterion(foreign.criterion_id))
        );
    }

    #[test]
    fn test_duplicate_criterion_is_rejected() {
        let category = Uuid::new_v4();
        let c = criterion(category, "Design", 10.0, 1);

        let result = validate_submission(&[c.clone()], &[entry(&c, 1.0), entry(&c, 2.0)]);

        assert_eq!(
            result,
            Err(MarkValidationError::DuplicateCriterion(c.criterion_id))
        );
    }
}
