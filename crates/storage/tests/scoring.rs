//! Database-backed scoring tests.
//!
//! Run with a reachable Postgres: `DATABASE_URL=postgres://... cargo test -- --ignored`

use rust_decimal::Decimal;
use sqlx::PgPool;
use storage::dto::category::CreateCategoryRequest;
use storage::dto::criterion::CreateCriterionRequest;
use storage::dto::mark::{MarkEntry, MarkFilter, SubmitMarksRequest};
use storage::dto::participant::{CreateParticipantRequest, UpdateParticipantRequest};
use storage::error::StorageError;
use storage::models::{Criterion, JuryMember, NormalizedJuryName, Participant};
use storage::repository::{
    category::CategoryRepository, criterion::CriterionRepository, jury::JuryRepository,
    mark::MarkRepository, participant::ParticipantRepository,
};
use storage::services::{completeness, leaderboard, mark_submission};
use uuid::Uuid;

struct Fixture {
    category_id: Uuid,
    criteria: Vec<Criterion>,
    participants: Vec<Participant>,
    jury: Vec<JuryMember>,
}

async fn seed(pool: &PgPool) -> Fixture {
    let category = CategoryRepository::new(pool)
        .create(&CreateCategoryRequest {
            name: "Best Robot".to_string(),
            description: None,
        })
        .await
        .unwrap();

    let mut criteria = Vec::new();
    for name in ["C1", "C2"] {
        let criterion = CriterionRepository::new(pool)
            .create(&CreateCriterionRequest {
                category_id: category.category_id,
                name: name.to_string(),
                max_points: Decimal::from(10),
                display_order: None,
            })
            .await
            .unwrap();
        criteria.push(criterion);
    }

    let mut participants = Vec::new();
    for name in ["P", "Q"] {
        let participant = ParticipantRepository::new(pool)
            .create(&CreateParticipantRequest {
                category_id: category.category_id,
                name: name.to_string(),
                institution: None,
                email: None,
            })
            .await
            .unwrap();
        participants.push(participant);
    }

    let mut jury = Vec::new();
    for name in ["Jury A", "Jury B"] {
        let member = JuryRepository::new(pool)
            .create(&NormalizedJuryName::new(name))
            .await
            .unwrap();
        jury.push(member);
    }

    Fixture {
        category_id: category.category_id,
        criteria,
        participants,
        jury,
    }
}

fn submission(
    fixture: &Fixture,
    jury: usize,
    participant: usize,
    points: [i64; 2],
) -> SubmitMarksRequest {
    SubmitMarksRequest {
        jury_member_id: fixture.jury[jury].jury_member_id,
        participant_id: fixture.participants[participant].participant_id,
        marks: fixture
            .criteria
            .iter()
            .zip(points)
            .map(|(criterion, value)| MarkEntry {
                criterion_id: criterion.criterion_id,
                points: Decimal::from(value),
            })
            .collect(),
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_criteria_get_sequential_display_order(pool: PgPool) {
    let fixture = seed(&pool).await;

    let orders: Vec<i32> = fixture.criteria.iter().map(|c| c.display_order).collect();
    assert_eq!(orders, [1, 2]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_upsert_keeps_one_mark_with_latest_points(pool: PgPool) {
    let fixture = seed(&pool).await;
    let repo = MarkRepository::new(&pool);
    let participant_id = fixture.participants[0].participant_id;
    let criterion_id = fixture.criteria[0].criterion_id;
    let jury_member_id = fixture.jury[0].jury_member_id;

    repo.upsert(participant_id, criterion_id, jury_member_id, Decimal::from(4))
        .await
        .unwrap();
    repo.upsert(participant_id, criterion_id, jury_member_id, Decimal::from(9))
        .await
        .unwrap();

    let marks = repo
        .list(&MarkFilter {
            jury_member_id: Some(jury_member_id),
            participant_id: Some(participant_id),
        })
        .await
        .unwrap();
    assert_eq!(marks.len(), 1);
    assert_eq!(marks[0].points, Decimal::from(9));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_leaderboard_and_completeness_after_submissions(pool: PgPool) {
    let fixture = seed(&pool).await;

    mark_submission::submit_marks(&pool, &submission(&fixture, 0, 0, [8, 6]))
        .await
        .unwrap();
    mark_submission::submit_marks(&pool, &submission(&fixture, 1, 0, [6, 10]))
        .await
        .unwrap();

    let board = leaderboard::category_leaderboard(&pool, fixture.category_id)
        .await
        .unwrap();
    assert_eq!(board.entries[0].participant_name, "P");
    assert!((board.entries[0].total_score - 15.0).abs() < 1e-9);
    assert!((board.entries[0].percentage - 75.0).abs() < 1e-9);
    assert_eq!(board.entries[1].participant_name, "Q");
    assert_eq!(board.entries[1].total_score, 0.0);

    for jury in &fixture.jury {
        let unmarked =
            completeness::find_unmarked_participants(&pool, fixture.category_id, jury.jury_member_id)
                .await
                .unwrap();
        assert_eq!(unmarked.participant_ids, vec![fixture.participants[1].participant_id]);
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_resubmission_overwrites_previous_marks(pool: PgPool) {
    let fixture = seed(&pool).await;

    mark_submission::submit_marks(&pool, &submission(&fixture, 0, 0, [2, 3]))
        .await
        .unwrap();
    mark_submission::submit_marks(&pool, &submission(&fixture, 0, 0, [7, 8]))
        .await
        .unwrap();

    let marks = MarkRepository::new(&pool)
        .list(&MarkFilter::default())
        .await
        .unwrap();
    let mut values: Vec<Decimal> = marks.iter().map(|m| m.points).collect();
    values.sort();
    assert_eq!(values, [Decimal::from(7), Decimal::from(8)]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_invalid_submission_writes_nothing(pool: PgPool) {
    let fixture = seed(&pool).await;

    let result = mark_submission::submit_marks(&pool, &submission(&fixture, 0, 0, [5, 11])).await;
    assert!(matches!(
        result,
        Err(mark_submission::SubmitMarksError::Invalid(_))
    ));

    let marks = MarkRepository::new(&pool)
        .list(&MarkFilter::default())
        .await
        .unwrap();
    assert!(marks.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_failed_upsert_rolls_back_earlier_marks_of_the_batch(pool: PgPool) {
    let fixture = seed(&pool).await;
    let participant_id = fixture.participants[0].participant_id;
    let jury_member_id = fixture.jury[0].jury_member_id;

    let mut tx = pool.begin().await.unwrap();
    MarkRepository::upsert_with(
        &mut *tx,
        participant_id,
        fixture.criteria[0].criterion_id,
        jury_member_id,
        Decimal::from(5),
    )
    .await
    .unwrap();

    let missing_criterion = MarkRepository::upsert_with(
        &mut *tx,
        participant_id,
        Uuid::new_v4(),
        jury_member_id,
        Decimal::from(5),
    )
    .await;
    assert!(matches!(
        missing_criterion,
        Err(StorageError::ConstraintViolation(_))
    ));
    drop(tx);

    let marks = MarkRepository::new(&pool)
        .list(&MarkFilter::default())
        .await
        .unwrap();
    assert!(marks.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_participant_update_keeps_omitted_fields(pool: PgPool) {
    let fixture = seed(&pool).await;
    let repo = ParticipantRepository::new(&pool);
    let created = repo
        .create(&CreateParticipantRequest {
            category_id: fixture.category_id,
            name: "Team Orion".to_string(),
            institution: Some("Polytechnic".to_string()),
            email: Some("orion@example.org".to_string()),
        })
        .await
        .unwrap();

    let updated = repo
        .update(
            created.participant_id,
            &UpdateParticipantRequest {
                category_id: None,
                name: Some("Team Orion II".to_string()),
                institution: None,
                email: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Team Orion II");
    assert_eq!(updated.institution.as_deref(), Some("Polytechnic"));
    assert_eq!(updated.email.as_deref(), Some("orion@example.org"));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_jury_names_are_unique_ignoring_case_and_spacing(pool: PgPool) {
    seed(&pool).await;

    let result = JuryRepository::new(&pool)
        .create(&NormalizedJuryName::new("  jury   a "))
        .await;

    assert!(matches!(result, Err(StorageError::ConstraintViolation(_))));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_deleting_category_cascades(pool: PgPool) {
    let fixture = seed(&pool).await;
    mark_submission::submit_marks(&pool, &submission(&fixture, 0, 0, [1, 1]))
        .await
        .unwrap();

    CategoryRepository::new(&pool)
        .delete(fixture.category_id)
        .await
        .unwrap();

    assert!(ParticipantRepository::new(&pool).list(None).await.unwrap().is_empty());
    assert!(CriterionRepository::new(&pool).list(None).await.unwrap().is_empty());
    assert!(MarkRepository::new(&pool)
        .list(&MarkFilter::default())
        .await
        .unwrap()
        .is_empty());
}
