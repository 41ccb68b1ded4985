//! Builders for in-memory rows used by the scoring tests.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{Criterion, Mark, Participant};

pub fn timestamp(seconds: i64) -> NaiveDateTime {
    chrono::DateTime::from_timestamp(1_700_000_000 + seconds, 0)
        .unwrap()
        .naive_utc()
}

pub fn points(value: f64) -> Decimal {
    Decimal::try_from(value).unwrap()
}

pub fn participant(category_id: Uuid, name: &str) -> Participant {
    Participant {
        participant_id: Uuid::new_v4(),
        category_id,
        name: name.to_string(),
        institution: None,
        email: None,
        created_at: timestamp(0),
    }
}

pub fn criterion(category_id: Uuid, name: &str, max_points: f64, display_order: i32) -> Criterion {
    Criterion {
        criterion_id: Uuid::new_v4(),
        category_id,
        name: name.to_string(),
        max_points: points(max_points),
        display_order,
        created_at: timestamp(0),
    }
}

pub fn mark(participant: &Participant, criterion: &Criterion, jury_member_id: Uuid, value: f64) -> Mark {
    mark_at(participant, criterion, jury_member_id, value, 0)
}

pub fn mark_at(
    participant: &Participant,
    criterion: &Criterion,
    jury_member_id: Uuid,
    value: f64,
    updated_at: i64,
) -> Mark {
    Mark {
        mark_id: Uuid::new_v4(),
        participant_id: participant.participant_id,
        criterion_id: criterion.criterion_id,
        jury_member_id,
        points: points(value),
        created_at: timestamp(0),
        updated_at: timestamp(updated_at),
    }
}
