use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ComparisonQuery {
    pub jury_member_id: Uuid,
    /// Comma separated participant ids, in display order
    #[serde(default)]
    pub participant_ids: String,
}

impl ComparisonQuery {
    /// Parses `participant_ids`, dropping blanks and repeated ids while
    /// keeping the first occurrence's position.
    pub fn participant_ids(&self) -> Result<Vec<Uuid>, String> {
        let mut seen = HashSet::new();
        let mut ids = Vec::new();

        for raw in self.participant_ids.split(',').map(str::trim) {
            if raw.is_empty() {
                continue;
            }
            let id = Uuid::parse_str(raw).map_err(|_| format!("invalid participant id '{raw}'"))?;
            if seen.insert(id) {
                ids.push(id);
            }
        }

        Ok(ids)
    }
}

/// A jury member's own marks for several participants, side by side
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComparisonResponse {
    pub jury_member_id: Uuid,
    pub rows: Vec<ComparisonRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComparisonRow {
    pub participant_id: Uuid,
    pub participant_name: String,
    /// Raw points keyed by criterion id. Criteria not yet marked are absent.
    pub marks: HashMap<Uuid, Decimal>,
}
