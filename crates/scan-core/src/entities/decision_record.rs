use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Decision;

/// One recorded decision.
///
/// `patient_name` is copied from the scan when the decision is made so the
/// history stays readable without the scan list that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DecisionRecord {
    pub scan_id: String,
    pub patient_name: String,
    pub decision: Decision,
    pub recorded_at: DateTime<Utc>,
}
