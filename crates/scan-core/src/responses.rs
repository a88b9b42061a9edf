//! CLI response types returned by `scan-review` commands.
//!
//! These structs define the shape of JSON/table output for `status`, the
//! interactive `review` loop, and `scans`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::entities::{DecisionRecord, Scan};
use crate::session::{ReviewSession, ReviewSummary};

/// Current scan plus progress. `scan` is `None` once the queue is exhausted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusResponse {
    pub scan: Option<Scan>,
    pub summary: ReviewSummary,
}

impl StatusResponse {
    #[must_use]
    pub fn from_session<C: Clock>(session: &ReviewSession<C>) -> Self {
        Self {
            scan: session.current_item().cloned(),
            summary: session.summary(),
        }
    }
}

/// Response to recording a decision.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DecisionResponse {
    pub recorded: DecisionRecord,
    pub summary: ReviewSummary,
}

/// Response to an undo. `undone` is `None` when there was nothing to undo.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UndoResponse {
    pub undone: Option<DecisionRecord>,
    pub summary: ReviewSummary,
}

/// Most recent decisions, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RecentResponse {
    pub limit: usize,
    pub reviews: Vec<DecisionRecord>,
}

impl RecentResponse {
    #[must_use]
    pub fn from_session<C: Clock>(session: &ReviewSession<C>, limit: usize) -> Self {
        Self {
            limit,
            reviews: session.recent(limit).cloned().collect(),
        }
    }
}

/// Response from `scan-review scans`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScanListResponse {
    pub source: String,
    pub scans: Vec<Scan>,
    pub total: usize,
}
