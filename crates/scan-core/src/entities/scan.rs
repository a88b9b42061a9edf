use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A medical scan awaiting review. Loaded once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Scan {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub age: u32,
    pub gender: String,
    pub scan_type: String,
    pub scan_date: NaiveDate,
    pub image_url: String,
    pub body_part: String,
}
