//! Entity structs for Scan Review domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! output and for validating externally supplied scan files.

mod decision_record;
mod scan;

pub use decision_record::DecisionRecord;
pub use scan::Scan;
