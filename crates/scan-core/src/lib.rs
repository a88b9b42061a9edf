//! # scan-core
//!
//! Core types, the review session state machine, and error types for Scan Review.
//!
//! This crate provides the foundational types shared across all Scan Review crates:
//! - Entity structs for scans and decision records
//! - The `Decision` enum
//! - `ReviewSession`: ordered queue, cursor, append-only decision log, undo
//! - `SessionStore`: keyed registry of live sessions
//! - Injectable `Clock` for decision timestamps
//! - Built-in demo scans
//! - CLI response types

pub mod clock;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod seed;
pub mod session;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entities::{DecisionRecord, Scan};
pub use enums::Decision;
pub use errors::ReviewError;
pub use session::{DEFAULT_RECENT_LIMIT, ReviewSession, ReviewSummary};
pub use store::SessionStore;
