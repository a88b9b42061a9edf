//! # scan-schema
//!
//! JSON Schema generation, validation, and registry for Scan Review.
//!
//! Entity and response types are defined in `scan-core` with
//! `#[derive(JsonSchema)]`. This crate builds the registry over them, validates
//! externally supplied scan files, and backs the `scan-review schema` command.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
