//! Shared data model layer (structs/enums/constants only).
//!
//! ## Purpose
//! - Keep sensor, verdict, record and report types in one place.
//! - Avoid cyclic imports between the engine services.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — readings, verdicts, history records, summaries.
//! - `constants.rs` — default thresholds and clearances, display strings.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no console or filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
