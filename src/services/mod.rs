//! Service layer containing the decision engine and its collaborators.
//!
//! ## Service map
//! - `safety.rs` — sensor triple → safety verdict.
//! - `alert.rs` — sensor triple → audible alert level.
//! - `sizing.rs` — vehicle geometry → minimum space.
//! - `scanner.rs` — candidate space admission.
//! - `session.rs` — guidance state machine and turn history.
//! - `console.rs` — operator input (read/validate/reprompt).
//! - `report.rs` — event sinks (console text, collected events).
//! - `config.rs` — config file loading + validation.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - The engine (`safety`, `alert`, `sizing`, `scanner`, `session`) never
//!   touches stdin/stdout directly.
//! - Side effects go through `OperatorInput` and `EventSink`.
//! - Keep command handlers thin; delegate to services.

pub mod alert;
pub mod config;
pub mod console;
pub mod output;
pub mod report;
pub mod safety;
pub mod scanner;
pub mod session;
pub mod sizing;
