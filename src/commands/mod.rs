//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `tools.rs` — one-shot commands: classify/space/config.
//! - `runtime.rs` — interactive commands: run/guide/scan.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate decisions to `services/*`.
//! - With `--json`, stdout carries exactly one JSON document; prompts and
//!   turn feedback move to stderr.

pub mod runtime;
pub mod tools;

pub use runtime::handle_runtime_commands;
pub use tools::handle_tool_commands;
