use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use commands::{handle_runtime_commands, handle_tool_commands};
pub use domain::models::*;
pub use services::alert::alert_level;
pub use services::config::{load_config, ConfigError};
pub use services::console::{ConsoleInput, InputError, OperatorInput};
pub use services::output::{print_error, print_one, render_summary};
pub use services::report::{EventSink, TextReporter};
pub use services::safety::classify;
pub use services::scanner::scan;
pub use services::session::{GuidanceSession, SessionError};
pub use services::sizing::required_for;

const LOG_ENV: &str = "PARKASSIST_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match dispatch(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            if cli.json {
                print_error(error_code(&err), &format!("{:#}", err));
            } else {
                eprintln!("error: {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: &Cli) -> anyhow::Result<()> {
    let cfg = load_config()?;
    if handle_tool_commands(cli, &cfg)? {
        return Ok(());
    }
    handle_runtime_commands(cli, &cfg)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn error_code(err: &anyhow::Error) -> &'static str {
    fn input_code(e: &InputError) -> &'static str {
        match e {
            InputError::Closed => "INPUT_CLOSED",
            InputError::Io(_) => "INPUT_IO",
        }
    }

    if let Some(e) = err.downcast_ref::<InputError>() {
        return input_code(e);
    }
    if let Some(e) = err.downcast_ref::<SessionError>() {
        return match e {
            SessionError::Input(inner) => input_code(inner),
            SessionError::AlreadyTerminated(_) | SessionError::NotTerminated => "SESSION_STATE",
        };
    }
    if err.downcast_ref::<ConfigError>().is_some()
        || err.downcast_ref::<toml::de::Error>().is_some()
    {
        return "CONFIG_INVALID";
    }
    "INTERNAL"
}
