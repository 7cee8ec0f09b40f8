use crate::*;
use std::io::Write;

const PARKING_MENU: &str =
    "Select parking type:\nP - Parallel parking\nT - Perpendicular parking\nEnter choice (P/T): ";
const MODE_MENU: &str = "\nSelect driving mode:\nF - Forward\nR - Reverse\nEnter choice (F/R): ";

pub fn handle_runtime_commands(cli: &Cli, cfg: &ConfigFile) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Run {
            length,
            width,
            parking,
            mode,
            count,
        } => run_assistant(
            cli.json,
            cfg,
            RunArgs {
                length: *length,
                width: *width,
                parking: *parking,
                mode: *mode,
                count: *count,
            },
        ),
        Commands::Guide { mode, parking } => {
            let mut input = console(cli.json);
            let mut sink = TextReporter::new(feedback_out(cli.json));
            let summary = guide(cfg, *mode, *parking, &mut input, &mut sink)?;
            if cli.json {
                print_one(true, summary, |_| String::new())?;
            } else {
                println!("{}", render_summary(&summary));
            }
            Ok(())
        }
        Commands::Scan {
            parking,
            length,
            width,
            count,
        } => {
            let geometry = ParkingGeometry {
                kind: *parking,
                length: *length,
                width: *width,
            };
            let mut input = console(cli.json);
            let mut sink = TextReporter::new(feedback_out(cli.json));
            let report = scan_spaces(cfg, &geometry, *count, &mut input, &mut sink)?;
            if cli.json {
                print_one(true, report, |_| String::new())?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

struct RunArgs {
    length: Option<f64>,
    width: Option<f64>,
    parking: Option<ParkingKind>,
    mode: Option<DrivingMode>,
    count: Option<i64>,
}

/// Vehicle setup, space scan and, once a space is admitted, guidance.
fn run_assistant(json: bool, cfg: &ConfigFile, args: RunArgs) -> anyhow::Result<()> {
    let mut input = console(json);
    let mut sink = TextReporter::new(feedback_out(json));
    let mut out = feedback_out(json);

    writeln!(out, "========================================")?;
    writeln!(out, "    AUTONOMOUS PARKING ASSISTANT")?;
    writeln!(out, "========================================\n")?;

    let length = match args.length {
        Some(v) => v,
        None => input.read_non_negative("Enter car length (meters): ", false)?,
    };
    let width = match args.width {
        Some(v) => v,
        None => input.read_non_negative("Enter car width (meters): ", false)?,
    };
    let parking = match args.parking {
        Some(p) => p,
        None => match input.read_choice(PARKING_MENU, &['P', 'T'])? {
            'P' => ParkingKind::Parallel,
            _ => ParkingKind::Perpendicular,
        },
    };
    let mode = match args.mode {
        Some(m) => m,
        None => match input.read_choice(MODE_MENU, &['F', 'R'])? {
            'F' => DrivingMode::Forward,
            _ => DrivingMode::Reverse,
        },
    };
    tracing::debug!(length, width, ?parking, ?mode, "vehicle configured");

    let geometry = ParkingGeometry {
        kind: parking,
        length,
        width,
    };
    let scan_report = scan_spaces(cfg, &geometry, args.count, &mut input, &mut sink)?;

    let session = match scan_report.outcome {
        ScanOutcome::Admitted { .. } => {
            let summary = guide(cfg, mode, parking, &mut input, &mut sink)?;
            if !json {
                writeln!(out, "{}", render_summary(&summary))?;
            }
            Some(summary)
        }
        ScanOutcome::NoSpace { .. } => {
            writeln!(out, "\nNo suitable parking space available. Exiting...")?;
            None
        }
    };
    writeln!(out, "\nThank you for using Autonomous Parking Assistant!")?;
    out.flush()?;

    if json {
        let report = RunReport {
            geometry,
            mode,
            scan: scan_report,
            session,
        };
        print_one(true, report, |_| String::new())?;
    }
    Ok(())
}

fn scan_spaces(
    cfg: &ConfigFile,
    geometry: &ParkingGeometry,
    count: Option<i64>,
    input: &mut dyn OperatorInput,
    sink: &mut dyn EventSink,
) -> anyhow::Result<ScanReport> {
    let required = required_for(&cfg.clearance, geometry);
    let count = match count {
        Some(c) => c,
        None => input.read_integer("Enter number of available parking spaces: ")?,
    };
    let outcome = scan(
        required,
        count,
        |i| input.read_non_negative(&format!("Enter size of space {} (meters): ", i), true),
        sink,
    )?;
    Ok(ScanReport { required, outcome })
}

fn guide(
    cfg: &ConfigFile,
    mode: DrivingMode,
    parking: ParkingKind,
    input: &mut dyn OperatorInput,
    sink: &mut dyn EventSink,
) -> anyhow::Result<SessionSummary> {
    let mut session = GuidanceSession::new(mode, parking, cfg.thresholds);
    session.run(input, sink)?;
    Ok(session.summary()?)
}

fn console(json: bool) -> ConsoleInput<std::io::StdinLock<'static>, Box<dyn Write>> {
    ConsoleInput::new(std::io::stdin().lock(), feedback_out(json))
}

/// Operator-facing text goes to stderr when stdout is reserved for JSON.
fn feedback_out(json: bool) -> Box<dyn Write> {
    if json {
        Box::new(std::io::stderr())
    } else {
        Box::new(std::io::stdout())
    }
}
