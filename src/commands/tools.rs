use crate::*;

pub fn handle_tool_commands(cli: &Cli, cfg: &ConfigFile) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Classify {
            left,
            center,
            right,
        } => {
            let triple = SensorTriple::new(*left, *center, *right);
            let verdict = classify(&cfg.thresholds, &triple);
            let report = ClassifyReport {
                triple,
                note: verdict.to_string(),
                verdict,
                alert: alert_level(&cfg.thresholds, &triple),
            };
            print_one(cli.json, report, |r| {
                format!("status: {}\nalert: {}", r.note, r.alert)
            })?;
        }
        Commands::Space {
            parking,
            length,
            width,
        } => {
            let geometry = ParkingGeometry {
                kind: *parking,
                length: *length,
                width: *width,
            };
            let report = SpaceReport {
                geometry,
                required: required_for(&cfg.clearance, &geometry),
            };
            print_one(cli.json, report, |r| {
                format!(
                    "required space ({}): {:.2} meters",
                    r.geometry.kind, r.required
                )
            })?;
        }
        Commands::Config => {
            let rendered = toml::to_string_pretty(cfg)?;
            print_one(cli.json, *cfg, |_| rendered.trim_end().to_string())?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}
