use crate::domain::models::{ErrorBody, JsonErr, JsonOut, SessionSummary};
use serde::Serialize;
use std::fmt::Write as _;

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

pub fn print_error(code: &str, message: &str) {
    let body = JsonErr {
        ok: false,
        error: ErrorBody {
            code: code.to_string(),
            message: message.to_string(),
        },
    };
    match serde_json::to_string_pretty(&body) {
        Ok(s) => println!("{}", s),
        Err(_) => println!("{{\"ok\":false}}"),
    }
}

/// Turn-by-turn history table followed by the outcome message.
pub fn render_summary(s: &SessionSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n=== Session Summary ===");
    let _ = writeln!(
        out,
        "{:<4}{:>8}{:>8}{:>8}  Status",
        "#", "Left", "Center", "Right"
    );
    for t in &s.turns {
        let _ = writeln!(
            out,
            "{:<4}{:>8.2}{:>8.2}{:>8.2}  {}",
            t.index, t.triple.left, t.triple.center, t.triple.right, t.note
        );
    }
    let _ = write!(out, "{}", s.message);
    out
}

#[cfg(test)]
mod tests {
    use super::render_summary;
    use crate::cli::{DrivingMode, ParkingKind};
    use crate::domain::models::{
        SafetyVerdict, SensorTriple, SessionOutcome, SessionSummary, TurnRecord, TurnTag,
    };

    #[test]
    fn summary_lists_turns_in_order_then_message() {
        let s = SessionSummary {
            mode: DrivingMode::Forward,
            parking: ParkingKind::Perpendicular,
            outcome: SessionOutcome::Completed,
            turns: vec![
                TurnRecord::new(
                    1,
                    SensorTriple::new(0.2, 0.2, 0.2),
                    TurnTag::OppositeMovement {
                        mode: DrivingMode::Forward,
                    },
                ),
                TurnRecord::new(
                    2,
                    SensorTriple::new(0.4, 0.4, 0.4),
                    TurnTag::Verdict(SafetyVerdict::PerfectlyParked),
                ),
            ],
            message: SessionOutcome::Completed.message().to_string(),
        };
        let text = render_summary(&s);
        let first = text.find("Sensors close: move BACKWARD").expect("turn 1");
        let second = text.find("Perfectly Parked").expect("turn 2");
        assert!(first < second);
        assert!(text.ends_with("Parking completed successfully!"));
    }
}
