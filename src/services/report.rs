use crate::domain::models::{EngineEvent, TurnTag};
use std::io::Write;

/// Output sink for engine events. Nothing it does feeds back into the engine.
pub trait EventSink {
    fn emit(&mut self, event: EngineEvent);
}

/// Collects events in order; used for `--json` runs and in tests.
impl EventSink for Vec<EngineEvent> {
    fn emit(&mut self, event: EngineEvent) {
        self.push(event);
    }
}

/// Renders events as the operator-facing console transcript.
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn render(&mut self, event: &EngineEvent) -> std::io::Result<()> {
        match event {
            EngineEvent::ScanStarted { required } => {
                writeln!(self.out, "\n=== Parking Space Scanner ===")?;
                writeln!(self.out, "Required space: {:.2} meters", required)?;
            }
            EngineEvent::CandidateRejected {
                index,
                size,
                required,
            } => {
                writeln!(
                    self.out,
                    "Space {} ({:.2} m) is too small, need {:.2} m.",
                    index, size, required
                )?;
            }
            EngineEvent::CandidateAdmitted { index, size } => {
                writeln!(
                    self.out,
                    "Space found! Space {} ({:.2} m) is suitable.",
                    index, size
                )?;
            }
            EngineEvent::NoSpace(reason) => writeln!(self.out, "{}", reason)?,
            EngineEvent::SessionStarted { mode, parking } => {
                writeln!(self.out, "\n=== Parking Assistant Active ===")?;
                writeln!(self.out, "Mode: {} | Type: {}\n", mode, parking)?;
            }
            EngineEvent::AwaitingReading { turn } => {
                writeln!(self.out, "Enter sensor readings (turn {}):", turn)?
            }
            EngineEvent::Alert(level) => {
                if let Some(cue) = level.cue() {
                    writeln!(self.out, "Alert: {}", cue)?;
                }
            }
            EngineEvent::OppositeMovement { mode } => {
                let tag = TurnTag::OppositeMovement { mode: *mode };
                writeln!(self.out, "\nStatus: {}\n", tag)?;
            }
            EngineEvent::Verdict(v) => writeln!(self.out, "\nStatus: {}", v)?,
            EngineEvent::Advice(a) => {
                writeln!(self.out, "\n--- Guidance ---")?;
                writeln!(self.out, "{}", a.steering)?;
                writeln!(self.out, "{}", a.movement)?;
                writeln!(self.out, "----------------\n")?;
            }
            EngineEvent::SessionEnded(outcome) => writeln!(self.out, "{}", outcome.message())?,
        }
        self.out.flush()
    }
}

impl<W: Write> EventSink for TextReporter<W> {
    fn emit(&mut self, event: EngineEvent) {
        if let Err(e) = self.render(&event) {
            tracing::warn!(error = %e, "failed to write engine event");
        }
    }
}
