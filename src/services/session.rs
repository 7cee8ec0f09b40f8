//! Guidance session: the turn loop that drives sensor readings to a
//! terminal outcome.
//!
//! Each turn the session reports the alert level, then checks whether every
//! sensor is inside the too-close distance. That case is recoverable: the
//! driver is told to back out and the turn is recorded without a safety
//! verdict. Otherwise the triple is classified; collision and a perfect park
//! end the session, anything else yields steering and movement advice.
//!
//! The history is owned by the session and only ever appended to.

use crate::cli::{DrivingMode, ParkingKind};
use crate::domain::models::{
    Advice, EngineEvent, Movement, SafetyVerdict, SensorTriple, SessionOutcome, SessionSummary,
    Steering, Thresholds, TurnRecord, TurnTag,
};
use crate::services::alert::alert_level;
use crate::services::console::{InputError, OperatorInput};
use crate::services::report::EventSink;
use crate::services::safety::classify;

#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error("session already ended ({0:?}); no further readings accepted")]
    AlreadyTerminated(SessionOutcome),
    #[error("session is still running; no summary yet")]
    NotTerminated,
    #[error(transparent)]
    Input(InputError),
}

/// What a single turn led to.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnResult {
    /// All sensors too close; a new reading is needed after backing out.
    Retry,
    Advise(Advice),
    Terminated(SessionOutcome),
}

#[derive(Debug)]
pub struct GuidanceSession {
    mode: DrivingMode,
    parking: ParkingKind,
    thresholds: Thresholds,
    history: Vec<TurnRecord>,
    outcome: Option<SessionOutcome>,
}

impl GuidanceSession {
    pub fn new(mode: DrivingMode, parking: ParkingKind, thresholds: Thresholds) -> Self {
        Self {
            mode,
            parking,
            thresholds,
            history: Vec::new(),
            outcome: None,
        }
    }

    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    pub fn outcome(&self) -> Option<SessionOutcome> {
        self.outcome
    }

    /// Announces the session, then reads and evaluates triples until a
    /// terminal verdict or until input ends.
    pub fn run(
        &mut self,
        input: &mut dyn OperatorInput,
        sink: &mut dyn EventSink,
    ) -> Result<SessionOutcome, SessionError> {
        if let Some(done) = self.outcome() {
            return Err(SessionError::AlreadyTerminated(done));
        }
        sink.emit(EngineEvent::SessionStarted {
            mode: self.mode,
            parking: self.parking,
        });
        loop {
            sink.emit(EngineEvent::AwaitingReading {
                turn: self.history.len() + 1,
            });
            let triple = match read_triple(input) {
                Ok(t) => t,
                Err(InputError::Closed) => return self.abandon(sink),
                Err(e) => return Err(SessionError::Input(e)),
            };
            match self.step(triple, sink)? {
                TurnResult::Terminated(outcome) => return Ok(outcome),
                TurnResult::Advise(a) => {
                    tracing::debug!(steering = ?a.steering, movement = ?a.movement, "advised")
                }
                TurnResult::Retry => {}
            }
        }
    }

    /// Evaluates one triple. Exactly one record is appended per call.
    pub fn step(
        &mut self,
        triple: SensorTriple,
        sink: &mut dyn EventSink,
    ) -> Result<TurnResult, SessionError> {
        if let Some(done) = self.outcome {
            return Err(SessionError::AlreadyTerminated(done));
        }
        let t = self.thresholds;

        sink.emit(EngineEvent::Alert(alert_level(&t, &triple)));

        // Checked before classification, so it also masks a collision reading.
        if triple.all(|v| v < t.too_close) {
            tracing::debug!(turn = self.history.len() + 1, %triple, "all sensors close");
            self.record(triple, TurnTag::OppositeMovement { mode: self.mode });
            sink.emit(EngineEvent::OppositeMovement { mode: self.mode });
            return Ok(TurnResult::Retry);
        }

        let verdict = classify(&t, &triple);
        tracing::debug!(turn = self.history.len() + 1, %triple, %verdict, "classified");
        self.record(triple, TurnTag::Verdict(verdict.clone()));
        sink.emit(EngineEvent::Verdict(verdict.clone()));

        match verdict {
            SafetyVerdict::Collision => Ok(TurnResult::Terminated(
                self.finish(SessionOutcome::CollisionStopped, sink),
            )),
            SafetyVerdict::PerfectlyParked => Ok(TurnResult::Terminated(
                self.finish(SessionOutcome::Completed, sink),
            )),
            SafetyVerdict::TooClose { .. } | SafetyVerdict::Safe => {
                let advice = Advice {
                    steering: steering_for(&triple),
                    movement: Movement::continuing(self.mode),
                };
                sink.emit(EngineEvent::Advice(advice));
                Ok(TurnResult::Advise(advice))
            }
        }
    }

    /// Ends the session because no more readings will come.
    pub fn abandon(&mut self, sink: &mut dyn EventSink) -> Result<SessionOutcome, SessionError> {
        if let Some(done) = self.outcome {
            return Err(SessionError::AlreadyTerminated(done));
        }
        Ok(self.finish(SessionOutcome::Abandoned, sink))
    }

    pub fn summary(&self) -> Result<SessionSummary, SessionError> {
        let outcome = self.outcome.ok_or(SessionError::NotTerminated)?;
        Ok(SessionSummary {
            mode: self.mode,
            parking: self.parking,
            outcome,
            turns: self.history().to_vec(),
            message: outcome.message().to_string(),
        })
    }

    fn record(&mut self, triple: SensorTriple, tag: TurnTag) {
        let index = self.history.len() + 1;
        self.history.push(TurnRecord::new(index, triple, tag));
    }

    fn finish(&mut self, outcome: SessionOutcome, sink: &mut dyn EventSink) -> SessionOutcome {
        self.outcome = Some(outcome);
        tracing::info!(?outcome, turns = self.history.len(), "parking session ended");
        sink.emit(EngineEvent::SessionEnded(outcome));
        outcome
    }
}

/// Steer away from the closer side.
pub fn steering_for(triple: &SensorTriple) -> Steering {
    if triple.left < triple.right {
        Steering::Right
    } else if triple.right < triple.left {
        Steering::Left
    } else {
        Steering::Centered
    }
}

fn read_triple(input: &mut dyn OperatorInput) -> Result<SensorTriple, InputError> {
    let left = input.read_non_negative("Left sensor (m): ", true)?;
    let center = input.read_non_negative("Center sensor (m): ", true)?;
    let right = input.read_non_negative("Right sensor (m): ", true)?;
    Ok(SensorTriple::new(left, center, right))
}
