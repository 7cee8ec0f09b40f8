use crate::cli::{DrivingMode, ParkingKind};
use crate::domain::constants::{
    COLLISION_DISTANCE, MSG_ABANDONED, MSG_COLLISION, MSG_COMPLETED, PARALLEL_MARGIN,
    PERFECT_MAX_DISTANCE, PERPENDICULAR_MARGIN, SIDE_SEPARATOR, TOO_CLOSE_DISTANCE,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// One simultaneous set of distance readings, in metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorTriple {
    pub left: f64,
    pub center: f64,
    pub right: f64,
}

impl SensorTriple {
    pub fn new(left: f64, center: f64, right: f64) -> Self {
        Self {
            left,
            center,
            right,
        }
    }

    /// Readings paired with their side, always in Left, Center, Right order.
    pub fn sides(&self) -> [(Side, f64); 3] {
        [
            (Side::Left, self.left),
            (Side::Center, self.center),
            (Side::Right, self.right),
        ]
    }

    pub fn any(&self, pred: impl Fn(f64) -> bool) -> bool {
        self.sides().iter().any(|(_, v)| pred(*v))
    }

    pub fn all(&self, pred: impl Fn(f64) -> bool) -> bool {
        self.sides().iter().all(|(_, v)| pred(*v))
    }
}

impl fmt::Display for SensorTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "L={:.2} C={:.2} R={:.2}",
            self.left, self.center, self.right
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Center,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("Left"),
            Side::Center => f.write_str("Center"),
            Side::Right => f.write_str("Right"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SafetyVerdict {
    Collision,
    TooClose { sides: Vec<Side> },
    PerfectlyParked,
    Safe,
}

impl fmt::Display for SafetyVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SafetyVerdict::Collision => f.write_str("COLLISION! STOP IMMEDIATELY"),
            SafetyVerdict::TooClose { sides } => {
                let joined: Vec<String> = sides.iter().map(|s| s.to_string()).collect();
                write!(
                    f,
                    "TOO CLOSE ({})! Adjust carefully",
                    joined.join(SIDE_SEPARATOR)
                )
            }
            SafetyVerdict::PerfectlyParked => f.write_str("Perfectly Parked"),
            SafetyVerdict::Safe => f.write_str("SAFE"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    None,
    Single,
    Double,
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertLevel::None => f.write_str("none"),
            AlertLevel::Single => f.write_str("single"),
            AlertLevel::Double => f.write_str("double"),
        }
    }
}

impl AlertLevel {
    /// Audible cue for the level; `None` stays silent.
    pub fn cue(&self) -> Option<&'static str> {
        match self {
            AlertLevel::None => None,
            AlertLevel::Single => Some("BEEP"),
            AlertLevel::Double => Some("BEEP BEEP"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParkingGeometry {
    pub kind: ParkingKind,
    pub length: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Steering {
    Left,
    Right,
    Centered,
}

impl fmt::Display for Steering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Steering::Left => f.write_str("Steer LEFT"),
            Steering::Right => f.write_str("Steer RIGHT"),
            Steering::Centered => f.write_str("Keep centered"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Movement {
    Forward,
    Backward,
}

impl Movement {
    /// Direction that continues the manoeuvre for a driving mode.
    pub fn continuing(mode: DrivingMode) -> Self {
        match mode {
            DrivingMode::Forward => Movement::Forward,
            DrivingMode::Reverse => Movement::Backward,
        }
    }

    /// Direction that backs out of the manoeuvre for a driving mode.
    pub fn opposite(mode: DrivingMode) -> Self {
        match mode {
            DrivingMode::Forward => Movement::Backward,
            DrivingMode::Reverse => Movement::Forward,
        }
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Movement::Forward => f.write_str("Move FORWARD"),
            Movement::Backward => f.write_str("Move BACKWARD"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub steering: Steering,
    pub movement: Movement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnTag {
    /// All sensors read too close; the driver was told to back out.
    OppositeMovement { mode: DrivingMode },
    Verdict(SafetyVerdict),
}

impl fmt::Display for TurnTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnTag::OppositeMovement { mode } => {
                let towards = match Movement::opposite(*mode) {
                    Movement::Forward => "FORWARD",
                    Movement::Backward => "BACKWARD",
                };
                write!(f, "Sensors close: move {}", towards)
            }
            TurnTag::Verdict(v) => write!(f, "{}", v),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnRecord {
    pub index: usize,
    pub triple: SensorTriple,
    pub tag: TurnTag,
    pub note: String,
}

impl TurnRecord {
    pub fn new(index: usize, triple: SensorTriple, tag: TurnTag) -> Self {
        let note = tag.to_string();
        Self {
            index,
            triple,
            tag,
            note,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOutcome {
    Completed,
    CollisionStopped,
    /// Input ended before a terminal verdict.
    Abandoned,
}

impl SessionOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SessionOutcome::Completed => MSG_COMPLETED,
            SessionOutcome::CollisionStopped => MSG_COLLISION,
            SessionOutcome::Abandoned => MSG_ABANDONED,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub mode: DrivingMode,
    pub parking: ParkingKind,
    pub outcome: SessionOutcome,
    pub turns: Vec<TurnRecord>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoSpaceReason {
    NoneAvailable,
    InvalidCount,
    Exhausted,
}

impl fmt::Display for NoSpaceReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoSpaceReason::NoneAvailable => f.write_str("No parking spaces available."),
            NoSpaceReason::InvalidCount => {
                f.write_str("Invalid number of parking spaces; nothing to scan.")
            }
            NoSpaceReason::Exhausted => f.write_str("No suitable parking space found."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScanOutcome {
    Admitted { index: u32, size: f64 },
    NoSpace { reason: NoSpaceReason },
}

/// Everything the engine reports while it runs, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    ScanStarted { required: f64 },
    CandidateRejected { index: u32, size: f64, required: f64 },
    CandidateAdmitted { index: u32, size: f64 },
    NoSpace(NoSpaceReason),
    SessionStarted { mode: DrivingMode, parking: ParkingKind },
    AwaitingReading { turn: usize },
    Alert(AlertLevel),
    OppositeMovement { mode: DrivingMode },
    Verdict(SafetyVerdict),
    Advice(Advice),
    SessionEnded(SessionOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub collision: f64,
    pub too_close: f64,
    pub perfect_max: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            collision: COLLISION_DISTANCE,
            too_close: TOO_CLOSE_DISTANCE,
            perfect_max: PERFECT_MAX_DISTANCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Clearance {
    pub parallel_margin: f64,
    pub perpendicular_margin: f64,
}

impl Default for Clearance {
    fn default() -> Self {
        Self {
            parallel_margin: PARALLEL_MARGIN,
            perpendicular_margin: PERPENDICULAR_MARGIN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub clearance: Clearance,
}

#[derive(Serialize)]
pub struct ClassifyReport {
    pub triple: SensorTriple,
    pub verdict: SafetyVerdict,
    pub note: String,
    pub alert: AlertLevel,
}

#[derive(Serialize)]
pub struct SpaceReport {
    pub geometry: ParkingGeometry,
    pub required: f64,
}

#[derive(Serialize)]
pub struct ScanReport {
    pub required: f64,
    pub outcome: ScanOutcome,
}

#[derive(Serialize)]
pub struct RunReport {
    pub geometry: ParkingGeometry,
    pub mode: DrivingMode,
    pub scan: ScanReport,
    pub session: Option<SessionSummary>,
}
