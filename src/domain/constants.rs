/// A reading at or below this distance (m) is a collision.
pub const COLLISION_DISTANCE: f64 = 0.1;
/// A reading strictly below this distance (m) is too close.
pub const TOO_CLOSE_DISTANCE: f64 = 0.3;
/// Upper bound (inclusive) of the perfectly-parked band.
pub const PERFECT_MAX_DISTANCE: f64 = 0.5;

/// Extra length (m) a parallel space needs beyond the car length.
pub const PARALLEL_MARGIN: f64 = 1.0;
/// Extra width (m) a perpendicular space needs beyond the car width.
pub const PERPENDICULAR_MARGIN: f64 = 0.5;

pub const SIDE_SEPARATOR: &str = "+";

pub const MSG_COMPLETED: &str = "Parking completed successfully!";
pub const MSG_COLLISION: &str = "Emergency stop activated!";
pub const MSG_ABANDONED: &str = "Session ended before parking was completed.";
