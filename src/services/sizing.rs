use crate::cli::ParkingKind;
use crate::domain::models::{Clearance, ParkingGeometry};

pub fn required_space(c: &Clearance, kind: ParkingKind, length: f64, width: f64) -> f64 {
    match kind {
        ParkingKind::Parallel => length + c.parallel_margin,
        ParkingKind::Perpendicular => width + c.perpendicular_margin,
    }
}

pub fn required_for(c: &Clearance, g: &ParkingGeometry) -> f64 {
    required_space(c, g.kind, g.length, g.width)
}
