use crate::domain::models::{AlertLevel, SensorTriple, Thresholds};

pub fn alert_level(t: &Thresholds, triple: &SensorTriple) -> AlertLevel {
    if triple.any(|v| v < t.too_close) {
        AlertLevel::Double
    } else if triple.any(|v| v < t.perfect_max) {
        AlertLevel::Single
    } else {
        AlertLevel::None
    }
}
