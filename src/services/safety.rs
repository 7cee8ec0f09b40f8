use crate::domain::models::{SafetyVerdict, SensorTriple, Side, Thresholds};

/// Collision wins over everything; otherwise any side under `too_close`
/// is reported, and only a triple fully inside the band is parked.
pub fn classify(t: &Thresholds, triple: &SensorTriple) -> SafetyVerdict {
    if triple.any(|v| v <= t.collision) {
        return SafetyVerdict::Collision;
    }

    let sides: Vec<Side> = triple
        .sides()
        .iter()
        .filter(|(_, v)| *v < t.too_close)
        .map(|(s, _)| *s)
        .collect();
    if !sides.is_empty() {
        return SafetyVerdict::TooClose { sides };
    }

    if triple.all(|v| v >= t.too_close && v <= t.perfect_max) {
        return SafetyVerdict::PerfectlyParked;
    }

    SafetyVerdict::Safe
}
