use crate::domain::models::{EngineEvent, NoSpaceReason, ScanOutcome};
use crate::services::console::InputError;
use crate::services::report::EventSink;

/// Walks up to `count` candidate spaces and admits the first one that fits.
///
/// `next_candidate` is called with the 1-based index of the space it should
/// produce, and only after feedback for the previous space has been emitted.
/// It is never called for a zero or negative count, nor past `count`.
pub fn scan<F>(
    required: f64,
    count: i64,
    mut next_candidate: F,
    sink: &mut dyn EventSink,
) -> Result<ScanOutcome, InputError>
where
    F: FnMut(u32) -> Result<f64, InputError>,
{
    sink.emit(EngineEvent::ScanStarted { required });

    let total = match count {
        0 => return Ok(no_space(NoSpaceReason::NoneAvailable, sink)),
        c if c < 0 => return Ok(no_space(NoSpaceReason::InvalidCount, sink)),
        c => c,
    };

    let mut index: u32 = 0;
    for _ in 0..total {
        index = index.saturating_add(1);
        let size = next_candidate(index)?;
        if size >= required {
            tracing::info!(index, size, required, "parking space admitted");
            sink.emit(EngineEvent::CandidateAdmitted { index, size });
            return Ok(ScanOutcome::Admitted { index, size });
        }
        tracing::debug!(index, size, required, "parking space rejected");
        sink.emit(EngineEvent::CandidateRejected {
            index,
            size,
            required,
        });
    }

    Ok(no_space(NoSpaceReason::Exhausted, sink))
}

fn no_space(reason: NoSpaceReason, sink: &mut dyn EventSink) -> ScanOutcome {
    tracing::info!(?reason, "no parking space admitted");
    sink.emit(EngineEvent::NoSpace(reason));
    ScanOutcome::NoSpace { reason }
}
