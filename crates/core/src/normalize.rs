use crate::{
    error::{Result, SkimmerError},
    types::{RawCaption, Segment},
};

/// Reject start offsets that are negative or not finite
pub(crate) fn check_start(index: usize, start: f64) -> Result<()> {
    if !start.is_finite() || start < 0.0 {
        return Err(SkimmerError::PreconditionViolation {
            index,
            reason: format!("start time must be a non-negative number of seconds, got {start}"),
        });
    }
    Ok(())
}

/// Turn caption records into ordered segments.
///
/// Line breaks inside a caption become spaces so that every segment renders
/// as a single line.
pub fn normalize_captions(raw: Vec<RawCaption>) -> Result<Vec<Segment>> {
    raw.into_iter()
        .enumerate()
        .map(|(index, caption)| {
            check_start(index, caption.start)?;
            let text = if caption.text.contains(['\n', '\r']) {
                caption
                    .text
                    .split(['\n', '\r'])
                    .filter(|line| !line.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ")
            } else {
                caption.text
            };
            Ok(Segment::new(caption.start, text))
        })
        .collect()
}
