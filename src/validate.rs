/*!
This module validates event sequences before any metric touches them. An
onset list must contain only finite timestamps in non-decreasing order.
Empty lists are legal but worth a warning, since every metric degenerates
to zero on them.
*/
use crate::metrics::FloatExt;
use itertools::Itertools;
use std::error::Error;
use std::fmt::{self, Display};

/// Onset lists are measured in seconds and rarely span more than a few
/// minutes. Events past this point usually mean the caller handed over
/// sample indices instead of seconds.
const SUSPICIOUS_EVENT_TIME: f64 = 30_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Error raised when an input sequence or the matching window cannot be
/// evaluated. Surfaced to the caller immediately, never recovered.
pub enum InvalidInputError {
    /// The timestamp at this index is NaN or infinite.
    NonFinite(usize),
    /// The timestamp at this index is greater than its successor.
    NotSorted(usize),
    /// The matching window must be non-negative.
    NegativeWindow(f64),
}

impl Display for InvalidInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite(index) => {
                write!(f, "The event at index {} is not a finite number", index)
            }
            Self::NotSorted(index) => write!(
                f,
                "Events should be in non-decreasing order, but the event at index {} is greater than its successor",
                index
            ),
            Self::NegativeWindow(window) => write!(
                f,
                "The matching window must be non-negative, got {}",
                window
            ),
        }
    }
}
impl Error for InvalidInputError {}

/// Checks that `events` is a sequence of finite timestamps in non-decreasing
/// order. An empty sequence passes with a warning rather than failing: an
/// empty prediction or an empty ground truth is a legal, if uninteresting,
/// input.
pub fn validate_events<F: FloatExt>(events: &[F]) -> Result<(), InvalidInputError> {
    if events.is_empty() {
        tracing::warn!("event sequence is empty, metrics will degenerate to zero");
        return Ok(());
    }
    if let Some(index) = events.iter().position(|t| !t.is_finite()) {
        return Err(InvalidInputError::NonFinite(index));
    }
    if let Some(index) = events
        .iter()
        .tuple_windows()
        .position(|(previous, next)| previous > next)
    {
        return Err(InvalidInputError::NotSorted(index));
    }
    if let Some(last) = events.last().and_then(|t| t.to_f64()) {
        if last > SUSPICIOUS_EVENT_TIME {
            tracing::warn!(
                last_event = last,
                "events exceed {SUSPICIOUS_EVENT_TIME} seconds, maybe they are sample indices?"
            );
        }
    }
    Ok(())
}

/// Runs `metric` with both event sequences validated first. This is the
/// shared pre-condition check for every metric that takes a reference and an
/// estimated sequence as its first two arguments; a validation failure
/// aborts before any metric logic runs.
pub fn validated<F, T, E, M>(reference: &[F], estimated: &[F], metric: M) -> Result<T, E>
where
    F: FloatExt,
    E: From<InvalidInputError>,
    M: FnOnce(&[F], &[F]) -> Result<T, E>,
{
    validate_events(reference)?;
    validate_events(estimated)?;
    metric(reference, estimated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_sorted_sequence_passes() {
        assert!(validate_events(&[0.0, 0.5, 0.5, 1.2]).is_ok());
    }

    #[test]
    fn test_empty_sequence_passes() {
        assert!(validate_events::<f64>(&[]).is_ok());
    }

    #[rstest]
    #[case(&[2.0, 1.0], InvalidInputError::NotSorted(0))]
    #[case(&[0.0, 1.0, 0.5], InvalidInputError::NotSorted(1))]
    #[case(&[f64::NAN], InvalidInputError::NonFinite(0))]
    #[case(&[0.0, f64::INFINITY, 2.0], InvalidInputError::NonFinite(1))]
    #[case(&[f64::NEG_INFINITY, 0.0], InvalidInputError::NonFinite(0))]
    fn test_defective_sequences_are_rejected(
        #[case] events: &[f64],
        #[case] expected: InvalidInputError,
    ) {
        assert_eq!(validate_events(events), Err(expected));
    }

    #[test]
    fn test_nan_is_reported_before_ordering() {
        // A NaN breaks ordering comparisons too; the finiteness check wins.
        assert_eq!(
            validate_events(&[1.0, f64::NAN, 0.5]),
            Err(InvalidInputError::NonFinite(1))
        );
    }

    #[test]
    fn test_validated_aborts_before_the_metric_runs() {
        let result: Result<usize, InvalidInputError> =
            validated(&[2.0, 1.0], &[0.0], |_, _| panic!("metric must not run"));
        assert_eq!(result, Err(InvalidInputError::NotSorted(0)));
    }

    #[test]
    fn test_validated_forwards_both_sequences() {
        let result: Result<(usize, usize), InvalidInputError> =
            validated(&[1.0, 2.0], &[1.5], |r, e| Ok((r.len(), e.len())));
        assert_eq!(result, Ok((2, 1)));
    }
}
