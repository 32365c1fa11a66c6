/*!
This library evaluates onset-detection systems. Given a reference sequence
of onset timestamps and an estimated one, it decides how many estimated
onsets are correct and summarizes correctness as precision, recall and
f-measure.

An estimated onset counts as correct when it can be paired with a reference
onset at most a small tolerance window apart. The pairing is a true
one-to-one maximum matching, not a greedy nearest-neighbour pass: greedy
pairing can double count or block later pairs and undercount hits, while
the maximum matching is stable and reproducible across runs.

# Terminology
* An onset is the timestamp, in seconds, at which a musical event begins.
* An event sequence is an ordered list of onset timestamps. It may be empty
    and may contain duplicates, but must be sorted in non-decreasing order.
* The window is the maximum allowed time difference for two onsets to be
    considered a match.
* A matching is a set of index pairs forming a partial bijection between
    the two event sequences, constrained by the window.

Loading event lists from files and any command-line surface are left to the
caller; this crate only consumes slices of timestamps.
*/

mod config;
mod matching;
mod metrics;
mod registry;
mod validate;

// The public api starts here
pub use config::{DefaultEvalConfig, EvalConfig, EvalConfigBuilder, DEFAULT_WINDOW};

pub use matching::match_events;

pub use metrics::{f_measure, f_measure_with, ComputationError, FloatExt, Scores};

pub use registry::{MetricFn, MetricRegistry};

pub use validate::{validate_events, validated, InvalidInputError};

/// Main entrypoint of the Onsev library. This function computes the
/// precision, recall and f-measure of the estimated onsets against the
/// reference onsets. Instead of taking the raw parameters, it takes an
/// `EvalConfig` struct and uses sensible defaults.
///
/// * `reference`: reference onset locations, in seconds
/// * `estimated`: estimated onset locations, in seconds
/// * `config`: parameters used to compute the metrics
///
/// # Example
/// ```rust
/// use onsev::{f_measure_conf, DefaultEvalConfig, EvalConfigBuilder};
///
/// let reference = [0.50, 1.00, 1.50, 2.00];
/// let estimated = [0.52, 1.06, 1.51, 1.97];
/// let config: DefaultEvalConfig = EvalConfigBuilder::default().window(0.05).build();
///
/// let scores = f_measure_conf(&reference, &estimated, config).unwrap();
/// assert!((scores.precision - 0.75).abs() < 1e-12);
/// assert!((scores.recall - 0.75).abs() < 1e-12);
/// assert!((scores.f_measure - 0.75).abs() < 1e-12);
/// ```
pub fn f_measure_conf<F: FloatExt>(
    reference: &[F],
    estimated: &[F],
    config: EvalConfig<F>,
) -> Result<Scores<F>, ComputationError> {
    let (window, beta) = config.into();
    f_measure_with(reference, estimated, window, beta)
}
