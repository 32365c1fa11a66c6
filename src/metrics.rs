/*!
This module scores an estimated onset sequence against a reference sequence,
computing the precision, recall and f-measure over the maximum matching.
*/
use crate::matching::match_events;
use crate::validate::{validated, InvalidInputError};
use num::{Float, NumCast};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{self, Debug, Display};

/// Internal extension trait for Num's Float trait
pub trait FloatExt: Float + Send + Sync + Clone + Debug + Display {}

impl<T: Float + Send + Sync + Clone + Copy + Debug + Display> FloatExt for T {}

#[derive(Debug, Clone, PartialEq)]
/// Enum error encompassing the failures that can happen when computing the
/// precision, recall and f-measure of an onset sequence.
pub enum ComputationError {
    /// Beta value is not positive
    BetaNotPositive,
    /// One of the input sequences, or the window, failed validation.
    InvalidInput(InvalidInputError),
}

impl Display for ComputationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BetaNotPositive => write!(f, "Beta value is not positive"),
            Self::InvalidInput(input_err) => Display::fmt(input_err, f),
        }
    }
}
impl Error for ComputationError {}

impl From<InvalidInputError> for ComputationError {
    fn from(value: InvalidInputError) -> Self {
        Self::InvalidInput(value)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
/// Score tuple of an onset metric. Every value lies in `[0, 1]`.
pub struct Scores<F: FloatExt> {
    /// `2*precision*recall/(precision + recall)` for the default beta
    pub f_measure: F,
    /// (# hits)/(# estimated onsets)
    pub precision: F,
    /// (# hits)/(# reference onsets)
    pub recall: F,
}

impl<F: FloatExt> Scores<F> {
    fn zero() -> Self {
        Scores {
            f_measure: F::zero(),
            precision: F::zero(),
            recall: F::zero(),
        }
    }
}

impl<F: FloatExt> From<Scores<F>> for (F, F, F) {
    fn from(value: Scores<F>) -> Self {
        (value.f_measure, value.precision, value.recall)
    }
}

/// A `Scores` value acts as a line in a dataframe when displayed.
impl<F: FloatExt> Display for Scores<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.f_measure, self.precision, self.recall)
    }
}

/// Combines precision and recall into the f-score. `beta` weighs recall
/// against precision; `beta = 1` gives the usual harmonic mean.
fn f_score<F: FloatExt>(precision: F, recall: F, beta: F) -> F {
    let beta2 = beta.powi(2);
    let denominator = beta2 * precision + recall;
    if denominator > F::zero() {
        (F::one() + beta2) * precision * recall / denominator
    } else {
        F::zero()
    }
}

/// Computes the f-measure of correctly vs incorrectly predicted onsets.
/// Correctness is decided over a small window: an estimated onset is a hit
/// when the maximum matching pairs it with a reference onset at most
/// `window` seconds away.
///
/// Both sequences are validated first, and an empty sequence on either side
/// scores zero across the board without any matching.
///
/// * `reference`: reference onset locations, in seconds
/// * `estimated`: estimated onset locations, in seconds
/// * `window`: window size, in seconds (`DEFAULT_WINDOW` is the usual
///   choice)
///
/// # Example
/// ```rust
/// use onsev::f_measure;
///
/// let reference = [1.00_f64, 2.00, 3.00];
/// let estimated = [1.02, 2.90, 4.00];
/// let scores = f_measure(&reference, &estimated, 0.05).unwrap();
/// assert!((scores.precision - 1.0 / 3.0).abs() < 1e-12);
/// assert!((scores.recall - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn f_measure<F: FloatExt>(
    reference: &[F],
    estimated: &[F],
    window: F,
) -> Result<Scores<F>, ComputationError> {
    f_measure_with(reference, estimated, window, F::one())
}

/// Same as `f_measure`, with an explicit `beta` parameter for the f-score.
/// `beta = 1` for F1 and `beta = 0.5` for F0.5.
pub fn f_measure_with<F: FloatExt>(
    reference: &[F],
    estimated: &[F],
    window: F,
    beta: F,
) -> Result<Scores<F>, ComputationError> {
    if beta.is_sign_negative() {
        return Err(ComputationError::BetaNotPositive);
    }
    validated(reference, estimated, |reference, estimated| {
        // Matching an empty set is definitionally score zero, not undefined.
        if reference.is_empty() || estimated.is_empty() {
            return Ok(Scores::zero());
        }
        let matching = match_events(reference, estimated, window)?;
        let hits = cast_count::<F>(matching.len());
        let precision = hits / cast_count::<F>(estimated.len());
        let recall = hits / cast_count::<F>(reference.len());
        Ok(Scores {
            f_measure: f_score(precision, recall, beta),
            precision,
            recall,
        })
    })
}

fn cast_count<F: FloatExt>(count: usize) -> F {
    <F as NumCast>::from(count).expect("sequence lengths are representable in any float type")
}
