//! Module for the Hertz to cent conversion, including the validation of all
//! inputs against the audible frequency range.

use alloc::vec::Vec;
use thiserror::Error;

/// Lower inclusive bound of the audible frequency range (Hz).
pub const MIN_AUDIBLE_HZ: f64 = 20.0;

/// Upper inclusive bound of the audible frequency range (Hz).
pub const MAX_AUDIBLE_HZ: f64 = 20000.0;

/// Amount of cents in one octave (frequency ratio `2:1`).
pub const CENTS_PER_OCTAVE: f64 = 1200.0;

/// Possible errors of [`hz_to_cent`] and [`hz_to_cent_with_min`].
///
/// There are two kinds of failures: a parameter holds something that is not a
/// (real) number, or a value falls outside the inclusive audible range
/// `[`[`MIN_AUDIBLE_HZ`]`, `[`MAX_AUDIBLE_HZ`]`]`. Every failure aborts the
/// whole conversion; there are no partial results.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum HzToCentError {
    /// An element of the frequency sequence is IEEE NaN.
    #[error("frequencies must be a List or numpy array of numbers.")]
    HzSeqNotNumeric,
    /// An element of the frequency sequence is below [`MIN_AUDIBLE_HZ`].
    #[error("frequencies values must be higher than or equal to {MIN_AUDIBLE_HZ} Hz.")]
    HzSeqBelowAudibleRange,
    /// An element of the frequency sequence is above [`MAX_AUDIBLE_HZ`].
    #[error("frequencies values must be lower than or equal to {MAX_AUDIBLE_HZ} Hz.")]
    HzSeqAboveAudibleRange,
    /// The reference frequency is IEEE NaN.
    #[error("reference_hz must be a number.")]
    RefHzNotANumber,
    /// The reference frequency is below [`MIN_AUDIBLE_HZ`].
    #[error("reference_hz must be higher than or equal to {MIN_AUDIBLE_HZ} Hz.")]
    RefHzBelowAudibleRange,
    /// The reference frequency is above [`MAX_AUDIBLE_HZ`].
    #[error("reference_hz must be lower than or equal to {MAX_AUDIBLE_HZ} Hz.")]
    RefHzAboveAudibleRange,
    /// The minimum audible threshold is IEEE NaN.
    #[error("minimum_hz must be a number.")]
    MinHzNotANumber,
    /// The minimum audible threshold is below [`MIN_AUDIBLE_HZ`].
    #[error("minimum_hz must be higher than or equal to {MIN_AUDIBLE_HZ} Hz.")]
    MinHzBelowAudibleRange,
    /// The minimum audible threshold is above [`MAX_AUDIBLE_HZ`].
    #[error("minimum_hz must be lower than or equal to {MAX_AUDIBLE_HZ} Hz.")]
    MinHzAboveAudibleRange,
}

/// How a scalar parameter violates the audible range, if at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ScalarViolation {
    NotANumber,
    BelowRange,
    AboveRange,
}

/// Classifies a scalar parameter against the audible range.
///
/// NaN is reported as [`ScalarViolation::NotANumber`] as it is not a real
/// number. Infinite values fall through to the range checks: `+inf` trips
/// the upper bound, `-inf` the lower one.
fn audible_scalar_violation(hz: f64) -> Option<ScalarViolation> {
    if hz.is_nan() {
        Some(ScalarViolation::NotANumber)
    } else if hz < MIN_AUDIBLE_HZ {
        Some(ScalarViolation::BelowRange)
    } else if hz > MAX_AUDIBLE_HZ {
        Some(ScalarViolation::AboveRange)
    } else {
        None
    }
}

/// Validates the frequency sequence in three whole-sequence passes: all
/// elements must be numbers, then none below the lower bound, then none above
/// the upper bound. The pass order is part of the contract: `[20001.0, 19.0]`
/// reports the lower bound violation.
fn validate_hz_seq(hz_seq: &[f64]) -> Result<(), HzToCentError> {
    if hz_seq.iter().any(|hz| hz.is_nan()) {
        return Err(HzToCentError::HzSeqNotNumeric);
    }
    if hz_seq.iter().any(|&hz| hz < MIN_AUDIBLE_HZ) {
        return Err(HzToCentError::HzSeqBelowAudibleRange);
    }
    if hz_seq.iter().any(|&hz| hz > MAX_AUDIBLE_HZ) {
        return Err(HzToCentError::HzSeqAboveAudibleRange);
    }
    Ok(())
}

/// Converts a sequence of frequency values in Hertz to cents with the default
/// minimum audible threshold of [`MIN_AUDIBLE_HZ`].
///
/// Convenience wrapper around [`hz_to_cent_with_min`]; see there for the full
/// contract.
///
/// ```rust
/// use hz_to_cent::hz_to_cent;
///
/// let cents = hz_to_cent(&[440.0, 880.0], 440.0).unwrap();
/// assert_eq!(cents, [0.0, 1200.0]);
/// ```
pub fn hz_to_cent(hz_seq: &[f64], ref_hz: f64) -> Result<Vec<f64>, HzToCentError> {
    hz_to_cent_with_min(hz_seq, ref_hz, MIN_AUDIBLE_HZ)
}

/// Converts a sequence of frequency values in Hertz to cents with respect to
/// `ref_hz`.
///
/// Every element of `hz_seq` as well as `ref_hz` and `min_hz` must lie within
/// the inclusive audible range `[`[`MIN_AUDIBLE_HZ`]`, `[`MAX_AUDIBLE_HZ`]`]`,
/// otherwise the whole call fails with the corresponding [`HzToCentError`].
/// Elements strictly below `min_hz` are treated as inaudible and map to
/// [`f64::NAN`] in the output instead of failing the call; an element equal
/// to `min_hz` is converted normally.
///
/// The returned sequence has the same length and order as `hz_seq`. An
/// element equal to `ref_hz` maps to exactly `0.0`, one octave above the
/// reference to `1200.0`, one octave below to `-1200.0`.
pub fn hz_to_cent_with_min(
    hz_seq: &[f64],
    ref_hz: f64,
    min_hz: f64,
) -> Result<Vec<f64>, HzToCentError> {
    validate_hz_seq(hz_seq)?;

    if let Some(violation) = audible_scalar_violation(ref_hz) {
        return Err(match violation {
            ScalarViolation::NotANumber => HzToCentError::RefHzNotANumber,
            ScalarViolation::BelowRange => HzToCentError::RefHzBelowAudibleRange,
            ScalarViolation::AboveRange => HzToCentError::RefHzAboveAudibleRange,
        });
    }

    if let Some(violation) = audible_scalar_violation(min_hz) {
        return Err(match violation {
            ScalarViolation::NotANumber => HzToCentError::MinHzNotANumber,
            ScalarViolation::BelowRange => HzToCentError::MinHzBelowAudibleRange,
            ScalarViolation::AboveRange => HzToCentError::MinHzAboveAudibleRange,
        });
    }

    if hz_seq.is_empty() {
        return Ok(Vec::new());
    }

    let inaudible_count = hz_seq.iter().filter(|&&hz| hz < min_hz).count();
    if inaudible_count > 0 {
        log::debug!(
            "{inaudible_count} of {} frequency value(s) are below {min_hz} Hz and map to NaN",
            hz_seq.len()
        );
    }

    Ok(hz_seq
        .iter()
        .map(|&hz| {
            if hz < min_hz {
                f64::NAN
            } else {
                libm::log2(hz / ref_hz) * CENTS_PER_OCTAVE
            }
        })
        .collect())
}
