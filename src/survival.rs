//! Median survival time for right-censored samples.
//!
//! The median of a censored sample is defined only if the empirical
//! survival function actually crosses 0.5, which translates to: the
//! observation(s) at the middle rank(s) of the time-sorted sample must be
//! actual events. If a middle observation is censored, the true median
//! lies somewhere beyond that censoring time and cannot be reported from
//! the data as-is, so the computation signals the absence rather than
//! returning a misleading number.

use crate::error::InvalidInput;
use crate::types::{EventStatus, Observation};

/// Compute the median survival time from paired observations.
///
/// Observations are stably sorted by time (ties keep input order, so
/// tie-breaking is deterministic) and the middle rank(s) are inspected:
///
/// - Odd `n`: the median is the time at rank `n / 2` and is defined iff
///   that observation is an event.
/// - Even `n`: the median is the mean of the times at ranks `n / 2 - 1`
///   and `n / 2` and is defined iff both observations are events.
///
/// Because each time is sorted together with its status, the result is
/// identical for any permutation of the input.
///
/// # Arguments
///
/// * `observations` - Subject-level records, in any order.
///
/// # Returns
///
/// `Ok(Some(median))` when the middle rank(s) are events, `Ok(None)` when
/// censoring leaves the median undefined.
///
/// # Errors
///
/// Returns `InvalidInput::Empty` for an empty slice and
/// `InvalidInput::TimeOutOfRange` for a negative or non-finite time.
pub fn median_survival(observations: &[Observation]) -> Result<Option<f64>, InvalidInput> {
    if observations.is_empty() {
        return Err(InvalidInput::Empty);
    }
    for (index, obs) in observations.iter().enumerate() {
        if !obs.time.is_finite() || obs.time < 0.0 {
            return Err(InvalidInput::TimeOutOfRange {
                index,
                value: obs.time,
            });
        }
    }

    // Stable sort of the (time, status) pairs; statuses are read from the
    // sorted pairs, never from the original positions.
    let mut sorted = observations.to_vec();
    sorted.sort_by(|a, b| a.time.total_cmp(&b.time));

    let n = sorted.len();
    if n % 2 == 0 {
        let lower = sorted[n / 2 - 1];
        let upper = sorted[n / 2];
        if lower.status.is_event() && upper.status.is_event() {
            Ok(Some((lower.time + upper.time) / 2.0))
        } else {
            Ok(None)
        }
    } else {
        let middle = sorted[n / 2];
        if middle.status.is_event() {
            Ok(Some(middle.time))
        } else {
            Ok(None)
        }
    }
}

/// Compute the median survival time from parallel `times`/`statuses` columns.
///
/// Convenience wrapper over [`median_survival`] for callers holding the
/// conventional two-column layout: `times[i]` is subject `i`'s observed
/// follow-up time and `statuses[i]` its indicator (`1` = event, `0` =
/// censored). The columns are zipped into paired records before sorting,
/// so the time/status pairing survives reordering.
///
/// # Arguments
///
/// * `times` - Observed follow-up times, not necessarily sorted.
/// * `statuses` - Event indicators, positionally aligned with `times`.
///
/// # Returns
///
/// `Ok(Some(median))` when defined, `Ok(None)` when censoring at the
/// middle rank(s) leaves the median undefined.
///
/// # Errors
///
/// Returns `InvalidInput` when the columns are empty, differ in length,
/// contain an indicator outside `{0, 1}`, or contain a negative or
/// non-finite time. Malformed input is never coerced or truncated.
pub fn median_survival_time(times: &[f64], statuses: &[u8]) -> Result<Option<f64>, InvalidInput> {
    if times.len() != statuses.len() {
        return Err(InvalidInput::LengthMismatch {
            times: times.len(),
            statuses: statuses.len(),
        });
    }
    if times.is_empty() {
        return Err(InvalidInput::Empty);
    }

    let observations = times
        .iter()
        .zip(statuses.iter())
        .enumerate()
        .map(|(index, (&time, &raw))| {
            let status = EventStatus::from_indicator(raw)
                .ok_or(InvalidInput::StatusOutOfRange { index, value: raw })?;
            Ok(Observation::new(time, status))
        })
        .collect::<Result<Vec<_>, InvalidInput>>()?;

    median_survival(&observations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_length_event_at_median() {
        let result = median_survival_time(&[1.0, 3.0, 5.0], &[1, 1, 1]).unwrap();
        assert_eq!(result, Some(3.0));
    }

    #[test]
    fn test_odd_length_censored_at_median() {
        let result = median_survival_time(&[1.0, 3.0, 5.0], &[1, 0, 1]).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_even_length_both_middle_events() {
        let result = median_survival_time(&[1.0, 2.0, 3.0, 4.0], &[1, 1, 1, 1]).unwrap();
        assert_eq!(result, Some(2.5));
    }

    #[test]
    fn test_even_length_one_middle_censored() {
        // Both middle observations must be events; a censored upper middle
        // leaves the median undefined even though the lower middle is an
        // event.
        let result = median_survival_time(&[1.0, 2.0, 3.0, 4.0], &[1, 1, 0, 1]).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_even_length_both_middle_censored() {
        let result = median_survival_time(&[1.0, 2.0, 3.0, 4.0], &[1, 0, 0, 1]).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_single_observation() {
        assert_eq!(median_survival_time(&[5.0], &[1]).unwrap(), Some(5.0));
        assert_eq!(median_survival_time(&[5.0], &[0]).unwrap(), None);
    }

    #[test]
    fn test_unsorted_input_keeps_pairing() {
        // Pairs are (3, censored), (1, event), (5, event). Sorted by time
        // the middle pair is (3, censored), so the median is undefined.
        // Indexing the unsorted status column at the sorted position would
        // instead see an event and report 3.0.
        let result = median_survival_time(&[3.0, 1.0, 5.0], &[0, 1, 1]).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_duplicate_times() {
        let result = median_survival_time(&[2.0, 2.0, 2.0, 2.0], &[1, 1, 1, 1]).unwrap();
        assert_eq!(result, Some(2.0));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(median_survival_time(&[], &[]), Err(InvalidInput::Empty));
        assert_eq!(median_survival(&[]), Err(InvalidInput::Empty));
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            median_survival_time(&[1.0, 2.0], &[1]),
            Err(InvalidInput::LengthMismatch {
                times: 2,
                statuses: 1
            })
        );
    }

    #[test]
    fn test_status_out_of_range() {
        assert_eq!(
            median_survival_time(&[1.0, 2.0], &[1, 3]),
            Err(InvalidInput::StatusOutOfRange { index: 1, value: 3 })
        );
    }

    #[test]
    fn test_time_out_of_range() {
        assert_eq!(
            median_survival_time(&[1.0, -2.0, 3.0], &[1, 1, 1]),
            Err(InvalidInput::TimeOutOfRange {
                index: 1,
                value: -2.0
            })
        );
        assert!(matches!(
            median_survival_time(&[1.0, f64::NAN], &[1, 1]),
            Err(InvalidInput::TimeOutOfRange { index: 1, .. })
        ));
    }
}
