//! Observation types for censored time-to-event data.

use serde::{Deserialize, Serialize};

/// Outcome indicator for a single subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventStatus {
    /// The event of interest was observed at the recorded time.
    Event,
    /// Observation ended before the event occurred; the true event time
    /// is only known to lie beyond the recorded time.
    Censored,
}

impl EventStatus {
    /// Decode the conventional integer indicator: `1` = event, `0` = censored.
    ///
    /// Returns `None` for any other value; callers decide how strictly to
    /// treat out-of-range indicators.
    pub fn from_indicator(value: u8) -> Option<Self> {
        match value {
            1 => Some(EventStatus::Event),
            0 => Some(EventStatus::Censored),
            _ => None,
        }
    }

    /// Whether this observation is an actual event (not censoring).
    pub fn is_event(self) -> bool {
        matches!(self, EventStatus::Event)
    }
}

/// A single subject's follow-up record.
///
/// Pairs the observed time with its status so the two travel together
/// through sorting. Sorting a time column independently of its status
/// column silently desynchronizes the two for any input that is not
/// already sorted, so the pair is the unit of data here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Observed follow-up time (event time or censoring time).
    pub time: f64,
    /// Whether `time` marks the event or the end of observation.
    pub status: EventStatus,
}

impl Observation {
    /// Create an observation from a time and its status.
    pub fn new(time: f64, status: EventStatus) -> Self {
        Self { time, status }
    }
}
