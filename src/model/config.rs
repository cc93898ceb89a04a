use chrono::NaiveDate;
use std::time::Duration;

use crate::model::gesture::DEFAULT_COMMIT_DISTANCE;

/// Tunables for the scrubbing control. The epoch is injected configuration
/// rather than a constant buried in the sequence generator, so the generator
/// stays testable with arbitrary epoch/today pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubConfig {
    /// First day of the navigable history; the sequence starts the day after.
    pub epoch: NaiveDate,
    /// Cumulative drag distance (px) that commits one index step.
    pub commit_distance: f32,
    /// Grace delay before a sustained boundary-overdrag leaves timeline mode.
    pub exit_delay: Duration,
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            epoch: NaiveDate::from_ymd_opt(2020, 3, 2).unwrap_or(NaiveDate::MIN),
            commit_distance: DEFAULT_COMMIT_DISTANCE,
            exit_delay: Duration::from_millis(1000),
        }
    }
}
