use chrono::NaiveDate;

/// The timeline always keeps a 3-wide window of days populated, so the
/// focused index may never come closer than 2 slots to the end of the list.
pub const WINDOW_RESERVE: usize = 3;

/// The ordered list of selectable days, newest-first: element 0 is "today",
/// the last element is the day after the epoch. Built once per mount, not
/// re-derived on every frame.
#[derive(Debug, Clone)]
pub struct DaySequence {
    days: Vec<NaiveDate>,
}

impl DaySequence {
    /// Generate the sequence for `(epoch, today)`. Length equals the whole
    /// days elapsed between the two; an epoch on or after `today` yields an
    /// empty sequence.
    pub fn generate(epoch: NaiveDate, today: NaiveDate) -> Self {
        let elapsed = (today - epoch).num_days().max(0);
        let days = (0..elapsed)
            .map(|i| today - chrono::Duration::days(i))
            .collect();
        Self { days }
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<NaiveDate> {
        self.days.get(index).copied()
    }

    /// ISO-8601 string for the day at `index`.
    pub fn iso(&self, index: usize) -> Option<String> {
        self.get(index).map(|d| d.format("%Y-%m-%d").to_string())
    }
}

/// Bound a candidate navigation index to `[0, len - 3]`. Total: saturates to
/// 0 when the sequence is shorter than the window.
pub fn clamp_index(candidate: i64, len: usize) -> usize {
    let max = len.saturating_sub(WINDOW_RESERVE) as i64;
    candidate.clamp(0, max) as usize
}
