use rand::{Rng as _, thread_rng};

/// Parse an `HH:MM` wall-clock string into minutes of day.
pub fn minutes_of(hhmm: &str) -> Option<u32> {
    let (hours, minutes) = hhmm.split_once(':')?;
    let hours: u32 = hours.trim().parse().ok()?;
    let minutes: u32 = minutes.trim().parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Format minutes of day as zero-padded `HH:MM`.
pub fn format_minutes(total: u32) -> String {
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Inclusive clock-time range, held as minutes of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: u32,
    end: u32,
}

impl TimeWindow {
    /// Callers guarantee the window is non-empty (`start <= end`).
    pub fn new(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> Self {
        let start = start_hour * 60 + start_min;
        let end = end_hour * 60 + end_min;
        debug_assert!(start <= end, "time window bounds out of order");
        Self { start, end }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Draw a uniformly distributed clock time, inclusive of both bounds.
    ///
    /// Uses the process-wide RNG; draws are intentionally not reproducible
    /// run-to-run.
    pub fn draw(&self) -> String {
        let minute = thread_rng().gen_range(self.start..=self.end);
        format_minutes(minute)
    }
}
