use serde::{Deserialize, Serialize};

use crate::clock::minutes_of;
use crate::leave::LeaveMap;

/// Thresholds for the leave rules. The template's rule strings drifted
/// between revisions, so they are configuration rather than constants;
/// `Default` matches the final revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeavePolicy {
    /// Leave ending exactly here is a morning half-day.
    pub morning_end: String,
    /// Clock-in written for a morning half-day.
    pub afternoon_clock_in: String,
    /// Leave starting at or after this truncates the day at its start.
    pub afternoon_start: String,
    /// Full-day leave covers at least `full_day_start..=full_day_end`.
    pub full_day_start: String,
    pub full_day_end: String,
    /// Written to both clock fields for a full-day leave.
    pub on_leave_text: String,
}

impl Default for LeavePolicy {
    fn default() -> Self {
        Self {
            morning_end: "12:00".to_string(),
            afternoon_clock_in: "13:30".to_string(),
            afternoon_start: "13:30".to_string(),
            full_day_start: "09:00".to_string(),
            full_day_end: "18:00".to_string(),
            on_leave_text: "請假".to_string(),
        }
    }
}

/// The values written into a workday row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub clock_in: String,
    pub clock_out: String,
    pub remark: String,
}

/// Reconcile a workday's generated times against the leave map using the
/// default policy.
pub fn reconcile(
    canonical_date: &str,
    leaves: &LeaveMap,
    generated_in: &str,
    generated_out: &str,
) -> AttendanceEntry {
    reconcile_with_policy(
        canonical_date,
        leaves,
        generated_in,
        generated_out,
        &LeavePolicy::default(),
    )
}

/// A date absent from the map passes the generated times through untouched.
/// Once a leave interval matches, the remark is written unconditionally;
/// the full-day check runs last and overrides the half-day rules.
///
/// Comparisons are on minutes of day. An interval whose bounds fail to
/// parse matches no time rule but still produces its remark.
pub fn reconcile_with_policy(
    canonical_date: &str,
    leaves: &LeaveMap,
    generated_in: &str,
    generated_out: &str,
    policy: &LeavePolicy,
) -> AttendanceEntry {
    let Some(leave) = leaves.get(canonical_date) else {
        return AttendanceEntry {
            clock_in: generated_in.to_string(),
            clock_out: generated_out.to_string(),
            remark: String::new(),
        };
    };

    let mut entry = AttendanceEntry {
        clock_in: generated_in.to_string(),
        clock_out: generated_out.to_string(),
        remark: format!("{} {}-{}", leave.category, leave.start, leave.end),
    };

    let start = minutes_of(&leave.start);
    let end = minutes_of(&leave.end);

    if eq(end, minutes_of(&policy.morning_end)) {
        entry.clock_in = policy.afternoon_clock_in.clone();
    } else if ge(start, minutes_of(&policy.afternoon_start)) {
        entry.clock_out = leave.start.clone();
    }

    if le(start, minutes_of(&policy.full_day_start)) && ge(end, minutes_of(&policy.full_day_end)) {
        entry.clock_in = policy.on_leave_text.clone();
        entry.clock_out = policy.on_leave_text.clone();
    }

    entry
}

fn eq(a: Option<u32>, b: Option<u32>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
}

fn ge(a: Option<u32>, b: Option<u32>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a >= b)
}

fn le(a: Option<u32>, b: Option<u32>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a <= b)
}
