//! Completion percentages and 2-decimal rounding.
//!
//! These are the only numeric policies computed locally; every score the
//! database returns is passed through untouched.

use serde::Serialize;

use crate::status::ActionStatus;

/// Magnitude above which values already carry no sub-cent precision.
const ROUND2_EXACT_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

/// Whole-number percentage of `done` over `total`, clamped to `[0, 100]`.
///
/// A zero (or negative) total yields 0.
pub fn pct(done: i64, total: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    let ratio = done as f64 / total as f64 * 100.0;
    (ratio.round() as i64).clamp(0, 100)
}

/// Round to two decimal places. `None` and non-finite values yield `None`.
pub fn round2(value: Option<f64>) -> Option<f64> {
    let value = value?;
    if !value.is_finite() {
        return None;
    }
    let scaled = value * 100.0;
    if scaled.abs() >= ROUND2_EXACT_LIMIT {
        return Some(value);
    }
    Some(scaled.round() / 100.0)
}

/// Action counts for one program instance (or a whole assessment).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExecutionProgress {
    pub total: i64,
    pub todo: i64,
    pub doing: i64,
    pub done: i64,
    pub completion_pct: i64,
}

impl ExecutionProgress {
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = ActionStatus>,
    {
        let mut progress = ExecutionProgress::default();
        for status in statuses {
            progress.total += 1;
            match status {
                ActionStatus::Todo => progress.todo += 1,
                ActionStatus::Doing => progress.doing += 1,
                ActionStatus::Done => progress.done += 1,
            }
        }
        progress.completion_pct = pct(progress.done, progress.total);
        progress
    }

    /// Sum several progress blocks and recompute the percentage.
    pub fn merge<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = ExecutionProgress>,
    {
        let mut merged = parts
            .into_iter()
            .fold(ExecutionProgress::default(), |acc, p| ExecutionProgress {
                total: acc.total + p.total,
                todo: acc.todo + p.todo,
                doing: acc.doing + p.doing,
                done: acc.done + p.done,
                completion_pct: 0,
            });
        merged.completion_pct = pct(merged.done, merged.total);
        merged
    }
}
