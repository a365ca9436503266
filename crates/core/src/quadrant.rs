//! Program priority quadrants.
//!
//! Programs are placed on an impact/effort grid. The thresholds are
//! asymmetric: an effort of 3 already counts as high effort, so a program
//! only becomes a quick win when it is clearly cheap.

use serde::{Deserialize, Serialize};

/// Impact at or above this value is "high impact".
pub const HIGH_IMPACT_MIN: i32 = 3;

/// Effort at or below this value is "low effort".
pub const LOW_EFFORT_MAX: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    QuickWin,
    Transformational,
    Foundation,
    Maintenance,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::QuickWin,
        Quadrant::Transformational,
        Quadrant::Foundation,
        Quadrant::Maintenance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Quadrant::QuickWin => "quick_win",
            Quadrant::Transformational => "transformational",
            Quadrant::Foundation => "foundation",
            Quadrant::Maintenance => "maintenance",
        }
    }
}

impl std::fmt::Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a program by its impact and effort scores (nominally 1-5).
///
/// Total over all integers; out-of-range scores fall on whichever side of
/// the thresholds they land.
pub fn quadrant_of(impact: i32, effort: i32) -> Quadrant {
    let high_impact = impact >= HIGH_IMPACT_MIN;
    let low_effort = effort <= LOW_EFFORT_MAX;

    match (high_impact, low_effort) {
        (true, true) => Quadrant::QuickWin,
        (true, false) => Quadrant::Transformational,
        (false, false) => Quadrant::Foundation,
        (false, true) => Quadrant::Maintenance,
    }
}
