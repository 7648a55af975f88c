// SPDX-License-Identifier: MIT

//!
//! Year range
//!

use serde::Serialize;
use std::fmt::Debug;

/// The range of years the timeline spans, taken over the full marker-year
/// set (start years, end years, and the current year injected for ongoing
/// events)
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct TimelineYearRange {
    /// The earliest marker year
    pub min_year: i32,

    /// The latest marker year
    pub max_year: i32,
}

impl TimelineYearRange {
    /// The number of years the timeline spans.  Zero when the timeline holds
    /// a single distinct year (or no events at all)
    pub fn span(&self) -> i32 {
        self.max_year - self.min_year
    }
}
