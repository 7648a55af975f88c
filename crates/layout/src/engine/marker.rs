// SPDX-License-Identifier: MIT

//!
//! Year markers
//!

use crate::RevealTiming;
use lifeline_core::Year;
use serde::Serialize;
use std::fmt::Debug;

/// Information needed to draw one labelled year on the timeline axis
#[derive(Debug, Clone, Copy, Serialize)]
pub struct YearMarker {
    /// The year this marker labels
    pub year: Year,

    /// Vertical position as a percentage of the container extent (most
    /// recent year at 0%)
    pub position: f64,

    /// When the marker's entrance animation should run, relative to the
    /// reveal trigger
    pub timing: RevealTiming,
}
