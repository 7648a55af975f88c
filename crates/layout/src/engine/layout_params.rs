// SPDX-License-Identifier: MIT

//!
//! Layout params
//!

use std::fmt::Debug;

/// Layout parameters that users can adjust
///
/// The defaults reproduce the spacing the layout was originally tuned with
#[derive(Debug, Clone, Copy)]
pub struct LayoutParams {
    /// Vertical increment (display units) applied per earlier event sharing
    /// the same start year, so co-dated events stack instead of overlapping
    pub same_year_offset_step: f64,

    /// Horizontal increment (display units) applied to a duration line per
    /// earlier duration line it overlaps in time
    pub overlap_offset_step: f64,

    /// Minimum vertical space (display units) per year of timeline span
    pub min_year_spacing: f64,

    /// Multiplier on the per-event spacing term of the container extent, so
    /// dense short-span timelines still get breathing room
    pub packing_multiplier: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        LayoutParams {
            same_year_offset_step: 180.0,
            overlap_offset_step: 8.0,
            min_year_spacing: 200.0,
            packing_multiplier: 1.5,
        }
    }
}
