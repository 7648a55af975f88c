// SPDX-License-Identifier: MIT

//!
//! Event layout
//!

use crate::{RevealTiming, duration_line_timing, event_timing};
use lifeline_core::{Event, Year};
use serde::Serialize;
use std::fmt::Debug;

/// Information needed to draw an [`Event`] on a timeline (for use outside of
/// the engine)
#[derive(Debug, Clone, Serialize)]
pub struct EventOut {
    pub event: Event,

    /// Vertical position as a percentage of the container extent (most
    /// recent start year at 0%)
    pub vertical_position: f64,

    /// Length of the duration line as a percentage of the container extent.
    /// Zero for point-in-time events (no line is drawn)
    pub duration_length: f64,

    /// Extra vertical offset (display units) stacking this event below
    /// earlier events that share its start year
    pub same_year_offset: f64,

    /// Extra horizontal offset (display units) nudging this event's duration
    /// line clear of earlier overlapping duration lines
    pub overlap_offset: f64,

    /// When the event box's entrance animation should run, relative to the
    /// reveal trigger
    pub timing: RevealTiming,

    /// When the duration line's grow animation should run.  Only meaningful
    /// when `duration_length` is positive
    pub duration_line_timing: RevealTiming,
}

/// Information needed when working/calculating with an event (for internal
/// use by the engine)
#[derive(Debug, Clone)]
pub(crate) struct WorkingEvent {
    pub event: Event,

    // Calculated by the engine on every layout pass
    pub vertical_position: f64,
    pub duration_length: f64,
    pub same_year_offset: f64,
    pub overlap_offset: f64,

    /// The event's duration in whole years, clamped to zero for inverted
    /// ranges, with the ongoing flag already resolved against the injected
    /// current year
    pub duration_years: i32,
}

impl WorkingEvent {
    pub fn from(event: Event) -> Self {
        Self {
            event,
            vertical_position: 0.0,
            duration_length: 0.0,
            same_year_offset: 0.0,
            overlap_offset: 0.0,
            duration_years: 0,
        }
    }

    /// The first year of the event's duration interval
    pub fn interval_start(&self) -> i32 {
        self.event.start_year().value()
    }

    /// The last year of the event's duration interval.  Equal to the start
    /// year for point-in-time events and inverted ranges
    pub fn interval_end(&self) -> i32 {
        self.interval_start() + self.duration_years
    }

    /// Whether this event's duration interval intersects another's.
    /// Non-strict at both bounds: intervals touching at an endpoint count as
    /// overlapping, because their duration lines meet on the axis
    pub fn overlaps(&self, other: &WorkingEvent) -> bool {
        self.interval_start() <= other.interval_end()
            && self.interval_end() >= other.interval_start()
    }

    pub fn into_out(self, index: usize) -> EventOut {
        EventOut {
            event: self.event,
            vertical_position: self.vertical_position,
            duration_length: self.duration_length,
            same_year_offset: self.same_year_offset,
            overlap_offset: self.overlap_offset,
            timing: event_timing(index),
            duration_line_timing: duration_line_timing(index),
        }
    }
}

/// Resolve an event's duration in whole years: the ongoing flag resolves to
/// the injected current year, and an end year before the start year clamps
/// to zero rather than producing a negative-length line
pub(crate) fn clamped_duration_years(event: &Event, current_year: Year) -> i32 {
    match event.effective_end_year(current_year) {
        Some(end_year) => end_year.years_since(event.start_year()).max(0),
        None => 0,
    }
}
