// SPDX-License-Identifier: MIT

//!
//! Reveal sequencing
//!
//! The timeline's entrance animation is gated on a single visibility
//! trigger (the layout region scrolling into the viewport).  Before the
//! trigger fires everything is laid out but rendered in its "not yet
//! visible" state; after it fires each element animates in with a delay
//! staggered by its input-order index.  The trigger is one-shot: firing it
//! again is a no-op, and the state never reverts to hidden.
//!
//! The engine only computes the schedule.  Actually running (and, on
//! teardown, cancelling) the timers is the animation driver's job.
//!

use serde::Serialize;
use std::fmt::Debug;
use std::time::Duration;

/// How long the timeline spine takes to grow to full height
const SPINE_GROW_SECS: f64 = 2.0;

/// How long a year marker takes to fade/scale in
const MARKER_FADE_SECS: f64 = 0.5;

/// Delay between consecutive year markers
const MARKER_STAGGER_SECS: f64 = 0.1;

/// How long an event box takes to slide in
const EVENT_ENTER_SECS: f64 = 0.8;

/// Delay between consecutive event boxes
const EVENT_STAGGER_SECS: f64 = 0.2;

/// Extra delay before the first event box (the spine and markers lead)
const EVENT_BASE_DELAY_SECS: f64 = 1.0;

/// How long a duration line takes to grow to full length
const DURATION_LINE_GROW_SECS: f64 = 1.0;

/// Extra delay before the first duration line
const DURATION_LINE_BASE_DELAY_SECS: f64 = 0.5;

/// Whether the timeline's entrance animation has been triggered yet
///
/// A two-state machine: `Hidden → Revealed`, no transition back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RevealState {
    /// The timeline has not scrolled into view yet.  Everything is laid out
    /// but rendered at zero scale/opacity, spine height zero
    Hidden,

    /// The visibility trigger has fired and the staggered entrance
    /// animations are running (or have finished)
    Revealed,
}

/// When one element's entrance animation should run, relative to the moment
/// the reveal trigger fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevealTiming {
    /// How long after the trigger the animation starts
    pub delay: Duration,

    /// How long the animation runs for
    pub duration: Duration,
}

impl RevealTiming {
    fn from_secs(delay: f64, duration: f64) -> Self {
        RevealTiming {
            delay: Duration::from_secs_f64(delay),
            duration: Duration::from_secs_f64(duration),
        }
    }
}

/// The timing of the spine's grow animation
pub(crate) fn spine_timing() -> RevealTiming {
    RevealTiming::from_secs(0.0, SPINE_GROW_SECS)
}

/// The timing of the `index`th year marker's entrance
pub(crate) fn marker_timing(index: usize) -> RevealTiming {
    RevealTiming::from_secs(MARKER_STAGGER_SECS * index as f64, MARKER_FADE_SECS)
}

/// The timing of the `index`th event box's entrance
pub(crate) fn event_timing(index: usize) -> RevealTiming {
    RevealTiming::from_secs(
        (EVENT_STAGGER_SECS * index as f64) + EVENT_BASE_DELAY_SECS,
        EVENT_ENTER_SECS,
    )
}

/// The timing of the `index`th event's duration-line grow.  Duration lines
/// lead their event boxes slightly
pub(crate) fn duration_line_timing(index: usize) -> RevealTiming {
    RevealTiming::from_secs(
        (EVENT_STAGGER_SECS * index as f64) + DURATION_LINE_BASE_DELAY_SECS,
        DURATION_LINE_GROW_SECS,
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stagger_is_monotonic() {
        for index in 0..10 {
            assert!(marker_timing(index).delay < marker_timing(index + 1).delay);
            assert!(event_timing(index).delay < event_timing(index + 1).delay);
            assert!(duration_line_timing(index).delay < duration_line_timing(index + 1).delay);
        }
    }

    #[test]
    fn duration_lines_lead_their_boxes() {
        for index in 0..10 {
            assert!(duration_line_timing(index).delay < event_timing(index).delay);
        }
    }

    #[test]
    fn spine_starts_immediately() {
        assert_eq!(spine_timing().delay, Duration::ZERO);
    }
}
