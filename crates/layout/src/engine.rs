// SPDX-License-Identifier: MIT

//!
//! The `lifeline-layout` engine
//!

mod event;
mod helpers;
mod layout_params;
mod marker;
mod reveal;
mod year_range;

pub(crate) use helpers::*;

pub use event::*;
pub use layout_params::*;
pub use marker::*;
pub use reveal::*;
pub use year_range::*;

use lifeline_core::{Event, Year};
use log::{debug, trace};
use serde::Serialize;
use std::collections::BTreeSet;

/// The core `lifeline-layout` engine.  This manages the events, derives the
/// marker years, positions everything along the axis, applies the
/// collision-avoidance offsets, and sequences the entrance reveal.
///
/// Input order is significant: it is the tie-break order for collision
/// avoidance (the first of two co-dated events stays put, later ones get
/// pushed), and it drives the reveal stagger.  The engine never re-orders
/// events.
///
/// Every mutation re-runs the full layout synchronously.  Each layout pass
/// is a pure recomputation from the current event list and current-year
/// input; nothing is cached across passes apart from the one-shot
/// [`RevealState`]
pub struct Engine {
    /// The information required for all event-related calculations
    working_events: Vec<WorkingEvent>,

    /// The markers labelling distinct years on the axis (most recent first)
    markers: Vec<YearMarker>,

    /// The range of years spanned by the marker set
    year_range: TimelineYearRange,

    /// The year that "ongoing" resolves to.  Injected rather than read from
    /// a system clock inside the layout, so results are reproducible
    current_year: Year,

    /// The spacing increments used for collision avoidance and sizing
    layout_params: LayoutParams,

    /// Whether the entrance animation has been triggered yet
    reveal: RevealState,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create a new engine.  "Ongoing" events resolve against the actual
    /// current calendar year
    pub fn new() -> Self {
        Self::with_current_year(Year::current())
    }

    /// Create a new engine with an injected current year (use this in tests,
    /// or to freeze an ongoing timeline at a point in time)
    pub fn with_current_year(current_year: Year) -> Self {
        Self {
            working_events: Vec::new(),
            markers: Vec::new(),
            year_range: TimelineYearRange::default(),
            current_year,
            layout_params: LayoutParams::default(),
            reveal: RevealState::Hidden,
        }
    }

    /// Get the year that "ongoing" events resolve to
    pub fn current_year(&self) -> Year {
        self.current_year
    }

    /// Set the year that "ongoing" events resolve to
    pub fn set_current_year(&mut self, current_year: Year) {
        self.current_year = current_year;
        self.re_calculate();
    }

    /// Get the layout params
    pub fn layout_params(&self) -> LayoutParams {
        self.layout_params
    }

    ///
    pub fn set_layout_params(&mut self, layout_params: LayoutParams) {
        self.layout_params = layout_params;
        self.re_calculate();
    }

    /// Add events to the end of the timeline's event list
    pub fn add_events(&mut self, events: Vec<Event>) {
        self.working_events
            .extend(events.into_iter().map(WorkingEvent::from));
        self.re_calculate();
    }

    /// Overwrite the list of events drawn on the timeline
    pub fn set_events(&mut self, events: Vec<Event>) {
        self.working_events = events.into_iter().map(WorkingEvent::from).collect();
        self.re_calculate();
    }

    ///
    pub fn clear_events(&mut self) {
        self.working_events.clear();
        self.re_calculate();
    }

    /// The number of events on the timeline
    pub fn event_count(&self) -> usize {
        self.working_events.len()
    }

    /// Get all information needed to draw the year markers (most recent year
    /// first)
    pub fn markers_for_drawing(&self) -> Vec<YearMarker> {
        self.markers.clone()
    }

    /// Get all information needed to draw the events, in input order
    pub fn events_for_drawing(&self) -> Vec<EventOut> {
        self.working_events
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, working)| working.into_out(index))
            .collect()
    }

    /// The total vertical extent of the timeline (display units): the larger
    /// of "year span times the per-year spacing" and "event count times the
    /// per-event spacing times the packing multiplier".  Dense short-span
    /// timelines still get breathing room, and long-span sparse timelines
    /// still get proportional spacing
    pub fn container_height(&self) -> f64 {
        if self.working_events.is_empty() {
            return 0.0;
        }
        let span_term = f64::from(self.year_range.span()) * self.layout_params.min_year_spacing;
        let packing_term = self.working_events.len() as f64
            * self.layout_params.min_year_spacing
            * self.layout_params.packing_multiplier;
        span_term.max(packing_term)
    }

    /// The range of years spanned by the marker set
    pub fn year_range(&self) -> TimelineYearRange {
        self.year_range
    }

    /// The timing of the spine's grow animation
    pub fn spine_timing(&self) -> RevealTiming {
        spine_timing()
    }

    /// Whether the entrance animation has been triggered yet
    pub fn reveal_state(&self) -> RevealState {
        self.reveal
    }

    ///
    pub fn is_revealed(&self) -> bool {
        self.reveal == RevealState::Revealed
    }

    /// To be called when the timeline scrolls into the viewport.  Returns
    /// `true` the first time only: the trigger is one-shot and does not
    /// re-arm on repeated visibility changes, so already-revealed elements
    /// are never reset or re-staggered
    pub fn trigger_visible(&mut self) -> bool {
        match self.reveal {
            RevealState::Hidden => {
                debug!("timeline became visible, starting reveal");
                self.reveal = RevealState::Revealed;
                true
            }
            RevealState::Revealed => {
                trace!("reveal trigger fired again, ignoring");
                false
            }
        }
    }

    /// Take a full snapshot of the computed layout (e.g. for serialising)
    pub fn layout(&self) -> TimelineLayout {
        TimelineLayout {
            markers: self.markers_for_drawing(),
            events: self.events_for_drawing(),
            container_height: self.container_height(),
            year_range: self.year_range,
            spine_timing: self.spine_timing(),
        }
    }

    /// Re-run all calculations
    fn re_calculate(&mut self) {
        debug!("laying out {} events", self.working_events.len());
        self.update_durations();
        self.update_markers_and_year_range();
        self.calculate_vertical_positions();
        self.calculate_same_year_offsets();
        self.calculate_overlap_offsets();
    }

    /// Resolve every event's duration against the injected current year.
    /// Must run before anything that looks at duration intervals
    fn update_durations(&mut self) {
        for working in &mut self.working_events {
            working.duration_years = clamped_duration_years(&working.event, self.current_year);
        }
    }

    /// Rebuild the marker-year set and the year range it spans
    ///
    /// The synthetic "ongoing → current year" value IS part of the marker
    /// set: an ongoing event visibly runs up to now, so "now" gets a label
    /// on the axis
    fn update_markers_and_year_range(&mut self) {
        let mut marker_years: BTreeSet<Year> = BTreeSet::new();
        for working in &self.working_events {
            marker_years.insert(working.event.start_year());
            if let Some(end_year) = working.event.effective_end_year(self.current_year) {
                marker_years.insert(end_year);
            }
        }

        self.year_range = match (marker_years.first(), marker_years.last()) {
            (Some(min_year), Some(max_year)) => TimelineYearRange {
                min_year: min_year.value(),
                max_year: max_year.value(),
            },
            _ => TimelineYearRange::default(),
        };

        // Most recent year first
        let span = self.year_range.span();
        let max_year = self.year_range.max_year;
        self.markers = marker_years
            .into_iter()
            .rev()
            .enumerate()
            .map(|(index, year)| YearMarker {
                year,
                position: percent_of_span(max_year - year.value(), span),
                timing: marker_timing(index),
            })
            .collect();
    }

    /// Calculate each event's vertical position and duration-line length as
    /// percentages of the container extent
    fn calculate_vertical_positions(&mut self) {
        let span = self.year_range.span();
        let max_year = self.year_range.max_year;
        for working in &mut self.working_events {
            working.vertical_position =
                percent_of_span(max_year - working.event.start_year().value(), span);
            working.duration_length = percent_of_span(working.duration_years, span);
        }
    }

    /// Stack events that share a start year: the first stays put and each
    /// subsequent one is pushed further down by a fixed increment
    fn calculate_same_year_offsets(&mut self) {
        let step = self.layout_params.same_year_offset_step;
        for index in 0..self.working_events.len() {
            let start_year = self.working_events[index].event.start_year();
            let earlier_with_same_year = self.working_events[..index]
                .iter()
                .filter(|earlier| earlier.event.start_year() == start_year)
                .count();
            self.working_events[index].same_year_offset = earlier_with_same_year as f64 * step;
        }
    }

    /// Nudge overlapping duration lines sideways: one fixed increment per
    /// earlier-in-sequence event whose duration interval intersects this
    /// one's.  Point-in-time events draw no line, so they neither receive
    /// nor cause an offset
    fn calculate_overlap_offsets(&mut self) {
        let step = self.layout_params.overlap_offset_step;
        for index in 0..self.working_events.len() {
            if self.working_events[index].duration_years <= 0 {
                self.working_events[index].overlap_offset = 0.0;
                continue;
            }
            let overlapping_earlier = self.working_events[..index]
                .iter()
                .filter(|earlier| earlier.duration_years > 0)
                .filter(|earlier| earlier.overlaps(&self.working_events[index]))
                .count();
            self.working_events[index].overlap_offset = overlapping_earlier as f64 * step;
        }
    }
}

/// A full snapshot of a computed layout
#[derive(Debug, Clone, Serialize)]
pub struct TimelineLayout {
    pub markers: Vec<YearMarker>,
    pub events: Vec<EventOut>,
    pub container_height: f64,
    pub year_range: TimelineYearRange,
    pub spine_timing: RevealTiming,
}

#[cfg(test)]
mod test {
    use super::*;
    use lifeline_core::Title;

    fn year(value: i64) -> Year {
        Year::try_from(value).unwrap()
    }

    fn point_event(title: &str, start: i64) -> Event {
        Event::new(Title::from(title).unwrap(), year(start))
    }

    fn ranged_event(title: &str, start: i64, end: i64) -> Event {
        point_event(title, start).with_end_year(year(end))
    }

    fn engine_with(events: Vec<Event>) -> Engine {
        let mut engine = Engine::with_current_year(year(2026));
        engine.set_events(events);
        engine
    }

    #[test]
    fn markers_are_distinct_and_descending() {
        let engine = engine_with(vec![
            ranged_event("A", 2019, 2021),
            point_event("B", 2021),
            ranged_event("C", 2015, 2019),
        ]);

        let marker_years: Vec<i32> = engine
            .markers_for_drawing()
            .iter()
            .map(|marker| marker.year.value())
            .collect();
        assert_eq!(marker_years, vec![2021, 2019, 2015]);
    }

    #[test]
    fn position_is_monotonic_in_start_year() {
        let engine = engine_with(vec![
            point_event("Newest", 2025),
            point_event("Middle", 2021),
            point_event("Oldest", 2014),
        ]);

        let events = engine.events_for_drawing();
        assert!(events[0].vertical_position < events[1].vertical_position);
        assert!(events[1].vertical_position < events[2].vertical_position);
        assert_eq!(events[0].vertical_position, 0.0);
        assert_eq!(events[2].vertical_position, 100.0);
    }

    #[test]
    fn zero_span_is_safe() {
        // A single point event: min year == max year
        let engine = engine_with(vec![point_event("Only", 2024)]);

        let events = engine.events_for_drawing();
        assert!(events[0].vertical_position.is_finite());
        assert_eq!(events[0].vertical_position, 0.0);
        assert_eq!(events[0].duration_length, 0.0);
        assert!(engine.container_height() > 0.0);

        let markers = engine.markers_for_drawing();
        assert_eq!(markers.len(), 1);
        assert!(markers[0].position.is_finite());
    }

    #[test]
    fn inverted_range_clamps_duration_to_zero() {
        let engine = engine_with(vec![ranged_event("Backwards", 2024, 2020)]);

        let events = engine.events_for_drawing();
        assert_eq!(events[0].duration_length, 0.0);
        assert!(events[0].duration_length >= 0.0);
    }

    #[test]
    fn same_year_events_stack_in_input_order() {
        let engine = engine_with(vec![
            point_event("A", 2020),
            point_event("B", 2020),
            point_event("C", 2020),
        ]);

        let offsets: Vec<f64> = engine
            .events_for_drawing()
            .iter()
            .map(|event| event.same_year_offset)
            .collect();
        assert_eq!(offsets, vec![0.0, 180.0, 360.0]);
    }

    #[test]
    fn overlap_offsets_accumulate() {
        let engine = engine_with(vec![
            ranged_event("A", 2020, 2022),
            ranged_event("B", 2021, 2023),
            ranged_event("C", 2022, 2024),
        ]);

        let events = engine.events_for_drawing();
        assert_eq!(events[0].overlap_offset, 0.0);
        // B overlaps A
        assert_eq!(events[1].overlap_offset, 8.0);
        // C overlaps B, and touches A at the shared boundary year 2022
        assert_eq!(events[2].overlap_offset, 16.0);
    }

    #[test]
    fn point_events_neither_cause_nor_receive_overlap_offsets() {
        let engine = engine_with(vec![
            point_event("Point", 2021),
            ranged_event("Range", 2020, 2022),
        ]);

        let events = engine.events_for_drawing();
        assert_eq!(events[0].overlap_offset, 0.0);
        assert_eq!(events[1].overlap_offset, 0.0);
    }

    #[test]
    fn identical_ranges_are_pushed_down_and_right() {
        let engine = engine_with(vec![
            ranged_event("A", 2020, 2022),
            ranged_event("B", 2020, 2022),
        ]);

        let events = engine.events_for_drawing();
        assert_eq!(events[1].same_year_offset, 180.0);
        assert_eq!(events[1].overlap_offset, 8.0);
    }

    #[test]
    fn reveal_is_one_shot() {
        let mut engine = engine_with(vec![point_event("A", 2024), point_event("B", 2020)]);
        let schedule_before: Vec<RevealTiming> = engine
            .events_for_drawing()
            .iter()
            .map(|event| event.timing)
            .collect();

        assert_eq!(engine.reveal_state(), RevealState::Hidden);
        assert!(engine.trigger_visible());
        assert!(engine.is_revealed());

        // Firing again is a no-op: no reset, no re-stagger
        assert!(!engine.trigger_visible());
        assert_eq!(engine.reveal_state(), RevealState::Revealed);
        let schedule_after: Vec<RevealTiming> = engine
            .events_for_drawing()
            .iter()
            .map(|event| event.timing)
            .collect();
        assert_eq!(schedule_before, schedule_after);
    }

    #[test]
    fn reveal_survives_relayout() {
        let mut engine = engine_with(vec![point_event("A", 2024)]);
        engine.trigger_visible();

        // A layout pass is a pure recomputation; the one-shot reveal state
        // is the only thing carried across
        engine.add_events(vec![point_event("B", 2020)]);
        assert!(engine.is_revealed());
    }

    #[test]
    fn empty_timeline_is_renderable() {
        let engine = engine_with(Vec::new());
        assert!(engine.markers_for_drawing().is_empty());
        assert!(engine.events_for_drawing().is_empty());
        assert_eq!(engine.container_height(), 0.0);
    }

    #[test]
    fn container_height_takes_the_larger_sizing_term() {
        // Dense short-span timeline: the packing term wins
        // (span 1 * 200 = 200 vs 4 events * 200 * 1.5 = 1200)
        let engine = engine_with(vec![
            point_event("A", 2020),
            point_event("B", 2020),
            point_event("C", 2021),
            point_event("D", 2021),
        ]);
        assert_eq!(engine.container_height(), 1200.0);

        // Sparse long-span timeline: the span term wins
        // (span 50 * 200 = 10000 vs 2 events * 200 * 1.5 = 600)
        let engine = engine_with(vec![point_event("A", 2020), point_event("B", 1970)]);
        assert_eq!(engine.container_height(), 10000.0);
    }

    #[test]
    fn changing_the_current_year_moves_ongoing_events() {
        let mut engine = engine_with(vec![
            point_event("Anchor", 2020),
            point_event("Start", 2022).ongoing(),
        ]);
        let length_2026 = engine.events_for_drawing()[1].duration_length;

        engine.set_current_year(year(2030));
        let length_2030 = engine.events_for_drawing()[1].duration_length;

        // Ongoing is evaluated at layout time, not frozen
        assert!(length_2030 > 0.0);
        assert_ne!(length_2026, length_2030);
        assert_eq!(engine.year_range().max_year, 2030);
    }

    #[test]
    fn layout_snapshot_serialises() {
        let engine = engine_with(vec![ranged_event("A", 2020, 2022)]);
        let json = serde_json::to_value(engine.layout()).unwrap();
        assert!(json.get("markers").is_some());
        assert!(json.get("container_height").is_some());
    }

    // The résumé scenario: two point roles, a lab position, and a degree,
    // with the current year injected as 2026
    #[test]
    fn resume_scenario() {
        let engine = engine_with(vec![
            point_event("Engineer A", 2025),
            point_event("Engineer B", 2024),
            point_event("Lab", 2024).ongoing(),
            point_event("University", 2022).ongoing(),
        ]);

        // Ongoing injects the current year into the marker set
        let marker_years: Vec<i32> = engine
            .markers_for_drawing()
            .iter()
            .map(|marker| marker.year.value())
            .collect();
        assert_eq!(marker_years, vec![2026, 2025, 2024, 2022]);

        let events = engine.events_for_drawing();
        let university = &events[3];

        // Earliest start and still ongoing: longest line, furthest down
        for other in &events[..3] {
            assert!(university.duration_length > other.duration_length);
            assert!(university.vertical_position > other.vertical_position);
        }
        assert_eq!(university.vertical_position, 100.0);
        assert_eq!(university.duration_length, 100.0);

        // Lab starts the same year as Engineer B and comes later in the
        // input, so it stacks below; its duration line has nothing earlier
        // to collide with
        let lab = &events[2];
        assert_eq!(lab.same_year_offset, 180.0);
        assert_eq!(lab.overlap_offset, 0.0);

        // University's line overlaps Lab's
        assert_eq!(university.overlap_offset, 8.0);
    }
}
