// SPDX-License-Identifier: MIT

//!
//! The Lifeline event type
//!

use crate::{Title, Year};
use serde::{Deserialize, Serialize};

/// A single timeline entry
///
/// An event starts in `start_year` and either:
///
/// - has no end (a point-in-time event),
/// - ends in `end_year`, or
/// - is ongoing, in which case its effective end year is whatever the
///   current year is at layout time (see [`Event::effective_end_year`]).
///
/// The year range is deliberately NOT validated: an event whose end year
/// precedes its start year can be constructed and deserialised, and the
/// layout engine clamps the resulting duration to zero.  The layout must
/// always produce a renderable result, so malformed input is a rendering
/// imperfection, not an error
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Event {
    /// The event's title
    title: Title,

    /// When the event begins
    start_year: Year,

    /// When the event ends (if it has)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_year: Option<Year>,

    /// Whether the event is still running as of "now"
    #[serde(default)]
    is_ongoing: bool,

    /// Free-form description.  Opaque to the layout engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    /// Free-form location.  Opaque to the layout engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<String>,
}

impl Event {
    /// Create a new point-in-time event
    pub fn new(title: Title, start_year: Year) -> Self {
        Event {
            title,
            start_year,
            end_year: None,
            is_ongoing: false,
            description: None,
            location: None,
        }
    }

    /// Set the event's end year
    pub fn with_end_year(mut self, end_year: Year) -> Self {
        self.end_year = Some(end_year);
        self
    }

    /// Mark the event as ongoing
    pub fn ongoing(mut self) -> Self {
        self.is_ongoing = true;
        self
    }

    /// Set the event's description
    pub fn with_description<S: ToString>(mut self, description: S) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Set the event's location
    pub fn with_location<S: ToString>(mut self, location: S) -> Self {
        self.location = Some(location.to_string());
        self
    }

    /// Get the event's title
    pub fn title(&self) -> &Title {
        &self.title
    }

    /// Get the event's start year
    pub fn start_year(&self) -> Year {
        self.start_year
    }

    /// Get the event's end year (as set, ignoring the ongoing flag)
    pub fn end_year(&self) -> Option<Year> {
        self.end_year
    }

    /// Whether the event is ongoing
    pub fn is_ongoing(&self) -> bool {
        self.is_ongoing
    }

    /// Get the event's description
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Get the event's location
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// The year the event effectively ends: the end year if one is set, the
    /// injected current year if the event is ongoing, and `None` for a
    /// point-in-time event.
    ///
    /// An explicit end year wins over the ongoing flag if both are set
    pub fn effective_end_year(&self, current_year: Year) -> Option<Year> {
        match (self.end_year, self.is_ongoing) {
            (Some(end_year), _) => Some(end_year),
            (None, true) => Some(current_year),
            (None, false) => None,
        }
    }
}
