// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Lifeline project*
//!
//! This crate computes the layout of a reverse-chronological vertical
//! timeline (the résumé/portfolio kind: most recent year at the top).
//!
//! The core of the crate is a renderer-agnostic engine responsible for:
//!
//! - Managing the events that are to be drawn
//! - Deriving the marker years and the year range they span
//! - Positioning every event along the axis and sizing its duration line
//! - Collision avoidance (stacking co-dated events, nudging overlapping
//!   duration lines sideways)
//! - Sequencing the one-shot staggered entrance reveal
//!
//! The engine performs pure computation over in-memory data.  It has no I/O
//! and it never fails: degenerate input (an empty event list, a zero year
//! span, an inverted year range) is clamped to something renderable rather
//! than surfaced as an error.
//!
//! Rendering is left to the caller.  Any surface that can absolutely
//! position boxes and lines given percentage/pixel coordinates can consume
//! the engine's output, and any animation driver that can run
//! delay-parameterised transitions can consume its reveal schedule.
//!

pub mod engine;

pub use engine::*;
