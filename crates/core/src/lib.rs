// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Lifeline project*
//!
//! This crate defines the basic datatypes used across the Lifeline project
//! (layout engine, inspection CLI).
//!
//! This crate is designed to be used by the rest of the Lifeline project, as
//! well as by other 3rd party projects that want to feed events into a
//! Lifeline layout (e.g. from a JSON document).
//!
//! This crate aims to provide APIs for each type so that if a type is
//! instantiated, the developer can be sure it's valid.  The one deliberate
//! exception is an [`Event`]'s year range: an event with an end year before
//! its start year can be constructed, and the layout engine clamps the
//! resulting duration to zero rather than rejecting the event.
//!

mod event;
mod title;
mod year;

pub use event::*;
pub use title::*;
pub use year::*;
