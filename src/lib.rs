//! Channel sidebar engine for team-messaging clients.
//!
//! The sidebar is a list of categories, each holding an ordered canonical
//! sequence of channel ids. Archived channels stay in the sequence but are
//! skipped when the list is drawn, so drag-and-drop positions reported
//! against the visible list have to be translated back onto the canonical
//! one. That translation, the category projections, and the multi-select
//! state machine (click, ctrl-click, shift-click ranges across category
//! boundaries) live in [`ops`]; the plain data types live in [`model`].

pub mod model;
pub mod ops;
pub mod util;
