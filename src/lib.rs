//! Roster - Option-List Derivation for Chat Surfaces
//!
//! Converts raw report and personal-detail snapshots into selectable
//! "option" records for chat sidebars, search, new-chat pickers, and
//! member-invite flows: filtering, ranking, and token-wise search matching
//! over in-memory collections.

pub mod context;
pub mod error;
pub mod icons;
pub mod locale;
pub mod model;
pub mod option;
pub mod pipeline;
pub mod search;

pub use error::{Result, RosterError};
