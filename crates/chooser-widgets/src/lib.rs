//! Widgets for the **chooser** TUI library.
//!
//! Every widget implements [`chooser_core::Component`], so it can be embedded
//! in any [`chooser_core::Model`] and placed anywhere in a [`ratatui`]
//! layout.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`select`] | Searchable single-choice select with a drop-down menu |
//! | [`chrome`] | Border and color helpers for focus and validation state |
//! | [`runeutil`] | Display-width aware truncation and padding |

pub mod chrome;
pub mod runeutil;
pub mod select;

pub use select::{Select, SelectOption};
