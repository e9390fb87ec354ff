//! Keyboard traversal over the visible options.
//!
//! Nothing is cached: every call scans the live `hidden` flags, so a filter
//! change is picked up by the very next keypress.

use super::option::{OptionId, SelectOption};

/// The first option after `from` that is not hidden, wrapping past the end.
///
/// Returns `None` when no *other* option is visible, in which case focus
/// stays where it is. An unknown `from` starts the scan at the top.
pub fn next_visible<T>(options: &[SelectOption<T>], from: OptionId) -> Option<OptionId> {
    let Some(pos) = options.iter().position(|o| o.id() == from) else {
        return first_visible(options);
    };
    let len = options.len();
    (1..len)
        .map(|step| &options[(pos + step) % len])
        .find(|o| !o.is_hidden())
        .map(|o| o.id())
}

/// The first option before `from` that is not hidden, wrapping past the start.
pub fn prev_visible<T>(options: &[SelectOption<T>], from: OptionId) -> Option<OptionId> {
    let Some(pos) = options.iter().position(|o| o.id() == from) else {
        return last_visible(options);
    };
    let len = options.len();
    (1..len)
        .map(|step| &options[(pos + len - step) % len])
        .find(|o| !o.is_hidden())
        .map(|o| o.id())
}

pub fn first_visible<T>(options: &[SelectOption<T>]) -> Option<OptionId> {
    options.iter().find(|o| !o.is_hidden()).map(|o| o.id())
}

pub fn last_visible<T>(options: &[SelectOption<T>]) -> Option<OptionId> {
    options.iter().rev().find(|o| !o.is_hidden()).map(|o| o.id())
}
