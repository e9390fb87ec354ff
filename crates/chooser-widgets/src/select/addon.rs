//! Decorations rendered beside the control.

use ratatui::style::Style;

/// Class every addon carries, first in its class list.
pub const ADDON_CLASS: &str = "input-addon";

/// A short piece of text attached to the left or right of the control, like
/// a currency sign or a unit.
///
/// Classes are free-form tags for hosts that style addons themselves; the
/// widget only normalizes them.
#[derive(Debug, Clone, PartialEq)]
pub struct Addon {
    text: String,
    classes: Vec<String>,
    style: Style,
}

impl Addon {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            classes: Vec::new(),
            style: Style::default(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Rewrite the class list to `[ADDON_CLASS, ..own classes]`, dropping
    /// duplicates while keeping first occurrence order.
    pub(crate) fn normalized(mut self) -> Self {
        let mut classes = vec![ADDON_CLASS.to_string()];
        for class in self.classes.drain(..) {
            if !classes.contains(&class) {
                classes.push(class);
            }
        }
        self.classes = classes;
        self
    }
}
