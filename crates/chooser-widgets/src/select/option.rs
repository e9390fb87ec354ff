//! Option and group entities owned by an [`OptionRegistry`](super::registry::OptionRegistry).

use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of an option inside its registry.
///
/// Two options with identical keys, labels and values are still different
/// options; code that needs "this exact option" holds an `OptionId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionId(u64);

impl OptionId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        OptionId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// One selectable entry: a key (submitted through the shadow control), the
/// text shown and searched, and the typed value.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption<T> {
    pub(crate) id: OptionId,
    key: String,
    display_value: String,
    value: T,
    pub(crate) selected: bool,
    pub(crate) hidden: bool,
}

impl<T> SelectOption<T> {
    /// Create an option. It gets a fresh identity even if another option with
    /// the same fields exists.
    pub fn new(key: impl Into<String>, display_value: impl Into<String>, value: T) -> Self {
        Self {
            id: OptionId::next(),
            key: key.into(),
            display_value: display_value.into(),
            value,
            selected: false,
            hidden: false,
        }
    }

    pub fn id(&self) -> OptionId {
        self.id
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn display_value(&self) -> &str {
        &self.display_value
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Whether this option is the widget's current selection.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Whether the current search query filtered this option out.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

impl SelectOption<String> {
    /// An option whose key, label and value are the same text.
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(text.clone(), text.clone(), text)
    }
}

/// Identity of a group inside its registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub(crate) usize);

/// A labeled cluster of options rendered under a common header.
///
/// Build the group with its options, then hand it to
/// [`Select::add_group`](super::Select::add_group). The group is added once;
/// it only goes away when every option is removed.
#[derive(Debug, Clone)]
pub struct OptionGroup<T> {
    label: String,
    pending: Vec<SelectOption<T>>,
}

impl<T> OptionGroup<T> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            pending: Vec::new(),
        }
    }

    /// Add an option to the group (builder style).
    pub fn option(mut self, option: SelectOption<T>) -> Self {
        self.pending.push(option);
        self
    }

    /// Add several options to the group (builder style).
    pub fn options(mut self, options: impl IntoIterator<Item = SelectOption<T>>) -> Self {
        self.pending.extend(options);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn into_parts(self) -> (String, Vec<SelectOption<T>>) {
        (self.label, self.pending)
    }
}

/// A group after it was added to a registry: its members are references to
/// options the registry owns.
#[derive(Debug, Clone)]
pub struct GroupState {
    pub(crate) label: String,
    pub(crate) members: Vec<OptionId>,
    pub(crate) hidden: bool,
}

impl GroupState {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn members(&self) -> &[OptionId] {
        &self.members
    }

    /// Derived from the members after every filter pass.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_not_value_equality() {
        let a = SelectOption::new("us", "United States", 1);
        let b = SelectOption::new("us", "United States", 1);
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn text_option_uses_same_text_everywhere() {
        let o = SelectOption::text("Oslo");
        assert_eq!(o.key(), "Oslo");
        assert_eq!(o.display_value(), "Oslo");
        assert_eq!(o.value(), "Oslo");
        assert!(!o.is_selected());
        assert!(!o.is_hidden());
    }

    #[test]
    fn group_collects_options_in_order() {
        let group = OptionGroup::new("Nordics")
            .option(SelectOption::text("Norway"))
            .options([SelectOption::text("Sweden"), SelectOption::text("Finland")]);
        assert_eq!(group.label(), "Nordics");
        let (_, opts) = group.into_parts();
        let names: Vec<_> = opts.iter().map(|o| o.display_value().to_string()).collect();
        assert_eq!(names, vec!["Norway", "Sweden", "Finland"]);
    }
}
