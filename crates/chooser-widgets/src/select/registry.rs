//! Ordered option storage with a display-text search index, groups, menu rows
//! and the shadow control mirror.

use super::option::{GroupId, GroupState, OptionGroup, OptionId, SelectOption};
use std::collections::HashMap;

/// One row of the rendered menu, in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuRow {
    /// A selectable option.
    Option(OptionId),
    /// The header of a group; its members follow it.
    Header(GroupId),
    /// A horizontal separator.
    Divider,
}

/// A `(value, label)` pair of the shadow control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowEntry {
    pub value: String,
    pub label: String,
}

/// Plain mirror of the options, kept for form submission and for hosts that
/// cannot drive the custom menu. Rendering never reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShadowControl {
    pub(crate) entries: Vec<(OptionId, ShadowEntry)>,
    pub(crate) form_id: Option<String>,
    pub(crate) disabled: bool,
    pub(crate) read_only: bool,
}

impl ShadowControl {
    pub fn entries(&self) -> impl Iterator<Item = &ShadowEntry> {
        self.entries.iter().map(|(_, e)| e)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn form_id(&self) -> Option<&str> {
        self.form_id.as_deref()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }
}

/// Ordered collection of options.
///
/// Insertion order drives navigation and rendering. Options are also indexed
/// by display text; appending a second option with the same text silently
/// repoints the index at the newer option (the older one stays in the
/// sequence and keeps filtering normally).
pub struct OptionRegistry<T> {
    options: Vec<SelectOption<T>>,
    index: HashMap<String, OptionId>,
    groups: Vec<GroupState>,
    rows: Vec<MenuRow>,
    shadow: ShadowControl,
}

impl<T> Default for OptionRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OptionRegistry<T> {
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
            index: HashMap::new(),
            groups: Vec::new(),
            rows: Vec::new(),
            shadow: ShadowControl::default(),
        }
    }

    /// Append an option at the end and return its id.
    ///
    /// Duplicate keys are accepted. An option whose id is already registered
    /// (a clone of a registered option) is given a fresh identity first.
    pub fn append(&mut self, option: SelectOption<T>) -> OptionId {
        let id = self.push(option);
        self.rows.push(MenuRow::Option(id));
        id
    }

    fn push(&mut self, mut option: SelectOption<T>) -> OptionId {
        if self.contains(option.id) {
            option.id = OptionId::next();
        }
        option.selected = false;
        option.hidden = false;
        let id = option.id;
        self.index.insert(option.display_value().to_string(), id);
        self.shadow.entries.push((
            id,
            ShadowEntry {
                value: option.key().to_string(),
                label: option.display_value().to_string(),
            },
        ));
        self.options.push(option);
        id
    }

    /// Append a group header followed by the group's options.
    pub fn add_group(&mut self, group: OptionGroup<T>) -> GroupId {
        let (label, pending) = group.into_parts();
        let gid = GroupId(self.groups.len());
        self.rows.push(MenuRow::Header(gid));
        let mut members = Vec::with_capacity(pending.len());
        for option in pending {
            let id = self.push(option);
            self.rows.push(MenuRow::Option(id));
            members.push(id);
        }
        self.groups.push(GroupState {
            label,
            members,
            hidden: false,
        });
        gid
    }

    /// Append a divider row.
    pub fn divider(&mut self) {
        self.rows.push(MenuRow::Divider);
    }

    /// Remove an option. Absent ids are a no-op returning `None`.
    ///
    /// The option is deselected before it is detached from the rows, the
    /// shadow control, its group and the search index.
    pub fn remove(&mut self, id: OptionId) -> Option<SelectOption<T>> {
        let pos = self.position(id)?;
        self.options[pos].selected = false;
        self.rows.retain(|row| *row != MenuRow::Option(id));
        self.shadow.entries.retain(|(eid, _)| *eid != id);
        for group in &mut self.groups {
            group.members.retain(|m| *m != id);
        }
        let removed = self.options.remove(pos);
        if self.index.get(removed.display_value()) == Some(&id) {
            self.index.remove(removed.display_value());
        }
        Some(removed)
    }

    /// Remove every option, group and divider.
    pub fn remove_all(&mut self) -> Vec<SelectOption<T>> {
        let ids: Vec<_> = self.options.iter().map(|o| o.id).collect();
        let removed = ids.into_iter().filter_map(|id| self.remove(id)).collect();
        self.groups.clear();
        self.rows.clear();
        removed
    }

    /// The option at `index` in insertion order.
    ///
    /// Out-of-range indexes yield `None` rather than an error; callers such as
    /// `select_at` rely on that to ignore bad indexes silently.
    pub fn option_at(&self, index: usize) -> Option<&SelectOption<T>> {
        self.options.get(index)
    }

    pub fn get(&self, id: OptionId) -> Option<&SelectOption<T>> {
        self.options.iter().find(|o| o.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: OptionId) -> Option<&mut SelectOption<T>> {
        self.options.iter_mut().find(|o| o.id == id)
    }

    pub fn position(&self, id: OptionId) -> Option<usize> {
        self.options.iter().position(|o| o.id == id)
    }

    pub fn contains(&self, id: OptionId) -> bool {
        self.position(id).is_some()
    }

    /// Look an option up through the search index.
    pub fn by_display(&self, display_value: &str) -> Option<&SelectOption<T>> {
        self.index.get(display_value).and_then(|id| self.get(*id))
    }

    pub fn options(&self) -> &[SelectOption<T>] {
        &self.options
    }

    pub(crate) fn options_mut(&mut self) -> &mut [SelectOption<T>] {
        &mut self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.key()).collect()
    }

    pub fn values(&self) -> Vec<&T> {
        self.options.iter().map(|o| o.value()).collect()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.options.iter().any(|o| o.key() == key)
    }

    pub fn contains_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.options.iter().any(|o| o.value() == value)
    }

    pub fn groups(&self) -> &[GroupState] {
        &self.groups
    }

    pub fn group(&self, id: GroupId) -> Option<&GroupState> {
        self.groups.get(id.0)
    }

    pub(crate) fn groups_mut(&mut self) -> &mut [GroupState] {
        &mut self.groups
    }

    pub fn rows(&self) -> &[MenuRow] {
        &self.rows
    }

    pub fn shadow(&self) -> &ShadowControl {
        &self.shadow
    }

    pub(crate) fn shadow_mut(&mut self) -> &mut ShadowControl {
        &mut self.shadow
    }

    /// Ids of the options currently marked selected. The widget keeps this at
    /// zero or one entry.
    pub fn selected_ids(&self) -> Vec<OptionId> {
        self.options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.id)
            .collect()
    }
}
