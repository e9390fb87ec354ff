//! Searchable single-choice select with a drop-down menu.
//!
//! [`Select`] shows the chosen option inside a bordered control. Opening it
//! drops a menu with an optional search box, group headers, dividers and the
//! options themselves. Typing narrows the options live; arrow keys move over
//! the ones still visible; Enter, Space or Tab picks one.
//!
//! Only one menu is open at a time across every select sharing a
//! [`MenuRegistry`] (by default [`SharedMenuRegistry::global`]).
//!
//! # Example
//!
//! ```
//! use chooser_widgets::select::{OptionGroup, Select, SelectOption};
//!
//! let mut country = Select::new("Country").with_placeholder("Pick a country");
//! country.append(SelectOption::new("us", "United States", "USA"));
//! country.add_group(
//!     OptionGroup::new("Europe")
//!         .option(SelectOption::new("uk", "United Kingdom", "GBR"))
//!         .option(SelectOption::new("fr", "France", "FRA")),
//! );
//! country.set_value(&"GBR", false);
//! assert_eq!(country.selected_label(), "United Kingdom");
//! ```

pub mod addon;
pub mod filter;
pub mod keys;
pub mod menu;
pub mod navigator;
pub mod option;
pub mod registry;
pub mod selection;
pub mod validation;
pub mod view;

pub use addon::Addon;
pub use filter::{NoResults, SearchFilter, DEFAULT_NO_MATCH_TEXT};
pub use keys::{Binding, KeyCombination, SelectKeyBindings};
pub use menu::{MenuFocus, MenuId, MenuRegistry, MenuState, SharedMenuRegistry};
pub use option::{GroupId, GroupState, OptionGroup, OptionId, SelectOption};
pub use registry::{MenuRow, OptionRegistry, ShadowControl, ShadowEntry};
pub use selection::{HandlerId, SelectionHandler};
pub use validation::{ValidationResult, Validator};
pub use view::DropPosition;

use chooser_core::{Command, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use menu::MenuHandle;
use navigator::{first_visible, last_visible, next_visible, prev_visible};
use ratatui::layout::{Position, Rect};
use ratatui::style::Color;
use ratatui::text::Line;
use ratatui::Frame;
use selection::SelectionController;
use std::cell::Cell;
use std::sync::Arc;
use validation::FieldValidation;
use view::RowItem;

/// Messages for the select component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press, routed here by the parent while the select is focused.
    KeyPress(KeyEvent),
    /// A mouse event. Parents should forward every mouse event to every
    /// select so clicks outside can close an open menu. A press on another
    /// select's open menu is ignored until the next press.
    Mouse(MouseEvent),
    /// Open the menu, subject to the enabled and read-only gates.
    Open,
    Close,
    /// Emitted after the user picked an option: its position and key.
    Selected { index: usize, key: String },
}

/// Behavior and appearance switches.
#[derive(Debug, Clone)]
pub struct SelectConfig {
    pub searchable: bool,
    pub case_sensitive_search: bool,
    pub read_only: bool,
    pub enabled: bool,
    /// Border, highlight and left-addon tint while focused.
    pub focus_color: Color,
    /// Shown in the control when nothing is selected.
    pub placeholder: String,
    /// Menu rows shown before scrolling.
    pub max_visible: usize,
    pub position: DropPosition,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            searchable: true,
            case_sensitive_search: false,
            read_only: false,
            enabled: true,
            focus_color: Color::Blue,
            placeholder: "Select...".to_string(),
            max_visible: 8,
            position: DropPosition::Below,
        }
    }
}

/// A searchable drop-down select holding options of type `T`.
///
/// User interaction (keys, mouse) is gated by `enabled` and `read_only`.
/// The programmatic selection methods ([`select`](Select::select),
/// [`select_at`](Select::select_at), [`set_value`](Select::set_value),
/// [`clear`](Select::clear)) always apply.
pub struct Select<T> {
    label: String,
    registry: OptionRegistry<T>,
    filter: SearchFilter,
    selection: SelectionController<T>,
    menu: MenuHandle,
    validation: FieldValidation<T>,
    config: SelectConfig,
    keys: SelectKeyBindings,
    left_addon: Option<Addon>,
    right_addon: Option<Addon>,
    focus: bool,
    // Written by `view`, read by mouse hit-testing.
    area: Cell<Rect>,
    anchor: Cell<Rect>,
    menu_area: Cell<Rect>,
    list_area: Cell<Rect>,
    scroll: Cell<usize>,
}

impl<T> Select<T> {
    /// Create an empty select. `label` is shown in the control's border.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            registry: OptionRegistry::new(),
            filter: SearchFilter::new(),
            selection: SelectionController::new(),
            menu: MenuHandle::new(Arc::new(SharedMenuRegistry::global())),
            validation: FieldValidation::new(),
            config: SelectConfig::default(),
            keys: SelectKeyBindings::default(),
            left_addon: None,
            right_addon: None,
            focus: false,
            area: Cell::new(Rect::default()),
            anchor: Cell::new(Rect::default()),
            menu_area: Cell::new(Rect::default()),
            list_area: Cell::new(Rect::default()),
            scroll: Cell::new(0),
        }
    }

    /// Create a select pre-filled with `options`.
    pub fn with_options(label: impl Into<String>, options: impl IntoIterator<Item = SelectOption<T>>) -> Self {
        let mut select = Self::new(label);
        select.add_options(options);
        select
    }

    // --- builders ---

    pub fn with_config(mut self, config: SelectConfig) -> Self {
        self.set_read_only(config.read_only);
        self.set_enabled(config.enabled);
        self.config = config;
        self
    }

    /// Use `registry` instead of the process-wide one.
    pub fn with_menu_registry(mut self, registry: impl MenuRegistry + 'static) -> Self {
        self.menu.rebind(Arc::new(registry));
        self
    }

    pub fn with_searchable(mut self, searchable: bool) -> Self {
        self.set_searchable(searchable);
        self
    }

    pub fn with_case_sensitive_search(mut self, case_sensitive: bool) -> Self {
        self.config.case_sensitive_search = case_sensitive;
        self
    }

    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.set_read_only(read_only);
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.set_enabled(enabled);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.placeholder = placeholder.into();
        self
    }

    pub fn with_focus_color(mut self, color: Color) -> Self {
        self.config.focus_color = color;
        self
    }

    pub fn with_max_visible(mut self, rows: usize) -> Self {
        self.config.max_visible = rows.max(1);
        self
    }

    pub fn with_position(mut self, position: DropPosition) -> Self {
        self.config.position = position;
        self
    }

    pub fn with_no_match_text(mut self, text: impl Into<String>) -> Self {
        self.filter.set_no_match_text(text);
        self
    }

    /// Replace the no-results row with a fixed line.
    pub fn with_no_results(mut self, line: Line<'static>) -> Self {
        self.filter.set_no_results(NoResults::Custom(line));
        self
    }

    pub fn with_key_bindings(mut self, keys: SelectKeyBindings) -> Self {
        self.keys = keys;
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.validation.set_required(required);
        self
    }

    pub fn with_required_message(mut self, message: impl Into<String>) -> Self {
        self.validation.set_required_message(message);
        self
    }

    pub fn with_left_addon(mut self, addon: Addon) -> Self {
        self.set_left_addon(addon);
        self
    }

    pub fn with_right_addon(mut self, addon: Addon) -> Self {
        self.set_right_addon(addon);
        self
    }

    // --- configuration ---

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Turning search off also clears any active filter.
    pub fn set_searchable(&mut self, searchable: bool) {
        self.config.searchable = searchable;
        if !searchable {
            self.filter.clear(&mut self.registry);
            if self.menu.focus() == Some(MenuFocus::Search) {
                self.menu.set_focus(None);
            }
        }
    }

    pub fn set_case_sensitive_search(&mut self, case_sensitive: bool) {
        self.config.case_sensitive_search = case_sensitive;
        self.refilter();
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.config.read_only = read_only;
        self.registry.shadow_mut().read_only = read_only;
        if read_only {
            self.menu.close();
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.config.read_only
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
        self.registry.shadow_mut().disabled = !enabled;
        if !enabled {
            self.menu.close();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.config.placeholder = placeholder.into();
    }

    pub fn set_focus_color(&mut self, color: Color) {
        self.config.focus_color = color;
    }

    pub fn set_no_match_text(&mut self, text: impl Into<String>) {
        self.filter.set_no_match_text(text);
    }

    pub fn set_no_results(&mut self, no_results: NoResults) {
        self.filter.set_no_results(no_results);
    }

    pub fn drop_up(&mut self) {
        self.config.position = DropPosition::Above;
    }

    pub fn drop_down(&mut self) {
        self.config.position = DropPosition::Below;
    }

    /// Form the shadow control submits with.
    pub fn set_form_id(&mut self, form_id: impl Into<String>) {
        self.registry.shadow_mut().form_id = Some(form_id.into());
    }

    pub fn shadow(&self) -> &ShadowControl {
        self.registry.shadow()
    }

    pub fn key_bindings(&self) -> &SelectKeyBindings {
        &self.keys
    }

    // --- addons ---

    /// Attach an addon on the left, replacing any previous one.
    pub fn set_left_addon(&mut self, addon: Addon) {
        self.left_addon = Some(addon.normalized());
    }

    pub fn set_right_addon(&mut self, addon: Addon) {
        self.right_addon = Some(addon.normalized());
    }

    pub fn remove_left_addon(&mut self) -> Option<Addon> {
        self.left_addon.take()
    }

    pub fn remove_right_addon(&mut self) -> Option<Addon> {
        self.right_addon.take()
    }

    pub fn left_addon(&self) -> Option<&Addon> {
        self.left_addon.as_ref()
    }

    pub fn right_addon(&self) -> Option<&Addon> {
        self.right_addon.as_ref()
    }

    // --- options ---

    pub fn append(&mut self, option: SelectOption<T>) -> OptionId {
        let id = self.registry.append(option);
        self.refilter();
        id
    }

    pub fn add_options(&mut self, options: impl IntoIterator<Item = SelectOption<T>>) -> Vec<OptionId> {
        let ids = options
            .into_iter()
            .map(|option| self.registry.append(option))
            .collect();
        self.refilter();
        ids
    }

    pub fn add_group(&mut self, group: OptionGroup<T>) -> GroupId {
        let id = self.registry.add_group(group);
        self.refilter();
        id
    }

    pub fn add_divider(&mut self) {
        self.registry.divider();
    }

    /// Remove an option. Removing the selected option clears the selection
    /// and the displayed label.
    pub fn remove_option(&mut self, id: OptionId) -> Option<SelectOption<T>> {
        let removed = self.registry.remove(id)?;
        if self.selection.forget(id) {
            log::debug!("select {:?}: removed the selected option", self.label);
        }
        if self.menu.focus() == Some(MenuFocus::Option(id)) {
            let fallback = first_visible(self.registry.options()).map(MenuFocus::Option);
            self.menu.set_focus(fallback.or(self.search_focus()));
        }
        self.refilter();
        Some(removed)
    }

    pub fn remove_options(&mut self, ids: impl IntoIterator<Item = OptionId>) -> Vec<SelectOption<T>> {
        ids.into_iter().filter_map(|id| self.remove_option(id)).collect()
    }

    /// Remove every option, then [`clear`](Select::clear) the selection.
    pub fn remove_all_options(&mut self) -> Vec<SelectOption<T>> {
        let removed = self.registry.remove_all();
        self.clear();
        if self.menu.is_open() {
            self.menu.set_focus(self.search_focus());
        }
        self.refilter();
        removed
    }

    pub fn option_at(&self, index: usize) -> Option<&SelectOption<T>> {
        self.registry.option_at(index)
    }

    pub fn option(&self, id: OptionId) -> Option<&SelectOption<T>> {
        self.registry.get(id)
    }

    pub fn options(&self) -> &[SelectOption<T>] {
        self.registry.options()
    }

    pub fn registry(&self) -> &OptionRegistry<T> {
        &self.registry
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.registry.keys()
    }

    pub fn values(&self) -> Vec<&T> {
        self.registry.values()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.registry.contains_key(key)
    }

    pub fn contains_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.registry.contains_value(value)
    }

    // --- selection ---

    /// Select `id`. Unless `silent`, selection handlers run in registration
    /// order before this returns. Returns whether the selection changed.
    pub fn select(&mut self, id: OptionId, silent: bool) -> bool {
        if !self.selection.select(&mut self.registry, id) {
            return false;
        }
        if !silent {
            if let Some(option) = self.registry.get(id) {
                let validation = &mut self.validation;
                self.selection.fan_out(option, |o| {
                    validation.validate(Some(o.value()));
                });
            }
        }
        true
    }

    /// Select by position. Out-of-range indexes are ignored.
    pub fn select_at(&mut self, index: usize, silent: bool) -> bool {
        match self.registry.option_at(index).map(|o| o.id()) {
            Some(id) => self.select(id, silent),
            None => false,
        }
    }

    /// Select the first option holding `value`. Without a match the
    /// selection is left as it was.
    pub fn set_value(&mut self, value: &T, silent: bool) -> bool
    where
        T: PartialEq,
    {
        let found = self
            .registry
            .options()
            .iter()
            .find(|o| o.value() == value)
            .map(|o| o.id());
        match found {
            Some(id) => self.select(id, silent),
            None => false,
        }
    }

    /// Clear the flag on `id`. A no-op unless `id` is selected.
    pub fn deselect(&mut self, id: OptionId) {
        self.selection.deselect(&mut self.registry, id);
    }

    /// Drop the selection and empty the label. Revalidates when
    /// auto-validation is on.
    pub fn clear(&mut self) {
        self.selection.clear(&mut self.registry);
        if self.selection.auto_validation() {
            self.validation.validate(None);
        }
    }

    pub fn selected_id(&self) -> Option<OptionId> {
        self.selection.current()
    }

    pub fn selected_option(&self) -> Option<&SelectOption<T>> {
        self.selection.current().and_then(|id| self.registry.get(id))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.current().and_then(|id| self.registry.position(id))
    }

    pub fn value(&self) -> Option<&T> {
        self.selected_option().map(|o| o.value())
    }

    /// The text the control shows: the selected display value or empty.
    pub fn selected_label(&self) -> &str {
        self.selection.label()
    }

    pub fn is_selected(&self) -> bool {
        self.selection.current().is_some()
    }

    pub fn add_selection_handler(
        &mut self,
        handler: impl FnMut(&SelectOption<T>) + Send + 'static,
    ) -> HandlerId {
        self.selection.add_handler(Box::new(handler))
    }

    pub fn remove_selection_handler(&mut self, id: HandlerId) {
        self.selection.remove_handler(id);
    }

    /// Validate after every selection change. Idempotent.
    pub fn set_auto_validation(&mut self, enabled: bool) {
        self.selection.set_auto_validation(enabled);
    }

    // --- validation ---

    pub fn set_required(&mut self, required: bool) {
        self.validation.set_required(required);
    }

    pub fn is_required(&self) -> bool {
        self.validation.is_required()
    }

    pub fn add_validator(
        &mut self,
        validator: impl Fn(Option<&T>) -> ValidationResult + Send + 'static,
    ) {
        self.validation.add_validator(Box::new(validator));
    }

    pub fn validate(&mut self) -> ValidationResult {
        let value = self
            .selection
            .current()
            .and_then(|id| self.registry.get(id))
            .map(|o| o.value());
        self.validation.validate(value)
    }

    /// Mark the control invalid with `message` until cleared or revalidated.
    pub fn invalidate(&mut self, message: impl Into<String>) {
        self.validation.invalidate(message);
    }

    pub fn clear_invalid(&mut self) {
        self.validation.clear_invalid();
    }

    pub fn is_valid(&self) -> bool {
        self.validation.is_valid()
    }

    pub fn error(&self) -> Option<&str> {
        self.validation.error()
    }

    // --- menu ---

    pub fn menu_state(&self) -> MenuState {
        self.menu.state()
    }

    pub fn is_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn menu_focus(&self) -> Option<MenuFocus> {
        self.menu.focus()
    }

    /// Open the menu, closing any other menu in the same registry. Does
    /// nothing while disabled or read-only.
    pub fn open(&mut self) {
        if !self.config.enabled || self.config.read_only {
            return;
        }
        self.menu.open();
        self.focus = true;
        if self.config.searchable {
            self.filter.clear(&mut self.registry);
        }
        let target = self
            .selection
            .current()
            .filter(|id| self.registry.get(*id).is_some_and(|o| !o.is_hidden()))
            .or_else(|| first_visible(self.registry.options()))
            .map(MenuFocus::Option)
            .or(self.search_focus());
        self.menu.set_focus(target);
        self.scroll.set(0);
    }

    /// Close the menu. Keyboard focus stays on the control.
    pub fn close(&mut self) {
        self.menu.close();
    }

    /// Filter the options as if `query` had been typed.
    pub fn search(&mut self, query: &str) -> bool {
        self.filter
            .apply(&mut self.registry, query, self.config.case_sensitive_search)
    }

    pub fn search_query(&self) -> &str {
        self.filter.query()
    }

    pub fn no_results_visible(&self) -> bool {
        self.filter.no_results_visible()
    }

    /// The text of the no-results row, when showing.
    pub fn no_results_line(&self) -> Option<Line<'static>> {
        self.filter.no_results_line()
    }

    // --- focus ---

    /// Take keyboard focus. Does nothing while disabled or read-only.
    pub fn focus(&mut self) {
        if self.config.enabled && !self.config.read_only {
            self.focus = true;
        }
    }

    /// Drop focus and close the menu.
    pub fn blur(&mut self) {
        self.focus = false;
        self.menu.close();
    }

    pub fn is_focused(&self) -> bool {
        self.focus
    }

    /// The control rect from the last render. Clicking it toggles the menu.
    pub fn anchor(&self) -> Rect {
        self.anchor.get()
    }

    // --- internals ---

    fn search_focus(&self) -> Option<MenuFocus> {
        self.config.searchable.then_some(MenuFocus::Search)
    }

    fn refilter(&mut self) {
        if !self.filter.query().is_empty() {
            self.filter
                .refresh(&mut self.registry, self.config.case_sensitive_search);
        }
    }

    fn move_highlight(&mut self, forward: bool) {
        let options = self.registry.options();
        let target = match self.menu.focus() {
            Some(MenuFocus::Option(id)) if forward => next_visible(options, id),
            Some(MenuFocus::Option(id)) => prev_visible(options, id),
            _ if forward => first_visible(options),
            _ => last_visible(options),
        };
        if let Some(id) = target {
            log::trace!("select {:?}: highlight {:?}", self.label, id);
            self.menu.set_focus(Some(MenuFocus::Option(id)));
        }
    }

    /// A selection made through the menu. Returns the message for the parent.
    fn choose(&mut self, id: OptionId) -> Command<Message> {
        if !self.config.enabled || self.config.read_only || !self.select(id, false) {
            return Command::none();
        }
        match self.registry.position(id).zip(self.registry.get(id)) {
            Some((index, option)) => Command::message(Message::Selected {
                index,
                key: option.key().to_string(),
            }),
            None => Command::none(),
        }
    }

    /// Apply a query edit. Returns whether `key` was one.
    fn edit_query(&mut self, key: &KeyEvent) -> bool {
        let edited = match key.code {
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.filter.insert_char(c);
                true
            }
            KeyCode::Backspace => self.filter.delete_back(),
            KeyCode::Delete => self.filter.delete_forward(),
            KeyCode::Left => {
                self.filter.cursor_left();
                return true;
            }
            KeyCode::Right => {
                self.filter.cursor_right();
                return true;
            }
            _ => return false,
        };
        if edited {
            self.filter
                .refresh(&mut self.registry, self.config.case_sensitive_search);
        }
        true
    }

    fn handle_menu_key(&mut self, key: KeyEvent) -> Command<Message> {
        if self.keys.close.matches(&key) {
            self.close();
            return Command::none();
        }
        if self.keys.next.matches(&key) {
            self.move_highlight(true);
            return Command::none();
        }
        if self.keys.prev.matches(&key) {
            self.move_highlight(false);
            return Command::none();
        }

        let on_option = match self.menu.focus() {
            Some(MenuFocus::Option(id)) => Some(id),
            _ => None,
        };
        // In the search box typing wins, so Space inserts a space.
        if on_option.is_none() && self.config.searchable && self.edit_query(&key) {
            self.menu.set_focus(Some(MenuFocus::Search));
            return Command::none();
        }
        if self.keys.choose.matches(&key) {
            let target = on_option.or_else(|| first_visible(self.registry.options()));
            if let Some(id) = target {
                let cmd = self.choose(id);
                self.close();
                return cmd;
            }
            return Command::none();
        }
        if self.config.searchable && self.edit_query(&key) {
            self.menu.set_focus(Some(MenuFocus::Search));
        }
        Command::none()
    }

    fn handle_mouse(&mut self, event: MouseEvent) -> Command<Message> {
        let open = self.menu.is_open();
        let here = Position::new(event.column, event.row);
        if open && self.menu_area.get().contains(here) {
            match event.kind {
                MouseEventKind::ScrollDown => self.move_highlight(true),
                MouseEventKind::ScrollUp => self.move_highlight(false),
                _ => {}
            }
        }

        let Some((column, row)) = self.menu.track(&event) else {
            return Command::none();
        };
        let tap = Position::new(column, row);

        if open && self.menu_area.get().contains(tap) {
            let list = self.list_area.get();
            if list.contains(tap) {
                let index = (tap.y - list.y) as usize + self.scroll.get();
                let rows = view::menu_rows(&self.registry, &self.filter);
                if let Some(RowItem::Option { id, .. }) = rows.get(index) {
                    let cmd = self.choose(*id);
                    self.close();
                    return cmd;
                }
            } else if self.config.searchable && tap.y == list.y.saturating_sub(1) {
                self.menu.set_focus(Some(MenuFocus::Search));
            }
            return Command::none();
        }

        if self.anchor.get().contains(tap) {
            self.focus();
            if open {
                self.close();
            } else {
                self.open();
            }
            return Command::none();
        }

        if !self.area.get().contains(tap) {
            if open {
                log::debug!("select {:?}: tap outside closes menu", self.label);
                self.close();
            }
            self.focus = false;
        }
        Command::none()
    }
}

impl<T: Send + 'static> Component for Select<T> {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) => {
                if key.kind != KeyEventKind::Press {
                    return Command::none();
                }
                if self.menu.is_open() {
                    self.handle_menu_key(key)
                } else {
                    if self.focus && self.keys.open.matches(&key) {
                        self.open();
                    }
                    Command::none()
                }
            }
            Message::Mouse(event) => self.handle_mouse(event),
            Message::Open => {
                self.open();
                Command::none()
            }
            Message::Close => {
                self.close();
                Command::none()
            }
            Message::Selected { .. } => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        self.draw(frame, area);
    }

    fn focused(&self) -> bool {
        self.focus || self.menu.is_open()
    }
}
