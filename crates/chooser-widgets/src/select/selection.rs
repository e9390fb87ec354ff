//! Single-selection bookkeeping and listener fan-out.

use super::option::{OptionId, SelectOption};
use super::registry::OptionRegistry;

/// Callback invoked with the newly selected option.
pub type SelectionHandler<T> = Box<dyn FnMut(&SelectOption<T>) + Send>;

/// Handle returned by [`SelectionController::add_handler`], used to remove
/// the handler later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

enum Listener<T> {
    Handler(HandlerId, SelectionHandler<T>),
    // Placeholder for the widget's own validation pass, kept in the list so it
    // runs in registration order with the user handlers.
    AutoValidate,
}

/// Owns the one current selection and the ordered listener list.
///
/// Invariant: at most one option in the registry has `selected == true`, and
/// it is the one `current()` names. A new selection clears the old flag
/// before setting the new one, so listeners never see two.
pub struct SelectionController<T> {
    current: Option<OptionId>,
    label: String,
    listeners: Vec<Listener<T>>,
    next_handler: u64,
}

impl<T> Default for SelectionController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SelectionController<T> {
    pub fn new() -> Self {
        Self {
            current: None,
            label: String::new(),
            listeners: Vec::new(),
            next_handler: 0,
        }
    }

    pub fn current(&self) -> Option<OptionId> {
        self.current
    }

    /// The text shown in the control: the selected option's display value,
    /// or empty.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Mark `id` selected. Returns `false` when nothing changed: `id` is
    /// unknown, or it is already the current selection.
    pub fn select(&mut self, registry: &mut OptionRegistry<T>, id: OptionId) -> bool {
        if self.current == Some(id) || !registry.contains(id) {
            return false;
        }
        if let Some(previous) = self.current.take() {
            if let Some(option) = registry.get_mut(previous) {
                option.selected = false;
            }
        }
        let Some(option) = registry.get_mut(id) else {
            return false;
        };
        option.selected = true;
        self.label = option.display_value().to_string();
        self.current = Some(id);
        log::debug!("select: selected {:?} ({})", id, self.label);
        true
    }

    /// Clear the selected flag of `id`. A no-op for options that are not
    /// selected. When `id` is the current selection the label is emptied.
    pub fn deselect(&mut self, registry: &mut OptionRegistry<T>, id: OptionId) {
        if let Some(option) = registry.get_mut(id) {
            option.selected = false;
        }
        if self.current == Some(id) {
            self.current = None;
            self.label.clear();
        }
    }

    /// Forget a removed option. Returns whether it was the current selection.
    pub(crate) fn forget(&mut self, id: OptionId) -> bool {
        if self.current == Some(id) {
            self.current = None;
            self.label.clear();
            true
        } else {
            false
        }
    }

    /// Deselect whatever is selected and empty the label. Returns whether a
    /// selection existed.
    pub fn clear(&mut self, registry: &mut OptionRegistry<T>) -> bool {
        for option in registry.options_mut() {
            option.selected = false;
        }
        self.label.clear();
        self.current.take().is_some()
    }

    pub fn add_handler(&mut self, handler: SelectionHandler<T>) -> HandlerId {
        let id = HandlerId(self.next_handler);
        self.next_handler += 1;
        self.listeners.push(Listener::Handler(id, handler));
        id
    }

    /// Remove a handler. Unknown ids are ignored.
    pub fn remove_handler(&mut self, id: HandlerId) {
        self.listeners
            .retain(|l| !matches!(l, Listener::Handler(hid, _) if *hid == id));
    }

    pub fn handler_count(&self) -> usize {
        self.listeners
            .iter()
            .filter(|l| matches!(l, Listener::Handler(..)))
            .count()
    }

    /// Install or remove the validation listener. Installing twice keeps a
    /// single listener.
    pub fn set_auto_validation(&mut self, enabled: bool) {
        let installed = self.auto_validation();
        if enabled && !installed {
            self.listeners.push(Listener::AutoValidate);
        } else if !enabled && installed {
            self.listeners.retain(|l| !matches!(l, Listener::AutoValidate));
        }
    }

    pub fn auto_validation(&self) -> bool {
        self.listeners
            .iter()
            .any(|l| matches!(l, Listener::AutoValidate))
    }

    /// Run every listener in registration order, synchronously. `validate`
    /// stands in for the auto-validation listener. Panics in handlers
    /// propagate to the caller.
    pub fn fan_out(&mut self, option: &SelectOption<T>, mut validate: impl FnMut(&SelectOption<T>)) {
        let mut listeners = std::mem::take(&mut self.listeners);
        for listener in listeners.iter_mut() {
            match listener {
                Listener::Handler(_, handler) => handler(option),
                Listener::AutoValidate => validate(option),
            }
        }
        // Keep anything registered while we were iterating.
        listeners.append(&mut self.listeners);
        self.listeners = listeners;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn setup() -> (OptionRegistry<u32>, Vec<OptionId>) {
        let mut reg = OptionRegistry::new();
        let ids = (1..=3)
            .map(|n| reg.append(SelectOption::new(n.to_string(), format!("Option {n}"), n)))
            .collect();
        (reg, ids)
    }

    fn selected_count(reg: &OptionRegistry<u32>) -> usize {
        reg.selected_ids().len()
    }

    #[test]
    fn select_replaces_previous() {
        let (mut reg, ids) = setup();
        let mut sel = SelectionController::new();
        assert!(sel.select(&mut reg, ids[0]));
        assert!(sel.select(&mut reg, ids[1]));
        assert_eq!(reg.selected_ids(), vec![ids[1]]);
        assert_eq!(sel.label(), "Option 2");
        assert_eq!(sel.current(), Some(ids[1]));
    }

    #[test]
    fn reselect_is_idempotent() {
        let (mut reg, ids) = setup();
        let mut sel = SelectionController::new();
        assert!(sel.select(&mut reg, ids[2]));
        assert!(!sel.select(&mut reg, ids[2]));
        assert_eq!(selected_count(&reg), 1);
    }

    #[test]
    fn unknown_id_is_ignored() {
        let (mut reg, ids) = setup();
        let mut sel = SelectionController::new();
        sel.select(&mut reg, ids[0]);
        let stranger = SelectOption::new("x", "X", 9).id();
        assert!(!sel.select(&mut reg, stranger));
        assert_eq!(sel.current(), Some(ids[0]));
    }

    #[test]
    fn at_most_one_selected_through_mixed_operations() {
        let (mut reg, ids) = setup();
        let mut sel = SelectionController::new();
        let script = [0usize, 1, 1, 2, 0, 2];
        for (step, i) in script.iter().enumerate() {
            sel.select(&mut reg, ids[*i]);
            assert!(selected_count(&reg) <= 1);
            if step % 2 == 1 {
                sel.deselect(&mut reg, ids[(*i + 1) % 3]);
                assert!(selected_count(&reg) <= 1);
            }
        }
        if let Some(current) = sel.current() {
            reg.remove(current);
            sel.forget(current);
        }
        assert_eq!(selected_count(&reg), 0);
        assert!(sel.label().is_empty());
    }

    #[test]
    fn deselect_unselected_is_noop() {
        let (mut reg, ids) = setup();
        let mut sel = SelectionController::new();
        sel.select(&mut reg, ids[0]);
        sel.deselect(&mut reg, ids[1]);
        assert_eq!(sel.current(), Some(ids[0]));
        assert_eq!(sel.label(), "Option 1");
    }

    #[test]
    fn clear_resets_label() {
        let (mut reg, ids) = setup();
        let mut sel = SelectionController::new();
        sel.select(&mut reg, ids[1]);
        assert!(sel.clear(&mut reg));
        assert!(!sel.clear(&mut reg));
        assert_eq!(selected_count(&reg), 0);
        assert!(sel.label().is_empty());
    }

    #[test]
    fn fan_out_runs_in_registration_order() {
        let (mut reg, ids) = setup();
        let mut sel = SelectionController::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        for name in ["L1", "L2"] {
            let log = log.clone();
            sel.add_handler(Box::new(move |o: &SelectOption<u32>| {
                log.lock().unwrap().push(format!("{name}:{}", o.value()));
            }));
        }
        sel.select(&mut reg, ids[1]);
        let snapshot = reg.get(ids[1]).cloned().unwrap();
        sel.fan_out(&snapshot, |_| {});
        assert_eq!(*log.lock().unwrap(), vec!["L1:2", "L2:2"]);
    }

    #[test]
    fn remove_handler_stops_notifications() {
        let (mut reg, ids) = setup();
        let mut sel = SelectionController::new();
        let hits = Arc::new(Mutex::new(0));
        let counter = hits.clone();
        let id = sel.add_handler(Box::new(move |_| *counter.lock().unwrap() += 1));
        assert_eq!(sel.handler_count(), 1);
        sel.remove_handler(id);
        assert_eq!(sel.handler_count(), 0);
        sel.select(&mut reg, ids[0]);
        let snapshot = reg.get(ids[0]).cloned().unwrap();
        sel.fan_out(&snapshot, |_| {});
        assert_eq!(*hits.lock().unwrap(), 0);
    }

    #[test]
    fn auto_validation_installs_once_in_order() {
        let mut sel: SelectionController<u32> = SelectionController::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        let first = order.clone();
        sel.add_handler(Box::new(move |_| first.lock().unwrap().push("handler")));
        sel.set_auto_validation(true);
        sel.set_auto_validation(true);
        assert!(sel.auto_validation());

        let option = SelectOption::new("1", "One", 1);
        let validations = order.clone();
        sel.fan_out(&option, |_| validations.lock().unwrap().push("validate"));
        assert_eq!(*order.lock().unwrap(), vec!["handler", "validate"]);

        sel.set_auto_validation(false);
        assert!(!sel.auto_validation());
        assert_eq!(sel.handler_count(), 1);
    }
}
