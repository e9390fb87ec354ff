//! Open/closed menu state, the "one open menu at a time" registry and pointer
//! gesture tracking.
//!
//! A widget never stores whether its menu is open. It asks its
//! [`MenuRegistry`], whose single slot names the open menu. Opening through
//! [`MenuRegistry::open_exclusive`] therefore closes every other menu sharing
//! the registry without those widgets having to be told.

use super::option::OptionId;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

/// Identity of one widget's menu within a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuId(u64);

impl MenuId {
    pub fn new(raw: u64) -> Self {
        MenuId(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Process-wide coordination of open menus.
///
/// Implementations hold at most one open menu. Every open path in the widget
/// goes through `open_exclusive`.
pub trait MenuRegistry: Send + Sync {
    /// Allocate an id for a new menu.
    fn next_id(&self) -> MenuId;

    /// Make `id` the open menu. Returns the menu that was open before, if it
    /// was a different one.
    fn open_exclusive(&self, id: MenuId) -> Option<MenuId>;

    /// Close `id` if it is the open menu. Returns whether it was.
    fn close(&self, id: MenuId) -> bool;

    fn close_all(&self);

    fn open_menu(&self) -> Option<MenuId>;

    /// Record where `id` was last drawn. Ignored unless `id` is open.
    fn set_open_area(&self, id: MenuId, area: Rect);

    /// The open menu and its last drawn area. The area is empty until the
    /// menu has been drawn.
    fn open_area(&self) -> Option<(MenuId, Rect)>;

    fn is_open(&self, id: MenuId) -> bool {
        self.open_menu() == Some(id)
    }
}

#[derive(Debug, Clone, Copy)]
struct OpenMenu {
    id: MenuId,
    area: Rect,
}

#[derive(Default)]
struct Slot {
    open: Mutex<Option<OpenMenu>>,
    next: AtomicU64,
}

/// Cloneable [`MenuRegistry`] backed by an `Arc<Mutex<..>>` slot.
///
/// Clones share the same slot. Use [`SharedMenuRegistry::global`] for the
/// process default, or [`SharedMenuRegistry::new`] for an isolated one.
#[derive(Clone, Default)]
pub struct SharedMenuRegistry {
    slot: Arc<Slot>,
}

impl SharedMenuRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry every [`Select`](super::Select) uses unless told otherwise.
    pub fn global() -> Self {
        static GLOBAL: OnceLock<SharedMenuRegistry> = OnceLock::new();
        GLOBAL.get_or_init(SharedMenuRegistry::new).clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<OpenMenu>> {
        // A panicking listener may poison the lock; the slot itself is
        // always consistent.
        self.slot
            .open
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl fmt::Debug for SharedMenuRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedMenuRegistry")
            .field("open", &self.open_area())
            .finish()
    }
}

impl MenuRegistry for SharedMenuRegistry {
    fn next_id(&self) -> MenuId {
        MenuId(self.slot.next.fetch_add(1, Ordering::Relaxed))
    }

    fn open_exclusive(&self, id: MenuId) -> Option<MenuId> {
        let mut open = self.lock();
        match *open {
            Some(current) if current.id == id => None,
            previous => {
                *open = Some(OpenMenu {
                    id,
                    area: Rect::default(),
                });
                previous.map(|p| p.id)
            }
        }
    }

    fn close(&self, id: MenuId) -> bool {
        let mut open = self.lock();
        if open.is_some_and(|current| current.id == id) {
            *open = None;
            true
        } else {
            false
        }
    }

    fn close_all(&self) {
        self.lock().take();
    }

    fn open_menu(&self) -> Option<MenuId> {
        self.lock().map(|current| current.id)
    }

    fn set_open_area(&self, id: MenuId, area: Rect) {
        if let Some(current) = self.lock().as_mut().filter(|c| c.id == id) {
            current.area = area;
        }
    }

    fn open_area(&self) -> Option<(MenuId, Rect)> {
        self.lock().map(|current| (current.id, current.area))
    }
}

/// Where keyboard input goes while the menu is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFocus {
    /// The search box.
    Search,
    /// A highlighted option.
    Option(OptionId),
}

/// Distinguishes a click or tap from a drag.
///
/// A press resets the tracker, any drag marks the gesture as moved, and the
/// release reports a tap only if nothing moved in between and the gesture
/// was not blocked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerTracker {
    moved: bool,
    blocked: bool,
}

impl PointerTracker {
    /// Feed a mouse event. Returns the `(column, row)` of a completed tap.
    pub fn track(&mut self, event: &MouseEvent) -> Option<(u16, u16)> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.moved = false;
                self.blocked = false;
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.moved = true;
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let tap = !self.moved && !self.blocked;
                self.moved = false;
                self.blocked = false;
                tap.then_some((event.column, event.row))
            }
            _ => None,
        }
    }

    /// Swallow the current gesture: its release will not report a tap.
    pub fn block(&mut self) {
        self.blocked = true;
    }
}

/// One widget's handle on a [`MenuRegistry`] plus the transient state that
/// only matters while open.
pub struct MenuHandle {
    id: MenuId,
    registry: Arc<dyn MenuRegistry>,
    focus: Option<MenuFocus>,
    pointer: PointerTracker,
}

impl MenuHandle {
    pub fn new(registry: Arc<dyn MenuRegistry>) -> Self {
        let id = registry.next_id();
        Self {
            id,
            registry,
            focus: None,
            pointer: PointerTracker::default(),
        }
    }

    pub fn id(&self) -> MenuId {
        self.id
    }

    pub fn state(&self) -> MenuState {
        if self.registry.is_open(self.id) {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.state() == MenuState::Open
    }

    /// Move this menu to another registry, closing it in the old one.
    pub fn rebind(&mut self, registry: Arc<dyn MenuRegistry>) {
        self.registry.close(self.id);
        self.id = registry.next_id();
        self.registry = registry;
        self.focus = None;
    }

    /// Claim the registry slot. Gating and focus placement are the caller's.
    pub fn open(&mut self) {
        if let Some(previous) = self.registry.open_exclusive(self.id) {
            log::debug!("menu {:?} opened, closing {:?}", self.id, previous);
        } else {
            log::debug!("menu {:?} opened", self.id);
        }
    }

    /// Release the slot and drop the menu focus. Returns whether the menu
    /// was open.
    pub fn close(&mut self) -> bool {
        self.focus = None;
        let was_open = self.registry.close(self.id);
        if was_open {
            log::debug!("menu {:?} closed", self.id);
        }
        was_open
    }

    /// The focus inside the menu. `None` while closed.
    pub fn focus(&self) -> Option<MenuFocus> {
        if self.is_open() {
            self.focus
        } else {
            None
        }
    }

    pub fn set_focus(&mut self, focus: Option<MenuFocus>) {
        self.focus = focus;
    }

    /// Record the area this menu was drawn in.
    pub fn publish_area(&self, area: Rect) {
        self.registry.set_open_area(self.id, area);
    }

    /// Feed a mouse event through the tap tracker.
    ///
    /// A press on another widget's open menu belongs to that menu, so the
    /// whole gesture is ignored here.
    pub fn track(&mut self, event: &MouseEvent) -> Option<(u16, u16)> {
        let tap = self.pointer.track(event);
        if matches!(event.kind, MouseEventKind::Down(MouseButton::Left))
            && self.covered_by_other(Position::new(event.column, event.row))
        {
            self.pointer.block();
        }
        tap
    }

    fn covered_by_other(&self, at: Position) -> bool {
        self.registry
            .open_area()
            .is_some_and(|(id, area)| id != self.id && area.contains(at))
    }
}

impl Drop for MenuHandle {
    fn drop(&mut self) {
        self.registry.close(self.id);
    }
}

impl fmt::Debug for MenuHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuHandle")
            .field("id", &self.id)
            .field("state", &self.state())
            .field("focus", &self.focus)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn handles() -> (Arc<SharedMenuRegistry>, MenuHandle, MenuHandle) {
        let registry = Arc::new(SharedMenuRegistry::new());
        let x = MenuHandle::new(registry.clone());
        let y = MenuHandle::new(registry.clone());
        (registry, x, y)
    }

    #[test]
    fn opening_one_closes_the_other() {
        let (_, mut x, mut y) = handles();
        y.open();
        assert!(y.is_open());
        x.open();
        assert_eq!(x.state(), MenuState::Open);
        assert_eq!(y.state(), MenuState::Closed);
    }

    #[test]
    fn open_exclusive_reports_previous() {
        let registry = SharedMenuRegistry::new();
        let a = registry.next_id();
        let b = registry.next_id();
        assert_eq!(registry.open_exclusive(a), None);
        assert_eq!(registry.open_exclusive(a), None);
        assert_eq!(registry.open_exclusive(b), Some(a));
        assert_eq!(registry.open_menu(), Some(b));
    }

    #[test]
    fn close_only_affects_own_menu() {
        let (registry, mut x, y) = handles();
        x.open();
        assert!(!registry.close(y.id()));
        assert!(x.is_open());
        assert!(x.close());
        assert!(!x.close());
        assert_eq!(registry.open_menu(), None);
    }

    #[test]
    fn close_all_empties_slot() {
        let (registry, mut x, _) = handles();
        x.open();
        registry.close_all();
        assert!(!x.is_open());
    }

    #[test]
    fn focus_is_hidden_while_closed() {
        let (_, mut x, mut y) = handles();
        x.open();
        x.set_focus(Some(MenuFocus::Search));
        assert_eq!(x.focus(), Some(MenuFocus::Search));
        y.open();
        assert_eq!(x.focus(), None);
    }

    #[test]
    fn dropping_releases_slot() {
        let (registry, mut x, _) = handles();
        x.open();
        drop(x);
        assert_eq!(registry.open_menu(), None);
    }

    #[test]
    fn rebind_moves_to_new_registry() {
        let (old, mut x, _) = handles();
        x.open();
        let fresh = Arc::new(SharedMenuRegistry::new());
        x.rebind(fresh.clone());
        assert_eq!(old.open_menu(), None);
        x.open();
        assert_eq!(fresh.open_menu(), Some(x.id()));
    }

    #[test]
    fn global_is_shared() {
        let a = SharedMenuRegistry::global();
        let b = SharedMenuRegistry::global();
        assert!(Arc::ptr_eq(&a.slot, &b.slot));
    }

    #[test]
    fn press_release_is_a_tap() {
        let mut p = PointerTracker::default();
        assert_eq!(p.track(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 4)), None);
        assert_eq!(
            p.track(&mouse(MouseEventKind::Up(MouseButton::Left), 3, 4)),
            Some((3, 4))
        );
    }

    #[test]
    fn drag_cancels_tap() {
        let mut p = PointerTracker::default();
        p.track(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 4));
        p.track(&mouse(MouseEventKind::Drag(MouseButton::Left), 3, 6));
        assert_eq!(p.track(&mouse(MouseEventKind::Up(MouseButton::Left), 3, 6)), None);

        // The next gesture starts clean.
        p.track(&mouse(MouseEventKind::Down(MouseButton::Left), 1, 1));
        assert!(p.track(&mouse(MouseEventKind::Up(MouseButton::Left), 1, 1)).is_some());
    }

    #[test]
    fn blocked_gesture_reports_no_tap() {
        let mut p = PointerTracker::default();
        p.track(&mouse(MouseEventKind::Down(MouseButton::Left), 2, 2));
        p.block();
        assert_eq!(p.track(&mouse(MouseEventKind::Up(MouseButton::Left), 2, 2)), None);

        p.track(&mouse(MouseEventKind::Down(MouseButton::Left), 2, 2));
        assert!(p.track(&mouse(MouseEventKind::Up(MouseButton::Left), 2, 2)).is_some());
    }

    #[test]
    fn open_area_follows_the_open_menu() {
        let (registry, mut x, mut y) = handles();
        let area = Rect::new(0, 3, 20, 6);
        x.publish_area(area);
        assert_eq!(registry.open_area(), None);

        x.open();
        assert_eq!(registry.open_area(), Some((x.id(), Rect::default())));
        x.publish_area(area);
        y.publish_area(Rect::new(0, 0, 5, 5));
        assert_eq!(registry.open_area(), Some((x.id(), area)));

        // Reopening keeps the area, switching menus resets it.
        x.open();
        assert_eq!(registry.open_area(), Some((x.id(), area)));
        y.open();
        assert_eq!(registry.open_area(), Some((y.id(), Rect::default())));
        y.close();
        assert_eq!(registry.open_area(), None);
    }

    #[test]
    fn press_on_another_open_menu_is_swallowed() {
        let (_, mut x, mut y) = handles();
        x.open();
        x.publish_area(Rect::new(0, 3, 20, 6));

        y.track(&mouse(MouseEventKind::Down(MouseButton::Left), 4, 5));
        x.close();
        assert_eq!(y.track(&mouse(MouseEventKind::Up(MouseButton::Left), 4, 5)), None);

        // The owner still sees its own tap, and presses elsewhere pass.
        x.open();
        x.publish_area(Rect::new(0, 3, 20, 6));
        x.track(&mouse(MouseEventKind::Down(MouseButton::Left), 4, 5));
        assert_eq!(
            x.track(&mouse(MouseEventKind::Up(MouseButton::Left), 4, 5)),
            Some((4, 5))
        );
        y.track(&mouse(MouseEventKind::Down(MouseButton::Left), 30, 1));
        assert_eq!(
            y.track(&mouse(MouseEventKind::Up(MouseButton::Left), 30, 1)),
            Some((30, 1))
        );
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mut p = PointerTracker::default();
        assert_eq!(p.track(&mouse(MouseEventKind::Up(MouseButton::Right), 0, 0)), None);
        assert_eq!(p.track(&mouse(MouseEventKind::ScrollDown, 0, 0)), None);
    }
}
