use crossterm::event::{KeyEvent, KeyEventKind, MouseEvent};

/// Terminal events produced by the runtime's event loop.
///
/// The [`Program`](crate::Program) hands every event to
/// [`Model::event`](crate::Model::event), which maps it into the model's
/// `Message` type (or drops it).
///
/// # Example
///
/// ```rust,ignore
/// fn event(&self, event: TerminalEvent) -> Option<Msg> {
///     match event {
///         TerminalEvent::Key(k) => Some(Msg::Key(k)),
///         TerminalEvent::Mouse(m) => Some(Msg::Mouse(m)),
///         _ => None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// A mouse event.
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Terminal window gained focus.
    FocusGained,
    /// Terminal window lost focus.
    FocusLost,
    /// Bracketed paste content.
    Paste(String),
}

impl TerminalEvent {
    /// Key release and repeat events are reported on some platforms (Windows,
    /// kitty protocol). Widgets only react to presses.
    pub fn is_key_press(&self) -> bool {
        matches!(self, TerminalEvent::Key(k) if k.kind == KeyEventKind::Press)
    }
}

impl From<crossterm::event::Event> for TerminalEvent {
    fn from(event: crossterm::event::Event) -> Self {
        match event {
            crossterm::event::Event::Key(k) => TerminalEvent::Key(k),
            crossterm::event::Event::Mouse(m) => TerminalEvent::Mouse(m),
            crossterm::event::Event::Resize(w, h) => TerminalEvent::Resize(w, h),
            crossterm::event::Event::FocusGained => TerminalEvent::FocusGained,
            crossterm::event::Event::FocusLost => TerminalEvent::FocusLost,
            crossterm::event::Event::Paste(s) => TerminalEvent::Paste(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn converts_crossterm_events() {
        let ev = TerminalEvent::from(crossterm::event::Event::Resize(80, 24));
        assert_eq!(ev, TerminalEvent::Resize(80, 24));
    }

    #[test]
    fn only_presses_count() {
        assert!(TerminalEvent::Key(key(KeyEventKind::Press)).is_key_press());
        assert!(!TerminalEvent::Key(key(KeyEventKind::Release)).is_key_press());
        assert!(!TerminalEvent::FocusLost.is_key_press());
    }
}
