use crate::command::{Action, Command, CommandInner};
use crate::event::TerminalEvent;
use crate::model::Model;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless test harness that drives a [`Model`] without a real terminal.
///
/// Synchronous commands ([`Command::message`]) are queued and flushed with
/// [`drain_messages`](TestProgram::drain_messages); async commands are
/// ignored. A quit command is recorded and can be checked with
/// [`quit_requested`](TestProgram::quit_requested).
///
/// # Example
///
/// ```rust,ignore
/// use chooser_core::testing::TestProgram;
///
/// let mut prog = TestProgram::<Form>::new(());
/// prog.send_event(TerminalEvent::Key(enter));
/// prog.drain_messages();
/// assert!(prog.render_string(40, 10).contains("United States"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
    quit: bool,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
            quit: false,
        };
        program.collect_sync_messages(init_cmd);
        program
    }

    /// Send a message, triggering a single update cycle.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect_sync_messages(cmd);
    }

    /// Offer a terminal event to [`Model::event`] and, when it maps to a
    /// message, run one update cycle with it. Returns whether the event was
    /// consumed.
    pub fn send_event(&mut self, event: TerminalEvent) -> bool {
        match self.model.event(event) {
            Some(msg) => {
                self.send(msg);
                true
            }
            None => false,
        }
    }

    /// Process pending synchronous messages until none are left.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.model.update(msg);
                self.collect_sync_messages(cmd);
            }
        }
    }

    /// Whether any processed command asked the program to quit.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Get a shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get a mutable reference to the model for direct test setup.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Render the model to a ratatui [`Buffer`] of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                self.model.view(frame);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Render the model and return the visible content as a plain string, one
    /// line per row.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        buffer_to_string(&self.render(width, height))
    }

    fn collect_sync_messages(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Action(Action::Message(msg)) => {
                self.pending_messages.push(msg);
            }
            CommandInner::Action(Action::Quit) => {
                self.quit = true;
            }
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect_sync_messages(cmd);
                }
            }
            // Async commands can't be executed synchronously in tests
            CommandInner::Future(_) => {}
        }
    }
}

/// Flatten a rendered [`Buffer`] into rows separated by newlines.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area: Rect = buf.area;
    let mut output = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            output.push_str(buf[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            output.push('\n');
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use ratatui::widgets::Paragraph;

    // Records typed characters; Enter submits, Esc quits.
    struct Recorder {
        typed: String,
        submitted: Vec<String>,
    }

    #[derive(Debug)]
    enum RecorderMsg {
        Typed(char),
        Submit,
        Submitted(String),
        Quit,
    }

    impl Model for Recorder {
        type Message = RecorderMsg;
        type Flags = &'static str;

        fn init(initial: &'static str) -> (Self, Command<RecorderMsg>) {
            (
                Recorder {
                    typed: initial.to_string(),
                    submitted: vec![],
                },
                Command::none(),
            )
        }

        fn update(&mut self, msg: RecorderMsg) -> Command<RecorderMsg> {
            match msg {
                RecorderMsg::Typed(c) => self.typed.push(c),
                RecorderMsg::Submit => {
                    let text = std::mem::take(&mut self.typed);
                    return Command::message(RecorderMsg::Submitted(text));
                }
                RecorderMsg::Submitted(text) => self.submitted.push(text),
                RecorderMsg::Quit => return Command::quit(),
            }
            Command::none()
        }

        fn view(&self, frame: &mut ratatui::Frame) {
            frame.render_widget(Paragraph::new(format!("> {}", self.typed)), frame.area());
        }

        fn event(&self, event: TerminalEvent) -> Option<RecorderMsg> {
            match event {
                TerminalEvent::Key(k) => match k.code {
                    KeyCode::Char(c) => Some(RecorderMsg::Typed(c)),
                    KeyCode::Enter => Some(RecorderMsg::Submit),
                    KeyCode::Esc => Some(RecorderMsg::Quit),
                    _ => None,
                },
                _ => None,
            }
        }
    }

    fn key(code: KeyCode) -> TerminalEvent {
        TerminalEvent::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn init_uses_flags() {
        let prog = TestProgram::<Recorder>::new("ab");
        assert_eq!(prog.model().typed, "ab");
    }

    #[test]
    fn events_map_through_model() {
        let mut prog = TestProgram::<Recorder>::new("");
        assert!(prog.send_event(key(KeyCode::Char('h'))));
        assert!(prog.send_event(key(KeyCode::Char('i'))));
        assert!(!prog.send_event(key(KeyCode::Tab)));
        assert_eq!(prog.model().typed, "hi");
    }

    #[test]
    fn chained_messages_need_drain() {
        let mut prog = TestProgram::<Recorder>::new("go");
        prog.send(RecorderMsg::Submit);
        assert!(prog.model().submitted.is_empty());
        prog.drain_messages();
        assert_eq!(prog.model().submitted, vec!["go"]);
        assert!(prog.model().typed.is_empty());
    }

    #[test]
    fn quit_is_recorded() {
        let mut prog = TestProgram::<Recorder>::new("");
        assert!(!prog.quit_requested());
        prog.send_event(key(KeyCode::Esc));
        assert!(prog.quit_requested());
    }

    #[test]
    fn render_string_shows_rows() {
        let mut prog = TestProgram::<Recorder>::new("");
        prog.send(RecorderMsg::Typed('x'));
        let content = prog.render_string(10, 2);
        let rows: Vec<_> = content.lines().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("> x"));
    }
}
