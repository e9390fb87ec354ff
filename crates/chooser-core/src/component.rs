use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` mirrors [`Model`](crate::Model) except that
/// [`view`](Component::view) receives the `area` to draw into, so a parent
/// decides *where* each child renders.
///
/// # Composition pattern
///
/// Wrap the child's message type in a parent variant and lift the child's
/// commands with [`Command::map`]:
///
/// ```rust,ignore
/// use chooser_core::{Command, Component, Model};
/// use chooser_widgets::select::{self, Select};
///
/// struct Form { country: Select<String> }
///
/// enum Msg { Country(select::Message) }
///
/// impl Model for Form {
///     type Message = Msg;
///     type Flags = ();
///
///     fn init(_: ()) -> (Self, Command<Msg>) {
///         (Form { country: Select::new("Country") }, Command::none())
///     }
///
///     fn update(&mut self, msg: Msg) -> Command<Msg> {
///         match msg {
///             Msg::Country(m) => self.country.update(m).map(Msg::Country),
///         }
///     }
///
///     fn view(&self, frame: &mut ratatui::Frame) {
///         self.country.view(frame, frame.area());
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] for side
    /// effects. The parent lifts the command with [`Command::map`].
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Overlays (such as an open dropdown menu) may draw outside `area`; all
    /// other drawing stays inside it.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has focus.
    ///
    /// A parent queries this to decide which child receives keyboard
    /// events. Defaults to `false`.
    fn focused(&self) -> bool {
        false
    }
}
