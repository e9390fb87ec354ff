//! **chooser**: a searchable select widget for [`ratatui`], built on a small
//! Elm-architecture runtime.
//!
//! This umbrella crate re-exports everything an application needs:
//!
//! * the [`chooser_core`] items ([`Model`], [`Component`], [`Command`],
//!   [`Program`], [`run`], [`run_with`], ...) at the crate root;
//! * the widgets from [`chooser_widgets`] under [`widgets`];
//! * [`ratatui`], [`crossterm`] and [`tokio`], so downstream crates do not
//!   need their own dependency on them.
//!
//! # Quick start
//!
//! ```ignore
//! use chooser::widgets::select::{self, Select, SelectOption};
//! use chooser::{Command, Component, Model, TerminalEvent};
//! use ratatui::Frame;
//!
//! struct App { city: Select<&'static str> }
//!
//! enum Msg { City(select::Message) }
//!
//! impl Model for App {
//!     type Message = Msg;
//!     type Flags = ();
//!
//!     fn init(_: ()) -> (Self, Command<Msg>) {
//!         let mut city = Select::with_options(
//!             "City",
//!             [SelectOption::new("osl", "Oslo", "OSL"), SelectOption::new("tyo", "Tokyo", "TYO")],
//!         );
//!         city.focus();
//!         (App { city }, Command::none())
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Command<Msg> {
//!         match msg {
//!             Msg::City(m) => self.city.update(m).map(Msg::City),
//!         }
//!     }
//!
//!     fn view(&self, frame: &mut Frame) {
//!         self.city.view(frame, frame.area());
//!     }
//!
//!     fn event(&self, event: TerminalEvent) -> Option<Msg> {
//!         match event {
//!             TerminalEvent::Key(k) => Some(Msg::City(select::Message::KeyPress(k))),
//!             TerminalEvent::Mouse(m) => Some(Msg::City(select::Message::Mouse(m))),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), chooser::ProgramError> {
//!     chooser::run::<App>(()).await?;
//!     Ok(())
//! }
//! ```

pub use chooser_core::*;
pub mod widgets {
    pub use chooser_widgets::*;
}

pub use crossterm;
pub use ratatui;
pub use tokio;
