//! Two selects side by side: a searchable, grouped country picker and a
//! read-only-capable shipping speed picker with addons.
//!
//! Tab moves focus while no menu is open, Esc or Ctrl+C quits. Logs go to
//! `chooser-demo.log`.
//!
//! ```sh
//! cargo run --example countries
//! ```

use std::fs::File;

use chooser::widgets::select::{self, Addon, OptionGroup, Select, SelectOption, ValidationResult};
use chooser::{Command, Component, Model, ProgramOptions, TerminalEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use simplelog::{Config, LevelFilter, WriteLogger};

struct Checkout {
    country: Select<&'static str>,
    speed: Select<u32>,
    focused: Field,
    status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Country,
    Speed,
}

enum Msg {
    Country(select::Message),
    Speed(select::Message),
    Key(KeyEvent),
    Mouse(MouseEvent),
    Quit,
}

fn country_select() -> Select<&'static str> {
    let mut country = Select::new(" Ship to ")
        .with_placeholder("Choose a country")
        .with_focus_color(Color::Cyan)
        .with_max_visible(6)
        .with_required(true);
    country.append(SelectOption::new("us", "United States", "USA"));
    country.append(SelectOption::new("ca", "Canada", "CAN"));
    country.add_divider();
    country.add_group(OptionGroup::new("Europe").options([
        SelectOption::new("uk", "United Kingdom", "GBR"),
        SelectOption::new("fr", "France", "FRA"),
        SelectOption::new("de", "Germany", "DEU"),
        SelectOption::new("no", "Norway", "NOR"),
    ]));
    country.add_group(OptionGroup::new("Asia").options([
        SelectOption::new("jp", "Japan", "JPN"),
        SelectOption::new("kr", "South Korea", "KOR"),
    ]));
    country.add_validator(|code| match code {
        Some(&"NOR") => ValidationResult::Invalid("No shipping to Norway yet".into()),
        _ => ValidationResult::Valid,
    });
    country.set_auto_validation(true);
    country.add_selection_handler(|option| log::info!("country picked: {}", option.key()));
    country.set_form_id("checkout");
    country.focus();
    country
}

fn speed_select() -> Select<u32> {
    let mut speed = Select::with_options(
        " Speed ",
        [
            SelectOption::new("std", "Standard (5-7 days)", 5),
            SelectOption::new("exp", "Express (2 days)", 2),
            SelectOption::new("ovn", "Overnight", 1),
        ],
    )
    .with_searchable(false)
    .with_left_addon(Addon::new("⏱").with_class("speed"))
    .with_right_addon(Addon::new("days"));
    speed.set_value(&5, true);
    speed
}

impl Checkout {
    fn any_open(&self) -> bool {
        self.country.is_open() || self.speed.is_open()
    }

    fn move_focus(&mut self) {
        self.focused = match self.focused {
            Field::Country => {
                self.country.blur();
                self.speed.focus();
                Field::Speed
            }
            Field::Speed => {
                self.speed.blur();
                self.country.focus();
                Field::Country
            }
        };
    }
}

impl Model for Checkout {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        (
            Checkout {
                country: country_select(),
                speed: speed_select(),
                focused: Field::Country,
                status: "Tab: next field, Enter: open, Esc: quit".to_string(),
            },
            Command::none(),
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Country(select::Message::Selected { key, .. }) => {
                self.status = match self.country.error() {
                    Some(err) => format!("{key}: {err}"),
                    None => format!("Shipping to {}", self.country.selected_label()),
                };
                Command::none()
            }
            Msg::Speed(select::Message::Selected { index, .. }) => {
                self.status = format!("Speed option {} chosen", index + 1);
                Command::none()
            }
            Msg::Country(m) => self.country.update(m).map(Msg::Country),
            Msg::Speed(m) => self.speed.update(m).map(Msg::Speed),
            Msg::Key(key) => {
                if !self.any_open() {
                    match key.code {
                        KeyCode::Tab => {
                            self.move_focus();
                            return Command::none();
                        }
                        KeyCode::Esc => return Command::quit(),
                        _ => {}
                    }
                }
                let msg = select::Message::KeyPress(key);
                match self.focused {
                    Field::Country => Command::message(Msg::Country(msg)),
                    Field::Speed => Command::message(Msg::Speed(msg)),
                }
            }
            Msg::Mouse(event) => {
                // Every select sees every mouse event so outside taps close menus.
                let country = self.country.update(select::Message::Mouse(event)).map(Msg::Country);
                let speed = self.speed.update(select::Message::Mouse(event)).map(Msg::Speed);
                if self.country.is_focused() {
                    self.focused = Field::Country;
                } else if self.speed.is_focused() {
                    self.focused = Field::Speed;
                } else {
                    match self.focused {
                        Field::Country => self.country.focus(),
                        Field::Speed => self.speed.focus(),
                    }
                }
                Command::batch([country, speed])
            }
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [fields, _, status] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(fields);

        frame.render_widget(
            Paragraph::new(Line::styled(self.status.as_str(), Style::default().fg(Color::DarkGray))),
            status,
        );
        // Draw the open select last so its menu overlays the other field.
        if self.speed.is_open() {
            self.country.view(frame, left);
            self.speed.view(frame, Rect { width: right.width.min(40), ..right });
        } else {
            self.speed.view(frame, Rect { width: right.width.min(40), ..right });
            self.country.view(frame, left);
        }
    }

    fn event(&self, event: TerminalEvent) -> Option<Msg> {
        match event {
            TerminalEvent::Key(key)
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                Some(Msg::Quit)
            }
            TerminalEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Msg::Key(key)),
            TerminalEvent::Mouse(event) => Some(Msg::Mouse(event)),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("chooser-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let options = ProgramOptions {
        title: Some("chooser demo".into()),
        ..ProgramOptions::default()
    };
    let checkout = chooser::run_with::<Checkout>((), options).await?;
    log::info!(
        "done: country={:?} speed={:?}",
        checkout.country.value(),
        checkout.speed.value()
    );
    Ok(())
}
