//! Rendering of the control and its menu overlay.
//!
//! The rects recorded here (`area`, `anchor`, menu and list) are what mouse
//! hit-testing in `update` reads on the next event.

use super::addon::Addon;
use super::filter::SearchFilter;
use super::menu::MenuFocus;
use super::option::{GroupId, OptionId};
use super::registry::{MenuRow, OptionRegistry};
use super::Select;
use crate::chrome::{self, INVALID_COLOR};
use crate::runeutil::{display_width, pad_right, truncate};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use std::collections::HashSet;

const ELLIPSIS: &str = "…";
const HIGHLIGHT_PREFIX: &str = "▸ ";
const PLAIN_PREFIX: &str = "  ";
const SEARCH_PROMPT: &str = "> ";

/// Which side of the control the menu drops to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropPosition {
    #[default]
    Below,
    Above,
}

/// A row as it appears in the open menu after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowItem {
    Header(GroupId),
    Divider,
    Option { id: OptionId, grouped: bool },
    NoResults,
}

/// Visible menu rows in insertion order. Hidden options and hidden group
/// headers are skipped; the no-results row comes last when showing.
pub(crate) fn menu_rows<T>(registry: &OptionRegistry<T>, filter: &SearchFilter) -> Vec<RowItem> {
    let grouped: HashSet<OptionId> = registry
        .groups()
        .iter()
        .flat_map(|g| g.members().iter().copied())
        .collect();
    let mut rows: Vec<RowItem> = registry
        .rows()
        .iter()
        .filter_map(|row| match *row {
            MenuRow::Option(id) => registry
                .get(id)
                .filter(|o| !o.is_hidden())
                .map(|_| RowItem::Option {
                    id,
                    grouped: grouped.contains(&id),
                }),
            MenuRow::Header(gid) => registry
                .group(gid)
                .filter(|g| !g.is_hidden())
                .map(|_| RowItem::Header(gid)),
            MenuRow::Divider => Some(RowItem::Divider),
        })
        .collect();
    if filter.no_results_visible() {
        rows.push(RowItem::NoResults);
    }
    rows
}

/// Where the menu lands for `anchor`, clipped to `bounds`. `content` is the
/// number of rows inside the border.
pub(crate) fn menu_rect(anchor: Rect, bounds: Rect, position: DropPosition, content: u16) -> Rect {
    let wanted = content.saturating_add(2);
    match position {
        DropPosition::Below => {
            let y = anchor.bottom();
            let height = wanted.min(bounds.bottom().saturating_sub(y));
            Rect::new(anchor.x, y, anchor.width, height)
        }
        DropPosition::Above => {
            let height = wanted.min(anchor.y.saturating_sub(bounds.y));
            Rect::new(anchor.x, anchor.y - height, anchor.width, height)
        }
    }
}

/// Keep `highlight` inside a window of `height` rows starting at `offset`.
pub(crate) fn scroll_offset(offset: usize, highlight: Option<usize>, height: usize, total: usize) -> usize {
    let mut offset = offset.min(total.saturating_sub(height));
    if let Some(i) = highlight {
        if i < offset {
            offset = i;
        } else if height > 0 && i >= offset + height {
            offset = i + 1 - height;
        }
    }
    offset
}

fn addon_width(addon: Option<&Addon>) -> u16 {
    addon.map_or(0, |a| display_width(a.text()) as u16 + 4)
}

impl<T> Select<T> {
    pub(super) fn draw(&self, frame: &mut Frame, area: Rect) {
        self.area.set(area);
        let open = self.menu.is_open();
        let focused = self.focus || open;
        let invalid = !self.validation.is_valid();
        let enabled = self.config.enabled;
        let accent = self.config.focus_color;
        let border = chrome::border_color(focused, invalid, enabled, accent);

        let control = Rect {
            height: area.height.min(3),
            ..area
        };
        let left_w = addon_width(self.left_addon.as_ref()).min(control.width);
        let right_w = addon_width(self.right_addon.as_ref()).min(control.width - left_w);
        let anchor = Rect {
            x: control.x + left_w,
            width: control.width - left_w - right_w,
            ..control
        };
        self.anchor.set(anchor);

        if let Some(addon) = &self.left_addon {
            let tint = if invalid {
                INVALID_COLOR
            } else if focused {
                accent
            } else {
                addon.style().fg.unwrap_or(Color::Gray)
            };
            let rect = Rect { width: left_w, ..control };
            draw_addon(frame, rect, addon, addon.style().fg(tint), border);
        }
        if let Some(addon) = &self.right_addon {
            let rect = Rect {
                x: anchor.right(),
                width: right_w,
                ..control
            };
            draw_addon(frame, rect, addon, addon.style(), border);
        }

        let block = chrome::focus_block(&self.label, focused, invalid, enabled, accent);
        let inner = block.inner(anchor);
        frame.render_widget(block, anchor);

        let arrow = match (self.config.read_only, open) {
            (true, _) => None,
            (false, true) => Some("▴"),
            (false, false) => Some("▾"),
        };
        let text_width = inner.width.saturating_sub(if arrow.is_some() { 2 } else { 0 }) as usize;
        let (text, mut style) = if self.selection.label().is_empty() {
            (
                self.config.placeholder.as_str(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )
        } else {
            (self.selection.label(), Style::default())
        };
        if !enabled {
            style = chrome::dimmed();
        }
        let mut spans = vec![Span::styled(
            pad_right(&truncate(text, text_width, ELLIPSIS), text_width),
            style,
        )];
        if let Some(arrow) = arrow {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(arrow, Style::default().fg(border)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), inner);

        if let Some(message) = self.validation.error() {
            if area.height > control.height {
                let row = Rect {
                    y: control.bottom(),
                    height: 1,
                    ..area
                };
                let text = truncate(message, row.width as usize, ELLIPSIS);
                frame.render_widget(
                    Paragraph::new(Span::styled(text, Style::default().fg(INVALID_COLOR))),
                    row,
                );
            }
        }

        if open {
            self.draw_menu(frame, anchor);
        } else {
            self.menu_area.set(Rect::default());
            self.list_area.set(Rect::default());
        }
    }

    fn draw_menu(&self, frame: &mut Frame, anchor: Rect) {
        let rows = menu_rows(&self.registry, &self.filter);
        let search_rows = u16::from(self.config.searchable);
        let list_rows = rows.len().clamp(1, self.config.max_visible.max(1)) as u16;
        let rect = menu_rect(anchor, frame.area(), self.config.position, search_rows + list_rows);
        if rect.height < 3 || rect.width < 4 {
            self.menu_area.set(Rect::default());
            self.list_area.set(Rect::default());
            return;
        }

        frame.render_widget(Clear, rect);
        let block = Block::new()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.config.focus_color));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let mut list = inner;
        if self.config.searchable {
            self.draw_search(frame, Rect { height: 1, ..inner });
            list.y += 1;
            list.height = list.height.saturating_sub(1);
        }
        self.menu_area.set(rect);
        self.menu.publish_area(rect);
        self.list_area.set(list);

        let highlight = match self.menu.focus() {
            Some(MenuFocus::Option(id)) => rows
                .iter()
                .position(|r| matches!(r, RowItem::Option { id: rid, .. } if *rid == id)),
            _ => None,
        };
        let height = list.height as usize;
        let offset = scroll_offset(self.scroll.get(), highlight, height, rows.len());
        self.scroll.set(offset);

        for (i, row) in rows.iter().skip(offset).take(height).enumerate() {
            let area = Rect {
                y: list.y + i as u16,
                height: 1,
                ..list
            };
            let paragraph = self.row_paragraph(row, area.width as usize, highlight == Some(offset + i));
            frame.render_widget(paragraph, area);
        }
    }

    fn draw_search(&self, frame: &mut Frame, area: Rect) {
        let query = self.filter.query();
        let room = (area.width as usize).saturating_sub(SEARCH_PROMPT.len());
        let on_search = self.menu.focus() == Some(MenuFocus::Search);
        let prompt = Span::styled(SEARCH_PROMPT, Style::default().fg(self.config.focus_color));
        let body = if query.is_empty() && !on_search {
            Span::styled("Search", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(truncate(query, room, ""))
        };
        frame.render_widget(Paragraph::new(Line::from(vec![prompt, body])), area);

        if on_search {
            let before: String = query.chars().take(self.filter.cursor()).collect();
            let x = area.x + (SEARCH_PROMPT.len() + display_width(&before)) as u16;
            frame.set_cursor_position((x.min(area.right().saturating_sub(1)), area.y));
        }
    }

    fn row_paragraph(&self, row: &RowItem, width: usize, highlighted: bool) -> Paragraph<'static> {
        match *row {
            RowItem::Header(gid) => {
                let label = self.registry.group(gid).map_or("", |g| g.label());
                Paragraph::new(Span::styled(
                    truncate(label, width, ELLIPSIS),
                    Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
                ))
            }
            RowItem::Divider => Paragraph::new(Span::styled(
                "─".repeat(width),
                Style::default().fg(Color::DarkGray),
            )),
            RowItem::NoResults => Paragraph::new(self.filter.no_results_line().unwrap_or_default())
                .style(Style::default().fg(Color::DarkGray)),
            RowItem::Option { id, grouped } => {
                let Some(option) = self.registry.get(id) else {
                    return Paragraph::new("");
                };
                let indent = if grouped { "  " } else { "" };
                let prefix = if highlighted { HIGHLIGHT_PREFIX } else { PLAIN_PREFIX };
                let room = width.saturating_sub(indent.len() + 2);
                let mut style = Style::default();
                if option.is_selected() {
                    style = style.add_modifier(Modifier::BOLD);
                }
                if highlighted {
                    style = style.fg(self.config.focus_color).add_modifier(Modifier::BOLD);
                }
                Paragraph::new(Line::from(vec![
                    Span::raw(indent),
                    Span::styled(
                        format!("{prefix}{}", truncate(option.display_value(), room, ELLIPSIS)),
                        style,
                    ),
                ]))
            }
        }
    }
}

fn draw_addon(frame: &mut Frame, area: Rect, addon: &Addon, style: Style, border: Color) {
    if area.width == 0 {
        return;
    }
    let block = Block::new()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let text = truncate(addon.text(), inner.width as usize, "");
    frame.render_widget(
        Paragraph::new(Span::styled(text, style)).alignment(Alignment::Center),
        inner,
    );
}
