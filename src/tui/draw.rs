use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::application::view::{ItemView, TodoView};

use super::app::Focus;

/// Per-row controls, in display order. Each label is three cells wide and
/// preceded by one space.
pub const CONTROLS: [(&str, Control); 3] = [("[x]", Control::Complete), ("[e]", Control::Edit), ("[d]", Control::Delete)];
const CONTROLS_WIDTH: u16 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control { Complete, Edit, Delete }

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Input,
    Button,
    Row(usize),
    Control(usize, Control),
    Nothing,
}

/// Where things landed on the last draw; used to resolve mouse positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Geometry {
    pub input: Rect,
    pub button: Rect,
    /// Inner area of the list block.
    pub list: Rect,
    pub offset: usize,
    pub rows: usize,
}

impl Geometry {
    pub fn hit(&self, x: u16, y: u16) -> Hit {
        if inside(self.input, x, y) {
            return Hit::Input;
        }
        if inside(self.button, x, y) {
            return Hit::Button;
        }
        if !inside(self.list, x, y) {
            return Hit::Nothing;
        }
        let index = self.offset + (y - self.list.y) as usize;
        if index >= self.rows {
            return Hit::Nothing;
        }
        let controls_x = self.list.right().saturating_sub(CONTROLS_WIDTH);
        if x < controls_x || self.list.width < CONTROLS_WIDTH {
            return Hit::Row(index);
        }
        let rel = x - controls_x;
        match CONTROLS.get(((rel.saturating_sub(1)) / 4) as usize) {
            Some((_, control)) if rel % 4 != 0 => Hit::Control(index, *control),
            _ => Hit::Row(index),
        }
    }

    /// Screen position of the middle of a control on `index`, if visible.
    pub fn control_at(&self, index: usize, control: Control) -> Option<(u16, u16)> {
        let row = index.checked_sub(self.offset)?;
        if row >= self.list.height as usize || index >= self.rows {
            return None;
        }
        let slot = CONTROLS.iter().position(|(_, c)| *c == control)? as u16;
        let x = self.list.right().checked_sub(CONTROLS_WIDTH)? + 1 + slot * 4 + 1;
        Some((x, self.list.y + row as u16))
    }
}

fn inside(r: Rect, x: u16, y: u16) -> bool {
    x >= r.x && x < r.right() && y >= r.y && y < r.bottom()
}

pub fn draw(f: &mut Frame, view: &TodoView, focus: Focus, selected: usize) -> Geometry {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.size());

    let heading = Paragraph::new(view.heading)
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(heading, chunks[0]);

    let form = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(10)])
        .split(chunks[1]);

    let input_style = if focus == Focus::Input { Style::default().fg(Color::Cyan) } else { Style::default() };
    let input_text = if view.form.draft.is_empty() {
        Span::styled(view.form.placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(view.form.draft.as_str())
    };
    let input_block = Block::default().borders(Borders::ALL).border_style(input_style);
    let input_inner = input_block.inner(form[0]);
    f.render_widget(Paragraph::new(Line::from(input_text)).block(input_block), form[0]);
    if focus == Focus::Input {
        let typed = view.form.draft.chars().count() as u16;
        let x = (input_inner.x + typed).min(input_inner.right().saturating_sub(1));
        f.set_cursor(x, input_inner.y);
    }

    let button_block = Block::default().borders(Borders::ALL);
    let button_inner = button_block.inner(form[1]);
    let button = Paragraph::new(view.form.submit_label.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(button_block);
    f.render_widget(button, form[1]);

    if let Some(error) = &view.error {
        f.render_widget(Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red)), chunks[2]);
    }

    let list_block = Block::default().borders(Borders::ALL).title(format!("items [{}]", view.items.len()));
    let list_inner = list_block.inner(chunks[3]);
    f.render_widget(list_block, chunks[3]);

    let visible = list_inner.height as usize;
    let offset = if visible > 0 && selected >= visible { selected + 1 - visible } else { 0 };
    let lines: Vec<Line> = view
        .items
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, item)| item_line(item, list_inner.width, focus == Focus::List && i == selected))
        .collect();
    f.render_widget(Paragraph::new(lines), list_inner);

    let help = match focus {
        Focus::Input => "Enter: submit  Tab/Esc: list  Ctrl+C: quit",
        Focus::List => "Space: complete  e: edit  d: delete  Shift+Up/Down: move  Tab: input  q: quit",
    };
    f.render_widget(Paragraph::new(help).style(Style::default().fg(Color::DarkGray)), chunks[4]);

    Geometry { input: input_inner, button: button_inner, list: list_inner, offset, rows: view.items.len() }
}

fn item_line(item: &ItemView, width: u16, selected: bool) -> Line<'static> {
    let body_width = width.saturating_sub(CONTROLS_WIDTH) as usize;
    let mut caption: String = item.caption().chars().take(body_width).collect();
    let pad = body_width.saturating_sub(caption.chars().count());
    caption.push_str(&" ".repeat(pad));

    let mut body_style = Style::default();
    if item.done {
        body_style = body_style.fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT);
    }
    if item.dragging {
        body_style = body_style.bg(Color::Yellow).fg(Color::Black);
    }
    if selected {
        body_style = body_style.add_modifier(Modifier::REVERSED);
    }

    let mut spans = vec![Span::styled(caption, body_style)];
    for (label, control) in CONTROLS {
        let color = match control {
            Control::Complete => Color::Green,
            Control::Edit => Color::Blue,
            Control::Delete => Color::Red,
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(label, Style::default().fg(color)));
    }
    Line::from(spans)
}
