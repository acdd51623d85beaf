use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;

use crate::application::todo_list::{Action, TodoList};
use crate::domain::clock::Clock;
use crate::domain::todo::TodoId;

use super::draw::{self, Control, Geometry, Hit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus { Input, List }

/// Terminal host around a [`TodoList`]: owns focus, selection and the last
/// drawn geometry, and turns key and mouse events into controller actions.
pub struct App<C: Clock> {
    list: TodoList<C>,
    focus: Focus,
    selected: usize,
    geometry: Geometry,
    quit: bool,
}

impl<C: Clock> App<C> {
    pub fn new(list: TodoList<C>) -> Self {
        Self { list, focus: Focus::List, selected: 0, geometry: Geometry::default(), quit: false }
    }

    pub fn list(&self) -> &TodoList<C> { &self.list }
    pub fn focus(&self) -> Focus { self.focus }
    pub fn selected(&self) -> usize { self.selected }
    pub fn geometry(&self) -> Geometry { self.geometry }
    pub fn should_quit(&self) -> bool { self.quit }

    pub fn draw(&mut self, f: &mut Frame) {
        if self.list.take_focus_request() {
            self.focus = Focus::Input;
        }
        self.clamp_selection();
        let view = self.list.view();
        self.geometry = draw::draw(f, &view, self.focus, self.selected);
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only act on key presses; ignore repeats and releases to prevent duplicate input
        if key.kind != KeyEventKind::Press { return; }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }
        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::List => self.handle_list_key(key),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut draft = self.list.state().draft().to_string();
                draft.push(c);
                self.list.dispatch(Action::DraftChanged(draft));
            }
            KeyCode::Backspace => {
                let mut draft = self.list.state().draft().to_string();
                draft.pop();
                self.list.dispatch(Action::DraftChanged(draft));
            }
            KeyCode::Enter => self.list.dispatch(Action::Submit),
            KeyCode::Tab | KeyCode::Esc | KeyCode::Down => self.focus = Focus::List,
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Up if shift => self.move_selected(true),
            KeyCode::Down if shift => self.move_selected(false),
            KeyCode::Char('K') => self.move_selected(true),
            KeyCode::Char('J') => self.move_selected(false),
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.list.state().items().len() { self.selected += 1; }
            }
            KeyCode::Char(' ') | KeyCode::Char('c') => self.on_selected(Control::Complete),
            KeyCode::Char('e') | KeyCode::Enter => self.on_selected(Control::Edit),
            KeyCode::Char('d') | KeyCode::Delete => self.on_selected(Control::Delete),
            KeyCode::Tab | KeyCode::Char('i') => self.focus = Focus::Input,
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let hit = self.geometry.hit(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match hit {
                Hit::Input => self.focus = Focus::Input,
                Hit::Button => self.list.dispatch(Action::Submit),
                Hit::Control(index, control) => {
                    self.selected = index;
                    self.on_selected(control);
                }
                Hit::Row(index) => {
                    self.selected = index;
                    self.focus = Focus::List;
                    self.list.dispatch(Action::DragStart(index));
                }
                Hit::Nothing => {}
            },
            MouseEventKind::Drag(MouseButton::Left) if self.list.state().drag_source().is_some() => {
                if let Hit::Row(index) | Hit::Control(index, _) = hit {
                    self.list.dispatch(Action::DragOver(index));
                    self.selected = index;
                }
            }
            MouseEventKind::Up(MouseButton::Left) if self.list.state().drag_source().is_some() => {
                self.list.dispatch(Action::DragEnd);
            }
            _ => {}
        }
    }

    fn selected_id(&self) -> Option<TodoId> {
        self.list.state().items().get(self.selected).map(|t| t.id)
    }

    fn on_selected(&mut self, control: Control) {
        let Some(id) = self.selected_id() else { return };
        match control {
            Control::Complete => self.list.dispatch(Action::Complete(id)),
            Control::Edit => {
                self.list.dispatch(Action::Edit(id));
                self.focus = Focus::Input;
            }
            Control::Delete => {
                self.list.dispatch(Action::Delete(id));
                self.clamp_selection();
            }
        }
    }

    /// Keyboard reorder; runs the same start/over/end sequence a mouse drag does.
    fn move_selected(&mut self, up: bool) {
        let len = self.list.state().items().len();
        let from = self.selected;
        let to = match up {
            true if from > 0 => from - 1,
            false if from + 1 < len => from + 1,
            _ => return,
        };
        self.list.dispatch(Action::DragStart(from));
        self.list.dispatch(Action::DragOver(to));
        self.list.dispatch(Action::DragEnd);
        self.selected = to;
    }

    fn clamp_selection(&mut self) {
        let len = self.list.state().items().len();
        if self.selected >= len { self.selected = len.saturating_sub(1); }
    }
}
