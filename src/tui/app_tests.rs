#[cfg(test)]
mod tests {
    use super::super::app::{App, Focus};
    use super::super::draw::{Control, Hit};
    use crate::application::todo_list::TodoList;
    use crate::infrastructure::clock::ManualClock;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::{Terminal, backend::TestBackend};

    struct Harness {
        app: App<ManualClock>,
        terminal: Terminal<TestBackend>,
    }

    impl Harness {
        fn new() -> Self {
            let app = App::new(TodoList::new(ManualClock::at_millis(1_700_000_000_000)));
            let terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
            let mut h = Self { app, terminal };
            h.render();
            h
        }

        fn render(&mut self) -> Vec<String> {
            let app = &mut self.app;
            self.terminal.draw(|f| app.draw(f)).unwrap();
            let buf = self.terminal.backend().buffer();
            (0..buf.area.height)
                .map(|y| (0..buf.area.width).map(|x| buf.get(x, y).symbol()).collect::<String>())
                .collect()
        }

        fn screen_contains(&mut self, needle: &str) -> bool {
            self.render().iter().any(|line| line.contains(needle))
        }

        fn key(&mut self, code: KeyCode) {
            self.app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
            self.render();
        }

        fn key_with(&mut self, code: KeyCode, modifiers: KeyModifiers) {
            self.app.handle_key(KeyEvent::new(code, modifiers));
            self.render();
        }

        fn type_text(&mut self, text: &str) {
            for c in text.chars() {
                self.app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
            }
            self.render();
        }

        fn add(&mut self, text: &str) {
            if self.app.focus() == Focus::List {
                self.key(KeyCode::Tab);
            }
            self.type_text(text);
            self.key(KeyCode::Enter);
        }

        fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
            self.app.handle_mouse(MouseEvent { kind, column, row, modifiers: KeyModifiers::NONE });
            self.render();
        }

        fn row_body(&self, index: usize) -> (u16, u16) {
            let g = self.app.geometry();
            (g.list.x + 1, g.list.y + (index - g.offset) as u16)
        }

        fn texts(&self) -> Vec<String> {
            self.app.list().state().items().iter().map(|t| t.text.clone()).collect()
        }
    }

    #[test]
    fn first_draw_focuses_input_and_shows_form() {
        let mut h = Harness::new();
        assert_eq!(h.app.focus(), Focus::Input);
        assert!(h.screen_contains("TODO App"));
        assert!(h.screen_contains("Enter your todo"));
        assert!(h.screen_contains("ADD"));
    }

    #[test]
    fn typing_and_enter_adds_item() {
        let mut h = Harness::new();
        h.type_text("Buy milk");
        assert!(h.screen_contains("Buy milk"));
        h.key(KeyCode::Enter);
        assert_eq!(h.texts(), ["Buy milk"]);
        assert!(h.screen_contains("Buy milk (less than a minute ago)"));
        assert!(h.screen_contains("[x] [e] [d]"));
        assert!(h.screen_contains("Enter your todo"));
    }

    #[test]
    fn backspace_edits_draft() {
        let mut h = Harness::new();
        h.type_text("abc");
        h.key(KeyCode::Backspace);
        assert_eq!(h.app.list().state().draft(), "ab");
    }

    #[test]
    fn validation_errors_are_shown_and_cleared_by_typing() {
        let mut h = Harness::new();
        h.key(KeyCode::Enter);
        assert!(h.screen_contains("Todo cannot be empty!"));
        h.type_text("Buy milk");
        assert!(!h.screen_contains("Todo cannot be empty!"));
        h.key(KeyCode::Enter);
        h.type_text("BUY MILK");
        h.key(KeyCode::Enter);
        assert!(h.screen_contains("Todo already exists!"));
        assert_eq!(h.texts(), ["Buy milk"]);
    }

    #[test]
    fn q_in_input_is_text_but_quits_from_list() {
        let mut h = Harness::new();
        h.type_text("q");
        assert!(!h.app.should_quit());
        assert_eq!(h.app.list().state().draft(), "q");
        h.key(KeyCode::Esc);
        assert_eq!(h.app.focus(), Focus::List);
        h.key(KeyCode::Char('q'));
        assert!(h.app.should_quit());
    }

    #[test]
    fn ctrl_c_quits_from_input() {
        let mut h = Harness::new();
        h.key_with(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(h.app.should_quit());
        assert_eq!(h.app.list().state().draft(), "");
    }

    #[test]
    fn list_keys_complete_edit_delete() {
        let mut h = Harness::new();
        h.add("A");
        h.add("B");
        h.key(KeyCode::Tab);
        h.key(KeyCode::Down);
        assert_eq!(h.app.selected(), 1);
        h.key(KeyCode::Char(' '));
        assert!(h.app.list().state().items()[1].done);

        h.key(KeyCode::Char('e'));
        assert_eq!(h.app.focus(), Focus::Input);
        assert!(h.screen_contains("EDIT"));
        h.type_text("2");
        h.key(KeyCode::Enter);
        assert_eq!(h.texts(), ["A", "B2"]);
        assert!(h.app.list().state().items()[1].done);

        h.key(KeyCode::Tab);
        h.key(KeyCode::Char('d'));
        assert_eq!(h.texts(), ["A"]);
        assert_eq!(h.app.selected(), 0);
    }

    #[test]
    fn shift_arrows_reorder_through_drag() {
        let mut h = Harness::new();
        for t in ["A", "B", "C"] { h.add(t); }
        h.key(KeyCode::Tab);
        h.key_with(KeyCode::Down, KeyModifiers::SHIFT);
        assert_eq!(h.texts(), ["B", "A", "C"]);
        assert_eq!(h.app.selected(), 1);
        h.key(KeyCode::Char('J'));
        assert_eq!(h.texts(), ["B", "C", "A"]);
        h.key(KeyCode::Char('J'));
        assert_eq!(h.texts(), ["B", "C", "A"]);
        h.key_with(KeyCode::Up, KeyModifiers::SHIFT);
        assert_eq!(h.texts(), ["B", "A", "C"]);
        assert_eq!(h.app.list().state().drag_source(), None);
    }

    #[test]
    fn mouse_controls_fire_actions() {
        let mut h = Harness::new();
        h.add("A");
        h.add("B");

        let (x, y) = h.app.geometry().control_at(0, Control::Complete).unwrap();
        assert_eq!(h.app.geometry().hit(x, y), Hit::Control(0, Control::Complete));
        h.mouse(MouseEventKind::Down(MouseButton::Left), x, y);
        assert!(h.app.list().state().items()[0].done);

        let (x, y) = h.app.geometry().control_at(1, Control::Edit).unwrap();
        h.mouse(MouseEventKind::Down(MouseButton::Left), x, y);
        assert_eq!(h.app.focus(), Focus::Input);
        assert_eq!(h.app.list().state().draft(), "B");
        assert!(h.screen_contains("EDIT"));

        let (x, y) = h.app.geometry().control_at(1, Control::Delete).unwrap();
        h.mouse(MouseEventKind::Down(MouseButton::Left), x, y);
        assert_eq!(h.texts(), ["A"]);
        assert_eq!(h.app.list().state().editing_id(), None);
        assert!(h.screen_contains("ADD"));
    }

    #[test]
    fn mouse_drag_reorders_live() {
        let mut h = Harness::new();
        for t in ["A", "B", "C"] { h.add(t); }

        let (x, y) = h.row_body(0);
        h.mouse(MouseEventKind::Down(MouseButton::Left), x, y);
        assert_eq!(h.app.list().state().drag_source(), Some(0));

        let (x, y) = h.row_body(1);
        h.mouse(MouseEventKind::Drag(MouseButton::Left), x, y);
        assert_eq!(h.texts(), ["B", "A", "C"]);
        let (x, y) = h.row_body(2);
        h.mouse(MouseEventKind::Drag(MouseButton::Left), x, y);
        assert_eq!(h.texts(), ["B", "C", "A"]);
        assert_eq!(h.app.list().state().drag_source(), Some(2));

        h.mouse(MouseEventKind::Up(MouseButton::Left), x, y);
        assert_eq!(h.app.list().state().drag_source(), None);
        assert_eq!(h.app.selected(), 2);
    }

    #[test]
    fn mouse_on_button_submits_and_on_input_focuses() {
        let mut h = Harness::new();
        h.type_text("A");
        h.key(KeyCode::Tab);
        assert_eq!(h.app.focus(), Focus::List);

        let button = h.app.geometry().button;
        h.mouse(MouseEventKind::Down(MouseButton::Left), button.x, button.y);
        assert_eq!(h.texts(), ["A"]);

        let input = h.app.geometry().input;
        h.mouse(MouseEventKind::Down(MouseButton::Left), input.x, input.y);
        assert_eq!(h.app.focus(), Focus::Input);
    }

    #[test]
    fn clicks_outside_rows_do_nothing() {
        let mut h = Harness::new();
        h.add("A");
        let (x, y) = h.row_body(0);
        assert_eq!(h.app.geometry().hit(x, y + 3), Hit::Nothing);
        h.mouse(MouseEventKind::Down(MouseButton::Left), x, y + 3);
        assert_eq!(h.app.list().state().drag_source(), None);
        assert_eq!(h.app.geometry().hit(0, 0), Hit::Nothing);
    }
}
