use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::app::{App, Message, Model};

use super::event_loop::ResizeDebouncer;

impl App {
    pub(super) fn handle_event(
        &self,
        event: Event,
        model: &Model,
        now_ms: u64,
        resize_debouncer: &mut ResizeDebouncer,
    ) -> Option<Message> {
        match event {
            Event::Key(key) => self.handle_key(key, model),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse, model, resize_debouncer.pending_size())
            }
            Event::Resize(w, h) => {
                tracing::debug!(width = w, height = h, "resize queued");
                resize_debouncer.queue(w, h, now_ms);
                None
            }
            _ => None,
        }
    }

    /// Map a click to a keypad press. `pending_size` is a resize that has not
    /// reached the model yet; the screen is already drawn at that size.
    pub(super) fn handle_mouse(
        &self,
        mouse: MouseEvent,
        model: &Model,
        pending_size: Option<(u16, u16)>,
    ) -> Option<Message> {
        let _ = self;
        if !model.mouse_enabled {
            return None;
        }
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return None;
        }
        if model.help_visible {
            return Some(Message::HideHelp);
        }

        let (width, height) = pending_size.unwrap_or((model.width, model.height));
        let area = Rect::new(0, 0, width, height);
        let keypad_area = crate::ui::split_main_rows(area)[1];
        crate::ui::keypad_button_at(keypad_area, mouse.column, mouse.row)
            .map(|button| Message::Input(button.input))
    }

    pub(super) fn handle_key(&self, key: KeyEvent, model: &Model) -> Option<Message> {
        let _ = self;
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if model.help_visible {
            return Some(Message::HideHelp);
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c' | 'q') => Some(Message::Quit),
                KeyCode::Char('y') => Some(Message::CopyDisplay),
                KeyCode::Char('l') => Some(Message::Redraw),
                _ => None,
            };
        }

        if let Some(input) = crate::input::key_to_input(key) {
            return Some(Message::Input(input));
        }

        match key.code {
            KeyCode::Char('?') | KeyCode::F(1) => Some(Message::ToggleHelp),
            KeyCode::Char('y') => Some(Message::CopyDisplay),
            KeyCode::Char('q') => Some(Message::Quit),
            _ => None,
        }
    }

    pub(super) fn view(model: &Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}
