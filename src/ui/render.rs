use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::Model;
use crate::editor::EditorState;

use super::style::{self, ButtonKind};
use super::{DISPLAY_HEIGHT, STATUS_HEIGHT, keypad, overlays, status};

/// Split the screen into display, keypad, and status rows.
pub fn split_main_rows(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(DISPLAY_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area)
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let chunks = split_main_rows(area);

    render_display(model, frame, chunks[0]);
    render_keypad(model, frame, chunks[1]);

    if model.active_toast().is_some() {
        status::render_toast_bar(model, frame, chunks[2]);
    } else {
        status::render_status_bar(model, frame, chunks[2]);
    }

    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    }
}

fn render_display(model: &Model, frame: &mut Frame, area: Rect) {
    let theme = model.theme;
    let block = Block::default()
        .title(" keycalc ")
        .borders(Borders::ALL)
        .border_style(style::border_style(theme));
    let inner_width = usize::from(block.inner(area).width);

    let line = match model.editor.state() {
        EditorState::Empty => Line::styled("0", style::placeholder_style(theme)),
        EditorState::Error => Line::styled(model.display_text(), style::error_style(theme)),
        EditorState::Typing | EditorState::Result => Line::styled(
            visible_tail(model.display_text(), inner_width),
            style::display_style(theme),
        ),
    };

    let display = Paragraph::new(line)
        .alignment(Alignment::Right)
        .block(block);
    frame.render_widget(display, area);
}

/// The end of `text` that fits in `width` columns. Cut text gets a leading
/// ellipsis so the digits being typed stay visible.
pub(super) fn visible_tail(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(1);
    let tail: String = text.chars().skip(count - keep).collect();
    format!("\u{2026}{tail}")
}

fn render_keypad(model: &Model, frame: &mut Frame, area: Rect) {
    for (rect, button) in keypad::keypad_button_rects(area) {
        let pressed = model.last_input == Some(button.input);
        let label_style = style::button_style(model.theme, ButtonKind::of(button.input), pressed);

        // Too small for borders: draw the bare label.
        let label_area = if rect.height >= 3 && rect.width >= 3 {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(style::border_style(model.theme));
            let inner = block.inner(rect);
            frame.render_widget(block, rect);
            inner
        } else {
            rect
        };
        if label_area.height == 0 {
            continue;
        }

        let centered = Rect::new(
            label_area.x,
            label_area.y + (label_area.height - 1) / 2,
            label_area.width,
            1,
        );
        let label = Paragraph::new(Line::styled(button.label, label_style))
            .alignment(Alignment::Center);
        frame.render_widget(label, centered);
    }
}
