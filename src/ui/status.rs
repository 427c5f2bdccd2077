use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, ToastLevel};
use crate::editor::EditorState;

use super::style;

pub const fn state_label(state: EditorState) -> &'static str {
    match state {
        EditorState::Empty => "ready",
        EditorState::Typing => "typing",
        EditorState::Result => "result",
        EditorState::Error => "error",
    }
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let mouse_indicator = if model.mouse_enabled { " [mouse]" } else { "" };
    let status = format!(
        " {}  [{}]{}  ?:help  y:copy  q:quit",
        state_label(model.editor.state()),
        model.theme.as_str(),
        mouse_indicator
    );
    let status_bar = Paragraph::new(status).style(style::status_style(model.theme));
    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
