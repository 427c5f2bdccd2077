//! Theming and color definitions.
//!
//! Each [`ThemeMode`] maps to a small palette. Dark uses the terminal's
//! named ANSI colors; light uses indexed colors that stay readable on a
//! pale background.

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeMode;
use crate::editor::InputEvent;

/// What kind of keypad button is being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Digit,
    Operator,
    Control,
    Evaluate,
}

impl ButtonKind {
    pub const fn of(input: InputEvent) -> Self {
        match input {
            InputEvent::Digit(_) | InputEvent::DecimalPoint => Self::Digit,
            InputEvent::Operator(_) => Self::Operator,
            InputEvent::Clear | InputEvent::Delete => Self::Control,
            InputEvent::Evaluate => Self::Evaluate,
        }
    }
}

pub fn display_style(theme: ThemeMode) -> Style {
    match theme {
        ThemeMode::Dark => Style::default().fg(Color::White),
        ThemeMode::Light => Style::default().fg(Color::Indexed(235)),
    }
    .add_modifier(Modifier::BOLD)
}

/// Style for the `0` shown while the buffer is empty.
pub fn placeholder_style(theme: ThemeMode) -> Style {
    match theme {
        ThemeMode::Dark => Style::default().fg(Color::Indexed(245)),
        ThemeMode::Light => Style::default().fg(Color::Indexed(248)),
    }
}

pub fn error_style(theme: ThemeMode) -> Style {
    match theme {
        ThemeMode::Dark => Style::default().fg(Color::Red),
        ThemeMode::Light => Style::default().fg(Color::Indexed(124)),
    }
    .add_modifier(Modifier::BOLD)
}

pub fn border_style(theme: ThemeMode) -> Style {
    match theme {
        ThemeMode::Dark => Style::default().fg(Color::DarkGray),
        ThemeMode::Light => Style::default().fg(Color::Indexed(250)),
    }
}

pub fn button_style(theme: ThemeMode, kind: ButtonKind, pressed: bool) -> Style {
    let light = theme == ThemeMode::Light;
    let style = match kind {
        ButtonKind::Digit => Style::default().fg(if light {
            Color::Indexed(235)
        } else {
            Color::White
        }),
        ButtonKind::Operator => Style::default()
            .fg(if light {
                Color::Indexed(24)
            } else {
                Color::Cyan
            })
            .add_modifier(Modifier::BOLD),
        ButtonKind::Control => Style::default()
            .fg(if light {
                Color::Indexed(124)
            } else {
                Color::LightRed
            })
            .add_modifier(Modifier::BOLD),
        ButtonKind::Evaluate => Style::default()
            .fg(if light {
                Color::Indexed(22)
            } else {
                Color::Green
            })
            .add_modifier(Modifier::BOLD),
    };
    if pressed {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

pub fn status_style(theme: ThemeMode) -> Style {
    match theme {
        ThemeMode::Dark => Style::default().bg(Color::DarkGray).fg(Color::White),
        ThemeMode::Light => Style::default().bg(Color::Indexed(252)).fg(Color::Black),
    }
}
