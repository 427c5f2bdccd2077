//! Keypad layout.
//!
//! The same geometry drives rendering and mouse hit-testing, so a click
//! always lands on the button drawn under it.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::editor::InputEvent;
use crate::eval::Operator;

/// Number of grid columns every keypad row spans.
pub const KEYPAD_COLUMNS: u16 = 4;

/// A clickable keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    pub label: &'static str,
    pub input: InputEvent,
    /// Width in grid columns
    pub span: u16,
}

const fn button(label: &'static str, input: InputEvent) -> KeypadButton {
    KeypadButton {
        label,
        input,
        span: 1,
    }
}

const fn wide(label: &'static str, input: InputEvent) -> KeypadButton {
    KeypadButton {
        label,
        input,
        span: 2,
    }
}

const fn digit(label: &'static str, c: char) -> KeypadButton {
    button(label, InputEvent::Digit(c))
}

const fn op(label: &'static str, op: Operator) -> KeypadButton {
    button(label, InputEvent::Operator(op))
}

/// Keypad rows, top to bottom. Spans in each row sum to [`KEYPAD_COLUMNS`].
pub static KEYPAD: [&[KeypadButton]; 5] = [
    &[
        wide("AC", InputEvent::Clear),
        button("DE", InputEvent::Delete),
        op("/", Operator::Div),
    ],
    &[
        digit("7", '7'),
        digit("8", '8'),
        digit("9", '9'),
        op("*", Operator::Mul),
    ],
    &[
        digit("4", '4'),
        digit("5", '5'),
        digit("6", '6'),
        op("-", Operator::Sub),
    ],
    &[
        digit("1", '1'),
        digit("2", '2'),
        digit("3", '3'),
        op("+", Operator::Add),
    ],
    &[
        wide("0", InputEvent::Digit('0')),
        button(".", InputEvent::DecimalPoint),
        button("=", InputEvent::Evaluate),
    ],
];

/// Lay out every keypad button inside `area`.
pub fn keypad_button_rects(area: Rect) -> Vec<(Rect, &'static KeypadButton)> {
    #[allow(clippy::cast_possible_truncation)]
    let row_count = KEYPAD.len() as u32;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(KEYPAD.iter().map(|_| Constraint::Ratio(1, row_count)))
        .split(area);

    let mut rects = Vec::new();
    for (row_area, buttons) in rows.iter().zip(KEYPAD.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                buttons
                    .iter()
                    .map(|b| Constraint::Ratio(u32::from(b.span), u32::from(KEYPAD_COLUMNS))),
            )
            .split(*row_area);
        rects.extend(cells.iter().copied().zip(buttons.iter()));
    }
    rects
}

/// Find the button under a terminal cell, if any.
pub fn keypad_button_at(area: Rect, column: u16, row: u16) -> Option<&'static KeypadButton> {
    keypad_button_rects(area)
        .into_iter()
        .find(|(rect, _)| point_in_rect(column, row, *rect))
        .map(|(_, button)| button)
}

const fn point_in_rect(x: u16, y: u16, rect: Rect) -> bool {
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}
