//! Expression editor for the calculator display.
//!
//! Owns the text buffer being typed, applies editing operations, and
//! evaluates the buffer in place. Input sources (keyboard, keypad clicks)
//! feed it [`InputEvent`]s through [`ExpressionEditor::apply`].

mod buffer;
mod event;

pub use buffer::{ERROR_MARKER, EditorState, Evaluation, ExpressionEditor};
pub use event::InputEvent;
