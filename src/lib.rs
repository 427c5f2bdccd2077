// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditorState)
    clippy::module_name_repetitions
)]

//! # Keycalc
//!
//! A terminal calculator with a clickable keypad.
//!
//! Keycalc keeps an arithmetic expression in an editable buffer and
//! evaluates it with a small recursive-descent parser. Nothing is ever
//! handed to a general-purpose interpreter.
//!
//! ## Architecture
//!
//! Keycalc uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`eval`]: Tokenizer, parser and evaluator for `+ - * /` expressions
//! - [`editor`]: The expression buffer and its Result/Error state machine
//! - [`input`]: Keyboard mapping to calculator input
//! - [`app`]: Main application loop and state
//! - [`ui`]: Display, keypad and overlays
//! - [`config`]: Saved default flags

pub mod app;
pub mod config;
pub mod editor;
pub mod eval;
pub mod input;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::editor::{EditorState, Evaluation, ExpressionEditor, InputEvent};
    pub use crate::eval::{EvalError, evaluate, format_value};
}
