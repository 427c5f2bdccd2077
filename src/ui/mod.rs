//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`keypad`]: Button layout shared by rendering and mouse hit-testing
//! - [`style`]: Theming and colors

pub mod keypad;
pub mod style;

mod overlays;
mod render;
mod status;

pub use keypad::{KEYPAD, KeypadButton, keypad_button_at, keypad_button_rects};
pub use render::{render, split_main_rows};

/// Height of the display box, including borders.
pub const DISPLAY_HEIGHT: u16 = 3;
/// Height of the status bar.
pub const STATUS_HEIGHT: u16 = 1;

#[cfg(test)]
mod tests;
