use tracing::{debug, warn};

use crate::app::{Model, ToastLevel};
use crate::editor::{Evaluation, InputEvent};

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Calculator input from the keyboard or a keypad click
    Input(InputEvent),
    /// Copy the display to the clipboard
    CopyDisplay,
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,
    /// Terminal resized
    Resize(u16, u16),
    /// Redraw screen
    Redraw,
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// Clipboard access is left to the side-effect pass.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::Input(event) => {
            model.last_input = Some(event);
            match model.editor.apply(event) {
                Some(Evaluation::Value(value)) => debug!(value, "evaluated"),
                Some(Evaluation::Failed(err)) => {
                    warn!(%err, "evaluation failed");
                    model.show_toast(ToastLevel::Error, err.to_string());
                }
                Some(Evaluation::Empty) => debug!("nothing to evaluate"),
                None => {}
            }
        }
        Message::ToggleHelp => {
            model.help_visible = !model.help_visible;
        }
        Message::HideHelp => {
            model.help_visible = false;
        }
        Message::Resize(width, height) => {
            model.width = width;
            model.height = height;
        }
        Message::CopyDisplay | Message::Redraw => {}
        Message::Quit => {
            model.should_quit = true;
        }
    }
    model
}
