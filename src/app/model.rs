use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::ThemeMode;
use crate::editor::{EditorState, ExpressionEditor, InputEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug, Clone)]
pub struct Model {
    /// The calculator buffer and its state machine
    pub editor: ExpressionEditor,
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
    /// Last input applied, highlighted on the keypad
    pub last_input: Option<InputEvent>,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Active color theme
    pub theme: ThemeMode,
    /// Whether mouse capture is enabled (keypad clicks)
    pub mouse_enabled: bool,
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
    toast: Option<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl Model {
    /// Create a new model for a terminal of the given size.
    pub fn new(terminal_size: (u16, u16)) -> Self {
        Self {
            editor: ExpressionEditor::new(),
            width: terminal_size.0,
            height: terminal_size.1,
            last_input: None,
            help_visible: false,
            theme: ThemeMode::Dark,
            mouse_enabled: true,
            config_global_path: None,
            config_local_path: None,
            toast: None,
            should_quit: false,
        }
    }

    #[must_use]
    pub const fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    /// The text the display should show.
    pub fn display_text(&self) -> &str {
        self.editor.text()
    }

    /// Whether the display holds something worth copying.
    pub fn has_copyable_display(&self) -> bool {
        !matches!(
            self.editor.state(),
            EditorState::Empty | EditorState::Error
        )
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new((80, 24))
    }
}
