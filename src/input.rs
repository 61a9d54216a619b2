//! Keyboard semantics for the input box.
//!
//! The store never sees raw key events; the host maps them here first.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press means for the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerAction {
    /// Send the draft.
    Submit,
    /// Break the line without sending.
    InsertNewline,
}

/// Map Enter-family keys. Plain Enter submits; Shift+Enter or Alt+Enter
/// inserts a newline (Alt works as a fallback when the terminal can't
/// report Shift+Enter). Anything else is none of the composer's business.
pub fn composer_action(key: &KeyEvent) -> Option<ComposerAction> {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char('\n')) => {
            Some(ComposerAction::Submit)
        }
        (KeyModifiers::SHIFT, KeyCode::Enter) | (KeyModifiers::ALT, KeyCode::Enter) => {
            Some(ComposerAction::InsertNewline)
        }
        _ => None,
    }
}

/// Rich-text formatting commands. The store does not interpret these; they
/// pass straight through to whatever editing surface hosts the input box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatCommand {
    Bold,
    Italic,
    Underline,
    Strikethrough,
}

impl FormatCommand {
    /// Command token understood by rich-text editing surfaces.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Strikethrough => "strikethrough",
        }
    }

    /// Marker the plain-text demo composer inserts instead of executing the
    /// command.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Bold => "**",
            Self::Italic => "_",
            Self::Underline => "__",
            Self::Strikethrough => "~~",
        }
    }
}

/// Ctrl-key bindings for format commands.
pub fn format_command(key: &KeyEvent) -> Option<FormatCommand> {
    if !key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char('b') => Some(FormatCommand::Bold),
        KeyCode::Char('i') => Some(FormatCommand::Italic),
        KeyCode::Char('u') => Some(FormatCommand::Underline),
        KeyCode::Char('s') => Some(FormatCommand::Strikethrough),
        _ => None,
    }
}
