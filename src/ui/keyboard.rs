//! Keyboard input mapping for the onboarding TUI.
//!
//! Translates crossterm key events into [`UiAction`]s; the app decides
//! what each action means on the current screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A user action independent of the physical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Move the card cursor
    Move(Direction),
    /// Pick the card with this zero-based index
    Pick(usize),
    /// Pick or toggle the card under the cursor
    Select,
    /// Primary button / acknowledge dialog
    Confirm,
    /// "I already have an account"
    Skip,
    /// Back to welcome from the dashboard
    Restart,
    /// Open the coach bubble
    Coach,
    /// Close a dialog
    Dismiss,
    /// Leave the app
    Quit,
}

/// Letter bindings. Arrows, digits, Space, Enter and Esc are fixed.
#[derive(Debug, Clone, Copy)]
pub struct KeyBindings {
    /// Skip onboarding
    pub skip: KeyCode,
    /// Restart from the dashboard
    pub restart: KeyCode,
    /// Open the coach bubble
    pub coach: KeyCode,
    /// Quit
    pub quit: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            skip: KeyCode::Char('s'),
            restart: KeyCode::Char('r'),
            coach: KeyCode::Char('c'),
            quit: KeyCode::Char('q'),
        }
    }
}

impl KeyBindings {
    /// Map a key event to an action. Releases and repeats are ignored.
    pub fn action_for(&self, key: KeyEvent) -> Option<UiAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(UiAction::Quit),
                _ => None,
            };
        }

        let action = match key.code {
            KeyCode::Up | KeyCode::Char('k') => UiAction::Move(Direction::Up),
            KeyCode::Down | KeyCode::Char('j') => UiAction::Move(Direction::Down),
            KeyCode::Left | KeyCode::Char('h') => UiAction::Move(Direction::Left),
            KeyCode::Right | KeyCode::Char('l') => UiAction::Move(Direction::Right),
            KeyCode::Char(' ') => UiAction::Select,
            KeyCode::Enter => UiAction::Confirm,
            KeyCode::Esc => UiAction::Dismiss,
            KeyCode::Char(c @ '1'..='9') => UiAction::Pick(c as usize - '1' as usize),
            code if code == self.skip => UiAction::Skip,
            code if code == self.restart => UiAction::Restart,
            code if code == self.coach => UiAction::Coach,
            code if code == self.quit => UiAction::Quit,
            _ => return None,
        };
        Some(action)
    }
}

/// One-line key hint for a footer.
pub fn render_hint(bindings: &KeyBindings, parts: &[&str]) -> String {
    let quit = match bindings.quit {
        KeyCode::Char(c) => c.to_string(),
        _ => "q".to_string(),
    };
    let mut hint = parts.join(" | ");
    if !hint.is_empty() {
        hint.push_str(" | ");
    }
    hint.push_str(&format!("[{}] quit", quit));
    hint
}
