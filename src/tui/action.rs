//! Actions returned by screen event handlers.

use crossterm::event::KeyEvent;

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to update global state and navigate between
/// screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Discard the contact form and start over with empty fields.
    Remount,
    /// Quit the application.
    Quit,
}

/// Common behavior for all screen state types.
pub trait ScreenState {
    /// Process a key event and return an [`Action`] for the `App` to apply.
    fn handle_key(&mut self, key: KeyEvent) -> Action;
}
