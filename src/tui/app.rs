use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal};
use tracing::{debug, info};

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{ContactFormState, HelpState, draw_contact, draw_help};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// Fill in and submit the contact form.
    #[default]
    Contact,
    /// Show keybinding help.
    Help,
}

/// Top-level application state.
#[derive(Debug, Default)]
pub struct App {
    screen: Screen,
    contact: ContactFormState,
    help: HelpState,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` showing an empty contact form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        info!("contact form started");
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        info!("contact form closed");
        Ok(())
    }

    /// Renders the current screen.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        match self.screen {
            Screen::Contact => draw_contact(&self.contact, frame, area),
            Screen::Help => draw_help(&self.help, frame, area),
        }
    }

    /// Handles a key event by dispatching it to the active screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let action = match self.screen {
            Screen::Contact => self.contact.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => {
                debug!(?screen, "navigate");
                if screen == Screen::Help {
                    self.help.reset();
                }
                self.screen = screen;
            }
            Action::Remount => {
                debug!("contact form remounted");
                self.contact = ContactFormState::new();
            }
            Action::Quit => self.should_quit = true,
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the contact form state.
    pub fn contact(&self) -> &ContactFormState {
        &self.contact
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;
    use crate::model::Field;
    use crate::tui::screens::Phase;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_string(app: &mut App, s: &str) {
        for ch in s.chars() {
            app.handle_key(press(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn new_starts_on_contact() {
        let app = App::new();
        assert_eq!(app.screen(), Screen::Contact);
        assert!(!app.should_quit());
        assert_eq!(app.contact().phase(), &Phase::Editing);
    }

    #[test]
    fn esc_on_contact_quits() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn q_on_contact_is_typed_not_quit() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.contact().form().first_name, "q");
    }

    #[test]
    fn f1_navigates_to_help_and_back() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::F(1)));
        assert_eq!(app.screen(), Screen::Help);

        app.handle_key(press(KeyCode::Char('q')));
        assert_eq!(app.screen(), Screen::Contact);
        assert!(!app.should_quit());
    }

    #[test]
    fn esc_on_help_returns_to_contact() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::F(1)));
        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.screen(), Screen::Contact);
        assert!(!app.should_quit());
    }

    #[test]
    fn form_survives_a_trip_to_help() {
        let mut app = App::new();
        type_string(&mut app, "Someone");
        app.handle_key(press(KeyCode::F(1)));
        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.contact().form().first_name, "Someone");
    }

    #[test]
    fn help_scroll_resets_when_reopened() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::F(1)));
        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Esc));
        app.handle_key(press(KeyCode::F(1)));
        assert_eq!(app.help.scroll(), 0);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new();
        app.handle_key(release(KeyCode::Esc));
        assert!(!app.should_quit());
        app.handle_key(release(KeyCode::Char('x')));
        assert_eq!(app.contact().form().first_name, "");
    }

    #[test]
    fn ctrl_r_remounts_contact_form() {
        let mut app = App::new();
        type_string(&mut app, "Bob");
        app.handle_key(press(KeyCode::Enter));
        assert!(!app.contact().errors().is_empty());

        app.handle_key(ctrl('r'));
        assert_eq!(app.contact().form().first_name, "");
        assert!(app.contact().errors().is_empty());
        assert!(!app.contact().is_touched(Field::FirstName));
    }

    #[test]
    fn full_submission_through_app() {
        let mut app = App::new();
        type_string(&mut app, "Someone");
        app.handle_key(press(KeyCode::Tab));
        type_string(&mut app, "Special");
        app.handle_key(press(KeyCode::Tab));
        type_string(&mut app, "someone@special.com");
        app.handle_key(press(KeyCode::Enter));

        let submission = app.contact().submission().expect("submitted");
        assert_eq!(submission.first_name, "Someone");
        assert_eq!(submission.last_name, "Special");
        assert_eq!(submission.email, "someone@special.com");
        assert_eq!(submission.message, None);
    }
}
