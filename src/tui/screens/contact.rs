//! Contact form screen — field entry, live validation, and the submitted view.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tracing::{debug, info, trace};

use crate::model::{ContactForm, Field, Submission, ValidationError, validate};
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;
use crate::tui::widgets::form::{FormField, draw_form, form_height};

/// Title shown above the form.
pub const TITLE: &str = "Contact Form";

/// Label of the submit button.
pub const SUBMIT_LABEL: &str = "Submit";

/// Whether the form is being filled in or showing a submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Submitted(Submission),
}

/// State for the contact form screen.
///
/// Errors are derived from the current field values each time they are
/// requested, so they can never go stale.
#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    form: ContactForm,
    focus: Field,
    touched: [bool; 4],
    submit_attempted: bool,
    phase: Phase,
}

impl ContactFormState {
    /// Creates an empty form in the editing phase with focus on First Name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `field` and marks it as touched.
    ///
    /// Editing after a successful submit drops the snapshot and returns the
    /// form to [`Phase::Editing`].
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
        self.touched[field.index()] = true;
        trace!(field = %field, len = self.form.get(field).chars().count(), "field updated");

        if matches!(self.phase, Phase::Submitted(_)) {
            debug!(field = %field, "edit after submit, returning to editing");
            self.phase = Phase::Editing;
        }
    }

    /// Appends a character to the focused field.
    pub fn insert_char(&mut self, ch: char) {
        let field = self.focus;
        let mut value = self.form.get(field).to_string();
        value.push(ch);
        self.update_field(field, value);
    }

    /// Deletes the last character of the focused field. No-op when it is empty.
    pub fn delete_char(&mut self) {
        let field = self.focus;
        let mut value = self.form.get(field).to_string();
        if value.pop().is_some() {
            self.update_field(field, value);
        }
    }

    /// Validates the form and either shows every error or takes a snapshot.
    pub fn submit(&mut self) {
        self.submit_attempted = true;
        match Submission::capture(&self.form) {
            Ok(submission) => {
                info!(
                    has_message = submission.message.is_some(),
                    "contact form submitted"
                );
                self.phase = Phase::Submitted(submission);
            }
            Err(errors) => {
                debug!(errors = errors.len(), "submit rejected");
                self.phase = Phase::Editing;
            }
        }
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        let next = (self.focus.index() + 1) % Field::all().len();
        self.focus = Field::from_index(next).unwrap_or_default();
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        let len = Field::all().len();
        let prev = (self.focus.index() + len - 1) % len;
        self.focus = Field::from_index(prev).unwrap_or_default();
    }

    /// Returns the focused field.
    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Returns the current field values.
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Returns the current phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Returns the submission snapshot, if the form has been submitted.
    pub fn submission(&self) -> Option<&Submission> {
        match &self.phase {
            Phase::Submitted(submission) => Some(submission),
            Phase::Editing => None,
        }
    }

    /// Returns `true` if `field` has been edited since the form was created.
    pub fn is_touched(&self, field: Field) -> bool {
        self.touched[field.index()]
    }

    /// Returns the errors to display.
    ///
    /// Before the first submit only errors on touched fields are shown;
    /// afterwards every error is.
    pub fn errors(&self) -> Vec<ValidationError> {
        validate(&self.form)
            .into_iter()
            .filter(|e| self.submit_attempted || self.is_touched(e.field()))
            .collect()
    }

    /// Builds the declarative view of the current state.
    pub fn view(&self) -> ContactView {
        let errors = self.errors();
        let inputs = Field::all()
            .iter()
            .map(|&field| FormField {
                label: field.label(),
                value: self.form.get(field).to_string(),
                placeholder: field.placeholder(),
                required: field.is_required(),
                focused: field == self.focus,
                invalid: errors.iter().any(|e| e.field() == field),
            })
            .collect();
        let errors = errors
            .into_iter()
            .map(|e| ErrorView {
                field: e.field(),
                message: e.to_string(),
            })
            .collect();

        ContactView {
            title: TITLE,
            inputs,
            submit: SubmitView {
                label: SUBMIT_LABEL,
                key_hint: "Enter",
            },
            errors,
            submission: self.submission().map(SubmissionView::from),
        }
    }
}

impl ScreenState for ContactFormState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('r') => Action::Remount,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.focus_prev();
                Action::None
            }
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::ALT) => Action::None,
            KeyCode::Char(ch) => {
                self.insert_char(ch);
                Action::None
            }
            KeyCode::Backspace => {
                self.delete_char();
                Action::None
            }
            KeyCode::Enter => {
                self.submit();
                Action::None
            }
            KeyCode::F(1) => Action::Navigate(Screen::Help),
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Everything the terminal needs to draw the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactView {
    pub title: &'static str,
    /// One entry per input, in display order.
    pub inputs: Vec<FormField>,
    /// The button that triggers [`ContactFormState::submit`].
    pub submit: SubmitView,
    /// One entry per visible error, in field order.
    pub errors: Vec<ErrorView>,
    /// Present only after a successful submit.
    pub submission: Option<SubmissionView>,
}

/// The submit button. Pressing its key from any input submits the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitView {
    pub label: &'static str,
    pub key_hint: &'static str,
}

impl SubmitView {
    /// Returns the button as drawn, e.g. `[ Submit (Enter) ]`.
    pub fn text(&self) -> String {
        format!("[ {} ({}) ]", self.label, self.key_hint)
    }
}

/// A single visible validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorView {
    pub field: Field,
    pub message: String,
}

/// The read-only values shown after a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionView {
    pub displays: Vec<DisplayView>,
}

impl SubmissionView {
    /// Returns the display element with the given tag, if present.
    pub fn display(&self, tag: &str) -> Option<&DisplayView> {
        self.displays.iter().find(|d| d.tag == tag)
    }
}

impl From<&Submission> for SubmissionView {
    fn from(submission: &Submission) -> Self {
        let mut displays = vec![
            DisplayView::new(Field::FirstName, &submission.first_name),
            DisplayView::new(Field::LastName, &submission.last_name),
            DisplayView::new(Field::Email, &submission.email),
        ];
        if let Some(message) = &submission.message {
            displays.push(DisplayView::new(Field::Message, message));
        }
        Self { displays }
    }
}

/// One submitted value, tagged so it can be located in the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayView {
    pub tag: &'static str,
    pub label: &'static str,
    pub value: String,
}

impl DisplayView {
    fn new(field: Field, value: &str) -> Self {
        Self {
            tag: display_tag(field),
            label: field.label(),
            value: value.to_string(),
        }
    }
}

/// Returns the identifier of the submitted-value element for `field`.
pub fn display_tag(field: Field) -> &'static str {
    match field {
        Field::FirstName => "firstnameDisplay",
        Field::LastName => "lastnameDisplay",
        Field::Email => "emailDisplay",
        Field::Message => "messageDisplay",
    }
}

/// Renders the contact form screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_contact(state: &ContactFormState, frame: &mut Frame, area: Rect) {
    let view = state.view();

    let block = Block::default()
        .title(format!(" {} ", view.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let error_rows = u16::try_from(view.errors.len()).unwrap_or(u16::MAX);
    let [form_area, submit_area, error_area, submission_area, footer_area] = Layout::vertical([
        Constraint::Length(form_height(view.inputs.len())),
        Constraint::Length(1),
        Constraint::Length(error_rows),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_form(&view.inputs, frame, form_area);

    let button = Paragraph::new(Line::from(Span::styled(
        view.submit.text(),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(button, submit_area);

    let red = Style::default().fg(Color::Red);
    let error_lines: Vec<Line> = view
        .errors
        .iter()
        .map(|e| Line::from(Span::styled(e.message.as_str(), red)))
        .collect();
    frame.render_widget(Paragraph::new(error_lines), error_area);

    if let Some(submission) = &view.submission {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let lines: Vec<Line> = submission
            .displays
            .iter()
            .map(|d| {
                Line::from(vec![
                    Span::styled(format!("{}: ", d.label), bold),
                    Span::raw(d.value.as_str()),
                ])
            })
            .collect();
        let block = Block::default()
            .title(" Submitted ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green));
        frame.render_widget(Paragraph::new(lines).block(block), submission_area);
    }

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  Enter: submit  Ctrl+R: reset  F1: help  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
