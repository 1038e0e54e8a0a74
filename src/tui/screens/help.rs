//! Help screen — scrollable keybinding and field rule reference.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

static CONTACT_KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "next / prev field"),
    ("Backspace", "delete last character"),
    ("Enter", "submit"),
    ("Ctrl+R", "clear the form"),
    ("F1", "help"),
    ("Esc", "quit"),
];

static FIELD_RULES: &[(&str, &str)] = &[
    ("First Name", "at least 5 characters"),
    ("Last Name", "required"),
    ("Email", "name@domain.tld"),
    ("Message", "optional"),
];

static HELP_KEYS: &[(&str, &str)] = &[("↑/↓", "scroll"), ("q / Esc", "back")];

/// State for the help screen.
#[derive(Debug, Clone, Default)]
pub struct HelpState {
    scroll: u16,
}

impl HelpState {
    /// Creates a new [`HelpState`] scrolled to the top.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current scroll offset.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Resets the scroll position to the top.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }
}

impl ScreenState for HelpState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                Action::None
            }
            KeyCode::Char('q') | KeyCode::Esc => Action::Navigate(Screen::Contact),
            _ => Action::None,
        }
    }
}

fn build_section(
    title: &'static str,
    keys: &[(&'static str, &'static str)],
) -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow);
    let dim_style = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(title, header_style)),
    ];
    for (key, desc) in keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<20}"), key_style),
            Span::styled(*desc, dim_style),
        ]));
    }
    lines
}

fn help_content() -> Vec<Line<'static>> {
    let mut lines = build_section("Contact Form", CONTACT_KEYS);
    lines.extend(build_section("Fields", FIELD_RULES));
    lines.extend(build_section("Help", HELP_KEYS));
    lines
}

/// Renders the help screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_help(state: &HelpState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let content_lines = help_content();
    let total = u16::try_from(content_lines.len()).unwrap_or(u16::MAX);
    let capped_scroll = state.scroll().min(total.saturating_sub(content_area.height));

    let paragraph = Paragraph::new(content_lines).scroll((capped_scroll, 0));
    frame.render_widget(paragraph, content_area);

    let footer =
        Paragraph::new("↑/↓: scroll  q/Esc: back").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
