//! Reusable form widget for labelled text inputs.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Height of one input row, including its border.
pub const ROW_HEIGHT: u16 = 3;

/// Render description of a single labelled input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Label drawn in the input's border, associating it with the value.
    pub label: &'static str,
    /// Current text value.
    pub value: String,
    /// Dimmed hint shown while `value` is empty.
    pub placeholder: Option<&'static str>,
    /// Whether the label carries a required marker.
    pub required: bool,
    /// Whether the input has keyboard focus.
    pub focused: bool,
    /// Whether the input currently has a validation error.
    pub invalid: bool,
}

impl FormField {
    /// Returns the label as drawn, with a `*` marker on required fields.
    pub fn title(&self) -> String {
        if self.required {
            format!("{}*", self.label)
        } else {
            self.label.to_string()
        }
    }
}

/// Returns the height needed to draw `count` inputs.
pub fn form_height(count: usize) -> u16 {
    ROW_HEIGHT.saturating_mul(u16::try_from(count).unwrap_or(u16::MAX))
}

/// Renders a column of inputs within the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(fields: &[FormField], frame: &mut Frame, area: Rect) {
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(ROW_HEIGHT))
        .collect();

    let rows = Layout::vertical(constraints).split(area);

    for (field, row) in fields.iter().zip(rows.iter()) {
        let border_color = if field.invalid {
            Color::Red
        } else if field.focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .title(field.title())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let mut spans = Vec::new();
        match (field.value.is_empty(), field.placeholder) {
            (true, Some(hint)) if !field.focused => {
                spans.push(Span::styled(hint, Style::default().fg(Color::DarkGray)));
            }
            _ => spans.push(Span::raw(field.value.as_str())),
        }
        if field.focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, *row);
    }
}
