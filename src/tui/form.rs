//! Shared multi-field form state for the step screens.
//!
//! Keeps the step screens down to field lists and data mapping: typing
//! edits the focused field, Tab cycles focus, and each screen turns the
//! field values into its typed `StepData`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

/// One editable line of a form.
pub struct FormField {
    pub label: &'static str,
    pub hint: &'static str,
    pub value: String,
}

impl FormField {
    pub fn new(label: &'static str, hint: &'static str) -> Self {
        Self {
            label,
            hint,
            value: String::new(),
        }
    }
}

/// Focus-tracking state over an ordered field list.
pub struct FormState {
    fields: Vec<FormField>,
    focused: usize,
}

impl FormState {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focused: 0 }
    }

    /// Current value of field `i`.
    pub fn value(&self, i: usize) -> &str {
        &self.fields[i].value
    }

    /// Prefills field `i`, e.g. from committed data or a draft.
    pub fn set_value(&mut self, i: usize, value: impl Into<String>) {
        self.fields[i].value = value.into();
    }

    /// Appends a typed character to the focused field. Returns whether
    /// anything changed, so the caller knows to reschedule the draft.
    pub fn on_char(&mut self, c: char) -> bool {
        self.fields[self.focused].value.push(c);
        true
    }

    /// Deletes the last character of the focused field.
    pub fn on_backspace(&mut self) -> bool {
        self.fields[self.focused].value.pop().is_some()
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
    }

    /// Renders the field list into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let muted = Style::default().fg(Color::DarkGray);
        let normal = Style::default().fg(Color::Gray);
        let focused = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let mut lines = Vec::new();
        for (i, field) in self.fields.iter().enumerate() {
            let is_focused = i == self.focused;
            let pointer = if is_focused { "› " } else { "  " };
            let style = if is_focused { focused } else { normal };

            let mut spans = vec![
                Span::styled(pointer, style),
                Span::styled(format!("{:<14}", field.label), style),
            ];
            if field.value.is_empty() {
                spans.push(Span::styled(field.hint, muted));
            } else {
                spans.push(Span::styled(&field.value, normal));
            }
            if is_focused {
                spans.push(Span::styled("█", muted));
            }
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }

        let form = Paragraph::new(lines).block(Block::default().padding(Padding::new(2, 2, 0, 0)));
        frame.render_widget(form, area);
    }
}

/// Splits a comma-separated field value into trimmed, non-empty parts.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Joins a list back into the comma-separated editing form.
pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_field_form() -> FormState {
        FormState::new(vec![
            FormField::new("Name", "your name"),
            FormField::new("Bio", "about you"),
        ])
    }

    #[test]
    fn typing_edits_the_focused_field() {
        let mut form = two_field_form();
        form.on_char('A');
        form.focus_next();
        form.on_char('b');
        form.on_char('c');
        form.on_backspace();

        assert_eq!(form.value(0), "A");
        assert_eq!(form.value(1), "b");
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut form = two_field_form();
        form.focus_prev();
        form.on_char('x');
        assert_eq!(form.value(1), "x");
        form.focus_next();
        form.on_char('y');
        assert_eq!(form.value(0), "y");
    }

    #[test]
    fn backspace_on_empty_field_reports_no_change() {
        let mut form = two_field_form();
        assert!(!form.on_backspace());
    }

    #[test]
    fn list_split_and_join() {
        assert_eq!(split_list(" rust, go ,,ml "), vec!["rust", "go", "ml"]);
        assert_eq!(join_list(&["a".into(), "b".into()]), "a, b");
        assert!(split_list("   ").is_empty());
    }
}
