//! Completion step: terminal screen once every other step is done.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::sequencer::StepProgress;

pub fn render_completion(frame: &mut Frame, area: Rect, progress: StepProgress) {
    let muted = Style::default().fg(Color::DarkGray);
    let normal = Style::default().fg(Color::Gray);
    let strong = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(Span::styled("You're all set", strong)),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} of {} steps complete ({}%).",
                (progress.percentage / 100.0 * progress.total as f64).round(),
                progress.total,
                progress.percentage.round()
            ),
            normal,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "You can revisit any step from the rail until you close this.",
            normal,
        )),
        Line::from(""),
        Line::from(Span::styled("⏎ finish onboarding   esc stay", muted)),
    ];

    let content = Paragraph::new(lines).block(Block::default().padding(Padding::new(2, 2, 1, 0)));
    frame.render_widget(content, area);
}
