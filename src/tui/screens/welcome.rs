//! Welcome step: orientation text, no data captured.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

pub fn render_welcome(frame: &mut Frame, area: Rect) {
    let muted = Style::default().fg(Color::DarkGray);
    let normal = Style::default().fg(Color::Gray);
    let strong = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(Span::styled("Welcome to Waypoint", strong)),
        Line::from(""),
        Line::from(Span::styled(
            "Five short steps set up your profile, your first team, and",
            normal,
        )),
        Line::from(Span::styled(
            "your first agent, then walk you through the planning view.",
            normal,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Your answers save as you type; you can leave and pick up",
            normal,
        )),
        Line::from(Span::styled("where you stopped.", normal)),
        Line::from(""),
        Line::from(Span::styled("⏎ to begin", muted)),
    ];

    let content = Paragraph::new(lines).block(Block::default().padding(Padding::new(2, 2, 1, 0)));
    frame.render_widget(content, area);
}
