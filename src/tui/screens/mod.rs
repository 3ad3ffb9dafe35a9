//! One screen per onboarding step.

mod agent;
mod completion;
mod planning;
mod profile;
mod team;
mod welcome;

pub use agent::AgentScreen;
pub use completion::render_completion;
pub use planning::PlanningScreen;
pub use profile::ProfileScreen;
pub use team::TeamScreen;
pub use welcome::render_welcome;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::model::RequirementReport;

/// Renders a step's requirement checklist with completion marks.
///
/// Advisory display: the checklist tracks the evaluator live while the
/// form's own submit gate decides whether Enter goes through.
pub fn render_checklist(frame: &mut Frame, area: Rect, report: &RequirementReport) {
    let muted = Style::default().fg(Color::DarkGray);
    let done = Style::default().fg(Color::Green);
    let missing = Style::default().fg(Color::Yellow);

    let mut lines = vec![Line::from(Span::styled(
        format!(
            "Checklist — {}/{} ({}%)",
            report.completed_count,
            report.total_count,
            report.progress.round()
        ),
        muted,
    ))];
    for item in &report.requirements {
        let (mark, style) = if item.is_completed {
            ("✓", done)
        } else if item.is_missing {
            ("•", missing)
        } else {
            ("·", muted)
        };
        let required = if item.is_required { "" } else { "  (optional)" };
        lines.push(Line::from(vec![
            Span::styled(format!("  {mark} "), style),
            Span::styled(item.label, style),
            Span::styled(required, muted),
        ]));
    }

    let checklist =
        Paragraph::new(lines).block(Block::default().padding(Padding::new(2, 2, 1, 0)));
    frame.render_widget(checklist, area);
}
