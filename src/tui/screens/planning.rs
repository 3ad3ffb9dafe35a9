//! Planning-tour step: a mock planning surface that hosts the guided
//! tour. Each panel registers itself as a tour target while rendering —
//! the registry is rebuilt every frame, which is exactly what lets the
//! locator find panels that appear a frame or two late.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::model::{StepData, TourPreviewData, ViewMode};
use crate::tour::locator::TargetRegistry;
use crate::tui::overlay::cell_rect_to_px;

pub struct PlanningScreen {
    mode: ViewMode,
    tour_started: bool,
}

impl PlanningScreen {
    pub fn new(mode: ViewMode, initial: Option<&StepData>) -> Self {
        let tour_started = matches!(
            initial,
            Some(StepData::TourPreview(TourPreviewData { tour_started: true }))
        );
        Self { mode, tour_started }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Records that the user started the tour at least once.
    pub fn mark_tour_started(&mut self) {
        self.tour_started = true;
    }

    pub fn data(&self) -> StepData {
        StepData::TourPreview(TourPreviewData {
            tour_started: self.tour_started,
        })
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, registry: &mut TargetRegistry) {
        match self.mode {
            ViewMode::Board => self.render_board(frame, area, registry),
            ViewMode::Timeline => self.render_timeline(frame, area, registry),
        }
    }

    fn render_board(&self, frame: &mut Frame, area: Rect, registry: &mut TargetRegistry) {
        let rows =
            Layout::vertical([Constraint::Min(0), Constraint::Length(4)]).split(area);
        let cols = Layout::horizontal([
            Constraint::Length(24),
            Constraint::Min(0),
            Constraint::Length(20),
        ])
        .split(rows[0]);

        self.panel(
            frame,
            registry,
            cols[0],
            "planning-backlog",
            "Backlog",
            &["Fix login flow", "Write docs", "Ship v0.2"],
        );
        self.panel(
            frame,
            registry,
            cols[1],
            "planning-board",
            "Board",
            &["To do ── In progress ── Done"],
        );
        self.panel(
            frame,
            registry,
            cols[2],
            "planning-filters",
            "Filters",
            &["team: all", "label: any"],
        );
        self.panel(
            frame,
            registry,
            rows[1],
            "planning-agents",
            "Agents",
            &["ᗢ scout   ᗢ reviewer"],
        );
    }

    fn render_timeline(&self, frame: &mut Frame, area: Rect, registry: &mut TargetRegistry) {
        let rows = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .split(area);

        self.panel(
            frame,
            registry,
            rows[0],
            "timeline-ruler",
            "Timeline",
            &["w34 ── w35 ── [w36] ── w37"],
        );
        self.panel(
            frame,
            registry,
            rows[1],
            "timeline-lanes",
            "Lanes",
            &["ada   ▓▓▓▓░░", "scout ░▓▓░░░"],
        );
        self.panel(
            frame,
            registry,
            rows[2],
            "planning-agents",
            "Agents",
            &["ᗢ scout   ᗢ reviewer"],
        );
    }

    /// Draws one mock panel and publishes its rectangle as a target.
    fn panel(
        &self,
        frame: &mut Frame,
        registry: &mut TargetRegistry,
        area: Rect,
        selector: &str,
        title: &str,
        body: &[&str],
    ) {
        registry.register(selector, cell_rect_to_px(area));

        let border_style = if registry.is_highlighted(selector) {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let lines: Vec<Line> = body
            .iter()
            .map(|s| Line::from(Span::styled(*s, Style::default().fg(Color::Gray))))
            .collect();
        let panel = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title)
                .padding(Padding::new(1, 1, 0, 0)),
        );
        frame.render_widget(panel, area);
    }
}
