//! Overlays: tour tooltip and step-transition choreography.
//!
//! The tooltip geometry works in pixels; the terminal grid maps onto a
//! virtual 8×16 px-per-cell space, so the resolver's gap and margin
//! rules apply in one unit system and divide back to cells for drawing.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::tour::TourSession;
use crate::tour::geometry::{self, Size, Viewport};
use crate::tour::locator::TargetRegistry;
use crate::transition::{Phase, TransitionView};

/// Virtual pixel size of one terminal cell.
pub const CELL_W: i32 = 8;
pub const CELL_H: i32 = 16;

/// A cell rectangle in the tour's pixel space.
pub fn cell_rect_to_px(rect: Rect) -> geometry::Rect {
    geometry::Rect::new(
        i32::from(rect.x) * CELL_W,
        i32::from(rect.y) * CELL_H,
        i32::from(rect.width) * CELL_W,
        i32::from(rect.height) * CELL_H,
    )
}

const TOOLTIP_COLS: u16 = 40;
const TOOLTIP_ROWS: u16 = 7;

/// Draws the active tour stop's tooltip, clamped on screen.
pub fn render_tooltip(frame: &mut Frame, tour: &TourSession, registry: &TargetRegistry) {
    let area = frame.area();
    let viewport = Viewport {
        width: i32::from(area.width) * CELL_W,
        height: i32::from(area.height) * CELL_H,
    };
    let tooltip = Size {
        width: i32::from(TOOLTIP_COLS) * CELL_W,
        height: i32::from(TOOLTIP_ROWS) * CELL_H,
    };
    let placement = tour.placement(registry, tooltip, viewport);

    let cols = TOOLTIP_COLS.min(area.width);
    let rows = TOOLTIP_ROWS.min(area.height);
    let x = u16::try_from(placement.left / CELL_W).unwrap_or(0);
    let y = u16::try_from(placement.top / CELL_H).unwrap_or(0);
    let rect = Rect {
        x: x.min(area.width.saturating_sub(cols)),
        y: y.min(area.height.saturating_sub(rows)),
        width: cols,
        height: rows,
    };

    let stop = tour.current();
    let (index, total) = tour.position();
    let muted = Style::default().fg(Color::DarkGray);
    let strong = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", stop.icon), strong),
            Span::styled(stop.title, strong),
            Span::styled(format!("   {}/{total}", index + 1), muted),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            stop.description,
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(" n next  b back  esc end", muted)),
    ];

    frame.render_widget(Clear, rect);
    let tooltip = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .padding(Padding::new(1, 1, 0, 0)),
    );
    frame.render_widget(tooltip, rect);
}

/// Draws the three-phase step-transition card over the content area.
pub fn render_transition(frame: &mut Frame, area: Rect, view: TransitionView) {
    let line = match view.phase {
        Phase::Completing => Line::from(vec![
            Span::styled("✓ ", Style::default().fg(Color::Green)),
            Span::styled(
                format!("{} complete", view.from.title()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Phase::Transitioning => Line::from(Span::styled(
            format!("{} → {}", view.from.title(), view.to.title()),
            Style::default().fg(Color::Gray),
        )),
        Phase::Arriving => Line::from(Span::styled(
            format!("Welcome to {}", view.to.title()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    };

    let width = area.width.min(44);
    let rect = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + area.height.saturating_sub(3) / 2,
        width,
        height: 3,
    };
    frame.render_widget(Clear, rect);
    let card = Paragraph::new(line)
        .centered()
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(card, rect);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_mapping_scales_both_axes() {
        let px = cell_rect_to_px(Rect {
            x: 10,
            y: 5,
            width: 20,
            height: 4,
        });
        assert_eq!(px, geometry::Rect::new(80, 80, 160, 64));
    }
}
