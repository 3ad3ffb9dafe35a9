//! Static tour and help content.
//!
//! One ordered stop list per (view context, view mode) pair, plus
//! per-step help text. Read-only configuration; nothing here mutates at
//! run time.

use crate::model::{Side, StepId, TourStep, ViewContext, ViewMode};

/// The ordered tour for a given surface and mode.
pub fn tour_steps(context: ViewContext, mode: ViewMode) -> &'static [TourStep] {
    match (context, mode) {
        (ViewContext::Planning, ViewMode::Board) => PLANNING_BOARD_TOUR,
        (ViewContext::Planning, ViewMode::Timeline) => PLANNING_TIMELINE_TOUR,
    }
}

/// Contextual help for an onboarding step, shown in the help footer.
pub fn help_text(step: StepId) -> &'static str {
    match step {
        StepId::Welcome => "A quick look around before you start. Enter continues.",
        StepId::ProfileSetup => {
            "Your profile follows you across teams. Name, bio, and at least \
             one language are required; everything else can wait."
        }
        StepId::TeamCreation => {
            "Teams group agents and plans. Only the name is required — \
             invite people whenever you like."
        }
        StepId::FirstAgent => {
            "Agents do the repetitive work. Pick a template to start from; \
             instructions refine its behavior later."
        }
        StepId::PlanningTour => {
            "The planning view is where everything comes together. Press t \
             to take the tour."
        }
        StepId::Completion => "That's everything. Enter closes onboarding.",
    }
}

const PLANNING_BOARD_TOUR: &[TourStep] = &[
    TourStep {
        id: "board-backlog",
        title: "Backlog",
        description: "Unscheduled work lives here until you pull it onto the board.",
        target_selector: "planning-backlog",
        side: Side::Right,
        icon: "☰",
    },
    TourStep {
        id: "board-columns",
        title: "Board columns",
        description: "Drag cards between columns to move work through its stages.",
        target_selector: "planning-board",
        side: Side::Bottom,
        icon: "▦",
    },
    TourStep {
        id: "board-agents",
        title: "Agent dock",
        description: "Your agents wait here. Drop a card on one to delegate it.",
        target_selector: "planning-agents",
        side: Side::Top,
        icon: "ᗢ",
    },
    TourStep {
        id: "board-filters",
        title: "Filters",
        description: "Narrow the board to a team, a label, or one agent's work.",
        target_selector: "planning-filters",
        side: Side::Left,
        icon: "⧩",
    },
];

const PLANNING_TIMELINE_TOUR: &[TourStep] = &[
    TourStep {
        id: "timeline-ruler",
        title: "Timeline",
        description: "Weeks run left to right; today is the highlighted column.",
        target_selector: "timeline-ruler",
        side: Side::Bottom,
        icon: "↔",
    },
    TourStep {
        id: "timeline-lanes",
        title: "Lanes",
        description: "Each lane is one teammate or agent; bars are scheduled work.",
        target_selector: "timeline-lanes",
        side: Side::Top,
        icon: "☰",
    },
    TourStep {
        id: "timeline-agents",
        title: "Agent dock",
        description: "Agents schedule their own bars as they pick up work.",
        target_selector: "planning-agents",
        side: Side::Top,
        icon: "ᗢ",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_surface_has_a_tour() {
        for mode in [ViewMode::Board, ViewMode::Timeline] {
            let steps = tour_steps(ViewContext::Planning, mode);
            assert!(!steps.is_empty());
        }
    }

    #[test]
    fn tour_stop_ids_are_unique_per_tour() {
        for mode in [ViewMode::Board, ViewMode::Timeline] {
            let steps = tour_steps(ViewContext::Planning, mode);
            for (i, a) in steps.iter().enumerate() {
                for b in &steps[i + 1..] {
                    assert_ne!(a.id, b.id);
                }
            }
        }
    }

    #[test]
    fn every_step_has_help_text() {
        for step in StepId::ALL {
            assert!(!help_text(step).is_empty());
        }
    }
}
