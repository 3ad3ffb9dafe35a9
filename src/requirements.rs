//! Requirements evaluator: pure derivation of per-step checklists.
//!
//! Each step maps to a fixed checklist template; [`evaluate`] inspects the
//! step's typed data and classifies every item. Nothing here is stored —
//! the report is recomputed whenever a form field changes.

use crate::model::{
    AgentData, ProfileData, RequirementItem, RequirementReport, StepData, StepId, TeamData,
};

/// Evaluates the checklist for `step` against its current captured data.
///
/// `data` of a mismatched kind is treated as absent. Steps with an empty
/// template (`Welcome`, `PlanningTour`, `Completion`) report 100%
/// progress and are always ready to advance.
pub fn evaluate(step: StepId, data: Option<&StepData>) -> RequirementReport {
    let requirements = match step {
        StepId::ProfileSetup => profile_items(match data {
            Some(StepData::Profile(p)) => Some(p),
            _ => None,
        }),
        StepId::TeamCreation => team_items(match data {
            Some(StepData::Team(t)) => Some(t),
            _ => None,
        }),
        StepId::FirstAgent => agent_items(match data {
            Some(StepData::Agent(a)) => Some(a),
            _ => None,
        }),
        StepId::Welcome | StepId::PlanningTour | StepId::Completion => Vec::new(),
    };

    let total_count = requirements.len();
    let completed_count = requirements.iter().filter(|r| r.is_completed).count();
    let required_count = requirements.iter().filter(|r| r.is_required).count();
    let completed_required_count = requirements
        .iter()
        .filter(|r| r.is_required && r.is_completed)
        .count();

    // An empty template is always fully satisfied; avoids dividing by zero.
    let progress = if total_count == 0 {
        100.0
    } else {
        100.0 * completed_count as f64 / total_count as f64
    };

    RequirementReport {
        requirements,
        completed_count,
        total_count,
        required_count,
        completed_required_count,
        progress,
    }
}

fn item(
    id: &'static str,
    label: &'static str,
    description: &'static str,
    is_required: bool,
    help_text: Option<&'static str>,
    is_completed: bool,
) -> RequirementItem {
    RequirementItem {
        id,
        label,
        description,
        is_required,
        is_completed,
        is_missing: is_required && !is_completed,
        help_text,
    }
}

fn filled(s: &str) -> bool {
    !s.trim().is_empty()
}

fn profile_items(data: Option<&ProfileData>) -> Vec<RequirementItem> {
    vec![
        item(
            "display-name",
            "Display name",
            "The name teammates see on your work",
            true,
            None,
            data.is_some_and(|d| filled(&d.display_name)),
        ),
        item(
            "bio",
            "Short bio",
            "A sentence or two about what you do",
            true,
            Some("Shown on your profile card; keep it brief."),
            data.is_some_and(|d| filled(&d.bio)),
        ),
        item(
            "languages",
            "At least one language",
            "Languages you work in",
            true,
            None,
            data.is_some_and(|d| d.languages.iter().any(|l| filled(l))),
        ),
        item(
            "interests",
            "At least one interest",
            "Topics you want surfaced on your dashboard",
            false,
            Some("Optional, but improves suggestions."),
            data.is_some_and(|d| d.interests.iter().any(|i| filled(i))),
        ),
        item(
            "avatar",
            "Avatar",
            "A picture or emoji for your profile",
            false,
            None,
            data.is_some_and(|d| d.avatar.as_deref().is_some_and(filled)),
        ),
    ]
}

fn team_items(data: Option<&TeamData>) -> Vec<RequirementItem> {
    vec![
        item(
            "team-name",
            "Team name",
            "What this team is called",
            true,
            None,
            data.is_some_and(|d| filled(&d.team_name)),
        ),
        item(
            "description",
            "Description",
            "What the team works on",
            false,
            None,
            data.is_some_and(|d| filled(&d.description)),
        ),
        item(
            "invites",
            "Invite a teammate",
            "Email addresses to invite",
            false,
            Some("You can always invite people later from team settings."),
            data.is_some_and(|d| d.invites.iter().any(|i| filled(i))),
        ),
    ]
}

fn agent_items(data: Option<&AgentData>) -> Vec<RequirementItem> {
    vec![
        item(
            "agent-name",
            "Agent name",
            "What to call your first agent",
            true,
            None,
            data.is_some_and(|d| filled(&d.agent_name)),
        ),
        item(
            "template",
            "Template",
            "The starting template the agent is built from",
            true,
            Some("Pick the closest match; everything is editable later."),
            data.is_some_and(|d| filled(&d.template)),
        ),
        item(
            "instructions",
            "Instructions",
            "Extra guidance for the agent",
            false,
            None,
            data.is_some_and(|d| filled(&d.instructions)),
        ),
    ]
}
