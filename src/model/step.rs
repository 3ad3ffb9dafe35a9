//! Step identity: the fixed, totally ordered onboarding sequence.

use serde::{Deserialize, Serialize};

/// One named stage of the onboarding sequence.
///
/// The ordering is a configuration constant ([`StepId::ALL`]), not derived
/// at run time. `Completion` is terminal: it is a destination, never a
/// member of the completed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepId {
    /// Orientation screen; no data captured.
    Welcome,

    /// Personal profile: name, bio, languages, interests.
    ProfileSetup,

    /// First team: name, description, invites.
    TeamCreation,

    /// First agent: name, template, instructions.
    FirstAgent,

    /// Guided tour of the planning view.
    PlanningTour,

    /// Terminal step shown once everything else is complete.
    Completion,
}

impl StepId {
    /// Every step, in sequence order.
    pub const ALL: [StepId; 6] = [
        StepId::Welcome,
        StepId::ProfileSetup,
        StepId::TeamCreation,
        StepId::FirstAgent,
        StepId::PlanningTour,
        StepId::Completion,
    ];

    /// Zero-based position in the sequence.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// The step immediately after this one, or `None` at the end.
    pub fn next(self) -> Option<StepId> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Whether this is the terminal step.
    pub fn is_terminal(self) -> bool {
        self == StepId::Completion
    }

    /// Stable kebab-case identifier, used for draft keys and logs.
    pub fn slug(self) -> &'static str {
        match self {
            StepId::Welcome => "welcome",
            StepId::ProfileSetup => "profile-setup",
            StepId::TeamCreation => "team-creation",
            StepId::FirstAgent => "first-agent",
            StepId::PlanningTour => "planning-tour",
            StepId::Completion => "completion",
        }
    }

    /// Human-readable title for rails and status output.
    pub fn title(self) -> &'static str {
        match self {
            StepId::Welcome => "Welcome",
            StepId::ProfileSetup => "Profile Setup",
            StepId::TeamCreation => "Create a Team",
            StepId::FirstAgent => "First Agent",
            StepId::PlanningTour => "Planning Tour",
            StepId::Completion => "All Set",
        }
    }

    /// The draft-store key for this step's uncommitted form data.
    pub fn draft_key(self) -> String {
        format!("{}-draft", self.slug())
    }
}

impl std::fmt::Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}
