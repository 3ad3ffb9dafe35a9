//! Captured step data: the typed union behind each step's form.

use serde::{Deserialize, Serialize};

use super::StepId;

/// Data captured by one step's form.
///
/// Tagged union so the requirements evaluator can be matched exhaustively
/// instead of probing loosely typed field maps. Each variant's shape is
/// owned by the corresponding form screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum StepData {
    Profile(ProfileData),
    Team(TeamData),
    Agent(AgentData),
    TourPreview(TourPreviewData),
}

impl StepData {
    /// The step this data belongs to.
    pub fn step(&self) -> StepId {
        match self {
            StepData::Profile(_) => StepId::ProfileSetup,
            StepData::Team(_) => StepId::TeamCreation,
            StepData::Agent(_) => StepId::FirstAgent,
            StepData::TourPreview(_) => StepId::PlanningTour,
        }
    }
}

/// Profile-setup form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub display_name: String,
    pub bio: String,
    pub languages: Vec<String>,
    pub interests: Vec<String>,
    pub avatar: Option<String>,
}

/// Team-creation form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamData {
    pub team_name: String,
    pub description: String,
    pub invites: Vec<String>,
}

/// First-agent form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentData {
    pub agent_name: String,
    pub template: String,
    pub instructions: String,
}

/// Planning-tour preview state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourPreviewData {
    pub tour_started: bool,
}
