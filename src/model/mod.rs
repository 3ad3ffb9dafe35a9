//! Core data model for Waypoint.
//!
//! These types represent the conceptual architecture: the fixed step
//! sequence, the single persisted progress record, typed per-step form
//! data, derived requirement checklists, and tour configuration.

mod progress;
mod requirement;
mod step;
mod step_data;
mod tour;

pub use progress::OnboardingProgress;
pub use requirement::{RequirementItem, RequirementReport, StepStatus};
pub use step::StepId;
pub use step_data::{AgentData, ProfileData, StepData, TeamData, TourPreviewData};
pub use tour::{Side, TourStep, ViewContext, ViewMode};
