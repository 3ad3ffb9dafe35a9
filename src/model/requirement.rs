//! Requirement checklist types, derived per step — never stored.

/// One checklist entry derived from a step's current data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementItem {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub is_required: bool,
    pub is_completed: bool,
    pub is_missing: bool,
    pub help_text: Option<&'static str>,
}

/// The evaluator's full answer for one step.
#[derive(Debug, Clone, PartialEq)]
pub struct RequirementReport {
    pub requirements: Vec<RequirementItem>,
    pub completed_count: usize,
    pub total_count: usize,
    pub required_count: usize,
    pub completed_required_count: usize,
    /// Unweighted completion percentage; 100 for empty checklists.
    pub progress: f64,
}

impl RequirementReport {
    /// Presentation-level classification of the step's checklist state.
    pub fn status(&self) -> StepStatus {
        if self.completed_required_count == self.required_count {
            StepStatus::Success
        } else if self.completed_count > 0 {
            StepStatus::Warning
        } else {
            StepStatus::Info
        }
    }

    /// Whether the step may be committed through the validated path.
    pub fn is_ready(&self) -> bool {
        self.completed_required_count == self.required_count
    }

    /// The required items still missing.
    pub fn missing(&self) -> impl Iterator<Item = &RequirementItem> {
        self.requirements.iter().filter(|r| r.is_missing)
    }
}

/// Step-level checklist classification, consumed by presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// All required items satisfied, regardless of optional ones.
    Success,

    /// Some interaction happened but required items remain.
    Warning,

    /// No interaction yet.
    Info,
}
