//! The onboarding progress record: the one persisted, mutable state.

use std::collections::{BTreeMap, BTreeSet};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{StepData, StepId};

/// The single process-wide onboarding record.
///
/// `completed_steps` only ever grows during a session; `current_step` may
/// move backward when the user revisits a completed step, but never past
/// the frontier. All mutation goes through the sequencer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingProgress {
    pub id: Uuid,
    pub current_step: StepId,
    pub completed_steps: BTreeSet<StepId>,
    pub step_data: BTreeMap<StepId, StepData>,
    pub started_at: Timestamp,
}

impl OnboardingProgress {
    /// A fresh record positioned at the first step.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            current_step: StepId::ALL[0],
            completed_steps: BTreeSet::new(),
            step_data: BTreeMap::new(),
            started_at: Timestamp::now(),
        }
    }

    /// The frontier: the single step immediately following the
    /// highest-order completed step. With nothing completed this is the
    /// first step. `None` once every non-terminal step is complete and
    /// the terminal step itself is the frontier's successor.
    pub fn frontier(&self) -> Option<StepId> {
        match self.completed_steps.iter().next_back() {
            None => Some(StepId::ALL[0]),
            Some(last) => last.next(),
        }
    }

    /// Whether every non-terminal step has been completed.
    pub fn is_finished(&self) -> bool {
        StepId::ALL
            .iter()
            .filter(|s| !s.is_terminal())
            .all(|s| self.completed_steps.contains(s))
    }
}

impl Default for OnboardingProgress {
    fn default() -> Self {
        Self::new()
    }
}
