//! Step sequencer and navigation guard.
//!
//! Owns the one [`OnboardingProgress`] record and exposes the narrow
//! mutation API the view layer calls: `complete_step`, `skip_step`,
//! `go_to_step`, `save_step_data`, `dismiss`. Every mutation is persisted
//! through [`Storage`]; a persistence failure is logged and never
//! propagated — the in-memory record stays authoritative for the session.
//!
//! The guard is defense in depth: the view layer is expected to only
//! offer legal transitions, but `go_to_step` re-validates regardless and
//! rejects violations as silent no-ops.

use crate::model::{OnboardingProgress, StepData, StepId};
use crate::storage::{self, Storage};

/// Snapshot of overall progress for rails and status output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepProgress {
    /// Zero-based index of the current step.
    pub current: usize,
    /// Number of non-terminal steps (the work to be done).
    pub total: usize,
    /// `100 × |completed| / total` — counts steps, not effort.
    pub percentage: f64,
}

/// The sequencer: ordered step list, current-step pointer, completed set.
pub struct Sequencer<'a> {
    progress: OnboardingProgress,
    storage: &'a Storage,
}

impl<'a> Sequencer<'a> {
    /// Resumes the persisted record, or starts a fresh one.
    pub fn load_or_start(storage: &'a Storage) -> storage::Result<Self> {
        let progress = match storage.load_progress()? {
            Some(progress) => progress,
            None => {
                let progress = OnboardingProgress::new();
                storage.save_progress(&progress)?;
                progress
            }
        };
        Ok(Self { progress, storage })
    }

    pub fn progress(&self) -> &OnboardingProgress {
        &self.progress
    }

    pub fn current_step(&self) -> StepId {
        self.progress.current_step
    }

    pub fn is_completed(&self, step: StepId) -> bool {
        self.progress.completed_steps.contains(&step)
    }

    /// Committed data for a step, if any.
    pub fn step_data(&self, step: StepId) -> Option<&StepData> {
        self.progress.step_data.get(&step)
    }

    /// Marks `step` completed and advances the current-step pointer when
    /// the user was sitting on it.
    ///
    /// Idempotent: completing an already-completed step changes nothing.
    /// Completion is append-only — a step never leaves the completed set.
    /// When the user has navigated back to revisit an earlier step, that
    /// step is already completed, so the pointer stays put.
    pub fn complete_step(&mut self, step: StepId) {
        if step.is_terminal() || !self.progress.completed_steps.insert(step) {
            return;
        }
        if self.progress.current_step == step
            && let Some(next) = step.next()
        {
            self.progress.current_step = next;
        }
        tracing::debug!(step = %step, current = %self.progress.current_step, "step completed");
        self.persist();
    }

    /// Skip is "complete without validation", not "defer": the step lands
    /// in the completed set exactly as if its form had been submitted.
    pub fn skip_step(&mut self, step: StepId) {
        tracing::debug!(step = %step, "step skipped");
        self.complete_step(step);
    }

    /// Moves the current-step pointer, if the guard allows it.
    ///
    /// Violations are silent no-ops: the guard is a backstop against
    /// stale UI state, not a user-facing error path.
    pub fn go_to_step(&mut self, step: StepId) {
        if !self.can_navigate_to(step) {
            tracing::debug!(step = %step, "navigation rejected: beyond the frontier");
            return;
        }
        if self.progress.current_step != step {
            self.progress.current_step = step;
            self.persist();
        }
    }

    /// The navigation-permission predicate: a step is reachable iff it is
    /// already completed, is the current step, or is the frontier — the
    /// single step immediately following the highest-order completed
    /// step. Everything beyond the frontier is locked.
    pub fn can_navigate_to(&self, step: StepId) -> bool {
        self.progress.completed_steps.contains(&step)
            || self.progress.current_step == step
            || self.progress.frontier() == Some(step)
    }

    /// Folds a step's submitted form data into the committed record.
    pub fn save_step_data(&mut self, data: StepData) {
        let step = data.step();
        self.progress.step_data.insert(step, data);
        self.persist();
    }

    /// Overall progress, counting completed steps over the non-terminal
    /// step count so a finished run reads 100%.
    pub fn step_progress(&self) -> StepProgress {
        let total = StepId::ALL.iter().filter(|s| !s.is_terminal()).count();
        let completed = self.progress.completed_steps.len();
        StepProgress {
            current: self.progress.current_step.index(),
            total,
            percentage: 100.0 * completed as f64 / total as f64,
        }
    }

    /// Whether every non-terminal step is complete.
    pub fn is_finished(&self) -> bool {
        self.progress.is_finished()
    }

    /// Dismisses onboarding: archives the record and starts a fresh one.
    ///
    /// The fresh record is not persisted until its first mutation, so a
    /// dismissed run leaves no live state behind.
    pub fn dismiss(&mut self) {
        if let Err(e) = self.storage.archive_progress(&self.progress) {
            tracing::warn!(error = %e, "failed to archive progress record");
        }
        self.progress = OnboardingProgress::new();
    }

    fn persist(&self) {
        if let Err(e) = self.storage.save_progress(&self.progress) {
            tracing::warn!(error = %e, "failed to persist progress record");
        }
    }
}
