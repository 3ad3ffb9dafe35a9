//! Transition coordinator: the timed three-phase step-change animation.
//!
//! Presentation choreography that gates a real state mutation. The
//! sequencer commit is deliberately deferred to the end of the sequence
//! so the UI never shows a newly active step before its entrance
//! animation has played:
//!
//! ```text
//! t=0        Completing     "step done" affirmation
//! t=800ms    Transitioning  "from → to" indicator
//! t=1500ms   Arriving       welcome-to-next-step affirmation
//! t=2200ms   commit         tick() yields the source step
//! ```
//!
//! Single-flight and non-cancellable once started: re-entrant `advance`
//! calls are ignored, and only `cancel` (the teardown path) invalidates
//! the pending commit without running it.

use std::time::{Duration, Instant};

use crate::model::StepId;

const COMPLETING: Duration = Duration::from_millis(800);
const TRANSITIONING: Duration = Duration::from_millis(700);
const ARRIVING: Duration = Duration::from_millis(700);

/// Which phase of the animation is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Completing,
    Transitioning,
    Arriving,
}

/// What the overlay should currently render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionView {
    pub from: StepId,
    pub to: StepId,
    pub phase: Phase,
}

struct Active {
    from: StepId,
    to: StepId,
    started: Instant,
}

/// The coordinator. At most one transition is in flight at a time.
#[derive(Default)]
pub struct TransitionCoordinator {
    active: Option<Active>,
}

impl TransitionCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a transition from `from` to `to`.
    ///
    /// Returns `false` (and does nothing) when one is already in flight.
    pub fn advance(&mut self, from: StepId, to: StepId, now: Instant) -> bool {
        if self.active.is_some() {
            tracing::debug!(from = %from, "advance ignored: transition already in flight");
            return false;
        }
        self.active = Some(Active {
            from,
            to,
            started: now,
        });
        true
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The current phase view, if a transition is in flight.
    pub fn current(&self, now: Instant) -> Option<TransitionView> {
        let active = self.active.as_ref()?;
        let elapsed = now.saturating_duration_since(active.started);
        let phase = if elapsed < COMPLETING {
            Phase::Completing
        } else if elapsed < COMPLETING + TRANSITIONING {
            Phase::Transitioning
        } else {
            Phase::Arriving
        };
        Some(TransitionView {
            from: active.from,
            to: active.to,
            phase,
        })
    }

    /// Advances the timer. Once the full sequence has elapsed the
    /// transition ends and the source step is returned so the caller can
    /// run the sequencer commit.
    pub fn tick(&mut self, now: Instant) -> Option<StepId> {
        let active = self.active.as_ref()?;
        let total = COMPLETING + TRANSITIONING + ARRIVING;
        if now.saturating_duration_since(active.started) < total {
            return None;
        }
        let from = active.from;
        self.active = None;
        Some(from)
    }

    /// Teardown path: invalidates the in-flight transition so its commit
    /// never fires after the host is gone.
    pub fn cancel(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::clock::{Clock, ManualClock};

    #[test]
    fn phases_follow_the_schedule() {
        let clock = ManualClock::new();
        let mut tc = TransitionCoordinator::new();
        assert!(tc.advance(StepId::Welcome, StepId::ProfileSetup, clock.now()));

        let phase = |tc: &TransitionCoordinator, clock: &ManualClock| {
            tc.current(clock.now()).unwrap().phase
        };

        assert_eq!(phase(&tc, &clock), Phase::Completing);
        clock.advance(Duration::from_millis(799));
        assert_eq!(phase(&tc, &clock), Phase::Completing);
        clock.advance(Duration::from_millis(1));
        assert_eq!(phase(&tc, &clock), Phase::Transitioning);
        clock.advance(Duration::from_millis(700));
        assert_eq!(phase(&tc, &clock), Phase::Arriving);

        // Not done until the full 2200ms.
        assert_eq!(tc.tick(clock.now()), None);
        clock.advance(Duration::from_millis(700));
        assert_eq!(tc.tick(clock.now()), Some(StepId::Welcome));
        assert!(!tc.is_active());
    }

    #[test]
    fn reentrant_advance_is_ignored() {
        let clock = ManualClock::new();
        let mut tc = TransitionCoordinator::new();

        assert!(tc.advance(StepId::Welcome, StepId::ProfileSetup, clock.now()));
        clock.advance(Duration::from_millis(100));
        assert!(!tc.advance(StepId::ProfileSetup, StepId::TeamCreation, clock.now()));

        // The original transition still runs to completion.
        clock.advance(Duration::from_millis(2200));
        assert_eq!(tc.tick(clock.now()), Some(StepId::Welcome));
    }

    #[test]
    fn view_carries_endpoints() {
        let clock = ManualClock::new();
        let mut tc = TransitionCoordinator::new();
        tc.advance(StepId::TeamCreation, StepId::FirstAgent, clock.now());

        let view = tc.current(clock.now()).unwrap();
        assert_eq!(view.from, StepId::TeamCreation);
        assert_eq!(view.to, StepId::FirstAgent);
    }

    #[test]
    fn cancel_drops_the_pending_commit() {
        let clock = ManualClock::new();
        let mut tc = TransitionCoordinator::new();
        tc.advance(StepId::Welcome, StepId::ProfileSetup, clock.now());

        tc.cancel();
        clock.advance(Duration::from_millis(5000));
        assert_eq!(tc.tick(clock.now()), None);
        assert!(tc.current(clock.now()).is_none());

        // A new transition can start after cancellation.
        assert!(tc.advance(StepId::Welcome, StepId::ProfileSetup, clock.now()));
    }

    #[test]
    fn idle_coordinator_ticks_to_nothing() {
        let clock = ManualClock::new();
        let mut tc = TransitionCoordinator::new();
        assert_eq!(tc.tick(clock.now()), None);
        assert!(tc.current(clock.now()).is_none());
    }
}
