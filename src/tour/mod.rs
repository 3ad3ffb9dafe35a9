//! Guided tour: target lookup, highlighting, and tooltip placement.
//!
//! A [`TourSession`] walks the configured stop list for one surface.
//! Each stop kicks off a [`TargetSearch`] against the registry the host
//! view populates every frame; once the target is found it is
//! highlighted (exactly one at a time), and the tooltip placement is
//! recomputed per frame from the freshest rectangle. A stop whose target
//! never shows up degrades to a centered tooltip and the tour moves on
//! normally.

pub mod content;
pub mod geometry;
pub mod locator;

use std::time::Instant;

use crate::model::{Side, TourStep, ViewContext, ViewMode};

use geometry::{Placement, Rect, Size, Viewport, resolve_placement};
use locator::{SearchStatus, TargetRegistry, TargetSearch};

/// One running tour.
pub struct TourSession {
    steps: &'static [TourStep],
    index: usize,
    search: TargetSearch,
}

impl TourSession {
    /// Starts the tour configured for `(context, mode)`.
    ///
    /// Returns `None` when that surface has no tour configured.
    pub fn start(context: ViewContext, mode: ViewMode, now: Instant) -> Option<Self> {
        let steps = content::tour_steps(context, mode);
        let first = steps.first()?;
        Some(Self {
            steps,
            index: 0,
            search: TargetSearch::new(first.target_selector, now),
        })
    }

    /// The active stop.
    pub fn current(&self) -> &TourStep {
        &self.steps[self.index]
    }

    /// Zero-based stop position and total, for "2 of 4" badges.
    pub fn position(&self) -> (usize, usize) {
        (self.index, self.steps.len())
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.steps.len()
    }

    /// Drives the current stop's target search and keeps the highlight
    /// in sync. Call once per frame.
    pub fn poll(&mut self, registry: &mut TargetRegistry, now: Instant) {
        let selector = self.current().target_selector;
        match self.search.poll(registry, now) {
            SearchStatus::Found(_) => {
                if !registry.is_highlighted(selector) {
                    registry.highlight(selector);
                }
            }
            SearchStatus::Searching | SearchStatus::GaveUp => {}
        }
    }

    /// Advances to the next stop. Returns `false` when the tour is over;
    /// the caller drops the session. Either way the old stop's highlight
    /// is released before anything new is applied.
    pub fn next(&mut self, registry: &mut TargetRegistry, now: Instant) -> bool {
        registry.clear_highlight();
        if self.is_last() {
            return false;
        }
        self.index += 1;
        self.search = TargetSearch::new(self.current().target_selector, now);
        true
    }

    /// Steps back to the previous stop, if there is one.
    pub fn back(&mut self, registry: &mut TargetRegistry, now: Instant) {
        if self.index == 0 {
            return;
        }
        registry.clear_highlight();
        self.index -= 1;
        self.search = TargetSearch::new(self.current().target_selector, now);
    }

    /// Ends the tour, releasing the highlight.
    pub fn end(self, registry: &mut TargetRegistry) {
        registry.clear_highlight();
    }

    /// The target rectangle backing the current stop, if located.
    pub fn target_rect(&self, registry: &TargetRegistry) -> Option<Rect> {
        // Prefer the live rectangle; fall back to where the search last
        // saw it so the tooltip doesn't jump to center for one frame.
        registry
            .resolve(self.current().target_selector)
            .or(match self.search_status() {
                Some(SearchStatus::Found(rect)) => Some(rect),
                _ => None,
            })
    }

    /// Where the tooltip for the current stop goes, clamped on-screen.
    pub fn placement(
        &self,
        registry: &TargetRegistry,
        tooltip: Size,
        viewport: Viewport,
    ) -> Placement {
        resolve_placement(
            self.target_rect(registry),
            self.current().side,
            tooltip,
            viewport,
        )
    }

    /// The preferred side of the current stop.
    pub fn side(&self) -> Side {
        self.current().side
    }

    fn search_status(&self) -> Option<SearchStatus> {
        // A zero-elapsed poll against an empty registry would mutate the
        // attempt counter, so the settled state is read through a
        // dedicated accessor on the search instead.
        self.search.settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use crate::clock::{Clock, ManualClock};

    fn registry_with_all_targets() -> TargetRegistry {
        let mut registry = TargetRegistry::new();
        registry.register("planning-backlog", Rect::new(20, 100, 200, 500));
        registry.register("planning-board", Rect::new(240, 100, 700, 500));
        registry.register("planning-agents", Rect::new(240, 620, 700, 120));
        registry.register("planning-filters", Rect::new(960, 100, 200, 500));
        registry
    }

    #[test]
    fn walks_every_stop_and_ends() {
        let clock = ManualClock::new();
        let mut registry = registry_with_all_targets();
        let mut tour =
            TourSession::start(ViewContext::Planning, ViewMode::Board, clock.now()).unwrap();

        let total = tour.position().1;
        for i in 0..total {
            assert_eq!(tour.position().0, i);
            tour.poll(&mut registry, clock.now());
            assert!(registry.is_highlighted(tour.current().target_selector));
            let advanced = tour.next(&mut registry, clock.now());
            assert_eq!(advanced, i + 1 < total);
        }
        assert_eq!(registry.highlighted(), None);
    }

    #[test]
    fn switching_stops_moves_the_highlight() {
        let clock = ManualClock::new();
        let mut registry = registry_with_all_targets();
        let mut tour =
            TourSession::start(ViewContext::Planning, ViewMode::Board, clock.now()).unwrap();

        tour.poll(&mut registry, clock.now());
        assert!(registry.is_highlighted("planning-backlog"));

        tour.next(&mut registry, clock.now());
        tour.poll(&mut registry, clock.now());
        assert!(registry.is_highlighted("planning-board"));
        assert!(!registry.is_highlighted("planning-backlog"));
    }

    #[test]
    fn missing_target_centers_and_does_not_block() {
        let clock = ManualClock::new();
        let mut registry = TargetRegistry::new();
        let mut tour =
            TourSession::start(ViewContext::Planning, ViewMode::Board, clock.now()).unwrap();

        // Run the whole backoff schedule without the target appearing.
        for ms in [0u64, 100, 500, 1000] {
            clock.advance(Duration::from_millis(ms));
            tour.poll(&mut registry, clock.now());
        }
        assert_eq!(registry.highlighted(), None);

        let viewport = Viewport {
            width: 1280,
            height: 800,
        };
        let tooltip = Size {
            width: 300,
            height: 120,
        };
        let p = tour.placement(&registry, tooltip, viewport);
        assert_eq!(p.left, (1280 - 300) / 2);

        // The tour still advances past the degraded stop.
        assert!(tour.next(&mut registry, clock.now()));
    }

    #[test]
    fn back_revisits_the_previous_stop() {
        let clock = ManualClock::new();
        let mut registry = registry_with_all_targets();
        let mut tour =
            TourSession::start(ViewContext::Planning, ViewMode::Board, clock.now()).unwrap();

        tour.next(&mut registry, clock.now());
        tour.back(&mut registry, clock.now());
        assert_eq!(tour.position().0, 0);
        assert_eq!(tour.current().target_selector, "planning-backlog");

        // Back at the first stop is a no-op.
        tour.back(&mut registry, clock.now());
        assert_eq!(tour.position().0, 0);
    }

    #[test]
    fn end_releases_the_highlight() {
        let clock = ManualClock::new();
        let mut registry = registry_with_all_targets();
        let mut tour =
            TourSession::start(ViewContext::Planning, ViewMode::Board, clock.now()).unwrap();
        tour.poll(&mut registry, clock.now());
        assert!(registry.highlighted().is_some());

        tour.end(&mut registry);
        assert_eq!(registry.highlighted(), None);
    }

    #[test]
    fn placement_tracks_the_live_rectangle() {
        let clock = ManualClock::new();
        let mut registry = registry_with_all_targets();
        let mut tour =
            TourSession::start(ViewContext::Planning, ViewMode::Board, clock.now()).unwrap();
        tour.poll(&mut registry, clock.now());

        let viewport = Viewport {
            width: 1280,
            height: 800,
        };
        let tooltip = Size {
            width: 200,
            height: 100,
        };
        let before = tour.placement(&registry, tooltip, viewport);

        registry.clear_targets();
        registry.register("planning-backlog", Rect::new(20, 300, 200, 300));
        let after = tour.placement(&registry, tooltip, viewport);
        assert_ne!(before, after);
    }
}
