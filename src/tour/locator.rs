//! Target registry and retry-based target search.
//!
//! The host view registers its panels (selector → rectangle) every
//! frame; a [`TargetSearch`] looks a selector up on a fixed backoff
//! schedule so targets that render a beat after the tour step activates
//! are still found. The registry also owns the highlight: exactly one
//! element is distinguished at a time, and switching targets clears the
//! previous one.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::geometry::Rect;

/// Attempt offsets from the moment the search starts. Fixed schedule,
/// not exponential: one immediate try, then 100ms, 500ms, 1000ms.
const ATTEMPT_OFFSETS: [Duration; 4] = [
    Duration::ZERO,
    Duration::from_millis(100),
    Duration::from_millis(500),
    Duration::from_millis(1000),
];

/// The scene graph the tour queries: selector → on-screen rectangle.
#[derive(Debug, Default)]
pub struct TargetRegistry {
    rects: HashMap<String, Rect>,
    highlighted: Option<String>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all registered rectangles. Call at the top of each frame;
    /// the highlight survives, it belongs to the tour, not the frame.
    pub fn clear_targets(&mut self) {
        self.rects.clear();
    }

    /// Publishes (or updates) the rectangle behind `selector`.
    pub fn register(&mut self, selector: &str, rect: Rect) {
        self.rects.insert(selector.to_string(), rect);
    }

    /// Looks a selector up. Absence is not an error — the target may
    /// simply not have rendered yet.
    pub fn resolve(&self, selector: &str) -> Option<Rect> {
        self.rects.get(selector).copied()
    }

    /// Distinguishes `selector`, clearing any previous highlight first
    /// so no orphaned highlight survives a target switch.
    pub fn highlight(&mut self, selector: &str) {
        self.highlighted = Some(selector.to_string());
    }

    /// Removes the highlight, if any.
    pub fn clear_highlight(&mut self) {
        self.highlighted = None;
    }

    pub fn is_highlighted(&self, selector: &str) -> bool {
        self.highlighted.as_deref() == Some(selector)
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }
}

/// Where a search stands after a poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// The target is on screen at this rectangle.
    Found(Rect),
    /// Not found yet; retries remain on the schedule.
    Searching,
    /// Every attempt missed. The tour degrades to a centered tooltip.
    GaveUp,
}

/// A retry-driven lookup of one selector.
///
/// An explicit attempt/wait state machine with caller-supplied time, so
/// tests drive the schedule without wall-clock delays. Polling is
/// idempotent: once settled, further polls only refresh the rectangle.
#[derive(Debug)]
pub struct TargetSearch {
    selector: String,
    started: Instant,
    attempts: usize,
    settled: Option<SearchStatus>,
}

impl TargetSearch {
    /// Starts a search. The first attempt runs on the next poll, which
    /// is due immediately.
    pub fn new(selector: impl Into<String>, now: Instant) -> Self {
        Self {
            selector: selector.into(),
            started: now,
            attempts: 0,
            settled: None,
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Number of lookup attempts performed so far.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// The settled outcome, if the search has finished. Read-only:
    /// unlike [`TargetSearch::poll`] this never runs attempts.
    pub fn settled(&self) -> Option<SearchStatus> {
        self.settled
    }

    /// Runs every attempt whose scheduled time has arrived.
    pub fn poll(&mut self, registry: &TargetRegistry, now: Instant) -> SearchStatus {
        match self.settled {
            // Once found, keep tracking the rectangle: the target can
            // move between frames. Losing it falls back to the last
            // known position rather than un-finding the target.
            Some(SearchStatus::Found(last)) => {
                let rect = registry.resolve(&self.selector).unwrap_or(last);
                self.settled = Some(SearchStatus::Found(rect));
                SearchStatus::Found(rect)
            }
            Some(status) => status,
            None => {
                let elapsed = now.saturating_duration_since(self.started);
                while self.attempts < ATTEMPT_OFFSETS.len()
                    && elapsed >= ATTEMPT_OFFSETS[self.attempts]
                {
                    self.attempts += 1;
                    if let Some(rect) = registry.resolve(&self.selector) {
                        self.settled = Some(SearchStatus::Found(rect));
                        return SearchStatus::Found(rect);
                    }
                }
                if self.attempts == ATTEMPT_OFFSETS.len() {
                    tracing::debug!(
                        selector = %self.selector,
                        "tour target not found after all retries"
                    );
                    self.settled = Some(SearchStatus::GaveUp);
                    SearchStatus::GaveUp
                } else {
                    SearchStatus::Searching
                }
            }
        }
    }
}
