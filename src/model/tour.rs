//! Guided-tour configuration types.

/// One stop of a guided-tour overlay, bound to a target selector.
///
/// Immutable configuration; the ordered lists live in `tour::content`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TourStep {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Selector the host view registers its panels under.
    pub target_selector: &'static str,
    pub side: Side,
    pub icon: &'static str,
}

/// Which side of the target the tooltip prefers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

/// Which product surface a tour belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewContext {
    Planning,
}

/// Presentation mode of that surface; each mode carries its own tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewMode {
    Board,
    Timeline,
}
