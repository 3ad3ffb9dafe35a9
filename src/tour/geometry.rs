//! Tooltip geometry: pure placement math in a pixel coordinate space.
//!
//! Given a target rectangle, a preferred side, the tooltip size, and the
//! viewport, [`resolve_placement`] computes an anchor point offset by a
//! fixed gap and clamps it so the tooltip never leaves the viewport. No
//! target means a centered fallback — the tour stays usable when a
//! referenced element is missing.

use crate::model::Side;

/// Minimum distance kept between the tooltip and every viewport edge.
pub const MARGIN: i32 = 20;

/// Distance between the target's edge and the tooltip.
pub const GAP: i32 = 12;

/// An axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    fn right(self) -> i32 {
        self.left + self.width
    }

    fn bottom(self) -> i32 {
        self.top + self.height
    }

    fn center_x(self) -> i32 {
        self.left + self.width / 2
    }

    fn center_y(self) -> i32 {
        self.top + self.height / 2
    }
}

/// Tooltip box dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

/// Visible area the tooltip must stay inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

/// A resolved on-screen position for the tooltip's top-left corner.
/// Ephemeral: recomputed on every activation and viewport change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub top: i32,
    pub left: i32,
}

/// Computes where the tooltip goes.
///
/// The anchor sits on the requested side of the target, centered along
/// the perpendicular axis and offset by [`GAP`]; both axes are then
/// clamped to keep a [`MARGIN`] on every side. With no target the
/// tooltip is centered in the viewport (and still clamped, for tooltips
/// near viewport size).
pub fn resolve_placement(
    target: Option<Rect>,
    side: Side,
    tooltip: Size,
    viewport: Viewport,
) -> Placement {
    let (left, top) = match target {
        Some(rect) => match side {
            Side::Top => (
                rect.center_x() - tooltip.width / 2,
                rect.top - GAP - tooltip.height,
            ),
            Side::Bottom => (rect.center_x() - tooltip.width / 2, rect.bottom() + GAP),
            Side::Left => (
                rect.left - GAP - tooltip.width,
                rect.center_y() - tooltip.height / 2,
            ),
            Side::Right => (rect.right() + GAP, rect.center_y() - tooltip.height / 2),
        },
        None => (
            (viewport.width - tooltip.width) / 2,
            (viewport.height - tooltip.height) / 2,
        ),
    };

    // min before max: when the tooltip is too big to honor both edges,
    // the near-edge margin wins.
    Placement {
        left: left.min(viewport.width - tooltip.width - MARGIN).max(MARGIN),
        top: top.min(viewport.height - tooltip.height - MARGIN).max(MARGIN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1280,
        height: 800,
    };
    const TOOLTIP: Size = Size {
        width: 300,
        height: 120,
    };

    fn in_bounds(p: Placement, tooltip: Size, viewport: Viewport) -> bool {
        p.left >= MARGIN
            && p.top >= MARGIN
            && p.left + tooltip.width <= viewport.width - MARGIN
            && p.top + tooltip.height <= viewport.height - MARGIN
    }

    #[test]
    fn sides_anchor_with_a_gap() {
        let target = Rect::new(500, 400, 200, 100);

        let below = resolve_placement(Some(target), Side::Bottom, TOOLTIP, VIEWPORT);
        assert_eq!(below.top, 400 + 100 + GAP);
        assert_eq!(below.left, 500 + 100 - 150); // centered on the target

        let above = resolve_placement(Some(target), Side::Top, TOOLTIP, VIEWPORT);
        assert_eq!(above.top, 400 - GAP - 120);

        let right = resolve_placement(Some(target), Side::Right, TOOLTIP, VIEWPORT);
        assert_eq!(right.left, 700 + GAP);
        assert_eq!(right.top, 400 + 50 - 60);

        let left = resolve_placement(Some(target), Side::Left, TOOLTIP, VIEWPORT);
        assert_eq!(left.left, 500 - GAP - 300);
    }

    #[test]
    fn never_leaves_the_viewport() {
        // Corner and off-screen targets on every side.
        let targets = [
            Rect::new(0, 0, 40, 20),
            Rect::new(1270, 0, 40, 20),
            Rect::new(0, 790, 40, 20),
            Rect::new(1250, 780, 100, 60),
            Rect::new(-50, -50, 30, 30),
            Rect::new(2000, 1000, 30, 30),
        ];
        for target in targets {
            for side in [Side::Top, Side::Bottom, Side::Left, Side::Right] {
                let p = resolve_placement(Some(target), side, TOOLTIP, VIEWPORT);
                assert!(
                    in_bounds(p, TOOLTIP, VIEWPORT),
                    "target {target:?} side {side:?} escaped: {p:?}"
                );
            }
        }
    }

    #[test]
    fn missing_target_centers_the_tooltip() {
        let p = resolve_placement(None, Side::Bottom, TOOLTIP, VIEWPORT);
        assert_eq!(p.left, (1280 - 300) / 2);
        assert_eq!(p.top, (800 - 120) / 2);
    }

    #[test]
    fn small_viewports_still_respect_the_near_margin() {
        // Tooltip wider than viewport minus both margins: the near edge
        // (top-left) margin wins and the placement never goes negative.
        let tiny = Viewport {
            width: 320,
            height: 140,
        };
        let p = resolve_placement(Some(Rect::new(10, 10, 20, 20)), Side::Right, TOOLTIP, tiny);
        assert_eq!(p.left, MARGIN);
        assert_eq!(p.top, MARGIN);
    }
}
