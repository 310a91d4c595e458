//! Pure geometry clamp: keeps window rects inside the measured desktop surface.
//!
//! Size is always settled before position so the position clamp sees the final extent.

use crate::model::{
    DesktopBounds, ResizeEdge, WindowPosition, WindowRect, WindowSize, MIN_WINDOW_HEIGHT,
    MIN_WINDOW_WIDTH,
};

/// Largest extent a window may take along an axis of `extent` pixels (80%, floored).
pub fn size_ceiling(extent: i32) -> i32 {
    extent.max(0) * 4 / 5
}

/// Caps `proposed` at 80% of the desktop in each dimension.
pub fn clamp_size(proposed: WindowSize, bounds: DesktopBounds) -> WindowSize {
    WindowSize::new(
        proposed.width.min(size_ceiling(bounds.width)),
        proposed.height.min(size_ceiling(bounds.height)),
    )
}

/// Raises `size` to the resize-affordance minimum of 200x150.
pub fn apply_size_floor(size: WindowSize) -> WindowSize {
    WindowSize::new(
        size.width.max(MIN_WINDOW_WIDTH),
        size.height.max(MIN_WINDOW_HEIGHT),
    )
}

/// Ceiling then floor. When the desktop is smaller than the floor, the floor wins.
pub fn settle_size(proposed: WindowSize, bounds: DesktopBounds) -> WindowSize {
    apply_size_floor(clamp_size(proposed, bounds))
}

/// Pulls `proposed` back so a window of `size` stays on the desktop; never negative.
pub fn clamp_position(
    proposed: WindowPosition,
    size: WindowSize,
    bounds: DesktopBounds,
) -> WindowPosition {
    WindowPosition::new(
        proposed.x.min(bounds.width - size.width).max(0),
        proposed.y.min(bounds.height - size.height).max(0),
    )
}

/// Rect a dragged frame renders at after a pointer delta of `(dx, dy)`.
pub fn drag_preview(start: WindowRect, dx: i32, dy: i32, bounds: DesktopBounds) -> WindowRect {
    let moved = start.offset(dx, dy);
    WindowRect::from_parts(clamp_position(moved.position(), start.size(), bounds), start.size())
}

/// Rect a resizing frame renders at after a pointer delta of `(dx, dy)` on `edge`.
///
/// The far edges may not leave the surface, and the floor always holds.
pub fn resize_preview(
    start: WindowRect,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
    bounds: DesktopBounds,
) -> WindowRect {
    let grown = match edge {
        ResizeEdge::East => WindowRect {
            w: start.w + dx,
            ..start
        },
        ResizeEdge::South => WindowRect {
            h: start.h + dy,
            ..start
        },
        ResizeEdge::SouthEast => WindowRect {
            w: start.w + dx,
            h: start.h + dy,
            ..start
        },
    };
    let size = apply_size_floor(WindowSize::new(
        grown.w.min(bounds.width - start.x),
        grown.h.min(bounds.height - start.y),
    ));
    WindowRect::from_parts(start.position(), size)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const DESKTOP: DesktopBounds = DesktopBounds::new(800, 600);

    #[test]
    fn position_is_pulled_back_inside_the_right_edge() {
        let clamped = clamp_position(
            WindowPosition::new(790, 10),
            WindowSize::new(300, 200),
            DESKTOP,
        );
        assert_eq!(clamped, WindowPosition::new(500, 10));
    }

    #[test]
    fn negative_positions_clamp_to_the_origin() {
        let clamped = clamp_position(
            WindowPosition::new(-40, -3),
            WindowSize::new(300, 200),
            DESKTOP,
        );
        assert_eq!(clamped, WindowPosition::new(0, 0));
    }

    #[test]
    fn zero_sized_desktop_never_yields_negative_positions() {
        let bounds = DesktopBounds::new(0, 0);
        let size = settle_size(WindowSize::new(300, 200), bounds);
        assert_eq!(size, WindowSize::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
        assert_eq!(
            clamp_position(WindowPosition::new(50, 50), size, bounds),
            WindowPosition::new(0, 0)
        );
    }

    #[test]
    fn size_ceiling_is_eighty_percent_floored() {
        assert_eq!(size_ceiling(800), 640);
        assert_eq!(size_ceiling(601), 480);
        assert_eq!(size_ceiling(-5), 0);
        assert_eq!(
            clamp_size(WindowSize::new(1000, 100), DESKTOP),
            WindowSize::new(640, 100)
        );
    }

    #[test]
    fn settle_size_applies_ceiling_then_floor() {
        assert_eq!(
            settle_size(WindowSize::new(1000, 100), DESKTOP),
            WindowSize::new(640, 150)
        );
        assert_eq!(
            settle_size(WindowSize::new(50, 9000), DESKTOP),
            WindowSize::new(200, 480)
        );
    }

    #[test]
    fn drag_preview_stays_on_the_surface() {
        let start = WindowRect { x: 100, y: 100, w: 300, h: 200 };
        assert_eq!(
            drag_preview(start, 50, -20, DESKTOP),
            WindowRect { x: 150, y: 80, w: 300, h: 200 }
        );
        assert_eq!(
            drag_preview(start, 900, 900, DESKTOP),
            WindowRect { x: 500, y: 400, w: 300, h: 200 }
        );
    }

    #[test]
    fn resize_preview_respects_floor_and_far_edges() {
        let start = WindowRect { x: 400, y: 300, w: 300, h: 200 };
        assert_eq!(
            resize_preview(start, ResizeEdge::SouthEast, 500, 500, DESKTOP),
            WindowRect { x: 400, y: 300, w: 400, h: 300 }
        );
        assert_eq!(
            resize_preview(start, ResizeEdge::East, -250, 0, DESKTOP),
            WindowRect { x: 400, y: 300, w: 200, h: 200 }
        );
        assert_eq!(
            resize_preview(start, ResizeEdge::South, 90, -120, DESKTOP),
            WindowRect { x: 400, y: 300, w: 300, h: 150 }
        );
    }
}
