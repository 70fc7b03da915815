// Copyright 2026 the Keystone Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::{Point, Rect};

/// A point with coordinates in the range `[0.0, 1.0]`.
///
/// This is the anchor vocabulary used by the positioning elements: `(0, 0)`
/// is the top-left of a rectangle and `(1, 1)` the bottom-right, with the
/// nine conventional anchors available as named constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitPoint {
    u: f64,
    v: f64,
}

impl UnitPoint {
    /// `(0.0, 0.0)`
    pub const TOP_LEFT: Self = Self::new(0.0, 0.0);
    /// `(0.5, 0.0)`
    pub const TOP: Self = Self::new(0.5, 0.0);
    /// `(1.0, 0.0)`
    pub const TOP_RIGHT: Self = Self::new(1.0, 0.0);
    /// `(0.0, 0.5)`
    pub const LEFT: Self = Self::new(0.0, 0.5);
    /// `(0.5, 0.5)`
    pub const CENTER: Self = Self::new(0.5, 0.5);
    /// `(1.0, 0.5)`
    pub const RIGHT: Self = Self::new(1.0, 0.5);
    /// `(0.0, 1.0)`
    pub const BOTTOM_LEFT: Self = Self::new(0.0, 1.0);
    /// `(0.5, 1.0)`
    pub const BOTTOM: Self = Self::new(0.5, 1.0);
    /// `(1.0, 1.0)`
    pub const BOTTOM_RIGHT: Self = Self::new(1.0, 1.0);

    /// Creates a new `UnitPoint`.
    ///
    /// The `u` and `v` coordinates describe the point, with `(0.0, 0.0)`
    /// being the top-left, and `(1.0, 1.0)` being the bottom-right.
    pub const fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }

    /// Given a rectangle, resolves the point within the rectangle.
    pub const fn resolve(self, rect: Rect) -> Point {
        Point::new(
            rect.x0 + self.u * (rect.x1 - rect.x0),
            rect.y0 + self.v * (rect.y1 - rect.y0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_resolve_to_corners() {
        let rect = Rect::new(10., 20., 110., 220.);
        assert_eq!(UnitPoint::TOP_LEFT.resolve(rect), Point::new(10., 20.));
        assert_eq!(UnitPoint::BOTTOM_RIGHT.resolve(rect), Point::new(110., 220.));
        assert_eq!(UnitPoint::CENTER.resolve(rect), Point::new(60., 120.));
    }

    #[test]
    fn edges_resolve_to_midpoints() {
        let rect = Rect::new(0., 0., 100., 200.);
        assert_eq!(UnitPoint::TOP.resolve(rect), Point::new(50., 0.));
        assert_eq!(UnitPoint::LEFT.resolve(rect), Point::new(0., 100.));
        assert_eq!(UnitPoint::RIGHT.resolve(rect), Point::new(100., 100.));
        assert_eq!(UnitPoint::BOTTOM.resolve(rect), Point::new(50., 200.));
    }
}
