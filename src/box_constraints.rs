// Copyright 2026 the Keystone Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::Size;

/// Constraints for layout.
///
/// The layout protocol is strongly inspired by Flutter, and this struct is
/// similar to the [Flutter BoxConstraints] class: a minimum and a maximum
/// size. An element's [`layout`] method should choose a size that meets
/// these constraints.
///
/// Further, a container element should compute appropriate constraints for
/// each of its children, and pass those down when recursing.
///
/// The constraints are always [rounded away from zero] to integers to
/// enable pixel perfect layout.
///
/// [`layout`]: crate::Element::layout
/// [Flutter BoxConstraints]: https://api.flutter.dev/flutter/rendering/BoxConstraints-class.html
/// [rounded away from zero]: Size::expand
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxConstraints {
    min: Size,
    max: Size,
}

impl BoxConstraints {
    /// An unbounded box constraints object.
    ///
    /// Can be satisfied by any nonnegative size.
    pub const UNBOUNDED: Self = Self {
        min: Size::ZERO,
        max: Size::new(f64::INFINITY, f64::INFINITY),
    };

    /// Create a new box constraints object.
    ///
    /// The given sizes are also [rounded away from zero], so that the
    /// layout is aligned to integers.
    ///
    /// [rounded away from zero]: Size::expand
    pub fn new(min: Size, max: Size) -> Self {
        Self {
            min: min.expand(),
            max: max.expand(),
        }
    }

    /// Create a "tight" box constraints object.
    ///
    /// A "tight" constraint can only be satisfied by a single size.
    ///
    /// The given size is also [rounded away from zero], so that the layout
    /// is aligned to integers.
    ///
    /// [rounded away from zero]: Size::expand
    pub fn tight(size: Size) -> Self {
        let size = size.expand();
        Self {
            min: size,
            max: size,
        }
    }

    /// Create a "loose" version of the constraints.
    ///
    /// The max size is unchanged, but the minimum size is set to zero. The
    /// child may then report a size smaller than the parent was offered.
    pub fn loosen(&self) -> Self {
        Self {
            min: Size::ZERO,
            max: self.max,
        }
    }

    /// Clamp a given size so that it fits within the constraints.
    ///
    /// The given size is also [rounded away from zero], so that the layout
    /// is aligned to integers.
    ///
    /// [rounded away from zero]: Size::expand
    pub fn constrain(&self, size: impl Into<Size>) -> Size {
        size.into().expand().clamp(self.min, self.max)
    }

    /// Returns the max size of these constraints.
    pub fn max(&self) -> Size {
        self.max
    }

    /// Returns the min size of these constraints.
    pub fn min(&self) -> Size {
        self.min
    }

    /// Whether there is an upper bound on the width.
    pub fn is_width_bounded(&self) -> bool {
        self.max.width.is_finite()
    }

    /// Whether there is an upper bound on the height.
    pub fn is_height_bounded(&self) -> bool {
        self.max.height.is_finite()
    }

    /// Check to see if these constraints are legit.
    ///
    /// In debug builds, logs a warning and panics if the constraints are
    /// invalid; `name` identifies the caller in the emitted diagnostics.
    pub fn debug_check(&self, name: &str) {
        if cfg!(not(debug_assertions)) {
            return;
        }

        if !(0.0 <= self.min.width
            && self.min.width <= self.max.width
            && 0.0 <= self.min.height
            && self.min.height <= self.max.height
            && self.min.expand() == self.min
            && self.max.expand() == self.max)
        {
            tracing::warn!("Bad BoxConstraints passed to {}:", name);
            tracing::warn!("{:?}", self);
        }

        if self.min.width.is_nan() || self.min.height.is_nan() {
            debug_panic!("Minimum constraint passed to {name} is NaN");
        }
        if self.max.width.is_nan() || self.max.height.is_nan() {
            debug_panic!("Maximum constraint passed to {name} is NaN");
        }
    }

    /// Shrink min and max constraints by size.
    ///
    /// The given size is also [rounded away from zero], so that the layout
    /// is aligned to integers.
    ///
    /// [rounded away from zero]: Size::expand
    pub fn shrink(&self, diff: impl Into<Size>) -> Self {
        let diff = diff.into().expand();
        let min = Size::new(
            (self.min().width - diff.width).max(0.),
            (self.min().height - diff.height).max(0.),
        );
        let max = Size::new(
            (self.max().width - diff.width).max(0.),
            (self.max().height - diff.height).max(0.),
        );

        Self::new(min, max)
    }

    /// Test whether these constraints contain the given `Size`.
    pub fn contains(&self, size: impl Into<Size>) -> bool {
        let size = size.into();
        (self.min.width <= size.width && size.width <= self.max.width)
            && (self.min.height <= size.height && size.height <= self.max.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bc(min_width: f64, min_height: f64, max_width: f64, max_height: f64) -> BoxConstraints {
        BoxConstraints::new(
            Size::new(min_width, min_height),
            Size::new(max_width, max_height),
        )
    }

    #[test]
    fn unbounded() {
        assert!(!BoxConstraints::UNBOUNDED.is_width_bounded());
        assert!(!BoxConstraints::UNBOUNDED.is_height_bounded());
        assert!(BoxConstraints::UNBOUNDED.contains(Size::new(1e9, 1e9)));
    }

    #[test]
    fn tight_is_only_satisfied_by_one_size() {
        let bc = BoxConstraints::tight(Size::new(400., 400.));
        assert_eq!(bc.min(), bc.max());
        assert_eq!(bc.constrain(Size::new(20., 900.)), Size::new(400., 400.));
    }

    #[test]
    fn loosen_zeroes_the_minimum() {
        let loose = BoxConstraints::tight(Size::new(400., 400.)).loosen();
        assert_eq!(loose.min(), Size::ZERO);
        assert_eq!(loose.max(), Size::new(400., 400.));
        assert_eq!(loose.constrain(Size::new(20., 900.)), Size::new(20., 400.));
    }

    #[test]
    fn constrain_clamps_on_both_ends() {
        let bc = bc(10., 10., 100., 100.);
        assert_eq!(bc.constrain(Size::new(5., 50.)), Size::new(10., 50.));
        assert_eq!(bc.constrain(Size::new(300., 50.)), Size::new(100., 50.));
    }

    #[test]
    fn constrain_rounds_away_from_zero() {
        let bc = bc(0., 0., 100., 100.);
        assert_eq!(bc.constrain(Size::new(10.2, 10.8)), Size::new(11., 11.));
    }

    #[test]
    fn shrink_saturates_at_zero() {
        let shrunk = bc(10., 10., 100., 100.).shrink(Size::new(20., 30.));
        assert_eq!(shrunk.min(), Size::ZERO);
        assert_eq!(shrunk.max(), Size::new(80., 70.));
    }

    #[test]
    fn contains() {
        let bc = bc(10., 10., 100., 100.);
        assert!(bc.contains(Size::new(10., 100.)));
        assert!(bc.contains(Size::new(50., 50.)));
        assert!(!bc.contains(Size::new(9., 50.)));
        assert!(!bc.contains(Size::new(50., 101.)));
    }
}
