// Copyright 2026 the Keystone Authors
// SPDX-License-Identifier: Apache-2.0

//! Option sets for the centering elements.

use bitflags::bitflags;

use crate::UnitPoint;

bitflags! {
    /// How a child is centered within the space its parent was offered.
    ///
    /// The empty set positions the child at `(0, 0)` relative to the layout
    /// bounds. [`X`] centers along the X axis, [`Y`] along the Y axis, and
    /// [`XY`] is a convenience for both. Flags combine by bitwise OR, with
    /// the empty set as the identity.
    ///
    /// [`X`]: Centering::X
    /// [`Y`]: Centering::Y
    /// [`XY`]: Centering::XY
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Centering: u8 {
        /// Center the child along the X axis.
        const X = 1 << 0;
        /// Center the child along the Y axis.
        const Y = 1 << 1;
        /// Center the child along both axes.
        const XY = Self::X.bits() | Self::Y.bits();
    }
}

bitflags! {
    /// How much space a positioning element claims for itself.
    ///
    /// With the empty set the element takes up the maximum size available.
    /// A minimum flag shrinks the element to its child's measured size
    /// along that axis; [`MIN_SIZE`] is a convenience for both axes.
    ///
    /// A minimum flag on an axis overrides "take maximum" on that axis, so
    /// the two behaviors cannot be requested at once.
    ///
    /// [`MIN_SIZE`]: Sizing::MIN_SIZE
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Sizing: u8 {
        /// Take up the minimum size possible along the X axis.
        const MIN_WIDTH = 1 << 0;
        /// Take up the minimum size possible along the Y axis.
        const MIN_HEIGHT = 1 << 1;
        /// Take up the minimum size possible along both axes.
        const MIN_SIZE = Self::MIN_WIDTH.bits() | Self::MIN_HEIGHT.bits();
    }
}

impl Centering {
    /// The anchor these options select.
    ///
    /// An axis with its flag set anchors at the midpoint; an axis without
    /// it anchors at the origin.
    pub fn anchor(self) -> UnitPoint {
        UnitPoint::new(
            if self.contains(Self::X) { 0.5 } else { 0.0 },
            if self.contains(Self::Y) { 0.5 } else { 0.0 },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_the_identity() {
        assert_eq!(Centering::empty() | Centering::X, Centering::X);
        assert_eq!(Centering::empty() | Centering::empty(), Centering::empty());
        assert_eq!(Sizing::empty() | Sizing::MIN_HEIGHT, Sizing::MIN_HEIGHT);
    }

    #[test]
    fn convenience_flags_are_unions() {
        assert_eq!(Centering::X | Centering::Y, Centering::XY);
        assert_eq!(Sizing::MIN_WIDTH | Sizing::MIN_HEIGHT, Sizing::MIN_SIZE);
    }

    #[test]
    fn anchor_mapping() {
        assert_eq!(Centering::empty().anchor(), UnitPoint::TOP_LEFT);
        assert_eq!(Centering::XY.anchor(), UnitPoint::CENTER);
        assert_eq!(Centering::X.anchor(), UnitPoint::new(0.5, 0.0));
        assert_eq!(Centering::Y.anchor(), UnitPoint::new(0.0, 0.5));
    }
}
