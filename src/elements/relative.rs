// Copyright 2026 the Keystone Authors
// SPDX-License-Identifier: Apache-2.0

//! An element that positions its child relative to the layout bounds.

use kurbo::{Rect, Size};
use smallvec::{SmallVec, smallvec};
use tracing::{Span, trace_span};

use crate::{BoxConstraints, Element, LayoutCtx, Pod, Sizing, UnitPoint};

/// An element that lays out a single child and positions it at an anchor
/// within the layout bounds.
///
/// The anchor is a [`UnitPoint`]: `(0, 0)` pins the child to the top-left
/// of the bounds, `(0.5, 0.5)` centers it, `(1, 1)` pins it to the
/// bottom-right, and any other point of the unit square interpolates
/// between those.
///
/// By default the element claims the maximum size available and positions
/// the child within it. [`Sizing`] flags shrink the element back to the
/// child's measured size per axis, which leaves no extra space to
/// distribute on that axis.
pub struct Relative {
    align: UnitPoint,
    sizing: Sizing,
    child: Pod,
}

// --- MARK: BUILDERS
impl Relative {
    /// Create an element positioning `child` at `align`.
    pub fn new(align: UnitPoint, sizing: Sizing, child: impl Element + 'static) -> Self {
        Self {
            align,
            sizing,
            child: Pod::new(child),
        }
    }

    /// The anchor the child is positioned at.
    pub fn align(&self) -> UnitPoint {
        self.align
    }

    /// Change the anchor the child is positioned at.
    ///
    /// Takes effect on the next layout pass.
    pub fn set_align(&mut self, align: UnitPoint) {
        self.align = align;
    }

    /// The sizing options.
    pub fn sizing(&self) -> Sizing {
        self.sizing
    }

    /// Change the sizing options.
    ///
    /// Takes effect on the next layout pass.
    pub fn set_sizing(&mut self, sizing: Sizing) {
        self.sizing = sizing;
    }

    /// The child slot, with the geometry computed by the last pass.
    pub fn child(&self) -> &Pod {
        &self.child
    }

    /// Mutable access to the child slot.
    pub fn child_mut(&mut self) -> &mut Pod {
        &mut self.child
    }
}

// --- MARK: IMPL ELEMENT
impl Element for Relative {
    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints) -> Size {
        lay_out_anchored(ctx, &mut self.child, self.align, self.sizing, bc)
    }

    fn children(&self) -> SmallVec<[&Pod; 16]> {
        smallvec![&self.child]
    }

    fn name(&self) -> &'static str {
        "Relative"
    }

    fn make_trace_span(&self) -> Span {
        trace_span!("Relative")
    }
}

/// Size a child against loosened constraints, then place it at `align`
/// within the space left over.
///
/// The element claims the full maximum on every bounded axis unless a
/// minimum-sizing flag shrinks that axis back to the child's measured
/// size. On an unbounded axis the element adopts the child's size.
pub(super) fn lay_out_anchored(
    ctx: &mut LayoutCtx,
    child: &mut Pod,
    align: UnitPoint,
    sizing: Sizing,
    bc: &BoxConstraints,
) -> Size {
    let child_size = ctx.run_layout(child, &bc.loosen());

    log_size_warnings(child_size);

    let mut my_size = child_size;
    if bc.is_width_bounded() {
        my_size.width = bc.max().width;
    }
    if bc.is_height_bounded() {
        my_size.height = bc.max().height;
    }

    if sizing.contains(Sizing::MIN_WIDTH) {
        my_size.width = child_size.width;
    }
    if sizing.contains(Sizing::MIN_HEIGHT) {
        my_size.height = child_size.height;
    }

    let my_size = bc.constrain(my_size);
    let extra_width = (my_size.width - child_size.width).max(0.);
    let extra_height = (my_size.height - child_size.height).max(0.);
    let origin = align.resolve(Rect::new(0., 0., extra_width, extra_height));
    ctx.place_child(child, origin);

    my_size
}

fn log_size_warnings(size: Size) {
    if size.width.is_infinite() {
        tracing::warn!("A positioned child has an infinite width.");
    }

    if size.height.is_infinite() {
        tracing::warn!("A positioned child has an infinite height.");
    }
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestHarness;
    use crate::elements::SizedBox;

    #[test]
    fn anchors_resolve_within_leftover_space() {
        let child = SizedBox::empty().width(100.).height(100.);
        let mut harness = TestHarness::create(Relative::new(
            UnitPoint::BOTTOM_RIGHT,
            Sizing::empty(),
            child,
        ));

        assert_eq!(harness.root_size(), Size::new(400., 400.));
        assert_eq!(harness.root().child().origin(), kurbo::Point::new(300., 300.));

        harness.root_mut().set_align(UnitPoint::TOP_RIGHT);
        harness.run_layout();
        assert_eq!(harness.root().child().origin(), kurbo::Point::new(300., 0.));
    }

    #[test]
    fn fractional_anchor_interpolates() {
        let child = SizedBox::empty().width(200.).height(200.);
        let harness = TestHarness::create(Relative::new(
            UnitPoint::new(0.25, 0.75),
            Sizing::empty(),
            child,
        ));

        assert_eq!(harness.root().child().origin(), kurbo::Point::new(50., 150.));
    }

    #[test]
    fn minimum_sizing_leaves_no_leftover_space() {
        let child = SizedBox::empty().width(100.).height(100.);
        let harness = TestHarness::create(Relative::new(
            UnitPoint::BOTTOM_RIGHT,
            Sizing::MIN_SIZE,
            child,
        ));

        assert_eq!(harness.root_size(), Size::new(100., 100.));
        assert_eq!(harness.root().child().origin(), kurbo::Point::ORIGIN);
    }
}
