// Copyright 2026 the Keystone Authors
// SPDX-License-Identifier: Apache-2.0

//! An element with predefined size.

use kurbo::{Point, Size};
use smallvec::{SmallVec, smallvec};
use tracing::{Span, trace_span, warn};

use crate::{BoxConstraints, Element, LayoutCtx, Pod};

/// An element with predefined size.
///
/// If given a child, this element forces its child to have a specific
/// width and/or height (assuming values are permitted by this element's
/// parent). If either the width or height is not set, this element will
/// size itself to match the child's size in that dimension.
///
/// If not given a child, `SizedBox` will try to size itself as close to
/// the specified height and width as possible given the parent's
/// constraints. If height or width is not set, it will be treated as zero.
pub struct SizedBox {
    child: Option<Pod>,
    width: Option<f64>,
    height: Option<f64>,
}

// --- MARK: BUILDERS
impl SizedBox {
    /// Construct container with child, and both width and height not set.
    pub fn new(child: impl Element + 'static) -> Self {
        Self {
            child: Some(Pod::new(child)),
            width: None,
            height: None,
        }
    }

    /// Construct container without child, and both width and height not
    /// set.
    #[doc(alias = "null")]
    pub fn empty() -> Self {
        Self {
            child: None,
            width: None,
            height: None,
        }
    }

    /// Set container's width.
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Set container's height.
    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Expand container to fit the parent.
    ///
    /// Only call this method if you want the element to occupy all
    /// available space. If you only care about expanding in one of width
    /// or height, use [`expand_width`] or [`expand_height`] instead.
    ///
    /// [`expand_width`]: Self::expand_width
    /// [`expand_height`]: Self::expand_height
    pub fn expand(mut self) -> Self {
        self.width = Some(f64::INFINITY);
        self.height = Some(f64::INFINITY);
        self
    }

    /// Expand the container on the x-axis.
    ///
    /// This will force the child to have maximum width.
    pub fn expand_width(mut self) -> Self {
        self.width = Some(f64::INFINITY);
        self
    }

    /// Expand the container on the y-axis.
    ///
    /// This will force the child to have maximum height.
    pub fn expand_height(mut self) -> Self {
        self.height = Some(f64::INFINITY);
        self
    }

    fn child_constraints(&self, bc: &BoxConstraints) -> BoxConstraints {
        // if we don't have a width/height, we don't change that axis.
        // if we have a width/height, we clamp it on that axis.
        let (min_width, max_width) = match self.width {
            Some(width) => {
                let w = width.max(bc.min().width).min(bc.max().width);
                (w, w)
            }
            None => (bc.min().width, bc.max().width),
        };

        let (min_height, max_height) = match self.height {
            Some(height) => {
                let h = height.max(bc.min().height).min(bc.max().height);
                (h, h)
            }
            None => (bc.min().height, bc.max().height),
        };

        BoxConstraints::new(
            Size::new(min_width, min_height),
            Size::new(max_width, max_height),
        )
    }
}

// --- MARK: IMPL ELEMENT
impl Element for SizedBox {
    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints) -> Size {
        let child_bc = self.child_constraints(bc);

        let size = match self.child.as_mut() {
            Some(child) => {
                let size = ctx.run_layout(child, &child_bc);
                ctx.place_child(child, Point::ORIGIN);
                size
            }
            None => bc.constrain((self.width.unwrap_or(0.0), self.height.unwrap_or(0.0))),
        };

        if size.width.is_infinite() {
            warn!("SizedBox is returning an infinite width.");
        }
        if size.height.is_infinite() {
            warn!("SizedBox is returning an infinite height.");
        }

        size
    }

    fn children(&self) -> SmallVec<[&Pod; 16]> {
        if let Some(child) = &self.child {
            smallvec![child]
        } else {
            smallvec![]
        }
    }

    fn name(&self) -> &'static str {
        "SizedBox"
    }

    fn make_trace_span(&self) -> Span {
        trace_span!("SizedBox")
    }
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ModularElement, TestHarness};

    #[test]
    fn expand() {
        let expand = SizedBox::new(ModularElement::new(())).expand();
        let bc = BoxConstraints::tight(Size::new(400., 400.)).loosen();
        let child_bc = expand.child_constraints(&bc);
        assert_eq!(child_bc.min(), Size::new(400., 400.));
    }

    #[test]
    fn no_width() {
        let expand = SizedBox::new(ModularElement::new(())).height(200.);
        let bc = BoxConstraints::tight(Size::new(400., 400.)).loosen();
        let child_bc = expand.child_constraints(&bc);
        assert_eq!(child_bc.min(), Size::new(0., 200.));
        assert_eq!(child_bc.max(), Size::new(400., 200.));
    }

    #[test]
    fn empty_box() {
        let harness = TestHarness::create(SizedBox::empty().width(40.0).height(40.0));
        assert_eq!(harness.root_size(), Size::new(40., 40.));
    }

    #[test]
    fn empty_box_with_no_size_is_zero() {
        let harness = TestHarness::create(SizedBox::empty());
        assert_eq!(harness.root_size(), Size::ZERO);
    }

    #[test]
    fn box_forces_child_size() {
        let child = ModularElement::new(()).layout_fn(|_, _, bc| bc.min());
        let harness = TestHarness::create(SizedBox::new(child).width(40.0).height(40.0));
        assert_eq!(harness.root_size(), Size::new(40., 40.));
        assert_eq!(harness.root().children()[0].origin(), Point::ORIGIN);
    }
}
