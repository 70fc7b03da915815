// Copyright 2026 the Keystone Authors
// SPDX-License-Identifier: Apache-2.0

//! The context passed to elements during a layout pass.

use kurbo::{Point, Size};
use tracing::trace;

use crate::{BoxConstraints, Element, Pod};

/// A context provided to [`Element::layout`].
///
/// Container elements use it to lay out and place their children. A new
/// context is created for each pass by [`run_layout_pass`].
pub struct LayoutCtx {
    _private: (),
}

impl LayoutCtx {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }

    /// Compute the layout of a child element.
    ///
    /// Containers must call this method for every child, before calling
    /// [`place_child`](Self::place_child) for it. Returns the size the
    /// child chose, which is also recorded on the child's [`Pod`].
    pub fn run_layout(&mut self, child: &mut Pod, bc: &BoxConstraints) -> Size {
        let name = child.element().name();
        let span = child.element().make_trace_span();
        let _entered = span.enter();

        bc.debug_check(name);
        let size = child.element_mut().layout(self, bc);

        if size.width.is_nan() || size.height.is_nan() {
            debug_panic!("{name} returned a NaN size during layout");
        }
        check_children_placed(child.element(), name);

        child.note_laid_out(size);
        trace!("{name} computed size: {size}");
        size
    }

    /// Set the position of a child element, in the parent's coordinate
    /// space.
    ///
    /// Container elements must call this method for each child in their
    /// layout method, after calling [`run_layout`](Self::run_layout) for
    /// it.
    pub fn place_child(&mut self, child: &mut Pod, origin: Point) {
        if !child.is_laid_out() {
            debug_panic!(
                "place_child called before layout ran for {}",
                child.element().name()
            );
        }
        child.note_placed(origin);
    }
}

/// Lay out a tree of elements from the root.
///
/// `bc` describes the space the embedding offers the root element; the
/// root is placed at the origin of that space. Returns the size the root
/// chose. A pass with identical constraints over an unchanged tree
/// produces identical results.
pub fn run_layout_pass(root: &mut Pod, bc: &BoxConstraints) -> Size {
    let mut ctx = LayoutCtx::new();
    let size = ctx.run_layout(root, bc);
    ctx.place_child(root, Point::ORIGIN);
    size
}

/// Lay out a bare element that is not wrapped in a [`Pod`].
pub(crate) fn lay_out_element(element: &mut dyn Element, bc: &BoxConstraints) -> Size {
    let mut ctx = LayoutCtx::new();
    let span = element.make_trace_span();
    let _entered = span.enter();

    bc.debug_check(element.name());
    let size = element.layout(&mut ctx, bc);
    check_children_placed(element, element.name());
    size
}

fn check_children_placed(element: &dyn Element, name: &str) {
    for child in element.children() {
        if child.awaiting_placement() {
            debug_panic!("{name} did not place all of its children during layout");
        }
    }
}
