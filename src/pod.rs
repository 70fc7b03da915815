// Copyright 2026 the Keystone Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::{Point, Rect, Size};

use crate::Element;

/// An owned child slot in the layout tree.
///
/// A `Pod` is the sole owner of its element for the duration of layout
/// computation, and records the geometry computed for it by the last pass:
/// the size the element reported, and the origin its parent placed it at,
/// in the parent's coordinate space.
///
/// The element reference is fixed at construction; the hosting element is
/// destroyed, and the child with it, when the enclosing tree releases it.
pub struct Pod {
    element: Box<dyn Element>,
    state: LayoutState,
}

#[derive(Clone, Copy, Default)]
struct LayoutState {
    origin: Point,
    size: Size,
    is_laid_out: bool,
    awaiting_placement: bool,
}

impl Pod {
    /// Wrap an element in a new `Pod`.
    pub fn new(element: impl Element + 'static) -> Self {
        Self {
            element: Box::new(element),
            state: LayoutState::default(),
        }
    }

    /// The wrapped element.
    pub fn element(&self) -> &dyn Element {
        &*self.element
    }

    /// Mutable access to the wrapped element.
    ///
    /// Mutations take effect on the next layout pass.
    pub fn element_mut(&mut self) -> &mut dyn Element {
        &mut *self.element
    }

    /// The size computed for this element by the last layout pass.
    ///
    /// ## Panics
    ///
    /// Panics if [`LayoutCtx::run_layout`] has not been called yet for this
    /// pod.
    ///
    /// [`LayoutCtx::run_layout`]: crate::LayoutCtx::run_layout
    pub fn size(&self) -> Size {
        self.assert_laid_out("size");
        self.state.size
    }

    /// The origin this element was placed at, in its parent's coordinate
    /// space.
    ///
    /// ## Panics
    ///
    /// Panics if [`LayoutCtx::run_layout`] and [`LayoutCtx::place_child`]
    /// have not been called yet for this pod.
    ///
    /// [`LayoutCtx::run_layout`]: crate::LayoutCtx::run_layout
    /// [`LayoutCtx::place_child`]: crate::LayoutCtx::place_child
    pub fn origin(&self) -> Point {
        self.assert_laid_out("origin");
        self.assert_placed("origin");
        self.state.origin
    }

    /// The rectangle this element occupies, in its parent's coordinate
    /// space.
    ///
    /// ## Panics
    ///
    /// Panics if [`LayoutCtx::run_layout`] and [`LayoutCtx::place_child`]
    /// have not been called yet for this pod.
    ///
    /// [`LayoutCtx::run_layout`]: crate::LayoutCtx::run_layout
    /// [`LayoutCtx::place_child`]: crate::LayoutCtx::place_child
    pub fn layout_rect(&self) -> Rect {
        Rect::from_origin_size(self.origin(), self.size())
    }

    pub(crate) fn is_laid_out(&self) -> bool {
        self.state.is_laid_out
    }

    pub(crate) fn awaiting_placement(&self) -> bool {
        self.state.awaiting_placement
    }

    pub(crate) fn note_laid_out(&mut self, size: Size) {
        self.state.size = size;
        self.state.is_laid_out = true;
        self.state.awaiting_placement = true;
    }

    pub(crate) fn note_placed(&mut self, origin: Point) {
        self.state.origin = origin;
        self.state.awaiting_placement = false;
    }

    fn assert_laid_out(&self, method: &str) {
        if !self.state.is_laid_out {
            panic!(
                "Pod::{method} called before layout ran for {}",
                self.element.name()
            );
        }
    }

    fn assert_placed(&self, method: &str) {
        if self.state.awaiting_placement {
            panic!(
                "Pod::{method} called before {} was placed by its parent",
                self.element.name()
            );
        }
    }
}

impl std::fmt::Debug for Pod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pod")
            .field("element", &self.element.name())
            .field("origin", &self.state.origin)
            .field("size", &self.state.size)
            .finish()
    }
}
