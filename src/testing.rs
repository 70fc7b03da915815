// Copyright 2026 the Keystone Authors
// SPDX-License-Identifier: Apache-2.0

//! Tools and infrastructure for testing elements.

use kurbo::Size;

use crate::{BoxConstraints, Element, LayoutCtx, contexts};

/// The size a [`TestHarness`] lays its root element out against, unless
/// otherwise specified.
pub const HARNESS_DEFAULT_SIZE: Size = Size::new(400., 400.);

/// A harness for running layout passes over a tree of elements outside of
/// any embedding.
///
/// The root element is laid out against *loose* constraints of the harness
/// size, so elements that shrink to their child's size can be observed
/// doing so. The root is kept by value, which leaves it directly queryable
/// between passes.
///
/// ## Example
///
/// ```
/// use keystone::elements::{Center, SizedBox};
/// use keystone::kurbo::{Point, Size};
/// use keystone::testing::TestHarness;
///
/// let child = SizedBox::empty().width(100.0).height(100.0);
/// let harness = TestHarness::create(Center::centered(child));
///
/// assert_eq!(harness.root_size(), Size::new(400., 400.));
/// assert_eq!(harness.root().child().origin(), Point::new(150., 150.));
/// ```
pub struct TestHarness<E> {
    root: E,
    size: Size,
    root_size: Size,
}

impl<E: Element> TestHarness<E> {
    /// Build a harness around a root element and run an initial layout
    /// pass against [`HARNESS_DEFAULT_SIZE`].
    pub fn create(root: E) -> Self {
        Self::create_with_size(root, HARNESS_DEFAULT_SIZE)
    }

    /// Build a harness around a root element and run an initial layout
    /// pass against the given size.
    pub fn create_with_size(root: E, size: Size) -> Self {
        let mut harness = Self {
            root,
            size,
            root_size: Size::ZERO,
        };
        harness.run_layout();
        harness
    }

    /// Run another layout pass, picking up any mutations made to the tree
    /// since the last one.
    pub fn run_layout(&mut self) {
        let bc = BoxConstraints::new(Size::ZERO, self.size);
        self.root_size = contexts::lay_out_element(&mut self.root, &bc);
    }

    /// The root element.
    pub fn root(&self) -> &E {
        &self.root
    }

    /// Mutable access to the root element.
    ///
    /// Call [`run_layout`](Self::run_layout) afterwards for mutations to
    /// take effect.
    pub fn root_mut(&mut self) -> &mut E {
        &mut self.root
    }

    /// The size the root element chose in the last pass.
    pub fn root_size(&self) -> Size {
        self.root_size
    }
}

type LayoutFn<S> = dyn FnMut(&mut S, &mut LayoutCtx, &BoxConstraints) -> Size;

/// An element whose behavior is provided by closures, for tests.
///
/// By default it is a leaf reporting the minimum size its constraints
/// allow; use [`layout_fn`](Self::layout_fn) to substitute any other
/// layout behavior.
pub struct ModularElement<S> {
    state: S,
    layout: Option<Box<LayoutFn<S>>>,
}

impl<S> ModularElement<S> {
    /// Create a new element with the given state.
    pub fn new(state: S) -> Self {
        Self {
            state,
            layout: None,
        }
    }

    /// Provide the layout behavior.
    pub fn layout_fn(
        mut self,
        f: impl FnMut(&mut S, &mut LayoutCtx, &BoxConstraints) -> Size + 'static,
    ) -> Self {
        self.layout = Some(Box::new(f));
        self
    }
}

impl<S> Element for ModularElement<S> {
    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints) -> Size {
        match self.layout.as_mut() {
            Some(f) => f(&mut self.state, ctx, bc),
            None => bc.min(),
        }
    }

    fn name(&self) -> &'static str {
        "ModularElement"
    }
}
