// Copyright 2026 the Keystone Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::Size;
use smallvec::SmallVec;
use tracing::{Span, trace_span};

use crate::{BoxConstraints, LayoutCtx, Pod};

/// The trait implemented by all layout elements.
///
/// A layout element is anything that can report a size for itself given
/// width/height constraints and can be positioned within a parent's
/// coordinate space.
///
/// A leaf element determines its size (subject to the provided constraints)
/// and returns it. A container element recursively calls
/// [`LayoutCtx::run_layout`] on each of its children, providing each an
/// appropriate box constraint, then calls [`LayoutCtx::place_child`] on
/// each of them, and finally returns its own size.
///
/// Container elements own their children exclusively, wrapped in a
/// [`Pod`], which records the child's computed geometry after a pass.
///
/// Layout is synchronous: an element's fields are read during one pass, and
/// mutating an element between passes is the caller's concern. Elements make
/// no internal locking guarantee.
pub trait Element {
    /// Compute layout.
    ///
    /// For efficiency, a container should only invoke layout of a child
    /// element once per pass, though there is nothing enforcing this.
    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints) -> Size;

    /// Return references to this element's children.
    ///
    /// Leaf elements return an empty vector. Container elements must report
    /// every child they laid out, so the pass can verify each one was also
    /// placed.
    fn children(&self) -> SmallVec<[&Pod; 16]> {
        SmallVec::new()
    }

    /// A short name identifying this element in diagnostics.
    fn name(&self) -> &'static str {
        "Element"
    }

    /// Return a span for tracing one layout pass over this element.
    fn make_trace_span(&self) -> Span {
        trace_span!("layout", element = self.name())
    }
}
