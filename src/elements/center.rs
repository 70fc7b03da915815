// Copyright 2026 the Keystone Authors
// SPDX-License-Identifier: Apache-2.0

//! An element that centers its child within the layout bounds.

use kurbo::Size;
use smallvec::{SmallVec, smallvec};
use tracing::{Span, trace_span};

use super::relative::lay_out_anchored;
use crate::{BoxConstraints, Centering, Element, LayoutCtx, Pod, Sizing};

/// An element that lays out a single child and positions it so that it is
/// centered within the layout bounds.
///
/// Which axes are centered is selected by [`Centering`]; an axis without
/// its flag set pins the child to the origin instead. Centering only
/// matters when extra space exists: by default the element claims the
/// maximum size available, and [`Sizing`] flags shrink it back to the
/// child's measured size per axis.
///
/// [`Relative`] offers all of the capabilities of `Center`, and more.
/// Reach for it to position the child at a corner or the middle of an
/// edge.
///
/// [`Relative`]: super::Relative
pub struct Center {
    centering: Centering,
    sizing: Sizing,
    child: Pod,
}

// --- MARK: BUILDERS
impl Center {
    /// Create an element centering `child` according to the given options.
    pub fn new(centering: Centering, sizing: Sizing, child: impl Element + 'static) -> Self {
        Self {
            centering,
            sizing,
            child: Pod::new(child),
        }
    }

    /// Create an element centering `child` along both axes.
    pub fn centered(child: impl Element + 'static) -> Self {
        Self::new(Centering::XY, Sizing::empty(), child)
    }

    /// The centering options.
    pub fn centering(&self) -> Centering {
        self.centering
    }

    /// Change the centering options.
    ///
    /// Takes effect on the next layout pass.
    pub fn set_centering(&mut self, centering: Centering) {
        self.centering = centering;
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
impl Element for Center {
    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints) -> Size {
        lay_out_anchored(ctx, &mut self.child, self.centering.anchor(), self.sizing, bc)
    }

    fn children(&self) -> SmallVec<[&Pod; 16]> {
        smallvec![&self.child]
    }

    fn name(&self) -> &'static str {
        "Center"
    }

    fn make_trace_span(&self) -> Span {
        trace_span!("Center")
    }
}
