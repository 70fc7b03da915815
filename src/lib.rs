// Copyright 2026 the Keystone Authors
// SPDX-License-Identifier: Apache-2.0

//! Keystone gives you a small set of single-child layout primitives: an
//! element is measured against box constraints handed down from its
//! parent, then positioned within the space the parent was offered.
//!
//! The crate is not a widget toolkit. It has no event loop, no painting
//! and no view hierarchy; it is the positioning layer such a toolkit
//! would sit on, kept small enough to embed. The layout protocol is the
//! Flutter-style one: constraints flow down, sizes flow back up, and a
//! parent places each child it laid out.
//!
//! The interesting elements are [`Center`], which centers its child along
//! the axes selected by a [`Centering`] option set, and [`Relative`],
//! which generalizes it to positioning at any anchor of the unit square.
//! Both claim the maximum space available unless a [`Sizing`] option
//! shrinks them back to their child's measured size per axis.
//!
//! # Example
//!
//! ```
//! use keystone::elements::{Center, SizedBox};
//! use keystone::kurbo::Size;
//! use keystone::{BoxConstraints, Centering, Pod, Sizing, run_layout_pass};
//!
//! // Center a 40x20 box within whatever space the embedding offers.
//! let center = Center::new(
//!     Centering::XY,
//!     Sizing::empty(),
//!     SizedBox::empty().width(40.0).height(20.0),
//! );
//!
//! let mut root = Pod::new(center);
//! let size = run_layout_pass(&mut root, &BoxConstraints::tight(Size::new(400.0, 400.0)));
//!
//! assert_eq!(size, Size::new(400.0, 400.0));
//! ```
//!
//! [`Center`]: elements::Center
//! [`Relative`]: elements::Relative

#![deny(clippy::trivially_copy_pass_by_ref)]
#![warn(unused_imports)]
#![warn(clippy::print_stdout, clippy::print_stderr, clippy::dbg_macro)]

pub use kurbo;

#[macro_use]
mod util;

mod box_constraints;
mod contexts;
mod element;
mod options;
mod pod;
mod unit_point;

pub mod elements;
pub mod testing;

pub use box_constraints::BoxConstraints;
pub use contexts::{LayoutCtx, run_layout_pass};
pub use element::Element;
pub use options::{Centering, Sizing};
pub use pod::Pod;
pub use unit_point::UnitPoint;
