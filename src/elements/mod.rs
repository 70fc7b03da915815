// Copyright 2026 the Keystone Authors
// SPDX-License-Identifier: Apache-2.0

//! The built-in layout elements.

mod center;
mod relative;
mod sized_box;

#[cfg(test)]
mod tests;

pub use center::Center;
pub use relative::Relative;
pub use sized_box::SizedBox;
