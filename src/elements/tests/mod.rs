// Copyright 2026 the Keystone Authors
// SPDX-License-Identifier: Apache-2.0

//! Tests that exercise the elements through whole layout passes.
