// Copyright 2026 the Circlepack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circlepack Invariants: the correctness contract for circle-packing layouts.
//!
//! A layout algorithm feeding a circle-packing diagram must produce geometry a
//! viewer can trust: every child circle sits inside its parent (minus padding),
//! and sibling circles do not overlap beyond a bounded tolerance. This crate
//! expresses those rules as pure, read-only predicates over [`kurbo::Circle`]
//! geometry, plus set-membership predicates over a subtree's flattened node
//! names. Nothing here prevents an invalid layout; it makes one detectable.
//!
//! - [`circles`]: containment within the parent with padding, and non-overlap
//!   between siblings with padding and a configurable slack (the upstream
//!   collide force guarantees only approximate separation).
//! - [`membership`]: "this subtree's leaves are exactly these nodes" and
//!   "no leaf class exists here", via the [`membership::Hierarchy`] trait.
//! - [`vectors`]: the two difference-vector helpers the predicates build on.
//!
//! Predicates assume fully-laid-out input; a node without geometry propagates
//! whatever the arithmetic does (NaNs compare false), it is not masked here.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod circles;
pub mod membership;
pub mod vectors;

pub use circles::{
    DEFAULT_OVERLAP_SLACK, MAX_DELTA, located_within_with_padding, not_overlap_with,
    not_overlap_with_slack,
};
pub use membership::{
    Hierarchy, contain_exactly_nodes, contain_no_classes, contain_only_classes,
    self_and_descendants,
};
