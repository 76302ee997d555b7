// Copyright 2026 the Circlepack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Difference-vector helpers over [`kurbo`] point arithmetic.
//!
//! Positions are [`Point`]s, differences are [`Vec2`]s, and lengths come from
//! [`Vec2::hypot`]; these two helpers only name the combinations the
//! predicates use. Pure arithmetic, no error states.

use kurbo::{Point, Vec2};

/// The vector from `b` to `a`, componentwise `a − b`.
///
/// `between(a, b).hypot()` is the Euclidean distance from `b` to `a`.
pub fn between(a: Point, b: Point) -> Vec2 {
    a - b
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    between(a, b).hypot()
}
