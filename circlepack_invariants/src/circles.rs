// Copyright 2026 the Circlepack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometric predicates over packed circles.
//!
//! Both predicates compare distances between circle centers expressed in a
//! common coordinate frame — for containment, the parent's local frame, where
//! a child's center is its position relative to the parent.

use kurbo::Circle;

use crate::vectors;

/// Fixed numerical tolerance absorbing floating-point error in comparisons.
pub const MAX_DELTA: f64 = 1e-4;

/// Slack tolerated when checking sibling overlap.
///
/// The upstream collide force layout does not guarantee exact separation,
/// only approximate; one unit of intrusion is tolerated by design. This is a
/// tolerance for an imperfect algorithm, not a proven geometric bound — use
/// [`not_overlap_with_slack`] when a layout needs a different one.
pub const DEFAULT_OVERLAP_SLACK: f64 = 1.0;

/// Whether `child` lies entirely inside `parent`, keeping at least `padding`
/// clear of the parent's rim.
///
/// Holds iff `distance(centers) + child.radius + padding ≤ parent.radius`,
/// up to [`MAX_DELTA`].
pub fn located_within_with_padding(child: Circle, parent: Circle, padding: f64) -> bool {
    let distance_to_rim = vectors::distance(child.center, parent.center) + child.radius;
    distance_to_rim + padding <= parent.radius + MAX_DELTA
}

/// Whether two sibling circles keep at least `padding` apart, tolerating
/// [`DEFAULT_OVERLAP_SLACK`] of intrusion.
pub fn not_overlap_with(a: Circle, b: Circle, padding: f64) -> bool {
    not_overlap_with_slack(a, b, padding, DEFAULT_OVERLAP_SLACK)
}

/// Whether two sibling circles keep at least `padding` apart, tolerating
/// `slack` of intrusion.
///
/// Holds iff `a.radius + b.radius + padding ≤ distance(centers) + slack`.
pub fn not_overlap_with_slack(a: Circle, b: Circle, padding: f64, slack: f64) -> bool {
    let distance_between_centers = vectors::distance(a.center, b.center);
    a.radius + b.radius + padding <= distance_between_centers + slack
}
