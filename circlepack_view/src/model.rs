// Copyright 2026 the Circlepack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary trait for the layout engine's node type.

use kurbo::Circle;

/// What a view needs to know about the tree node it represents.
///
/// Implemented by the layout engine's node type. The view reads this once at
/// construction; afterwards, updated geometry is pushed in explicitly via
/// [`NodeView::update`](crate::NodeView::update) and
/// [`NodeView::update_position`](crate::NodeView::update_position).
pub trait NodeModel {
    /// Fully-qualified name, unique in the tree (e.g. `com.example.Widget`).
    fn full_name(&self) -> &str;

    /// Short display name for the label (e.g. `Widget`).
    fn name(&self) -> &str;

    /// Category of the node (e.g. `package`, `class`), used as the group's
    /// class attribute for styling.
    fn category(&self) -> &str;

    /// Whether this node is the tree root. Roots render no circle rim.
    fn is_root(&self) -> bool;

    /// Current circle geometry: center relative to the parent's local frame,
    /// plus radius.
    fn geometry(&self) -> Circle;

    /// Current vertical offset of the label within the group.
    fn text_offset(&self) -> f64;
}
