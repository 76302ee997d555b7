// Copyright 2026 the Circlepack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene boundary: element handles, kinds, and attribute changes.

use kurbo::Point;

/// Identifier for one element owned by a [`Scene`](crate::Scene).
///
/// Handles are minted by the substrate and are only meaningful to the scene that
/// created them. A view holds the handles of the primitives it owns exclusively;
/// no two views ever share a handle.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementId(u64);

impl ElementId {
    /// Create a handle from a substrate-assigned raw id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The substrate-assigned raw id.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Kind of a scene element.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ElementKind {
    /// Container for one diagram node; holds that node's circle and label, and
    /// nested groups for child nodes.
    Group,
    /// The circle primitive of a non-root node.
    Circle,
    /// The text label of a node.
    Label,
}

/// One animatable attribute change, from the element's current value to the target.
///
/// A change is ephemeral: it describes a single transition and is not persisted.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Change {
    /// Move a group to a new position in its parent's coordinate frame.
    Translate(Point),
    /// Resize a circle to a new radius.
    Radius(f64),
    /// Move a label to a new vertical offset.
    TextOffset(f64),
}
