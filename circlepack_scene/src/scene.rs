// Copyright 2026 the Circlepack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability interface a rendering substrate implements.

use core::cell::RefCell;
use core::time::Duration;
use std::rc::Rc;

use kurbo::{Point, Vec2};

use crate::completion::Completion;
use crate::types::{Change, ElementId};

/// Click handler shared between the primitives of one node (circle and label
/// receive the same handler, so it is reference-counted).
pub type ClickHandler = Rc<RefCell<dyn FnMut()>>;

/// Drag handler; invoked once per pointer-move with the delta since the
/// previous event, never a cumulative total. Handlers run synchronously inside
/// the event-dispatch turn and must not block.
pub type DragHandler = Box<dyn FnMut(Vec2)>;

/// Primitive operations of a 2D scene-graph substrate.
///
/// The trait is deliberately small: create elements, mutate attributes either
/// immediately or as an animated transition, and bind pointer gestures. Element
/// positions are relative to the parent group's frame, so translating a group
/// carries every nested primitive with it.
///
/// Implementations mint [`ElementId`]s and own all element state. Callers keep
/// direct handles to the primitives they created; the trait offers no
/// descendant queries, which is what keeps one node's transitions and gesture
/// bindings off another node's primitives.
pub trait Scene {
    /// Create a group, optionally nested inside `parent`, carrying the node's
    /// fully-qualified `id` and a `class` describing its kind, positioned at
    /// `position` in the parent's frame.
    fn create_group(
        &mut self,
        parent: Option<ElementId>,
        id: &str,
        class: &str,
        position: Point,
    ) -> ElementId;

    /// Create a circle primitive inside `parent` with the given radius.
    fn create_circle(&mut self, parent: ElementId, radius: f64) -> ElementId;

    /// Create a text label inside `parent` at the given vertical offset.
    fn create_label(&mut self, parent: ElementId, text: &str, offset: f64) -> ElementId;

    /// Detach `element` and its whole subtree. Unknown handles are ignored; a
    /// parent group may already have detached the subtree.
    fn remove(&mut self, element: ElementId);

    /// Immediate, non-animated reposition.
    fn set_position(&mut self, element: ElementId, position: Point);

    /// Immediate visibility toggle. Hidden groups hide their subtree.
    fn set_visible(&mut self, element: ElementId, visible: bool);

    /// Start a linear transition of one attribute from its current value to
    /// the target over `duration`.
    ///
    /// The returned completion resolves exactly once, when the substrate's
    /// transition-end event fires. If `element` does not exist (or disappears
    /// mid-animation) the completion never resolves.
    fn animate(&mut self, element: ElementId, change: Change, duration: Duration) -> Completion;

    /// Bind `handler` to pointer clicks on `element`.
    fn bind_click(&mut self, element: ElementId, handler: ClickHandler);

    /// Bind `handler` to drag gestures on `element` and the primitives it
    /// contains, excluding nested groups that carry their own binding.
    fn bind_drag(&mut self, element: ElementId, handler: DragHandler);
}
