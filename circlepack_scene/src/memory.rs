// Copyright 2026 the Circlepack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory [`Scene`] implementation for tests and headless validation.
//!
//! [`MemoryScene`] keeps element state in plain maps and supports two
//! transition modes:
//!
//! - immediate ([`MemoryScene::new`]): `animate` applies the target value and
//!   returns an already-resolved completion — the zero-duration semantics used
//!   by deterministic view tests;
//! - manual ([`MemoryScene::with_manual_settling`]): transitions queue up and
//!   [`MemoryScene::settle_next`]/[`MemoryScene::settle_all`] apply values and
//!   fire completion signals, which lets a test observe that a joined
//!   completion resolves only after every sub-transition.
//!
//! Pointer input is simulated with [`MemoryScene::pointer_down`],
//! [`MemoryScene::pointer_move`], and [`MemoryScene::pointer_up`]. Moves drive
//! the drag binding of the nearest bound ancestor with per-event deltas; a
//! release without intervening movement fires the click binding of the pressed
//! element.

use core::time::Duration;
use std::collections::VecDeque;

use hashbrown::HashMap;
use kurbo::Point;
use smallvec::SmallVec;

use crate::completion::{Completion, CompletionSignal};
use crate::drag::DragState;
use crate::scene::{ClickHandler, DragHandler, Scene};
use crate::types::{Change, ElementId, ElementKind};

#[derive(Debug)]
struct Element {
    kind: ElementKind,
    parent: Option<ElementId>,
    children: SmallVec<[ElementId; 4]>,
    id_attr: String,
    class: String,
    text: String,
    position: Point,
    radius: f64,
    text_offset: f64,
    visible: bool,
}

impl Element {
    fn new(kind: ElementKind, parent: Option<ElementId>) -> Self {
        Self {
            kind,
            parent,
            children: SmallVec::new(),
            id_attr: String::new(),
            class: String::new(),
            text: String::new(),
            position: Point::ZERO,
            radius: 0.0,
            text_offset: 0.0,
            visible: true,
        }
    }
}

struct PendingTransition {
    element: ElementId,
    change: Change,
    signal: CompletionSignal,
}

/// In-memory scene graph implementing [`Scene`].
pub struct MemoryScene {
    elements: HashMap<ElementId, Element>,
    next_id: u64,
    settle_immediately: bool,
    pending: VecDeque<PendingTransition>,
    click_handlers: HashMap<ElementId, ClickHandler>,
    drag_handlers: HashMap<ElementId, DragHandler>,
    drag: DragState,
    active_press: Option<ElementId>,
}

impl core::fmt::Debug for MemoryScene {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MemoryScene")
            .field("elements", &self.elements.len())
            .field("settle_immediately", &self.settle_immediately)
            .field("pending", &self.pending.len())
            .field("active_press", &self.active_press)
            .finish_non_exhaustive()
    }
}

impl Default for MemoryScene {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryScene {
    /// Create a scene where every transition settles immediately.
    pub fn new() -> Self {
        Self {
            elements: HashMap::new(),
            next_id: 1,
            settle_immediately: true,
            pending: VecDeque::new(),
            click_handlers: HashMap::new(),
            drag_handlers: HashMap::new(),
            drag: DragState::new(),
            active_press: None,
        }
    }

    /// Create a scene where transitions queue until explicitly settled.
    pub fn with_manual_settling() -> Self {
        Self {
            settle_immediately: false,
            ..Self::new()
        }
    }

    /// Number of transitions started but not yet settled.
    pub fn pending_transitions(&self) -> usize {
        self.pending.len()
    }

    /// Settle the oldest queued transition: apply its target value and fire
    /// its completion signal. Returns `false` when the queue is empty.
    ///
    /// A transition whose element has been removed in the meantime is dropped
    /// without firing, so its completion never resolves.
    pub fn settle_next(&mut self) -> bool {
        let Some(pending) = self.pending.pop_front() else {
            return false;
        };
        if self.apply(pending.element, pending.change) {
            pending.signal.finish();
        }
        true
    }

    /// Settle every queued transition in start order.
    pub fn settle_all(&mut self) {
        while self.settle_next() {}
    }

    /// Simulate a pointer press on `element` at `position`.
    pub fn pointer_down(&mut self, element: ElementId, position: Point) {
        self.active_press = Some(element);
        self.drag.begin(position);
    }

    /// Simulate a pointer move.
    ///
    /// During a press, the delta since the previous event is delivered to the
    /// drag binding of the pressed element or its nearest bound ancestor.
    pub fn pointer_move(&mut self, position: Point) {
        let Some(delta) = self.drag.step(position) else {
            return;
        };
        let Some(pressed) = self.active_press else {
            return;
        };
        if let Some(bound) = self.nearest_drag_target(pressed)
            && let Some(handler) = self.drag_handlers.get_mut(&bound)
        {
            handler(delta);
        }
    }

    /// Simulate releasing the pointer.
    ///
    /// Fires the click binding of the pressed element unless movement occurred
    /// while the press was held.
    pub fn pointer_up(&mut self) {
        let moved = self.drag.end();
        let Some(pressed) = self.active_press.take() else {
            return;
        };
        if moved {
            return;
        }
        // Clone the handle first so the handler runs without aliasing the map.
        if let Some(handler) = self.click_handlers.get(&pressed).cloned() {
            (handler.borrow_mut())();
        }
    }

    /// Whether the scene contains `element`.
    pub fn contains(&self, element: ElementId) -> bool {
        self.elements.contains_key(&element)
    }

    /// Total number of live elements.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Kind of `element`, if it exists.
    pub fn kind_of(&self, element: ElementId) -> Option<ElementKind> {
        self.elements.get(&element).map(|e| e.kind)
    }

    /// Parent of `element`, if it exists and has one.
    pub fn parent_of(&self, element: ElementId) -> Option<ElementId> {
        self.elements.get(&element).and_then(|e| e.parent)
    }

    /// Immediate children of `element`, in creation order.
    pub fn children_of(&self, element: ElementId) -> Vec<ElementId> {
        self.elements
            .get(&element)
            .map(|e| e.children.to_vec())
            .unwrap_or_default()
    }

    /// Current position of `element` in its parent's frame.
    pub fn position_of(&self, element: ElementId) -> Option<Point> {
        self.elements.get(&element).map(|e| e.position)
    }

    /// Current radius of a circle element.
    pub fn radius_of(&self, element: ElementId) -> Option<f64> {
        self.elements.get(&element).map(|e| e.radius)
    }

    /// Current vertical offset of a label element.
    pub fn text_offset_of(&self, element: ElementId) -> Option<f64> {
        self.elements.get(&element).map(|e| e.text_offset)
    }

    /// Text content of a label element.
    pub fn text_of(&self, element: ElementId) -> Option<&str> {
        self.elements.get(&element).map(|e| e.text.as_str())
    }

    /// Id attribute of a group element.
    pub fn id_of(&self, element: ElementId) -> Option<&str> {
        self.elements.get(&element).map(|e| e.id_attr.as_str())
    }

    /// Class attribute of a group element.
    pub fn class_of(&self, element: ElementId) -> Option<&str> {
        self.elements.get(&element).map(|e| e.class.as_str())
    }

    /// Effective visibility: the element and every ancestor must be visible.
    pub fn is_visible(&self, element: ElementId) -> bool {
        let mut current = Some(element);
        while let Some(id) = current {
            let Some(e) = self.elements.get(&id) else {
                return false;
            };
            if !e.visible {
                return false;
            }
            current = e.parent;
        }
        true
    }

    fn mint(&mut self, kind: ElementKind, parent: Option<ElementId>) -> ElementId {
        let id = ElementId::new(self.next_id);
        self.next_id += 1;
        let parent = parent.filter(|p| self.elements.contains_key(p));
        self.elements.insert(id, Element::new(kind, parent));
        if let Some(parent) = parent
            && let Some(parent_element) = self.elements.get_mut(&parent)
        {
            parent_element.children.push(id);
        }
        id
    }

    fn apply(&mut self, element: ElementId, change: Change) -> bool {
        let Some(e) = self.elements.get_mut(&element) else {
            return false;
        };
        match change {
            Change::Translate(position) => e.position = position,
            Change::Radius(radius) => e.radius = radius,
            Change::TextOffset(offset) => e.text_offset = offset,
        }
        true
    }

    fn nearest_drag_target(&self, element: ElementId) -> Option<ElementId> {
        let mut current = Some(element);
        while let Some(id) = current {
            if self.drag_handlers.contains_key(&id) {
                return Some(id);
            }
            current = self.elements.get(&id)?.parent;
        }
        None
    }
}

impl Scene for MemoryScene {
    fn create_group(
        &mut self,
        parent: Option<ElementId>,
        id: &str,
        class: &str,
        position: Point,
    ) -> ElementId {
        let element = self.mint(ElementKind::Group, parent);
        if let Some(e) = self.elements.get_mut(&element) {
            e.id_attr = id.to_owned();
            e.class = class.to_owned();
            e.position = position;
        }
        element
    }

    fn create_circle(&mut self, parent: ElementId, radius: f64) -> ElementId {
        let element = self.mint(ElementKind::Circle, Some(parent));
        if let Some(e) = self.elements.get_mut(&element) {
            e.radius = radius;
        }
        element
    }

    fn create_label(&mut self, parent: ElementId, text: &str, offset: f64) -> ElementId {
        let element = self.mint(ElementKind::Label, Some(parent));
        if let Some(e) = self.elements.get_mut(&element) {
            e.text = text.to_owned();
            e.text_offset = offset;
        }
        element
    }

    fn remove(&mut self, element: ElementId) {
        if !self.elements.contains_key(&element) {
            return;
        }
        // Unlink from the parent, then drop the whole subtree.
        if let Some(parent) = self.parent_of(element)
            && let Some(parent_element) = self.elements.get_mut(&parent)
        {
            parent_element.children.retain(|child| *child != element);
        }
        let mut stack = vec![element];
        while let Some(id) = stack.pop() {
            if let Some(e) = self.elements.remove(&id) {
                stack.extend(e.children);
            }
            self.click_handlers.remove(&id);
            self.drag_handlers.remove(&id);
            if self.active_press == Some(id) {
                self.active_press = None;
            }
        }
    }

    fn set_position(&mut self, element: ElementId, position: Point) {
        self.apply(element, Change::Translate(position));
    }

    fn set_visible(&mut self, element: ElementId, visible: bool) {
        if let Some(e) = self.elements.get_mut(&element) {
            e.visible = visible;
        }
    }

    fn animate(&mut self, element: ElementId, change: Change, _duration: Duration) -> Completion {
        let (signal, completion) = Completion::new();
        if !self.elements.contains_key(&element) {
            // No element, no transition-end event: the completion stays
            // pending forever.
            drop(signal);
            return completion;
        }
        if self.settle_immediately {
            self.apply(element, change);
            signal.finish();
        } else {
            self.pending.push_back(PendingTransition {
                element,
                change,
                signal,
            });
        }
        completion
    }

    fn bind_click(&mut self, element: ElementId, handler: ClickHandler) {
        if self.elements.contains_key(&element) {
            self.click_handlers.insert(element, handler);
        }
    }

    fn bind_drag(&mut self, element: ElementId, handler: DragHandler) {
        if self.elements.contains_key(&element) {
            self.drag_handlers.insert(element, handler);
        }
    }
}
