// Copyright 2026 the Circlepack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-press state machine producing incremental drag deltas.
//!
//! A substrate feeds absolute pointer positions into [`DragState`]; each
//! [`DragState::step`] yields the delta since the previous event. Deltas are
//! never accumulated here: translating them into new layout state is the drag
//! handler's job. The state also records whether any movement happened during
//! the press, so a substrate can suppress the click that would otherwise fire
//! on release.

use kurbo::{Point, Vec2};

/// Tracks one pointer press and converts positions into per-event deltas.
#[derive(Clone, Debug, Default)]
pub struct DragState {
    last: Option<Point>,
    moved: bool,
}

impl DragState {
    /// Create an idle state with no active press.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a press at `position`. Resets movement tracking.
    pub fn begin(&mut self, position: Point) {
        self.last = Some(position);
        self.moved = false;
    }

    /// Record a pointer move and return the delta since the previous event.
    ///
    /// Returns `None` when no press is active. A zero delta is reported but
    /// does not count as movement.
    pub fn step(&mut self, position: Point) -> Option<Vec2> {
        let previous = self.last.replace(position)?;
        let delta = position - previous;
        if delta != Vec2::ZERO {
            self.moved = true;
        }
        Some(delta)
    }

    /// End the press. Returns whether any movement occurred while it was held.
    pub fn end(&mut self) -> bool {
        self.last = None;
        core::mem::take(&mut self.moved)
    }

    /// Whether a press is currently being tracked.
    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }
}
