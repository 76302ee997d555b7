// Copyright 2026 the Circlepack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circlepack Scene: the rendering-substrate boundary for circle-packing diagram views.
//!
//! This crate defines the small capability surface a rendering substrate (an SVG
//! adapter, a canvas engine, a test harness) implements so that diagram views can
//! stay substrate-agnostic:
//!
//! - [`Scene`]: create/remove group, circle, and label primitives, set attributes
//!   immediately, start animated attribute transitions, and bind pointer gestures.
//! - [`ElementId`]: opaque handle for one scene element. Views hold direct handles
//!   to the primitives they own and never query descendants, so a transition or a
//!   gesture binding can never leak onto a nested node's primitives.
//! - [`Completion`]: a single-fire awaitable for "this visual operation finished",
//!   with [`Completion::join`] as the fan-in over several concurrent transitions.
//! - [`DragState`]: pointer-press state machine turning absolute pointer positions
//!   into per-event drag deltas.
//! - [`MemoryScene`]: an in-memory [`Scene`] used by tests and headless consumers,
//!   with immediate or manually settled transitions and pointer simulation.
//!
//! ## Concurrency model
//!
//! Everything here runs on one thread. "Concurrent" transitions are overlapping
//! animations: a substrate starts several, each resolves its own [`Completion`],
//! and callers await the join. There is no cancellation; a transition whose
//! element disappears simply never reports completion (its signal is dropped and
//! the future stays pending), mirroring a removed element mid-animation.

mod completion;
mod drag;
mod memory;
mod scene;
mod types;

pub use completion::{Completion, CompletionSignal};
pub use drag::DragState;
pub use memory::MemoryScene;
pub use scene::{ClickHandler, DragHandler, Scene};
pub use types::{Change, ElementId, ElementKind};
