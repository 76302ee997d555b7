// Copyright 2026 the Circlepack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circlepack View: the visual lifecycle of one node in a circle-packing diagram.
//!
//! A circle-packing diagram renders a hierarchy (packages, classes, modules) as
//! nested circles. This crate manages a single node's visual representation on
//! top of a [`Scene`](circlepack_scene::Scene) substrate:
//!
//! - [`NodeView`]: owns the node's group container, its circle (non-root nodes
//!   only), and its label; exposes construct, show/hide, animated update,
//!   immediate reposition, and click/drag binding.
//! - [`TransitionCoordinator`]: fans an update out into independent translate,
//!   radius, and text-offset transitions and fans their completions back into
//!   one awaitable.
//! - [`NodeModel`]: the boundary trait a layout engine's node type implements
//!   (identity, category, root flag, geometry, text offset).
//! - [`ViewConfig`]: explicit transition-duration configuration injected into
//!   every view, zero for deterministic tests.
//!
//! ## Not a layout engine
//!
//! Geometry is computed upstream and pushed in: a layout step produces a
//! [`kurbo::Circle`] plus a text offset per node, calls [`NodeView::update`],
//! and awaits the returned completion before depending on the new rest state.
//! Starting a second `update` on the same node before the first completes
//! produces last-writer attribute races; callers serialize by awaiting.
//! Whether the resulting layout is geometrically valid is checked separately
//! by `circlepack_invariants`.

mod model;
mod transition;
mod view;

pub use model::NodeModel;
pub use transition::TransitionCoordinator;
pub use view::{NodeView, ViewConfig};
