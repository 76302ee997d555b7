// Copyright 2026 the Circlepack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The visual representation of one tree node.

use core::cell::{Cell, RefCell};
use core::time::Duration;
use std::rc::Rc;

use kurbo::{Circle, Point, Vec2};

use circlepack_scene::{ClickHandler, Completion, ElementId, Scene};

use crate::model::NodeModel;
use crate::transition::TransitionCoordinator;

/// Configuration injected into every view.
///
/// Modeling the transition duration as an explicit value (instead of ambient
/// state) is what makes zero-duration deterministic tests possible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewConfig {
    /// Duration of each animated attribute transition.
    pub transition_duration: Duration,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            transition_duration: Duration::from_millis(250),
        }
    }
}

impl ViewConfig {
    /// Configuration with zero-duration transitions, for deterministic tests
    /// and headless runs.
    pub fn instant() -> Self {
        Self {
            transition_duration: Duration::ZERO,
        }
    }
}

/// The visual representation of one node: a group container holding exactly
/// one label, and exactly one circle unless the node is the root.
///
/// The view exclusively owns its scene elements: they are created at
/// construction as a child of the parent node's group and detached when the
/// view is dropped (the node left the tree). Between those points the layout
/// driver pushes geometry in via [`NodeView::update`] (animated) or
/// [`NodeView::update_position`] (immediate, for dragging).
///
/// Starting a new `update` before the previous completion resolved races the
/// two target values per attribute; callers serialize by awaiting.
pub struct NodeView<S: Scene> {
    scene: Rc<RefCell<S>>,
    group: ElementId,
    circle: Option<ElementId>,
    label: ElementId,
    coordinator: TransitionCoordinator<S>,
    geometry: Cell<Circle>,
    text_offset: Cell<f64>,
}

impl<S: Scene> core::fmt::Debug for NodeView<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeView")
            .field("group", &self.group)
            .field("circle", &self.circle)
            .field("label", &self.label)
            .field("geometry", &self.geometry.get())
            .field("text_offset", &self.text_offset.get())
            .finish_non_exhaustive()
    }
}

impl<S: Scene> NodeView<S> {
    /// Create the node's visual elements inside `parent` (the parent node's
    /// group; `None` for the tree root's view).
    ///
    /// The group carries the node's full name and category and sits at the
    /// node's initial geometry. Non-root nodes get a circle sized to the
    /// initial radius; every node gets a label with its short name at the
    /// node's text offset.
    pub fn new(
        scene: Rc<RefCell<S>>,
        parent: Option<ElementId>,
        node: &impl NodeModel,
        config: &ViewConfig,
    ) -> Self {
        let geometry = node.geometry();
        let (group, circle, label) = {
            let mut s = scene.borrow_mut();
            let group = s.create_group(parent, node.full_name(), node.category(), geometry.center);
            let circle = (!node.is_root()).then(|| s.create_circle(group, geometry.radius));
            let label = s.create_label(group, node.name(), node.text_offset());
            (group, circle, label)
        };
        let coordinator = TransitionCoordinator::new(
            scene.clone(),
            group,
            circle,
            label,
            config.transition_duration,
        );
        Self {
            scene,
            group,
            circle,
            label,
            coordinator,
            geometry: Cell::new(geometry),
            text_offset: Cell::new(node.text_offset()),
        }
    }

    /// Handle of the group container; child node views nest under it.
    pub fn group(&self) -> ElementId {
        self.group
    }

    /// Handle of the circle primitive; `None` for roots.
    pub fn circle(&self) -> Option<ElementId> {
        self.circle
    }

    /// Handle of the label primitive.
    pub fn label(&self) -> ElementId {
        self.label
    }

    /// Whether this view represents the tree root.
    pub fn is_root(&self) -> bool {
        self.circle.is_none()
    }

    /// Last geometry pushed by the layout driver.
    pub fn geometry(&self) -> Circle {
        self.geometry.get()
    }

    /// Last text offset pushed by the layout driver.
    pub fn text_offset(&self) -> f64 {
        self.text_offset.get()
    }

    /// Make the node invisible. Synchronous; no completion to await.
    pub fn hide(&self) {
        self.scene.borrow_mut().set_visible(self.group, false);
    }

    /// Make the node visible again.
    ///
    /// Synchronous; the returned completion is already resolved and exists
    /// for call-site symmetry with [`NodeView::update`].
    pub fn show(&self) -> Completion {
        self.scene.borrow_mut().set_visible(self.group, true);
        Completion::ready()
    }

    /// Animate the node to a new rest geometry and text offset.
    ///
    /// Await the returned completion before relying on the node being
    /// visually settled (e.g. before a dependent animation or an invariant
    /// check on the final state).
    pub fn update(&self, geometry: Circle, text_offset: f64) -> Completion {
        self.geometry.set(geometry);
        self.text_offset.set(text_offset);
        self.coordinator.update(geometry, text_offset)
    }

    /// Immediate, non-animated reposition of the group only; circle and label
    /// keep their attributes. This is the lightweight path for interactive
    /// dragging, where continuous animation would fight the pointer.
    pub fn update_position(&self, position: Point) {
        let current = self.geometry.get();
        self.geometry.set(Circle::new(position, current.radius));
        self.scene.borrow_mut().set_position(self.group, position);
    }

    /// Bind `handler` to clicks on this node's own circle and label.
    ///
    /// Nested descendant nodes are unaffected: the binding goes to the owned
    /// handles, never to a descendant query.
    pub fn on_click(&self, handler: impl FnMut() + 'static) {
        let handler: ClickHandler = Rc::new(RefCell::new(handler));
        let mut s = self.scene.borrow_mut();
        if let Some(circle) = self.circle {
            s.bind_click(circle, handler.clone());
        }
        s.bind_click(self.label, handler);
    }

    /// Bind a drag gesture to the node's group.
    ///
    /// `handler` receives the delta since the previous drag event, never a
    /// cumulative total; accumulating into layout state and calling
    /// [`NodeView::update_position`] is the caller's job.
    pub fn on_drag(&self, handler: impl FnMut(Vec2) + 'static) {
        self.scene
            .borrow_mut()
            .bind_drag(self.group, Box::new(handler));
    }
}

impl<S: Scene> Drop for NodeView<S> {
    fn drop(&mut self) {
        // The node left the tree: detach its element and children.
        self.scene.borrow_mut().remove(self.group);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circlepack_scene::{ElementKind, MemoryScene};
    use core::pin::Pin;
    use core::task::{Context, Poll};
    use futures::executor::block_on;
    use futures::task::noop_waker;

    struct TestNode {
        full_name: &'static str,
        name: &'static str,
        category: &'static str,
        root: bool,
        geometry: Circle,
        text_offset: f64,
    }

    impl NodeModel for TestNode {
        fn full_name(&self) -> &str {
            self.full_name
        }

        fn name(&self) -> &str {
            self.name
        }

        fn category(&self) -> &str {
            self.category
        }

        fn is_root(&self) -> bool {
            self.root
        }

        fn geometry(&self) -> Circle {
            self.geometry
        }

        fn text_offset(&self) -> f64 {
            self.text_offset
        }
    }

    fn root_node() -> TestNode {
        TestNode {
            full_name: "com.example",
            name: "example",
            category: "package",
            root: true,
            geometry: Circle::new(Point::new(0.0, 0.0), 100.0),
            text_offset: -90.0,
        }
    }

    fn class_node() -> TestNode {
        TestNode {
            full_name: "com.example.Widget",
            name: "Widget",
            category: "class",
            root: false,
            geometry: Circle::new(Point::new(20.0, 30.0), 15.0),
            text_offset: 4.0,
        }
    }

    fn poll_once(completion: &mut Completion) -> Poll<()> {
        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);
        Pin::new(completion).poll(&mut cx)
    }

    #[test]
    fn construction_creates_group_circle_and_label() {
        let scene = Rc::new(RefCell::new(MemoryScene::new()));
        let config = ViewConfig::instant();
        let root = NodeView::new(scene.clone(), None, &root_node(), &config);
        let child = NodeView::new(scene.clone(), Some(root.group()), &class_node(), &config);

        let s = scene.borrow();
        assert_eq!(s.id_of(child.group()), Some("com.example.Widget"));
        assert_eq!(s.class_of(child.group()), Some("class"));
        assert_eq!(s.parent_of(child.group()), Some(root.group()));
        assert_eq!(s.position_of(child.group()), Some(Point::new(20.0, 30.0)));
        assert_eq!(s.radius_of(child.circle().unwrap()), Some(15.0));
        assert_eq!(s.text_of(child.label()), Some("Widget"));
        assert_eq!(s.text_offset_of(child.label()), Some(4.0));
        assert_eq!(s.kind_of(child.label()), Some(ElementKind::Label));
    }

    #[test]
    fn roots_have_no_circle_rim() {
        let scene = Rc::new(RefCell::new(MemoryScene::new()));
        let root = NodeView::new(scene.clone(), None, &root_node(), &ViewConfig::instant());

        assert!(root.is_root());
        assert!(root.circle().is_none());
        // The group holds exactly the label.
        assert_eq!(scene.borrow().children_of(root.group()), vec![root.label()]);
    }

    #[test]
    fn hide_then_show_restores_visibility_without_touching_geometry() {
        let scene = Rc::new(RefCell::new(MemoryScene::new()));
        let view = NodeView::new(scene.clone(), None, &class_node(), &ViewConfig::instant());

        view.hide();
        assert!(!scene.borrow().is_visible(view.group()));
        assert!(!scene.borrow().is_visible(view.label()));

        block_on(view.show());
        assert!(scene.borrow().is_visible(view.group()));
        assert_eq!(
            scene.borrow().position_of(view.group()),
            Some(Point::new(20.0, 30.0))
        );
        assert_eq!(view.geometry(), Circle::new(Point::new(20.0, 30.0), 15.0));
    }

    #[test]
    fn update_animates_all_three_attributes() {
        let scene = Rc::new(RefCell::new(MemoryScene::new()));
        let view = NodeView::new(scene.clone(), None, &class_node(), &ViewConfig::instant());

        let target = Circle::new(Point::new(42.0, -7.0), 9.0);
        block_on(view.update(target, 2.5));

        let s = scene.borrow();
        assert_eq!(s.position_of(view.group()), Some(Point::new(42.0, -7.0)));
        assert_eq!(s.radius_of(view.circle().unwrap()), Some(9.0));
        assert_eq!(s.text_offset_of(view.label()), Some(2.5));
        assert_eq!(view.geometry(), target);
        assert_eq!(view.text_offset(), 2.5);
    }

    #[test]
    fn root_update_resolves_radius_leg_without_animating() {
        let scene = Rc::new(RefCell::new(MemoryScene::with_manual_settling()));
        let view = NodeView::new(scene.clone(), None, &root_node(), &ViewConfig::instant());

        let mut done = view.update(Circle::new(Point::new(5.0, 5.0), 120.0), -100.0);
        // Translate and text offset are in flight; no radius transition exists.
        assert_eq!(scene.borrow().pending_transitions(), 2);
        assert!(poll_once(&mut done).is_pending());

        scene.borrow_mut().settle_all();
        assert!(poll_once(&mut done).is_ready());
    }

    #[test]
    fn update_position_moves_only_the_group() {
        let scene = Rc::new(RefCell::new(MemoryScene::new()));
        let view = NodeView::new(scene.clone(), None, &class_node(), &ViewConfig::instant());

        view.update_position(Point::new(100.0, 200.0));

        let s = scene.borrow();
        assert_eq!(s.position_of(view.group()), Some(Point::new(100.0, 200.0)));
        assert_eq!(s.radius_of(view.circle().unwrap()), Some(15.0));
        assert_eq!(s.text_offset_of(view.label()), Some(4.0));
        assert_eq!(view.geometry().radius, 15.0);
    }

    #[test]
    fn click_binds_to_circle_and_label_only() {
        let scene = Rc::new(RefCell::new(MemoryScene::new()));
        let config = ViewConfig::instant();
        let parent = NodeView::new(scene.clone(), None, &class_node(), &config);
        let nested = TestNode {
            full_name: "com.example.Widget.Inner",
            name: "Inner",
            category: "class",
            root: false,
            geometry: Circle::new(Point::new(2.0, 2.0), 5.0),
            text_offset: 1.0,
        };
        let child = NodeView::new(scene.clone(), Some(parent.group()), &nested, &config);

        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        parent.on_click(move || counter.set(counter.get() + 1));

        // Both of the parent's own primitives respond.
        scene.borrow_mut().pointer_down(parent.circle().unwrap(), Point::ZERO);
        scene.borrow_mut().pointer_up();
        scene.borrow_mut().pointer_down(parent.label(), Point::ZERO);
        scene.borrow_mut().pointer_up();
        assert_eq!(clicks.get(), 2);

        // The nested node's primitives do not.
        scene.borrow_mut().pointer_down(child.circle().unwrap(), Point::ZERO);
        scene.borrow_mut().pointer_up();
        assert_eq!(clicks.get(), 2);
    }

    #[test]
    fn drag_handler_receives_per_event_deltas() {
        let scene = Rc::new(RefCell::new(MemoryScene::new()));
        let view = NodeView::new(scene.clone(), None, &class_node(), &ViewConfig::instant());

        let deltas = Rc::new(RefCell::new(Vec::new()));
        let sink = deltas.clone();
        view.on_drag(move |delta| sink.borrow_mut().push(delta));

        let circle = view.circle().unwrap();
        scene.borrow_mut().pointer_down(circle, Point::new(0.0, 0.0));
        scene.borrow_mut().pointer_move(Point::new(2.0, 3.0));
        scene.borrow_mut().pointer_move(Point::new(1.0, 7.0));
        scene.borrow_mut().pointer_move(Point::new(1.0, 8.0));
        scene.borrow_mut().pointer_up();

        assert_eq!(
            *deltas.borrow(),
            vec![Vec2::new(2.0, 3.0), Vec2::new(-1.0, 4.0), Vec2::new(0.0, 1.0)]
        );
    }

    #[test]
    fn invariants_hold_at_rest_after_update() {
        use circlepack_invariants::{located_within_with_padding, not_overlap_with};

        let scene = Rc::new(RefCell::new(MemoryScene::new()));
        let config = ViewConfig::instant();
        let root = NodeView::new(scene.clone(), None, &root_node(), &config);
        let first = NodeView::new(scene.clone(), Some(root.group()), &class_node(), &config);
        let second = NodeView::new(scene.clone(), Some(root.group()), &class_node(), &config);

        // A layout step pushes new rest geometry; await both before checking.
        block_on(first.update(Circle::new(Point::new(-40.0, 0.0), 25.0), 4.0));
        block_on(second.update(Circle::new(Point::new(40.0, 0.0), 25.0), 4.0));

        assert!(located_within_with_padding(
            first.geometry(),
            root.geometry(),
            10.0
        ));
        assert!(located_within_with_padding(
            second.geometry(),
            root.geometry(),
            10.0
        ));
        assert!(not_overlap_with(first.geometry(), second.geometry(), 5.0));
    }

    #[test]
    fn dropping_the_view_detaches_its_subtree() {
        let scene = Rc::new(RefCell::new(MemoryScene::new()));
        let config = ViewConfig::instant();
        let root = NodeView::new(scene.clone(), None, &root_node(), &config);
        let child = NodeView::new(scene.clone(), Some(root.group()), &class_node(), &config);
        let child_group = child.group();
        let child_circle = child.circle().unwrap();

        drop(child);
        assert!(!scene.borrow().contains(child_group));
        assert!(!scene.borrow().contains(child_circle));
        assert!(scene.borrow().contains(root.group()));

        // Dropping a parent first leaves the child's own drop a no-op.
        let parent = NodeView::new(scene.clone(), None, &root_node(), &config);
        let grandchild = NodeView::new(scene.clone(), Some(parent.group()), &class_node(), &config);
        drop(parent);
        drop(grandchild);
    }
}
