// Copyright 2026 the Circlepack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fan-out/fan-in coordination of one node's animated transitions.

use core::cell::RefCell;
use core::time::Duration;
use std::rc::Rc;

use kurbo::Circle;

use circlepack_scene::{Change, Completion, ElementId, Scene};

/// Drives the animated attribute changes of one node's primitives and exposes
/// their joint completion as a single awaitable.
///
/// The coordinator holds direct handles to the node's own group, circle, and
/// label, so a transition can never touch a nested child node's primitives.
/// Roots have no circle handle; their radius leg resolves immediately without
/// a substrate call.
pub struct TransitionCoordinator<S> {
    scene: Rc<RefCell<S>>,
    group: ElementId,
    circle: Option<ElementId>,
    label: ElementId,
    duration: Duration,
}

impl<S> core::fmt::Debug for TransitionCoordinator<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TransitionCoordinator")
            .field("group", &self.group)
            .field("circle", &self.circle)
            .field("label", &self.label)
            .field("duration", &self.duration)
            .finish_non_exhaustive()
    }
}

impl<S: Scene> TransitionCoordinator<S> {
    /// Create a coordinator over one node's primitives.
    ///
    /// `circle` is `None` for roots.
    pub fn new(
        scene: Rc<RefCell<S>>,
        group: ElementId,
        circle: Option<ElementId>,
        label: ElementId,
        duration: Duration,
    ) -> Self {
        Self {
            scene,
            group,
            circle,
            label,
            duration,
        }
    }

    /// Start one animated change, or resolve immediately when the target
    /// element is absent.
    pub fn run_transition(&self, target: Option<ElementId>, change: Change) -> Completion {
        match target {
            None => Completion::ready(),
            Some(element) => self.scene.borrow_mut().animate(element, change, self.duration),
        }
    }

    /// Animate the node to a new rest geometry.
    ///
    /// Starts three independent transitions in the same turn — translate the
    /// group to `geometry.center`, resize the circle to `geometry.radius`
    /// (trivially resolved for roots), reposition the label to `text_offset` —
    /// and returns a completion that resolves only after all three finish.
    /// None of the legs is sequenced after another.
    pub fn update(&self, geometry: Circle, text_offset: f64) -> Completion {
        let translate = self.run_transition(Some(self.group), Change::Translate(geometry.center));
        let radius = self.run_transition(self.circle, Change::Radius(geometry.radius));
        let text = self.run_transition(Some(self.label), Change::TextOffset(text_offset));
        Completion::join([translate, radius, text])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circlepack_scene::MemoryScene;
    use core::pin::Pin;
    use core::task::{Context, Poll};
    use futures::task::noop_waker;
    use kurbo::Point;

    fn poll_once(completion: &mut Completion) -> Poll<()> {
        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);
        Pin::new(completion).poll(&mut cx)
    }

    fn coordinator(
        scene: Rc<RefCell<MemoryScene>>,
        root: bool,
    ) -> TransitionCoordinator<MemoryScene> {
        let (group, circle, label) = {
            let mut s = scene.borrow_mut();
            let group = s.create_group(None, "com.example", "package", Point::ZERO);
            let circle = (!root).then(|| s.create_circle(group, 5.0));
            let label = s.create_label(group, "example", 2.0);
            (group, circle, label)
        };
        TransitionCoordinator::new(scene, group, circle, label, Duration::from_millis(100))
    }

    #[test]
    fn update_resolves_only_after_every_leg() {
        let scene = Rc::new(RefCell::new(MemoryScene::with_manual_settling()));
        let c = coordinator(scene.clone(), false);

        let mut done = c.update(Circle::new(Point::new(10.0, 20.0), 8.0), 3.0);
        assert_eq!(scene.borrow().pending_transitions(), 3);

        assert!(poll_once(&mut done).is_pending());
        scene.borrow_mut().settle_next();
        assert!(poll_once(&mut done).is_pending());
        scene.borrow_mut().settle_next();
        assert!(poll_once(&mut done).is_pending());
        scene.borrow_mut().settle_next();
        assert!(poll_once(&mut done).is_ready());
    }

    #[test]
    fn root_update_skips_the_radius_leg() {
        let scene = Rc::new(RefCell::new(MemoryScene::with_manual_settling()));
        let c = coordinator(scene.clone(), true);

        let mut done = c.update(Circle::new(Point::new(1.0, 1.0), 50.0), 6.0);
        // Only translate and text offset hit the substrate.
        assert_eq!(scene.borrow().pending_transitions(), 2);

        scene.borrow_mut().settle_all();
        assert!(poll_once(&mut done).is_ready());
    }

    #[test]
    fn run_transition_with_no_target_is_ready() {
        let scene = Rc::new(RefCell::new(MemoryScene::with_manual_settling()));
        let c = coordinator(scene.clone(), true);

        let mut done = c.run_transition(None, Change::Radius(9.0));
        assert!(poll_once(&mut done).is_ready());
        assert_eq!(scene.borrow().pending_transitions(), 0);
    }

    #[test]
    fn update_applies_target_values() {
        let scene = Rc::new(RefCell::new(MemoryScene::new()));
        let c = coordinator(scene.clone(), false);
        let group = c.group;
        let circle = c.circle.unwrap();
        let label = c.label;

        futures::executor::block_on(c.update(Circle::new(Point::new(30.0, 40.0), 12.0), 5.0));

        let s = scene.borrow();
        assert_eq!(s.position_of(group), Some(Point::new(30.0, 40.0)));
        assert_eq!(s.radius_of(circle), Some(12.0));
        assert_eq!(s.text_offset_of(label), Some(5.0));
    }
}
