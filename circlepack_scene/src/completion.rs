// Copyright 2026 the Circlepack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-fire completion futures for animated transitions.
//!
//! A substrate resolves one [`Completion`] per transition by firing the paired
//! [`CompletionSignal`] when the transition-end event arrives. Waiting for a
//! whole node to reach its new rest geometry is a fan-in: start every
//! sub-transition in the same turn and await [`Completion::join`] over them.
//!
//! There is no cancellation and no internal timeout. A signal dropped without
//! [`CompletionSignal::finish`] (for example because the element was removed
//! mid-animation) leaves its completion pending forever; bounding that wait is
//! the caller's policy.
//!
//! ```
//! use circlepack_scene::Completion;
//!
//! let (signal, pending) = Completion::new();
//! let joined = Completion::join([Completion::ready(), pending]);
//! signal.finish();
//! futures::executor::block_on(joined);
//! ```

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures::channel::oneshot;

/// Awaitable handle for "this asynchronous visual operation has finished".
///
/// Resolves exactly once; polling after resolution keeps returning ready.
#[derive(Debug)]
pub struct Completion {
    state: State,
}

#[derive(Debug)]
enum State {
    Ready,
    Waiting(oneshot::Receiver<()>),
    /// The signal was dropped without firing; this completion never resolves.
    Stalled,
    Join(Vec<Completion>),
}

/// Resolves the paired [`Completion`] exactly once.
#[derive(Debug)]
pub struct CompletionSignal {
    tx: oneshot::Sender<()>,
}

impl CompletionSignal {
    /// Mark the operation as finished, resolving the paired future.
    pub fn finish(self) {
        // The receiver may already be gone; then nobody is waiting.
        let _ = self.tx.send(());
    }
}

impl Completion {
    /// An already-resolved completion, for operations that finish synchronously
    /// or target an absent element.
    pub fn ready() -> Self {
        Self {
            state: State::Ready,
        }
    }

    /// A completion resolved by firing the returned signal.
    pub fn new() -> (CompletionSignal, Self) {
        let (tx, rx) = oneshot::channel();
        (
            CompletionSignal { tx },
            Self {
                state: State::Waiting(rx),
            },
        )
    }

    /// Wait for every completion in `parts`.
    ///
    /// Resolves only after the last part has resolved; the parts race freely
    /// and no ordering between them is implied. An empty set is already ready.
    pub fn join(parts: impl IntoIterator<Item = Self>) -> Self {
        let pending: Vec<Self> = parts
            .into_iter()
            .filter(|part| !matches!(part.state, State::Ready))
            .collect();
        if pending.is_empty() {
            Self::ready()
        } else {
            Self {
                state: State::Join(pending),
            }
        }
    }

    fn poll_inner(&mut self, cx: &mut Context<'_>) -> Poll<()> {
        match &mut self.state {
            State::Ready => Poll::Ready(()),
            State::Stalled => Poll::Pending,
            State::Waiting(rx) => match Pin::new(rx).poll(cx) {
                Poll::Ready(Ok(())) => {
                    self.state = State::Ready;
                    Poll::Ready(())
                }
                // Dropped signal: the element vanished mid-animation and the
                // transition-end event will never arrive.
                Poll::Ready(Err(oneshot::Canceled)) => {
                    self.state = State::Stalled;
                    Poll::Pending
                }
                Poll::Pending => Poll::Pending,
            },
            State::Join(parts) => {
                let mut all_ready = true;
                for part in parts.iter_mut() {
                    if part.poll_inner(cx).is_pending() {
                        all_ready = false;
                    }
                }
                if all_ready {
                    self.state = State::Ready;
                    Poll::Ready(())
                } else {
                    Poll::Pending
                }
            }
        }
    }
}

impl Future for Completion {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        self.get_mut().poll_inner(cx)
    }
}
