//! Per-frame callback scheduling.
//!
//! The animator never drives its own loop. It asks the host for "one more
//! frame" through [`FrameScheduler::request_frame`] and the host calls back
//! with the returned [`FrameRequestId`] on its next redraw. Requests are
//! one-shot: a recurring animation re-requests from inside each step.
//!
//! [`ManualScheduler`] is a deterministic implementation for headless hosts
//! and tests: it only records requests, and the caller decides when a frame
//! happens by draining them with [`ManualScheduler::take_pending`].

use std::cell::RefCell;
use std::rc::Rc;

/// Handle for a single pending frame callback
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FrameRequestId(u64);

impl FrameRequestId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

/// The host's per-frame redraw scheduler
pub trait FrameScheduler {
    /// Ask for a callback on the next frame
    fn request_frame(&mut self) -> FrameRequestId;

    /// Withdraw a request that has not fired yet. Cancelling an unknown or
    /// already fired request is a no-op.
    fn cancel_frame(&mut self, id: FrameRequestId);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for &mut S {
    fn request_frame(&mut self) -> FrameRequestId {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        (**self).cancel_frame(id)
    }
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for Box<S> {
    fn request_frame(&mut self) -> FrameRequestId {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        (**self).cancel_frame(id)
    }
}

/// Shared handle, so the host can keep driving a scheduler the component owns
impl<S: FrameScheduler> FrameScheduler for Rc<RefCell<S>> {
    fn request_frame(&mut self) -> FrameRequestId {
        self.borrow_mut().request_frame()
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        self.borrow_mut().cancel_frame(id)
    }
}

/// Scheduler that records requests and lets the caller decide when frames run
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Vec<FrameRequestId>,
    requested: usize,
    cancelled: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every request that is due on this frame.
    ///
    /// Requests made while the returned callbacks run land in the next frame.
    pub fn take_pending(&mut self) -> Vec<FrameRequestId> {
        std::mem::take(&mut self.pending)
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Total number of requests ever made
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Total number of requests withdrawn before firing
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameRequestId {
        self.next_id += 1;
        let id = FrameRequestId::new(self.next_id);
        self.pending.push(id);
        self.requested += 1;
        id
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        let before = self.pending.len();
        self.pending.retain(|pending| *pending != id);
        if self.pending.len() != before {
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_are_unique() {
        let mut scheduler = ManualScheduler::new();
        let a = scheduler.request_frame();
        let b = scheduler.request_frame();
        assert_ne!(a, b);
        assert_eq!(scheduler.pending_count(), 2);
        assert_eq!(scheduler.requested(), 2);
    }

    #[test]
    fn test_cancel_removes_pending() {
        let mut scheduler = ManualScheduler::new();
        let a = scheduler.request_frame();
        let b = scheduler.request_frame();

        scheduler.cancel_frame(a);
        assert_eq!(scheduler.take_pending(), vec![b]);
        assert_eq!(scheduler.cancelled(), 1);
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn test_cancel_fired_request_is_noop() {
        let mut scheduler = ManualScheduler::new();
        let a = scheduler.request_frame();
        let _ = scheduler.take_pending();

        scheduler.cancel_frame(a);
        assert_eq!(scheduler.cancelled(), 0);
    }

    #[test]
    fn test_shared_handle_forwards() {
        let shared = Rc::new(RefCell::new(ManualScheduler::new()));
        let mut handle = shared.clone();

        let id = handle.request_frame();
        assert_eq!(shared.borrow().pending_count(), 1);

        handle.cancel_frame(id);
        assert!(!shared.borrow().has_pending());
    }
}
