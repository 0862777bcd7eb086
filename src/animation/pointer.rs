use std::time::Instant;

use crate::animation::{smoothing_factor, Animatable, Smoothing};
use crate::layout::{Bounds, Point};
use crate::scheduler::{FrameRequestId, FrameScheduler};

/// Distance (in CSS pixels) below which the return-to-center is complete
pub const CONVERGENCE_THRESHOLD: f32 = 0.5;

/// Duration of one frame at the 60Hz reference rate, in milliseconds
const REFERENCE_FRAME_MS: f32 = 16.67;

/// Longest gap (in reference frames) a single step may cover. Keeps a stalled
/// tab from teleporting the gradient when it resumes.
const MAX_FRAME_STEP: f32 = 2.0;

/// What the animator is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimatorPhase {
    /// No frame loop, nothing rendered at a custom position
    #[default]
    Idle,
    /// Following the pointer while hovered
    TrackingPointer,
    /// Pointer left, easing back to the element center
    ReturningToCenter,
}

/// Result of running one frame callback
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// Stale or cancelled request, or the animator is idle. Nothing changed.
    Ignored,
    /// Loop is running but there is no position to render yet (bounds absent)
    Waiting,
    /// Current position moved
    Advanced(Point),
    /// Return-to-center finished; the loop stopped and the position was cleared
    Settled,
}

/// Pointer pursuit animation.
///
/// Holds the target (latest pointer position, or the element center after
/// the pointer left) and the current rendered position, and eases one toward
/// the other once per frame. All positions are element-local.
///
/// The frame loop runs exactly while the phase is not [`AnimatorPhase::Idle`]:
/// every transition into a running phase makes sure one request is pending,
/// and every transition to idle withdraws it.
#[derive(Debug, Clone)]
pub struct PointerAnimator {
    phase: AnimatorPhase,
    smoothing: Smoothing,
    target: Point,
    current: Option<Point>,
    last_frame: Option<Instant>,
    frame: Option<FrameRequestId>,
}

impl PointerAnimator {
    pub fn new(smoothing: Smoothing) -> Self {
        Self {
            phase: AnimatorPhase::Idle,
            smoothing,
            target: Point::default(),
            current: None,
            last_frame: None,
            frame: None,
        }
    }

    pub fn phase(&self) -> AnimatorPhase {
        self.phase
    }

    pub fn smoothing(&self) -> Smoothing {
        self.smoothing
    }

    /// Change smoothing without disturbing a running animation
    pub fn set_smoothing(&mut self, smoothing: Smoothing) {
        self.smoothing = smoothing;
    }

    pub fn target(&self) -> Point {
        self.target
    }

    /// Position the gradient is currently rendered at, if any
    pub fn current(&self) -> Option<Point> {
        self.current
    }

    /// The frame request this animator is waiting on
    pub fn pending_frame(&self) -> Option<FrameRequestId> {
        self.frame
    }

    pub fn is_running(&self) -> bool {
        self.frame.is_some()
    }

    /// Pointer entered the element at viewport coordinates `client`.
    ///
    /// Any running frame is restarted so the frame clock starts fresh. When
    /// the gradient is at rest it starts from the element center.
    pub fn pointer_enter(
        &mut self,
        client: Point,
        bounds: Option<&Bounds>,
        scheduler: &mut impl FrameScheduler,
    ) {
        self.cancel_frame(scheduler);
        self.phase = AnimatorPhase::TrackingPointer;

        if let Some(bounds) = bounds {
            self.target = bounds.to_local(client.x, client.y);
            if self.current.is_none() {
                self.current = Some(bounds.center());
            }
        } else {
            log::debug!("pointer entered before bounds were measured");
        }

        self.last_frame = None;
        self.ensure_frame(scheduler);
        log::debug!("pointer animator: tracking, target {:?}", self.target);
    }

    /// Pointer moved. Only the target changes; the current position keeps
    /// easing from wherever it is.
    pub fn pointer_move(&mut self, client: Point, bounds: Option<&Bounds>) {
        if self.phase != AnimatorPhase::TrackingPointer {
            return;
        }
        let Some(bounds) = bounds else {
            return;
        };
        self.target = bounds.to_local(client.x, client.y);
        if self.current.is_none() {
            self.current = Some(bounds.center());
        }
    }

    /// Pointer left the element. Redirects the target to the element center
    /// and keeps the loop running until it converges. Without bounds there is
    /// no center to return to, so the animation stops on the spot.
    pub fn pointer_leave(&mut self, bounds: Option<&Bounds>, scheduler: &mut impl FrameScheduler) {
        if self.phase == AnimatorPhase::Idle {
            return;
        }

        let Some(bounds) = bounds else {
            log::debug!("pointer left without bounds, stopping immediately");
            self.stop(scheduler);
            return;
        };
        if self.current.is_none() {
            // Never rendered off-center, nothing to ease back
            self.stop(scheduler);
            return;
        }

        self.target = bounds.center();
        self.phase = AnimatorPhase::ReturningToCenter;
        self.last_frame = None;
        self.ensure_frame(scheduler);
        log::debug!("pointer animator: returning to {:?}", self.target);
    }

    /// Run the frame callback for `request` at time `now`.
    pub fn step(
        &mut self,
        request: FrameRequestId,
        now: Instant,
        scheduler: &mut impl FrameScheduler,
    ) -> FrameOutcome {
        if self.frame != Some(request) {
            return FrameOutcome::Ignored;
        }
        // The request has fired and is no longer pending on the host side
        self.frame = None;

        if self.phase == AnimatorPhase::Idle {
            return FrameOutcome::Ignored;
        }

        let frame_step = match self.last_frame {
            Some(previous) => {
                let elapsed_ms = now.saturating_duration_since(previous).as_secs_f32() * 1000.0;
                (elapsed_ms / REFERENCE_FRAME_MS).min(MAX_FRAME_STEP)
            }
            None => 1.0,
        };
        self.last_frame = Some(now);

        let Some(current) = self.current else {
            self.frame = Some(scheduler.request_frame());
            return FrameOutcome::Waiting;
        };

        let returning = self.phase == AnimatorPhase::ReturningToCenter;
        if returning && current.distance_to(self.target) < CONVERGENCE_THRESHOLD {
            self.phase = AnimatorPhase::Idle;
            self.current = None;
            self.last_frame = None;
            log::debug!("pointer animator: settled at center");
            return FrameOutcome::Settled;
        }

        let speed = if returning {
            self.smoothing.return_speed()
        } else {
            self.smoothing.pursuit_speed()
        };
        let next = Point::lerp(&current, &self.target, smoothing_factor(speed, frame_step));
        self.current = Some(next);
        self.frame = Some(scheduler.request_frame());

        log::trace!("pointer animator: step {:.2} -> {:?}", frame_step, next);
        FrameOutcome::Advanced(next)
    }

    /// Stop everything and withdraw the pending frame (unmount)
    pub fn teardown(&mut self, scheduler: &mut impl FrameScheduler) {
        self.stop(scheduler);
        self.target = Point::default();
    }

    fn stop(&mut self, scheduler: &mut impl FrameScheduler) {
        self.cancel_frame(scheduler);
        self.phase = AnimatorPhase::Idle;
        self.current = None;
        self.last_frame = None;
    }

    fn ensure_frame(&mut self, scheduler: &mut impl FrameScheduler) {
        if self.frame.is_none() {
            self.frame = Some(scheduler.request_frame());
        }
    }

    fn cancel_frame(&mut self, scheduler: &mut impl FrameScheduler) {
        if let Some(id) = self.frame.take() {
            scheduler.cancel_frame(id);
        }
    }
}

impl Default for PointerAnimator {
    fn default() -> Self {
        Self::new(Smoothing::default())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::layout::{ElementRect, Rect};
    use crate::scheduler::ManualScheduler;

    fn bounds() -> Bounds {
        Bounds::from_element(ElementRect::new(Rect::new(0.0, 0.0, 200.0, 100.0)))
    }

    /// Run every pending frame once, 16ms apart
    fn run_frame(
        animator: &mut PointerAnimator,
        scheduler: &mut ManualScheduler,
        now: &mut Instant,
    ) -> Vec<FrameOutcome> {
        *now += Duration::from_millis(16);
        scheduler
            .take_pending()
            .into_iter()
            .map(|id| animator.step(id, *now, scheduler))
            .collect()
    }

    #[test]
    fn test_new_animator_is_idle() {
        let animator = PointerAnimator::default();
        assert_eq!(animator.phase(), AnimatorPhase::Idle);
        assert!(animator.current().is_none());
        assert!(!animator.is_running());
    }

    #[test]
    fn test_enter_from_rest_starts_at_center() {
        let mut scheduler = ManualScheduler::new();
        let mut animator = PointerAnimator::default();

        animator.pointer_enter(Point::new(150.0, 80.0), Some(&bounds()), &mut scheduler);

        assert_eq!(animator.phase(), AnimatorPhase::TrackingPointer);
        assert_eq!(animator.current(), Some(Point::new(100.0, 50.0)));
        assert_eq!(animator.target(), Point::new(150.0, 80.0));
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn test_move_updates_target_only() {
        let mut scheduler = ManualScheduler::new();
        let mut animator = PointerAnimator::default();
        let mut now = Instant::now();

        animator.pointer_enter(Point::new(150.0, 80.0), Some(&bounds()), &mut scheduler);
        run_frame(&mut animator, &mut scheduler, &mut now);
        let before = animator.current();

        animator.pointer_move(Point::new(10.0, 10.0), Some(&bounds()));
        assert_eq!(animator.target(), Point::new(10.0, 10.0));
        assert_eq!(animator.current(), before);
    }

    #[test]
    fn test_tracking_approaches_target() {
        let mut scheduler = ManualScheduler::new();
        let mut animator = PointerAnimator::new(Smoothing::from_animation_speed(10.0));
        let mut now = Instant::now();
        let target = Point::new(150.0, 80.0);

        animator.pointer_enter(target, Some(&bounds()), &mut scheduler);
        let mut distance = animator.current().unwrap().distance_to(target);
        for _ in 0..50 {
            let outcomes = run_frame(&mut animator, &mut scheduler, &mut now);
            assert_eq!(outcomes.len(), 1);
            let next = animator.current().unwrap().distance_to(target);
            assert!(next < distance);
            distance = next;
        }
        // Still hovered, so the loop keeps running
        assert!(scheduler.has_pending());
        assert_eq!(animator.phase(), AnimatorPhase::TrackingPointer);
    }

    #[test]
    fn test_leave_targets_exact_center() {
        let mut scheduler = ManualScheduler::new();
        let mut animator = PointerAnimator::default();

        animator.pointer_enter(Point::new(10.0, 10.0), Some(&bounds()), &mut scheduler);
        animator.pointer_leave(Some(&bounds()), &mut scheduler);

        assert_eq!(animator.phase(), AnimatorPhase::ReturningToCenter);
        assert_eq!(animator.target(), Point::new(100.0, 50.0));
        // Leave reuses the pending request instead of stacking another one
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn test_return_settles_and_stops_loop() {
        let mut scheduler = ManualScheduler::new();
        let mut animator = PointerAnimator::default();
        let mut now = Instant::now();

        animator.pointer_enter(Point::new(190.0, 95.0), Some(&bounds()), &mut scheduler);
        for _ in 0..30 {
            run_frame(&mut animator, &mut scheduler, &mut now);
        }
        animator.pointer_leave(Some(&bounds()), &mut scheduler);

        let mut settled = false;
        for _ in 0..1000 {
            let outcomes = run_frame(&mut animator, &mut scheduler, &mut now);
            if outcomes.contains(&FrameOutcome::Settled) {
                settled = true;
                break;
            }
        }

        assert!(settled);
        assert_eq!(animator.phase(), AnimatorPhase::Idle);
        assert!(animator.current().is_none());
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn test_stale_request_is_ignored() {
        let mut scheduler = ManualScheduler::new();
        let mut animator = PointerAnimator::default();

        animator.pointer_enter(Point::new(10.0, 10.0), Some(&bounds()), &mut scheduler);
        let first = scheduler.take_pending()[0];
        // Re-entering withdraws the old request and issues a new one
        animator.pointer_enter(Point::new(20.0, 20.0), Some(&bounds()), &mut scheduler);

        assert_eq!(
            animator.step(first, Instant::now(), &mut scheduler),
            FrameOutcome::Ignored
        );
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn test_reenter_while_returning_keeps_position() {
        let mut scheduler = ManualScheduler::new();
        let mut animator = PointerAnimator::default();
        let mut now = Instant::now();

        animator.pointer_enter(Point::new(190.0, 95.0), Some(&bounds()), &mut scheduler);
        for _ in 0..10 {
            run_frame(&mut animator, &mut scheduler, &mut now);
        }
        animator.pointer_leave(Some(&bounds()), &mut scheduler);
        run_frame(&mut animator, &mut scheduler, &mut now);
        let mid_return = animator.current();

        animator.pointer_enter(Point::new(0.0, 0.0), Some(&bounds()), &mut scheduler);
        assert_eq!(animator.phase(), AnimatorPhase::TrackingPointer);
        assert_eq!(animator.current(), mid_return);
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn test_leave_without_bounds_stops_immediately() {
        let mut scheduler = ManualScheduler::new();
        let mut animator = PointerAnimator::default();

        animator.pointer_enter(Point::new(10.0, 10.0), Some(&bounds()), &mut scheduler);
        animator.pointer_leave(None, &mut scheduler);

        assert_eq!(animator.phase(), AnimatorPhase::Idle);
        assert!(animator.current().is_none());
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn test_enter_without_bounds_waits() {
        let mut scheduler = ManualScheduler::new();
        let mut animator = PointerAnimator::default();
        let mut now = Instant::now();

        animator.pointer_enter(Point::new(10.0, 10.0), None, &mut scheduler);
        assert_eq!(
            run_frame(&mut animator, &mut scheduler, &mut now),
            vec![FrameOutcome::Waiting]
        );
        assert!(animator.current().is_none());

        // First move with bounds gives it something to render
        animator.pointer_move(Point::new(150.0, 80.0), Some(&bounds()));
        assert_eq!(animator.current(), Some(Point::new(100.0, 50.0)));
    }

    #[test]
    fn test_leave_before_render_stops() {
        let mut scheduler = ManualScheduler::new();
        let mut animator = PointerAnimator::default();

        animator.pointer_enter(Point::new(10.0, 10.0), None, &mut scheduler);
        animator.pointer_leave(Some(&bounds()), &mut scheduler);

        assert_eq!(animator.phase(), AnimatorPhase::Idle);
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn test_teardown_cancels_pending_frame() {
        let mut scheduler = ManualScheduler::new();
        let mut animator = PointerAnimator::default();

        animator.pointer_enter(Point::new(10.0, 10.0), Some(&bounds()), &mut scheduler);
        animator.pointer_leave(Some(&bounds()), &mut scheduler);
        let pending = animator.pending_frame().unwrap();

        animator.teardown(&mut scheduler);
        assert!(!scheduler.has_pending());
        assert_eq!(
            animator.step(pending, Instant::now(), &mut scheduler),
            FrameOutcome::Ignored
        );
    }

    #[test]
    fn test_long_gap_is_clamped() {
        let mut scheduler = ManualScheduler::new();
        let mut animator = PointerAnimator::new(Smoothing::from_animation_speed(5.0));
        let start = Instant::now();

        animator.pointer_enter(Point::new(200.0, 50.0), Some(&bounds()), &mut scheduler);
        let id = scheduler.take_pending()[0];
        animator.step(id, start, &mut scheduler);
        let after_first = animator.current().unwrap();

        let id = scheduler.take_pending()[0];
        animator.step(id, start + Duration::from_secs(5), &mut scheduler);
        let after_gap = animator.current().unwrap();

        // A 5s stall moves at most two reference frames' worth
        let speed = animator.smoothing().pursuit_speed();
        let expected = after_first.x + (200.0 - after_first.x) * smoothing_factor(speed, 2.0);
        assert!((after_gap.x - expected).abs() < 1e-3);
    }
}
