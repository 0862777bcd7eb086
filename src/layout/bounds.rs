//! Element bounds tracking.
//!
//! The host reports geometry-affecting signals (window resize, scroll,
//! orientation change, visibility changes) as [`GeometryEvent`]s. Each one
//! (re)arms a trailing-edge debounce; once the element has been quiet for the
//! settle time, the next [`BoundsTracker::poll`] performs a single layout read
//! through the host's [`BoundsSource`].
//!
//! Pointer handlers bypass the debounce with [`BoundsTracker::measure_now`],
//! since converting client coordinates needs the rect as it is right now.

use std::time::{Duration, Instant};

use super::{Bounds, ElementRect};

/// Default settle time before a debounced re-measure
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(100);

/// Visible-area ratio an intersection change must cross to count
pub const INTERSECTION_THRESHOLD: f32 = 0.1;

/// Host-side geometry measurement.
///
/// Returns `None` while the element is not mounted (or otherwise cannot be
/// measured); callers treat that as "bounds absent".
pub trait BoundsSource {
    fn measure(&self) -> Option<ElementRect>;
}

impl<F> BoundsSource for F
where
    F: Fn() -> Option<ElementRect>,
{
    fn measure(&self) -> Option<ElementRect> {
        self()
    }
}

/// Signals that may move or resize the host element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryEvent {
    /// Element was attached to the document
    Mount,
    /// Window resized
    Resize,
    /// Document (or an ancestor) scrolled
    Scroll,
    /// Device orientation changed
    OrientationChange,
    /// Visible ratio of the element changed
    Intersection { ratio: f32 },
}

/// Trailing-edge debounce keyed on caller-supplied timestamps
#[derive(Debug, Clone)]
struct Debounce {
    settle: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    fn new(settle: Duration) -> Self {
        Self {
            settle,
            deadline: None,
        }
    }

    /// Arm (or push out) the deadline
    fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.settle);
    }

    fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the deadline if it has passed
    fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// Tracks the host element's bounds with debounced recomputation
#[derive(Debug, Clone)]
pub struct BoundsTracker {
    debounce: Debounce,
    bounds: Option<Bounds>,
    /// Last known side of the intersection threshold (None = never observed)
    visible: Option<bool>,
}

impl BoundsTracker {
    pub fn new(settle: Duration) -> Self {
        Self {
            debounce: Debounce::new(settle),
            bounds: None,
            visible: None,
        }
    }

    /// Current bounds, if the element has been measured
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Whether a debounced re-measure is waiting to run
    pub fn is_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    /// Feed a geometry signal. Returns true if it scheduled a re-measure.
    ///
    /// Intersection changes only count when the visible ratio crosses
    /// [`INTERSECTION_THRESHOLD`] (the first observation always counts).
    pub fn notify(&mut self, event: GeometryEvent, now: Instant) -> bool {
        if let GeometryEvent::Intersection { ratio } = event {
            let visible = ratio >= INTERSECTION_THRESHOLD;
            if self.visible == Some(visible) {
                return false;
            }
            self.visible = Some(visible);
        }

        log::trace!("bounds re-measure scheduled by {:?}", event);
        self.debounce.schedule(now);
        true
    }

    /// Run the debounced re-measure if its settle time has elapsed.
    /// Returns true if the stored bounds changed.
    pub fn poll(&mut self, now: Instant, source: &impl BoundsSource) -> bool {
        if !self.debounce.take_due(now) {
            return false;
        }
        let previous = self.bounds;
        self.store(source.measure());
        previous != self.bounds
    }

    /// Measure immediately, bypassing the debounce
    pub fn measure_now(&mut self, source: &impl BoundsSource) -> Option<Bounds> {
        self.store(source.measure());
        self.bounds
    }

    /// Drop any pending re-measure
    pub fn cancel(&mut self) {
        self.debounce.cancel();
    }

    /// Forget everything (element unmounted)
    pub fn reset(&mut self) {
        self.debounce.cancel();
        self.bounds = None;
        self.visible = None;
    }

    fn store(&mut self, measured: Option<ElementRect>) {
        match measured {
            Some(element) => {
                self.bounds = Some(Bounds::from_element(element));
            }
            None => {
                // A missing element keeps the last known bounds; there is
                // nothing better to position against.
                log::debug!("bounds measurement skipped, element not mounted");
            }
        }
    }
}

impl Default for BoundsTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE)
    }
}
