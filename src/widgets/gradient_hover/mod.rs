//! Gradient hover container.
//!
//! Wraps caller content in a container whose radial-gradient background
//! follows the pointer with smoothed, trailing motion and eases back to the
//! center once the pointer leaves.
//!
//! The component is headless: the host forwards pointer and geometry events,
//! runs frame callbacks through its [`FrameScheduler`], measures the element
//! through a [`BoundsSource`], and applies the output of [`GradientHover::render`].
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use std::time::{Duration, Instant};
//!
//! use gradient_hover::prelude::*;
//!
//! let scheduler = Rc::new(RefCell::new(ManualScheduler::new()));
//! let source = || Some(ElementRect::new(Rect::new(0.0, 0.0, 200.0, 100.0)));
//!
//! let mut hover = GradientHover::new("Hover me", scheduler.clone(), source)
//!     .colors(["#667eea", "#764ba2"])
//!     .animation_speed(8.0);
//!
//! let mut now = Instant::now();
//! hover.mount(now);
//! hover.handle_event(PointerEvent::Enter { x: 150.0, y: 80.0 });
//!
//! now += Duration::from_millis(16);
//! let due = scheduler.borrow_mut().take_pending();
//! for id in due {
//!     hover.on_frame(id, now);
//! }
//!
//! let rendered = hover.render();
//! assert!(rendered.class_name.contains("gradient-hover--is-hovering"));
//! assert!(rendered.style.get("--gradient-x").is_some());
//! ```

mod colors;
mod config;
mod style;

pub use colors::{ColorStop, GradientColors, DEFAULT_COLORS};
pub use config::{
    GradientHoverConfig, DEFAULT_ACTIVE_OVERLAY_OPACITY, DEFAULT_TRANSITION_DURATION,
};
pub use style::{
    class_list, compose, gradient_position, radial_gradient, ClassModifiers, StyleVars,
    CONTENT_CLASS, ROOT_CLASS,
};

use std::time::{Duration, Instant};

use crate::animation::{AnimatorPhase, FrameOutcome, PointerAnimator};
use crate::layout::{Bounds, BoundsSource, BoundsTracker, GeometryEvent, Point};
use crate::scheduler::{FrameRequestId, FrameScheduler};

use super::widget::{EventResponse, PointerEvent};

/// Callback for click events
pub type ClickCallback = Box<dyn FnMut()>;

/// Everything the host needs to draw the container
#[derive(Debug)]
pub struct Rendered<'a, C> {
    /// Class list for the root element
    pub class_name: String,
    /// Custom properties (and caller style) for the root element
    pub style: StyleVars,
    /// Class for the inner element wrapping the children
    pub content_class: &'static str,
    pub children: &'a C,
}

/// A gradient hover container instance.
///
/// Owns its animation state, its pending frame request and its debounced
/// bounds measurement; [`GradientHover::unmount`] (or dropping the value)
/// withdraws both, so no callback can run against a disposed instance.
pub struct GradientHover<C, S, B>
where
    S: FrameScheduler,
    B: BoundsSource,
{
    children: C,
    config: GradientHoverConfig,
    on_click: Option<ClickCallback>,
    scheduler: S,
    source: B,
    tracker: BoundsTracker,
    animator: PointerAnimator,
    is_hovering: bool,
    mounted: bool,
}

impl<C, S, B> GradientHover<C, S, B>
where
    S: FrameScheduler,
    B: BoundsSource,
{
    pub fn new(children: C, scheduler: S, source: B) -> Self {
        Self::with_config(children, scheduler, source, GradientHoverConfig::default())
    }

    pub fn with_config(children: C, scheduler: S, source: B, config: GradientHoverConfig) -> Self {
        Self {
            tracker: BoundsTracker::new(config.debounce),
            animator: PointerAnimator::new(config.smoothing()),
            children,
            config,
            on_click: None,
            scheduler,
            source,
            is_hovering: false,
            mounted: false,
        }
    }

    /// Gradient color stops. Fewer than two usable colors falls back to the defaults.
    pub fn colors<I, T>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ColorStop>,
    {
        self.config.colors = GradientColors::new(colors);
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.config.class_name = Some(class_name.into());
        self
    }

    /// Add an inline style entry, applied after the computed variables
    pub fn style(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.style.push((name.into(), value.into()));
        self
    }

    pub fn on_click<F: FnMut() + 'static>(mut self, callback: F) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    pub fn animation_speed(mut self, speed: f32) -> Self {
        self.config.animation_speed = speed;
        self.animator.set_smoothing(self.config.smoothing());
        self
    }

    /// Transition length in seconds
    pub fn transition_duration(mut self, seconds: f32) -> Self {
        self.config.transition_duration = seconds;
        self
    }

    pub fn should_always_show_gradient(mut self, always: bool) -> Self {
        self.config.should_always_show_gradient = always;
        self
    }

    pub fn border_radius(mut self, radius: impl Into<String>) -> Self {
        self.config.border_radius = Some(radius.into());
        self
    }

    pub fn active_overlay_opacity(mut self, opacity: f32) -> Self {
        self.config.active_overlay_opacity = opacity;
        self
    }

    pub fn is_active(mut self, active: bool) -> Self {
        self.config.is_active = active;
        self
    }

    /// Settle time for debounced bounds re-measurement
    pub fn debounce(mut self, settle: Duration) -> Self {
        self.config.debounce = settle;
        self.tracker = BoundsTracker::new(settle);
        self
    }

    pub fn config(&self) -> &GradientHoverConfig {
        &self.config
    }

    pub fn children(&self) -> &C {
        &self.children
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.tracker.bounds()
    }

    pub fn phase(&self) -> AnimatorPhase {
        self.animator.phase()
    }

    pub fn is_hovering(&self) -> bool {
        self.is_hovering
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Position the gradient is currently rendered at (element-local)
    pub fn gradient_center(&self) -> Option<Point> {
        self.animator.current()
    }

    /// Attach to the document. Bounds are measured once the debounce settles.
    pub fn mount(&mut self, now: Instant) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.tracker.notify(GeometryEvent::Mount, now);
        log::debug!("gradient hover mounted");
    }

    /// Detach: withdraw the pending frame and bounds measurement, reset state
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.tracker.reset();
        self.animator.teardown(&mut self.scheduler);
        self.is_hovering = false;
        self.mounted = false;
        log::debug!("gradient hover unmounted");
    }

    pub fn handle_event(&mut self, event: PointerEvent) -> EventResponse {
        if !self.mounted {
            return EventResponse::Ignored;
        }

        match event {
            PointerEvent::Enter { x, y } => {
                self.is_hovering = true;
                let bounds = self.tracker.measure_now(&self.source);
                self.animator
                    .pointer_enter(Point::new(x, y), bounds.as_ref(), &mut self.scheduler);
                EventResponse::Handled
            }
            PointerEvent::Move { x, y } => {
                if !self.is_hovering {
                    return EventResponse::Ignored;
                }
                let bounds = self.tracker.measure_now(&self.source);
                self.animator.pointer_move(Point::new(x, y), bounds.as_ref());
                EventResponse::Handled
            }
            PointerEvent::Leave => {
                self.is_hovering = false;
                let bounds = self.tracker.measure_now(&self.source);
                self.animator
                    .pointer_leave(bounds.as_ref(), &mut self.scheduler);
                EventResponse::Handled
            }
            PointerEvent::Click { .. } => match self.on_click.as_mut() {
                Some(callback) => {
                    callback();
                    EventResponse::Handled
                }
                None => EventResponse::Ignored,
            },
        }
    }

    /// Forward a geometry signal. Returns true if it scheduled a re-measure.
    pub fn handle_geometry(&mut self, event: GeometryEvent, now: Instant) -> bool {
        if !self.mounted {
            return false;
        }
        self.tracker.notify(event, now)
    }

    /// Run a due debounced re-measure. Returns true if the bounds changed.
    pub fn poll_bounds(&mut self, now: Instant) -> bool {
        if !self.mounted {
            return false;
        }
        self.tracker.poll(now, &self.source)
    }

    /// Frame callback for a request this component made
    pub fn on_frame(&mut self, request: FrameRequestId, now: Instant) -> FrameOutcome {
        if !self.mounted {
            return FrameOutcome::Ignored;
        }
        self.animator.step(request, now, &mut self.scheduler)
    }

    pub fn render(&self) -> Rendered<'_, C> {
        let bounds = self.tracker.bounds();
        let modifiers = ClassModifiers::from_state(&self.config, self.is_hovering);
        Rendered {
            class_name: class_list(&self.config, modifiers),
            style: compose(&self.config, bounds.as_ref(), self.animator.current()),
            content_class: CONTENT_CLASS,
            children: &self.children,
        }
    }
}

impl<C, S, B> Drop for GradientHover<C, S, B>
where
    S: FrameScheduler,
    B: BoundsSource,
{
    fn drop(&mut self) {
        self.unmount();
    }
}
