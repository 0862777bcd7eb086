use std::time::Duration;

use crate::animation::{Smoothing, DEFAULT_ANIMATION_SPEED};
use crate::layout::bounds::DEFAULT_SETTLE;

use super::colors::GradientColors;

/// Default CSS transition length for properties the animator doesn't drive
pub const DEFAULT_TRANSITION_DURATION: f32 = 1.0;

/// Default opacity of the overlay shown while `is_active` is set
pub const DEFAULT_ACTIVE_OVERLAY_OPACITY: f32 = 0.05;

/// Static configuration of a gradient hover container.
///
/// Everything here is plain data. The click callback lives on the
/// component itself.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientHoverConfig {
    pub colors: GradientColors,
    /// User-facing pursuit speed, mapped to a smoothing curve
    pub animation_speed: f32,
    /// Seconds
    pub transition_duration: f32,
    pub should_always_show_gradient: bool,
    /// Any CSS length, e.g. `"20px"`
    pub border_radius: Option<String>,
    pub active_overlay_opacity: f32,
    pub is_active: bool,
    /// Extra class names appended to the root element
    pub class_name: Option<String>,
    /// Inline style entries merged last onto the root element
    pub style: Vec<(String, String)>,
    /// Settle time for debounced bounds re-measurement
    pub debounce: Duration,
}

impl GradientHoverConfig {
    pub fn smoothing(&self) -> Smoothing {
        Smoothing::from_animation_speed(self.animation_speed)
    }

    /// Transition length in seconds, never negative
    pub fn transition_secs(&self) -> f32 {
        if self.transition_duration.is_finite() {
            self.transition_duration.max(0.0)
        } else {
            DEFAULT_TRANSITION_DURATION
        }
    }

    /// Overlay opacity clamped to [0, 1]
    pub fn overlay_opacity(&self) -> f32 {
        if self.active_overlay_opacity.is_finite() {
            self.active_overlay_opacity.clamp(0.0, 1.0)
        } else {
            DEFAULT_ACTIVE_OVERLAY_OPACITY
        }
    }
}

impl Default for GradientHoverConfig {
    fn default() -> Self {
        Self {
            colors: GradientColors::default(),
            animation_speed: DEFAULT_ANIMATION_SPEED,
            transition_duration: DEFAULT_TRANSITION_DURATION,
            should_always_show_gradient: true,
            border_radius: None,
            active_overlay_opacity: DEFAULT_ACTIVE_OVERLAY_OPACITY,
            is_active: false,
            class_name: None,
            style: Vec::new(),
            debounce: DEFAULT_SETTLE,
        }
    }
}
