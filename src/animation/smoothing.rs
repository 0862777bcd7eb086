//! Speed-to-smoothing mapping for the pointer pursuit animation.
//!
//! The user-facing `animation_speed` is a loose "1 is sluggish, 10 is snappy"
//! knob. It is mapped through an exponential curve to a per-frame smoothing
//! speed, which in turn becomes a frame-rate-independent interpolation factor:
//!
//! ```text
//! smoothing = 0.00025 * animation_speed^1.3
//! factor    = 1 - (1 - smoothing * 10)^frame_step
//! ```
//!
//! where `frame_step` is the elapsed time measured in 60Hz frames. Applying
//! `factor` once for a 2-frame gap moves exactly as far as applying the 1-frame
//! factor twice, so motion looks the same at any refresh rate.
//!
//! The return-to-center phase runs at three times the pursuit speed (and never
//! slower than [`MIN_RETURN_SPEED`]) so releasing feels snappier than following.

/// Default user-facing animation speed
pub const DEFAULT_ANIMATION_SPEED: f32 = 5.0;

const SPEED_SCALE: f32 = 0.00025;
const SPEED_EXPONENT: f32 = 1.3;
const RETURN_MULTIPLIER: f32 = 3.0;

/// Floor for the return-to-center smoothing speed
pub const MIN_RETURN_SPEED: f32 = 0.003;

/// Smoothing configuration derived from a user-facing animation speed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoothing {
    animation_speed: f32,
}

impl Smoothing {
    /// Build from a user-facing speed. Non-finite or non-positive speeds
    /// would never converge, so they fall back to the default.
    pub fn from_animation_speed(animation_speed: f32) -> Self {
        if !animation_speed.is_finite() || animation_speed <= 0.0 {
            log::warn!(
                "invalid animation speed {}, using {}",
                animation_speed,
                DEFAULT_ANIMATION_SPEED
            );
            return Self {
                animation_speed: DEFAULT_ANIMATION_SPEED,
            };
        }
        Self { animation_speed }
    }

    pub fn animation_speed(&self) -> f32 {
        self.animation_speed
    }

    /// Smoothing speed while following the pointer
    pub fn pursuit_speed(&self) -> f32 {
        SPEED_SCALE * self.animation_speed.powf(SPEED_EXPONENT)
    }

    /// Smoothing speed while easing back to the center
    pub fn return_speed(&self) -> f32 {
        (self.pursuit_speed() * RETURN_MULTIPLIER).max(MIN_RETURN_SPEED)
    }
}

impl Default for Smoothing {
    fn default() -> Self {
        Self {
            animation_speed: DEFAULT_ANIMATION_SPEED,
        }
    }
}

/// Interpolation factor for one step of `frame_step` 60Hz frames.
///
/// The per-frame fraction is clamped to [0, 1], so very high speeds snap to
/// the target instead of overshooting.
pub fn smoothing_factor(speed: f32, frame_step: f32) -> f32 {
    let per_frame = (speed * 10.0).clamp(0.0, 1.0);
    1.0 - (1.0 - per_frame).powf(frame_step.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_pursuit_speed_curve() {
        let smoothing = Smoothing::from_animation_speed(1.0);
        assert!(approx_eq(smoothing.pursuit_speed(), 0.00025));

        // Monotonic in the user-facing speed
        let slow = Smoothing::from_animation_speed(2.0).pursuit_speed();
        let fast = Smoothing::from_animation_speed(8.0).pursuit_speed();
        assert!(fast > slow);
    }

    #[test]
    fn test_return_speed_is_faster() {
        let smoothing = Smoothing::from_animation_speed(10.0);
        assert!(approx_eq(
            smoothing.return_speed(),
            smoothing.pursuit_speed() * 3.0
        ));
    }

    #[test]
    fn test_return_speed_floor() {
        let smoothing = Smoothing::from_animation_speed(0.05);
        assert_eq!(smoothing.return_speed(), MIN_RETURN_SPEED);
    }

    #[test]
    fn test_invalid_speed_falls_back() {
        for speed in [0.0, -3.0, f32::NAN, f32::INFINITY] {
            let smoothing = Smoothing::from_animation_speed(speed);
            assert_eq!(smoothing.animation_speed(), DEFAULT_ANIMATION_SPEED);
        }
    }

    #[test]
    fn test_factor_is_frame_rate_independent() {
        let speed = 0.01;
        let one = smoothing_factor(speed, 1.0);
        let two = smoothing_factor(speed, 2.0);
        // Two single steps leave (1 - one)^2 of the distance, same as one double step
        assert!(approx_eq(1.0 - two, (1.0 - one) * (1.0 - one)));
    }

    #[test]
    fn test_factor_clamps_high_speed() {
        assert_eq!(smoothing_factor(0.5, 1.0), 1.0);
        assert_eq!(smoothing_factor(0.0, 1.0), 0.0);
    }
}
