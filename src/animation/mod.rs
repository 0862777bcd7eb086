mod animatable;
mod pointer;
mod smoothing;

pub use animatable::Animatable;
pub use pointer::{AnimatorPhase, FrameOutcome, PointerAnimator, CONVERGENCE_THRESHOLD};
pub use smoothing::{smoothing_factor, Smoothing, DEFAULT_ANIMATION_SPEED, MIN_RETURN_SPEED};
