pub mod animation;
pub mod layout;
pub mod scheduler;
pub mod widgets;

pub mod prelude {
    pub use crate::animation::{AnimatorPhase, FrameOutcome, PointerAnimator, Smoothing};
    pub use crate::layout::{
        Bounds, BoundsSource, BoundsTracker, ElementRect, GeometryEvent, Point, Rect, Size,
    };
    pub use crate::scheduler::{FrameRequestId, FrameScheduler, ManualScheduler};
    pub use crate::widgets::{
        Color, EventResponse, GradientColors, GradientHover, GradientHoverConfig, PointerEvent,
        Rendered, StyleVars,
    };
}
