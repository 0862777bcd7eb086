pub mod gradient_hover;
pub mod widget;

pub use gradient_hover::{
    ClickCallback, GradientColors, GradientHover, GradientHoverConfig, Rendered, StyleVars,
};
pub use widget::{Color, EventResponse, PointerEvent};
