//! Style derivation for the gradient hover container.
//!
//! Everything here is a pure function of configuration, bounds and the
//! animator's rendered position. The output is a list of CSS custom
//! properties plus the root class list; the stylesheet consuming them is the
//! host's concern.

use bitflags::bitflags;

use crate::layout::{Bounds, Point};

use super::colors::GradientColors;
use super::config::GradientHoverConfig;

pub const ROOT_CLASS: &str = "gradient-hover";
pub const CONTENT_CLASS: &str = "gradient-hover__content";

bitflags! {
    /// State modifiers rendered as BEM modifier classes on the root element
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ClassModifiers: u8 {
        const IS_HOVERING = 0b001;
        const ALWAYS_SHOW = 0b010;
        const IS_ACTIVE   = 0b100;
    }
}

impl ClassModifiers {
    pub fn from_state(config: &GradientHoverConfig, is_hovering: bool) -> Self {
        let mut modifiers = ClassModifiers::empty();
        modifiers.set(ClassModifiers::IS_HOVERING, is_hovering);
        modifiers.set(
            ClassModifiers::ALWAYS_SHOW,
            config.should_always_show_gradient,
        );
        modifiers.set(ClassModifiers::IS_ACTIVE, config.is_active);
        modifiers
    }

    fn class_names(self) -> impl Iterator<Item = &'static str> {
        [
            (ClassModifiers::IS_HOVERING, "gradient-hover--is-hovering"),
            (ClassModifiers::ALWAYS_SHOW, "gradient-hover--always-show"),
            (ClassModifiers::IS_ACTIVE, "gradient-hover--is-active"),
        ]
        .into_iter()
        .filter(move |(flag, _)| self.contains(*flag))
        .map(|(_, name)| name)
    }
}

/// Ordered CSS custom properties. Setting an existing name replaces its value
/// in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleVars {
    entries: Vec<(String, String)>,
}

impl StyleVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize as an inline `style` attribute value
    pub fn to_inline_css(&self) -> String {
        self.entries
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// `radial-gradient(circle at X Y, stops...)`
pub fn radial_gradient(x: &str, y: &str, colors: &GradientColors) -> String {
    format!("radial-gradient(circle at {} {}, {})", x, y, colors.joined())
}

/// Gradient center as whole percentages of the element, when there is both a
/// rendered position and measurable bounds
pub fn gradient_position(bounds: Option<&Bounds>, position: Option<Point>) -> Option<(i32, i32)> {
    bounds?.percent_of(position?)
}

/// Derive the root element's custom properties.
///
/// At rest the gradient is centered (`50% 50%`) and `--gradient-x`/`-y` are
/// absent; while a position is rendered both are set and the background is
/// re-centered on it. Caller style entries are applied last.
pub fn compose(
    config: &GradientHoverConfig,
    bounds: Option<&Bounds>,
    position: Option<Point>,
) -> StyleVars {
    let colors = &config.colors;
    let mut vars = StyleVars::new();

    vars.set("--gradient-colors", colors.joined());
    vars.set("--gradient-stop-last", colors.last().as_str());
    vars.set("--gradient-stop-count", colors.count().to_string());
    vars.set(
        "--transition-duration",
        format!("{}s", config.transition_secs()),
    );
    if let Some(radius) = &config.border_radius {
        vars.set("--border-radius", radius.as_str());
    }
    vars.set(
        "--active-overlay-opacity",
        config.overlay_opacity().to_string(),
    );
    vars.set("--gradient-background", radial_gradient("50%", "50%", colors));

    if let Some((x, y)) = gradient_position(bounds, position) {
        let x = format!("{}%", x);
        let y = format!("{}%", y);
        vars.set("--gradient-background", radial_gradient(&x, &y, colors));
        vars.set("--gradient-x", x);
        vars.set("--gradient-y", y);
    }

    for (name, value) in &config.style {
        vars.set(name.as_str(), value.as_str());
    }

    vars
}

/// Root class list: base class, active modifiers, then the caller's classes
pub fn class_list(config: &GradientHoverConfig, modifiers: ClassModifiers) -> String {
    let mut classes: Vec<&str> = vec![ROOT_CLASS];
    classes.extend(modifiers.class_names().map(|name| -> &str { name }));
    if let Some(extra) = config.class_name.as_deref() {
        let extra = extra.trim();
        if !extra.is_empty() {
            classes.push(extra);
        }
    }
    classes.join(" ")
}
