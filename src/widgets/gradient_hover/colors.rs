use crate::widgets::Color;

/// Stops used when the caller supplies fewer than two usable colors
pub const DEFAULT_COLORS: [&str; 2] = ["#EB2DD2", "#5AB5EE"];

/// A single gradient color stop, kept as a CSS color string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorStop(String);

impl ColorStop {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for ColorStop {
    fn from(value: &str) -> Self {
        ColorStop(value.trim().to_string())
    }
}

impl From<String> for ColorStop {
    fn from(value: String) -> Self {
        ColorStop(value.trim().to_string())
    }
}

impl From<Color> for ColorStop {
    fn from(value: Color) -> Self {
        ColorStop(value.to_css())
    }
}

/// Ordered gradient stops, always at least two
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientColors {
    stops: Vec<ColorStop>,
}

impl GradientColors {
    /// Validate a caller-supplied list. Fewer than two stops, or any blank
    /// stop, falls back to [`DEFAULT_COLORS`].
    pub fn new<I, T>(colors: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ColorStop>,
    {
        let stops: Vec<ColorStop> = colors.into_iter().map(Into::into).collect();
        if stops.len() < 2 || stops.iter().any(ColorStop::is_blank) {
            log::warn!(
                "gradient needs at least two non-empty colors, got {:?}; using defaults",
                stops
            );
            return Self::default();
        }
        Self { stops }
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    pub fn count(&self) -> usize {
        self.stops.len()
    }

    pub fn last(&self) -> &ColorStop {
        // Construction guarantees at least two stops
        &self.stops[self.stops.len() - 1]
    }

    /// Stops joined the way CSS gradient functions expect them
    pub fn joined(&self) -> String {
        self.stops
            .iter()
            .map(ColorStop::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for GradientColors {
    fn default() -> Self {
        Self {
            stops: DEFAULT_COLORS.iter().map(|c| ColorStop::from(*c)).collect(),
        }
    }
}
