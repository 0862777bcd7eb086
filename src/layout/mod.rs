pub mod bounds;

pub use bounds::{BoundsSource, BoundsTracker, GeometryEvent};

/// Width and height of an element in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Geometric center in element-local coordinates
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// True when either dimension is zero (or negative), i.e. nothing to position against
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// A raw measurement reported by the host: the element's rect relative to the
/// viewport, plus the document scroll offset at the time of measuring.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementRect {
    pub viewport: Rect,
    pub scroll_x: f32,
    pub scroll_y: f32,
}

impl ElementRect {
    pub fn new(viewport: Rect) -> Self {
        Self {
            viewport,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }

    pub fn scrolled(mut self, scroll_x: f32, scroll_y: f32) -> Self {
        self.scroll_x = scroll_x;
        self.scroll_y = scroll_y;
        self
    }
}

/// Measured bounds of the host element.
///
/// `viewport` is relative to the visible viewport (what pointer client
/// coordinates are expressed in), `page` is relative to the document origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub viewport: Rect,
    pub page: Rect,
}

impl Bounds {
    pub fn from_element(element: ElementRect) -> Self {
        Self {
            viewport: element.viewport,
            page: element
                .viewport
                .offset(element.scroll_x, element.scroll_y),
        }
    }

    pub fn size(&self) -> Size {
        self.viewport.size()
    }

    /// Center of the element in element-local coordinates
    pub fn center(&self) -> Point {
        self.size().center()
    }

    /// Convert viewport (client) coordinates into element-local coordinates
    pub fn to_local(&self, client_x: f32, client_y: f32) -> Point {
        Point::new(client_x - self.viewport.x, client_y - self.viewport.y)
    }

    /// Position of a local point as whole percentages of the element size.
    ///
    /// Rounds half up, so 12.5% renders as 13%. Returns `None` for an
    /// element that has no area yet.
    pub fn percent_of(&self, local: Point) -> Option<(i32, i32)> {
        let size = self.size();
        if size.is_empty() {
            return None;
        }
        let x = (local.x / size.width * 100.0 + 0.5).floor() as i32;
        let y = (local.y / size.height * 100.0 + 0.5).floor() as i32;
        Some((x, y))
    }
}
