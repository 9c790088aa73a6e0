use core::fmt;
use core::ops::RangeInclusive;

/// A 2D vector in content-local units (positions, deltas, spacing, normalized positions).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    pub fn with_along(mut self, axis: Axis, value: f32) -> Self {
        match axis {
            Axis::Horizontal => self.x = value,
            Axis::Vertical => self.y = value,
        }
        self
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn clamp01(self) -> Self {
        Self {
            x: self.x.clamp(0.0, 1.0),
            y: self.y.clamp(0.0, 1.0),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// An axis-aligned rectangle. The origin is the top-left corner and `y` grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Vec2, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn x_max(&self) -> f32 {
        self.x + self.width
    }

    pub fn y_max(&self) -> f32 {
        self.y + self.height
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Leading edge along `axis` (left for horizontal, top for vertical).
    pub fn start(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        other.x_max() > self.x
            && other.x < self.x_max()
            && other.y_max() > self.y
            && other.y < self.y_max()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Unit vector pointing along the axis, in the direction of increasing index.
    pub fn unit(self) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(1.0, 0.0),
            Self::Vertical => Vec2::new(0.0, 1.0),
        }
    }
}

/// Layout topology.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutMode {
    /// A single row, scrolled horizontally.
    Horizontal,
    /// A single column, scrolled vertically.
    #[default]
    Vertical,
    /// Fills a column top to bottom, then wraps to a new column. Scrolls horizontally.
    #[doc(alias = "HorizontalAfterVertical")]
    GridRowsThenColumns,
    /// Fills a row left to right, then wraps to a new row. Scrolls vertically.
    #[doc(alias = "VerticalAfterHorizontal")]
    GridColumnsThenRows,
}

impl LayoutMode {
    pub fn scroll_axis(self) -> Axis {
        match self {
            Self::Horizontal | Self::GridRowsThenColumns => Axis::Horizontal,
            Self::Vertical | Self::GridColumnsThenRows => Axis::Vertical,
        }
    }

    /// The axis along which items of one group share a uniform size.
    ///
    /// For single-axis modes this is the travel axis; there are no groups to share with.
    pub fn group_axis(self) -> Axis {
        match self {
            Self::Horizontal | Self::GridRowsThenColumns => Axis::Horizontal,
            Self::Vertical | Self::GridColumnsThenRows => Axis::Vertical,
        }
    }

    pub fn is_grid(self) -> bool {
        matches!(self, Self::GridRowsThenColumns | Self::GridColumnsThenRows)
    }
}

/// Identifies the view prototype used to instantiate an item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateId(pub u32);

impl TemplateId {
    pub const DEFAULT: Self = Self(0);
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An inclusive, non-empty range of visible item indexes.
///
/// "Nothing visible" is expressed as `Option::<VisibleRange>::None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub first: usize,
    pub last: usize,
}

impl VisibleRange {
    pub fn new(first: usize, last: usize) -> Self {
        debug_assert!(first <= last, "VisibleRange: first > last ({first} > {last})");
        Self { first, last }
    }

    pub fn len(&self) -> usize {
        self.last - self.first + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.first && index <= self.last
    }

    /// Midpoint, used as the anchor of the next window search.
    pub fn midpoint(&self) -> usize {
        self.first + (self.last - self.first) / 2
    }

    pub fn indexes(&self) -> RangeInclusive<usize> {
        self.first..=self.last
    }
}
