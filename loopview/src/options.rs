use crate::{LayoutMode, Size, Vec2};

/// Default drag-angle threshold in degrees.
pub const DEFAULT_DRAG_THRESHOLD_DEG: f32 = 70.0;

/// Configuration for [`crate::LoopView`].
///
/// This is plain data: changing it through `LoopView::set_options` recomputes the layout.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoopViewOptions {
    pub mode: LayoutMode,

    /// Space between items: `x` between columns, `y` between rows.
    pub spacing: Vec2,

    /// Item size used when the data source does not report one.
    pub default_item_size: Size,

    /// In grid modes, aligns items that are smaller than their group to the trailing edge of
    /// the group instead of the leading edge.
    pub group_align_reverse: bool,

    /// Minimum angle (degrees) between the initial drag vector and the scroll axis for a
    /// registered item to claim the gesture. The claim window is `[t, 180 - t]`.
    pub drag_threshold_deg: f32,
}

impl LoopViewOptions {
    pub fn new(mode: LayoutMode, default_item_size: Size) -> Self {
        Self {
            mode,
            spacing: Vec2::ZERO,
            default_item_size,
            group_align_reverse: false,
            drag_threshold_deg: DEFAULT_DRAG_THRESHOLD_DEG,
        }
    }

    pub fn with_mode(mut self, mode: LayoutMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_spacing(mut self, x: f32, y: f32) -> Self {
        self.spacing = Vec2::new(x, y);
        self
    }

    pub fn with_default_item_size(mut self, size: Size) -> Self {
        self.default_item_size = size;
        self
    }

    pub fn with_group_align_reverse(mut self, reverse: bool) -> Self {
        self.group_align_reverse = reverse;
        self
    }

    pub fn with_drag_threshold_deg(mut self, threshold: f32) -> Self {
        self.drag_threshold_deg = threshold;
        self
    }
}

impl Default for LoopViewOptions {
    fn default() -> Self {
        Self::new(LayoutMode::default(), Size::new(100.0, 100.0))
    }
}
