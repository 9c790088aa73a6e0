//! Capabilities the embedding UI framework and application provide.

use crate::drag::{DragEvent, DragHook};
use crate::{Axis, BindError, Rect, Size, TemplateId, Vec2};

/// Supplies item count, geometry, templates and binding.
///
/// Index-driven and list-driven sources are both thin implementations of this trait (see the
/// `loopview-adapter` crate).
pub trait DataSource<V> {
    fn count(&self) -> usize;

    /// Item size. `None` falls back to `LoopViewOptions::default_item_size`.
    fn size_of(&self, _index: usize) -> Option<Size> {
        None
    }

    /// Template used to instantiate the item's view. `None` means the template cannot be
    /// resolved.
    fn template_of(&self, _index: usize) -> Option<TemplateId> {
        Some(TemplateId::DEFAULT)
    }

    /// Writes the item's data into `view`.
    fn bind(&mut self, index: usize, view: &mut V) -> Result<(), BindError>;
}

/// Instantiates, positions and destroys view objects.
pub trait ViewHost {
    type View: ItemView;

    /// Creates a fresh view for `template`, or `None` when no prototype is registered for it.
    fn create(&mut self, template: TemplateId) -> Option<Self::View>;

    fn destroy(&mut self, view: Self::View);

    /// Positions `view` inside the content, in content-local coordinates.
    fn place(&mut self, _view: &mut Self::View, _rect: Rect) {}

    /// Shows (`true`) or parks (`false`) a view. Parked views are idle in a pool.
    fn set_active(&mut self, _view: &mut Self::View, _active: bool) {}
}

/// The scroll container the list lives in.
///
/// Normalized positions are `0.0` at the leading edge (left/top) and `1.0` at the trailing
/// edge, per axis.
pub trait ScrollHost {
    /// Whatever the container has to detach so that it stops scrolling while an item owns
    /// the gesture (content binding, scrollbars, ...).
    type Bindings;

    fn viewport_size(&self) -> Size;

    /// Restricts scrolling to the layout's scroll axis.
    fn set_scroll_axis(&mut self, _axis: Axis) {}

    /// Top-left of the viewport in content-local coordinates.
    fn scroll_offset(&self) -> Vec2;

    fn set_content_size(&mut self, size: Size);

    fn normalized_position(&self) -> Vec2;

    fn set_normalized_position(&mut self, position: Vec2);

    fn velocity(&self) -> Vec2;

    fn set_velocity(&mut self, velocity: Vec2);

    fn stop_movement(&mut self) {
        self.set_velocity(Vec2::ZERO);
    }

    fn suspend_bindings(&mut self) -> Self::Bindings;

    fn restore_bindings(&mut self, bindings: Self::Bindings);
}

/// Optional capabilities of a view object.
pub trait ItemView {
    fn as_drag_item(&mut self) -> Option<&mut dyn DragItem> {
        None
    }
}

/// A view that can take over a drag gesture from the scroll container.
///
/// The view keeps the installed [`DragHook`] and calls [`DragHook::pointer_down`] when it
/// receives a pointer-down, which makes it the candidate for the next gesture.
pub trait DragItem {
    fn install_drag_hook(&mut self, hook: DragHook);

    fn begin_drag(&mut self, event: &DragEvent);

    fn drag(&mut self, event: &DragEvent);

    fn end_drag(&mut self, event: &DragEvent);
}
