//! A recycling list/grid renderer for scroll containers.
//!
//! Only the items that intersect the viewport own a view object. Views scrolled out are
//! parked in per-template pools and rebound to the items scrolled in, so the number of live
//! views stays proportional to the viewport, not to the data.
//!
//! Ready-made index-driven and list-driven data sources live in the `loopview-adapter` crate.
//!
//! The crate is UI-agnostic. The embedding layer provides:
//! - view creation, placement and destruction ([`ViewHost`])
//! - the scroll container: viewport size, scroll offset, content size, bindings ([`ScrollHost`])
//! - item count, sizes, templates and binding ([`DataSource`])
//!
//! Four layouts are supported: a single row, a single column, and two wrapping grids
//! (see [`LayoutMode`]). Drag gestures that start on a drag-capable view are arbitrated
//! between the view and the scroll container by angle (see [`DragArbiter`]).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod container;
mod drag;
mod error;
mod host;
mod layout;
mod loop_view;
mod options;
mod pool;
mod render;
mod types;
mod window;


pub use container::{Containers, ItemContainer};
pub use drag::{
    DragArbiter, DragEvent, DragHook, DragRegistrar, DragState, claims_item, drag_angle,
};
pub use error::{BindError, Error};
pub use host::{DataSource, DragItem, ItemView, ScrollHost, ViewHost};
pub use layout::{LayoutParams, compute_layout};
pub use loop_view::{LoopView, UpdateReport};
pub use options::{DEFAULT_DRAG_THRESHOLD_DEG, LoopViewOptions};
pub use pool::{PoolStats, PooledView, ViewId, ViewPool};
pub use types::{Axis, LayoutMode, Rect, Size, TemplateId, Vec2, VisibleRange};
pub use window::{anchor_index, find_visible_range};
