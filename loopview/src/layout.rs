//! Container geometry for all four layout modes.
//!
//! The walk keeps a cursor and the running group extent (the largest item size along the
//! group axis since the last wrap). In grid modes the next item's size decides whether the
//! current group closes before it is placed; when a group closes every container in it gets
//! the group's extent along the group axis, while `real_size` keeps the item's own extent.

use crate::container::Containers;
use crate::{Axis, LayoutMode, Rect, Size, Vec2};

/// Inputs that are not per-item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    pub mode: LayoutMode,
    pub spacing: Vec2,
    /// Viewport size. Grid modes wrap against its cross extent; single-axis modes use it as
    /// the content's cross extent.
    pub viewport: Size,
}

/// Computes containers for items `0..count` and returns the content size.
///
/// Group alignment is not baked into the rects; see [`crate::ItemContainer::placement`].
///
/// Deterministic: the result depends only on the arguments. Slots past `count` are left
/// untouched.
pub fn compute_layout<V>(
    containers: &mut Containers<V>,
    count: usize,
    mut size_of: impl FnMut(usize) -> Size,
    params: &LayoutParams,
) -> Size {
    containers.ensure_len(count);
    let slots = containers.prefix_mut(count);

    let mode = params.mode;
    let spacing = params.spacing;
    let viewport = params.viewport;
    let group_axis = mode.group_axis();

    let mut cursor = Vec2::ZERO;
    let mut group_extent = 0.0f32;
    let mut group_start = 0usize;
    let mut next = (count > 0).then(|| size_of(0));

    for index in 0..count {
        let Some(size) = next.take() else {
            break;
        };
        let is_last = index + 1 == count;
        next = (!is_last).then(|| size_of(index + 1));

        let slot = &mut slots[index];
        slot.rect = Rect::from_origin_size(cursor, size);
        slot.real_size = size.along(group_axis);
        group_extent = group_extent.max(size.along(group_axis));

        let wrapped = match mode {
            LayoutMode::Vertical => {
                cursor.y += size.height;
                if !is_last {
                    cursor.y += spacing.y;
                }
                false
            }
            LayoutMode::Horizontal => {
                cursor.x += size.width;
                if !is_last {
                    cursor.x += spacing.x;
                }
                false
            }
            LayoutMode::GridColumnsThenRows => {
                cursor.x += size.width;
                if !is_last {
                    cursor.x += spacing.x;
                }
                match next {
                    Some(n) if cursor.x + n.width > viewport.width => {
                        cursor.x = 0.0;
                        cursor.y += group_extent + spacing.y;
                        true
                    }
                    _ => false,
                }
            }
            LayoutMode::GridRowsThenColumns => {
                cursor.y += size.height;
                if !is_last {
                    cursor.y += spacing.y;
                }
                match next {
                    Some(n) if cursor.y + n.height > viewport.height => {
                        cursor.y = 0.0;
                        cursor.x += group_extent + spacing.x;
                        true
                    }
                    _ => false,
                }
            }
        };

        if mode.is_grid() && (wrapped || is_last) {
            for slot in &mut slots[group_start..=index] {
                match group_axis {
                    Axis::Horizontal => slot.rect.width = group_extent,
                    Axis::Vertical => slot.rect.height = group_extent,
                }
            }
            group_start = index + 1;
        }
        if wrapped {
            group_extent = 0.0;
        }
    }

    match mode {
        LayoutMode::Vertical => Size::new(viewport.width, cursor.y),
        LayoutMode::Horizontal => Size::new(cursor.x, viewport.height),
        LayoutMode::GridRowsThenColumns => Size::new(cursor.x + group_extent, viewport.height),
        LayoutMode::GridColumnsThenRows => Size::new(viewport.width, cursor.y + group_extent),
    }
}
