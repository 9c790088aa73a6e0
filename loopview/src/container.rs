use crate::pool::{PooledView, ViewId};
use crate::{LayoutMode, Rect};

/// Geometry and bound view for one item index.
#[derive(Debug)]
pub struct ItemContainer<V> {
    /// Slot occupied by the item. In grid modes the group axis extent is the group's uniform
    /// size, not the item's own.
    pub rect: Rect,
    /// The item's own extent along the group axis.
    pub real_size: f32,
    pub(crate) view: Option<PooledView<V>>,
}

impl<V> Default for ItemContainer<V> {
    fn default() -> Self {
        Self {
            rect: Rect::default(),
            real_size: 0.0,
            view: None,
        }
    }
}

impl<V> ItemContainer<V> {
    pub fn view(&self) -> Option<&V> {
        self.view.as_ref().map(PooledView::view)
    }

    pub fn view_id(&self) -> Option<ViewId> {
        self.view.as_ref().map(PooledView::id)
    }

    pub fn is_bound(&self) -> bool {
        self.view.is_some()
    }

    /// Where the bound view is drawn.
    ///
    /// In grid modes the view keeps its real size along the group axis and is aligned to the
    /// group's leading edge, or its trailing edge when `align_reverse` is set.
    pub fn placement(&self, mode: LayoutMode, align_reverse: bool) -> Rect {
        let rect = self.rect;
        match mode {
            LayoutMode::GridRowsThenColumns => {
                let x = if align_reverse {
                    rect.x + (rect.width - self.real_size)
                } else {
                    rect.x
                };
                Rect::new(x, rect.y, self.real_size, rect.height)
            }
            LayoutMode::GridColumnsThenRows => {
                let y = if align_reverse {
                    rect.y + (rect.height - self.real_size)
                } else {
                    rect.y
                };
                Rect::new(rect.x, y, rect.width, self.real_size)
            }
            LayoutMode::Horizontal | LayoutMode::Vertical => rect,
        }
    }
}

/// Grow-only arena of containers indexed by item index.
///
/// Slots past the current data count are kept for reuse and never read.
#[derive(Debug)]
pub struct Containers<V> {
    slots: Vec<ItemContainer<V>>,
}

impl<V> Default for Containers<V> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<V> Containers<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of allocated slots (may exceed the data count).
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn ensure_len(&mut self, len: usize) {
        if self.slots.len() < len {
            self.slots.resize_with(len, ItemContainer::default);
        }
    }

    pub fn get(&self, index: usize) -> Option<&ItemContainer<V>> {
        self.slots.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut ItemContainer<V>> {
        self.slots.get_mut(index)
    }

    /// The first `count` slots.
    pub fn prefix(&self, count: usize) -> &[ItemContainer<V>] {
        &self.slots[..count.min(self.slots.len())]
    }

    pub(crate) fn prefix_mut(&mut self, count: usize) -> &mut [ItemContainer<V>] {
        let end = count.min(self.slots.len());
        &mut self.slots[..end]
    }

    /// Drops every slot. Callers must have reclaimed bound views first.
    pub(crate) fn reset(&mut self) {
        debug_assert!(
            self.slots.iter().all(|c| c.view.is_none()),
            "Containers::reset with bound views"
        );
        self.slots = Vec::new();
    }
}
