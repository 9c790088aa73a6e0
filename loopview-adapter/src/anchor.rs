use core::fmt;

use loopview::{DataSource, LoopView, ScrollHost, UpdateReport, ViewHost};

/// A scroll anchor that preserves the visual position of an item across data changes.
///
/// Typical use cases:
/// - chat/timeline "prepend" (load older messages above) without content jumping
/// - any reorder/replace where the viewport should stay on an item identity
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAnchor<K> {
    pub key: K,
    /// Distance from the anchor item's leading edge to the scroll offset, along the scroll
    /// axis. Positive when the item is partly scrolled out.
    pub offset_in_viewport: f32,
}

impl<K: fmt::Debug> fmt::Debug for ScrollAnchor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollAnchor")
            .field("key", &self.key)
            .field("offset_in_viewport", &self.offset_in_viewport)
            .finish()
    }
}

/// Captures an anchor for the first visible item.
///
/// `key_of` maps the item index to a key that survives the data change. Returns `None` when
/// nothing is visible.
pub fn capture_first_visible_anchor<D, H, K>(
    lv: &LoopView<D, H>,
    key_of: impl FnOnce(usize) -> K,
) -> Option<ScrollAnchor<K>>
where
    D: DataSource<H::View>,
    H: ViewHost + ScrollHost,
{
    let index = lv.visible_range()?.first;
    let axis = lv.options().mode.scroll_axis();
    let start = lv.container(index)?.rect.start(axis);
    let offset_in_viewport = lv.host().scroll_offset().along(axis) - start;
    Some(ScrollAnchor {
        key: key_of(index),
        offset_in_viewport,
    })
}

/// Scrolls so that the anchored item sits where it was captured.
///
/// Call it after the new data is shown. `key_to_index` maps the key into the *current* data.
/// Returns `None` when the key is gone.
pub fn apply_anchor<D, H, K>(
    lv: &mut LoopView<D, H>,
    anchor: &ScrollAnchor<K>,
    mut key_to_index: impl FnMut(&K) -> Option<usize>,
) -> Option<UpdateReport>
where
    D: DataSource<H::View>,
    H: ViewHost + ScrollHost,
{
    let index = key_to_index(&anchor.key)?;
    let axis = lv.options().mode.scroll_axis();
    let start = lv.container(index)?.rect.start(axis);
    atrace!(index, start, "apply_anchor");
    Some(lv.scroll_to_offset(start + anchor.offset_in_viewport))
}
