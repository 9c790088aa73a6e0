//! Visible-window search by anchor expansion.
//!
//! The search assumes the overlapping containers form one contiguous index run. Layouts
//! produced by [`crate::layout::compute_layout`] satisfy this as long as every item has a
//! positive size; custom size functions that break monotonic placement are the caller's
//! responsibility.

use crate::container::ItemContainer;
use crate::{Rect, VisibleRange};

/// Picks the index the next search starts from.
///
/// Priority: an explicit `hint` (e.g. a pending scroll-to index), then the midpoint of the
/// `previous` range, then `scroll_fraction` (scroll offset / content extent along the scroll
/// axis) scaled to the item count.
pub fn anchor_index(
    hint: Option<usize>,
    previous: Option<VisibleRange>,
    scroll_fraction: f32,
    count: usize,
) -> usize {
    if count == 0 {
        return 0;
    }
    if let Some(hint) = hint.filter(|&h| h < count) {
        return hint;
    }
    if let Some(previous) = previous {
        return previous.midpoint().min(count - 1);
    }
    let fraction = if scroll_fraction.is_finite() {
        scroll_fraction.max(0.0)
    } else {
        0.0
    };
    let estimate = ((count - 1) as f32 * fraction) as usize;
    estimate.min(count - 1)
}

/// Finds the run of containers overlapping `viewport`, starting from `anchor`.
///
/// Costs O(range size) when the anchor is visible and O(distance to the nearest visible item)
/// otherwise. Returns `None` when nothing overlaps.
pub fn find_visible_range<V>(
    viewport: Rect,
    containers: &[ItemContainer<V>],
    anchor: usize,
) -> Option<VisibleRange> {
    find_visible_run(containers.len(), anchor, |i| {
        viewport.overlaps(&containers[i].rect)
    })
}

pub(crate) fn find_visible_run(
    count: usize,
    anchor: usize,
    is_visible: impl Fn(usize) -> bool,
) -> Option<VisibleRange> {
    if count == 0 {
        return None;
    }
    let anchor = anchor.min(count - 1);

    if is_visible(anchor) {
        let first = scan_backward(anchor, &is_visible);
        let last = scan_forward(anchor, count, &is_visible);
        ltrace!(anchor, first, last, "window: anchor visible");
        return Some(VisibleRange::new(first, last));
    }

    // Alternate probes below and above the anchor. The first hit below is the run's last
    // index, the first hit above is its first index.
    let reach = anchor.max(count - anchor - 1);
    for k in 1..=reach {
        if anchor >= k && is_visible(anchor - k) {
            let last = anchor - k;
            let first = scan_backward(last, &is_visible);
            ltrace!(anchor, first, last, probes = k, "window: found below anchor");
            return Some(VisibleRange::new(first, last));
        }
        if anchor + k < count && is_visible(anchor + k) {
            let first = anchor + k;
            let last = scan_forward(first, count, &is_visible);
            ltrace!(anchor, first, last, probes = k, "window: found above anchor");
            return Some(VisibleRange::new(first, last));
        }
    }

    lwarn!(anchor, count, "window: no visible item");
    None
}

/// First index of the visible run containing `from`.
fn scan_backward(from: usize, is_visible: &impl Fn(usize) -> bool) -> usize {
    let mut first = from;
    while first > 0 && is_visible(first - 1) {
        first -= 1;
    }
    first
}

/// Last index of the visible run containing `from`.
fn scan_forward(from: usize, count: usize, is_visible: &impl Fn(usize) -> bool) -> usize {
    let mut last = from;
    while last + 1 < count && is_visible(last + 1) {
        last += 1;
    }
    last
}
