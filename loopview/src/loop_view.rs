use core::fmt;

use crate::container::{Containers, ItemContainer};
use crate::drag::{DragArbiter, DragEvent, DragRegistrar, DragState};
use crate::host::{DataSource, DragItem, ItemView, ScrollHost, ViewHost};
use crate::layout::{LayoutParams, compute_layout};
use crate::pool::{PoolStats, ViewId, ViewPool};
use crate::render::bind_item;
use crate::window::{anchor_index, find_visible_range};
use crate::{Error, LoopViewOptions, Rect, Size, Vec2, VisibleRange};

/// Outcome of one render update.
///
/// Per-item failures never abort an update; they are collected here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// Views taken from a pool or created.
    pub acquired: usize,
    /// Views returned to a pool (or destroyed because their template could not be resolved).
    pub recycled: usize,
    /// Successful binder calls.
    pub bound: usize,
    pub failures: Vec<Error>,
}

impl UpdateReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn merge(&mut self, other: UpdateReport) {
        self.acquired += other.acquired;
        self.recycled += other.recycled;
        self.bound += other.bound;
        self.failures.extend(other.failures);
    }
}

/// A recycling list/grid renderer.
///
/// `LoopView` holds no rendering code. It lays items out, decides which indexes intersect
/// the viewport, moves view objects between the pools and the visible items, and arbitrates
/// drag gestures. The host supplies views and the scroll container (`H`), the caller
/// supplies data (`D`).
///
/// Everything runs on the driving thread: call [`LoopView::tick`] once per frame, and
/// [`LoopView::update_visible`] whenever the scroll position changes between ticks.
pub struct LoopView<D, H>
where
    H: ViewHost + ScrollHost,
{
    options: LoopViewOptions,
    host: H,
    source: Option<D>,
    data_count: usize,
    containers: Containers<H::View>,
    content_size: Size,
    pool: ViewPool<H::View>,
    visible: Option<VisibleRange>,
    anchor_hint: Option<usize>,
    last_viewport: Option<Size>,
    last_scroll: Vec2,
    arbiter: DragArbiter<H::Bindings>,
    registrar: DragRegistrar,
    enabled: bool,
}

impl<D, H> LoopView<D, H>
where
    H: ViewHost + ScrollHost,
    D: DataSource<H::View>,
{
    pub fn new(options: LoopViewOptions, mut host: H) -> Self {
        ldebug!(mode = ?options.mode, "LoopView::new");
        host.set_scroll_axis(options.mode.scroll_axis());
        Self {
            options,
            host,
            source: None,
            data_count: 0,
            containers: Containers::new(),
            content_size: Size::ZERO,
            pool: ViewPool::new(),
            visible: None,
            anchor_hint: None,
            last_viewport: None,
            last_scroll: Vec2::ZERO,
            arbiter: DragArbiter::new(),
            registrar: DragRegistrar::new(),
            enabled: true,
        }
    }

    pub fn options(&self) -> &LoopViewOptions {
        &self.options
    }

    /// Replaces the options and recomputes the layout.
    pub fn set_options(&mut self, options: LoopViewOptions) -> UpdateReport {
        let mode_changed = self.options.mode != options.mode;
        self.options = options;
        if mode_changed {
            self.host.set_scroll_axis(options.mode.scroll_axis());
        }
        self.relayout()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host, e.g. to apply a user scroll. Call `tick` or
    /// `update_visible` afterwards.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn source(&self) -> Option<&D> {
        self.source.as_ref()
    }

    /// Mutable access to the data. Call `relayout` after changing counts or sizes, or
    /// `refresh_visible` after changing content only.
    pub fn source_mut(&mut self) -> Option<&mut D> {
        self.source.as_mut()
    }

    pub fn data_count(&self) -> usize {
        self.data_count
    }

    pub fn content_size(&self) -> Size {
        self.content_size
    }

    pub fn visible_range(&self) -> Option<VisibleRange> {
        self.visible
    }

    pub fn container(&self, index: usize) -> Option<&ItemContainer<H::View>> {
        if index >= self.data_count {
            return None;
        }
        self.containers.get(index)
    }

    pub fn view(&self, index: usize) -> Option<&H::View> {
        self.container(index)?.view()
    }

    pub fn view_id(&self, index: usize) -> Option<ViewId> {
        self.container(index)?.view_id()
    }

    pub fn pool_stats(&self) -> PoolStats {
        self.pool.stats()
    }

    pub fn drag_state(&self) -> DragState {
        self.arbiter.state()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the component. Disabling ends any open gesture and restores the
    /// scroll container's bindings; enabling forces a relayout on the next tick.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if enabled {
            self.last_viewport = None;
        } else {
            self.end_gesture();
        }
    }

    /// Shows `source`, optionally scrolling to `target`.
    ///
    /// Without a target the current scroll progress is kept.
    pub fn show(&mut self, source: D, target: Option<usize>) -> UpdateReport {
        ldebug!(count = source.count(), ?target, "LoopView::show");
        let mut report = UpdateReport::default();
        // Views go back under the data they were bound for.
        self.recycle_visible(&mut report);
        self.source = Some(source);
        self.relayout_into(&mut report);
        if let Some(target) = target {
            self.move_to_index_into(target, &mut report);
        }
        report
    }

    /// Recomputes every container from the current data and viewport.
    pub fn relayout(&mut self) -> UpdateReport {
        let mut report = UpdateReport::default();
        self.relayout_into(&mut report);
        report
    }

    /// Per-frame driver: relayouts when the viewport size changed, otherwise updates the
    /// visible range when the scroll offset moved.
    pub fn tick(&mut self) -> UpdateReport {
        let mut report = UpdateReport::default();
        if !self.enabled {
            return report;
        }
        let viewport = self.host.viewport_size();
        if self.last_viewport != Some(viewport) {
            self.relayout_into(&mut report);
        } else if self.host.scroll_offset() != self.last_scroll {
            self.update_visible_into(&mut report);
        }
        report
    }

    /// Recomputes the visible range at the current scroll offset and recycles/binds the
    /// difference.
    pub fn update_visible(&mut self) -> UpdateReport {
        let mut report = UpdateReport::default();
        self.update_visible_into(&mut report);
        report
    }

    /// Rebinds every visible item in place, without touching the pools.
    pub fn refresh_visible(&mut self) -> UpdateReport {
        let mut report = UpdateReport::default();
        let (Some(range), Some(source)) = (self.visible, self.source.as_mut()) else {
            return report;
        };
        for index in range.indexes() {
            let Some(pooled) = self
                .containers
                .get_mut(index)
                .and_then(|c| c.view.as_mut())
            else {
                continue;
            };
            match bind_item(source, &self.registrar, index, pooled) {
                Ok(()) => report.bound += 1,
                Err(err) => report.failures.push(err),
            }
        }
        report
    }

    /// Scrolls so that item `index` sits at the leading edge of the viewport (clamped to the
    /// scrollable range). Out-of-range indexes are ignored.
    pub fn move_to_index(&mut self, index: usize) -> UpdateReport {
        let mut report = UpdateReport::default();
        self.move_to_index_into(index, &mut report);
        report
    }

    /// Scrolls so that content `offset` (along the scroll axis) sits at the leading edge.
    pub fn scroll_to_offset(&mut self, offset: f32) -> UpdateReport {
        let mut report = UpdateReport::default();
        if !self.enabled {
            return report;
        }
        self.host.stop_movement();
        self.apply_offset(offset);
        self.update_visible_into(&mut report);
        report
    }

    /// Largest scroll offset along the scroll axis; `0.0` when the content fits.
    pub fn scrollable_extent(&self) -> f32 {
        let axis = self.options.mode.scroll_axis();
        (self.content_size.along(axis) - self.host.viewport_size().along(axis)).max(0.0)
    }

    /// Normalized scroll position that puts content `offset` at the leading edge.
    pub fn normalized_for_offset(&self, offset: f32) -> f32 {
        let range = self.scrollable_extent();
        if range > 0.0 {
            (offset / range).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Drops the data source and shows nothing. Pools are kept.
    pub fn clear_show_data(&mut self) -> UpdateReport {
        ldebug!("LoopView::clear_show_data");
        let mut report = UpdateReport::default();
        self.recycle_visible(&mut report);
        self.source = None;
        self.relayout_into(&mut report);
        report
    }

    /// Returns to the freshly constructed state: gesture ended, data dropped, containers
    /// released and every pooled view destroyed.
    pub fn clear_all(&mut self) -> UpdateReport {
        ldebug!("LoopView::clear_all");
        self.end_gesture();
        let report = self.clear_show_data();
        self.visible = None;
        self.anchor_hint = None;
        self.data_count = 0;
        self.content_size = Size::ZERO;
        self.containers.reset();
        self.pool.clear(&mut self.host);
        self.last_viewport = None;
        report
    }

    pub fn begin_drag(&mut self, event: &DragEvent) -> DragState {
        if !self.enabled {
            return DragState::Idle;
        }
        self.open_gesture(event)
    }

    /// Routes a drag move. While the container is scrolling, each move may still hand the
    /// gesture to the registered item. Returns `ItemDragging` when the move was consumed by an
    /// item, in which case the scroll container must not handle it.
    pub fn drag(&mut self, event: &DragEvent) -> DragState {
        if !self.enabled {
            return DragState::Idle;
        }
        let state = self.open_gesture(event);
        if state == DragState::ItemDragging {
            if let Some(item) = self.claimed_item() {
                item.drag(event);
            }
        }
        state
    }

    /// Ends the gesture. Returns the state the gesture was in.
    pub fn end_drag(&mut self, event: &DragEvent) -> DragState {
        let state = self.arbiter.state();
        if state == DragState::ItemDragging {
            if let Some(item) = self.claimed_item() {
                item.end_drag(event);
            }
        }
        self.end_gesture();
        state
    }

    /// Runs arbitration for one move. Notifies the item when it takes the gesture over.
    fn open_gesture(&mut self, event: &DragEvent) -> DragState {
        if self.arbiter.state() == DragState::ItemDragging {
            return DragState::ItemDragging;
        }
        let state = self.arbiter.open(
            &mut self.host,
            self.options.mode.scroll_axis(),
            event.delta,
            self.registrar.candidate(),
            self.options.drag_threshold_deg,
        );
        if state == DragState::ItemDragging {
            if let Some(item) = self.claimed_item() {
                item.begin_drag(event);
            }
        }
        state
    }

    fn end_gesture(&mut self) {
        self.arbiter.close(&mut self.host);
        self.registrar.clear();
    }

    fn claimed_item(&mut self) -> Option<&mut dyn DragItem> {
        let id = self.arbiter.claimed()?;
        let range = self.visible?;
        self.containers
            .prefix_mut(self.data_count)
            .get_mut(range.first..=range.last)?
            .iter_mut()
            .filter_map(|c| c.view.as_mut())
            .find(|pooled| pooled.id() == id)?
            .view_mut()
            .as_drag_item()
    }

    fn relayout_into(&mut self, report: &mut UpdateReport) {
        if !self.enabled {
            return;
        }
        self.recycle_visible(report);
        self.anchor_hint = None;
        self.data_count = self.source.as_ref().map_or(0, |s| s.count());

        let viewport = self.host.viewport_size();
        self.last_viewport = Some(viewport);
        let params = LayoutParams {
            mode: self.options.mode,
            spacing: self.options.spacing,
            viewport,
        };
        let default_size = self.options.default_item_size;
        let source = self.source.as_ref();
        self.content_size = compute_layout(
            &mut self.containers,
            self.data_count,
            |i| source.and_then(|s| s.size_of(i)).unwrap_or(default_size),
            &params,
        );
        ldebug!(
            count = self.data_count,
            content_width = self.content_size.width,
            content_height = self.content_size.height,
            "LoopView::relayout"
        );

        self.host.set_content_size(self.content_size);
        let normalized = self.host.normalized_position();
        let clamped = normalized.clamp01();
        if clamped != normalized {
            self.host.set_normalized_position(clamped);
        }
        self.update_visible_into(report);
    }

    fn update_visible_into(&mut self, report: &mut UpdateReport) {
        if !self.enabled {
            return;
        }
        let offset = self.host.scroll_offset();
        self.last_scroll = offset;
        if self.data_count == 0 {
            return;
        }
        let viewport = Rect::from_origin_size(offset, self.host.viewport_size());

        let axis = self.options.mode.scroll_axis();
        let extent = self.content_size.along(axis);
        let fraction = if extent > 0.0 {
            offset.along(axis) / extent
        } else {
            0.0
        };
        let anchor = anchor_index(
            self.anchor_hint.take(),
            self.visible,
            fraction,
            self.data_count,
        );
        let next = find_visible_range(viewport, self.containers.prefix(self.data_count), anchor);
        self.fill(next, report);
    }

    /// Applies the difference between the current and `next` visible ranges.
    fn fill(&mut self, next: Option<VisibleRange>, report: &mut UpdateReport) {
        match (self.visible, next) {
            (_, None) => self.recycle_visible(report),
            (None, Some(next)) => {
                for index in next.indexes() {
                    self.show_index(index, report);
                }
            }
            (Some(prev), Some(next)) => {
                for index in prev.first..next.first.min(prev.last + 1) {
                    self.recycle_index(index, true, report);
                }
                for index in (next.last + 1).max(prev.first)..=prev.last {
                    self.recycle_index(index, true, report);
                }
                for index in next.first..prev.first.min(next.last + 1) {
                    self.show_index(index, report);
                }
                for index in (prev.last + 1).max(next.first)..=next.last {
                    self.show_index(index, report);
                }
            }
        }
        self.pool.flush_transient(&mut self.host);
        self.visible = next;
    }

    fn show_index(&mut self, index: usize, report: &mut UpdateReport) {
        let Some(source) = self.source.as_mut() else {
            return;
        };
        let Some(rect) = self
            .containers
            .get(index)
            .map(|c| c.placement(self.options.mode, self.options.group_align_reverse))
        else {
            return;
        };
        let Some(template) = source.template_of(index) else {
            lwarn!(index, "no template resolved for visible item");
            report.failures.push(Error::UnresolvedTemplate { index });
            return;
        };
        let mut pooled = match self.pool.acquire(template, &mut self.host) {
            Ok(pooled) => pooled,
            Err(err) => {
                lerror!(index, error = %err, "cannot acquire a view for visible item");
                report.failures.push(err);
                return;
            }
        };
        report.acquired += 1;

        self.host.place(pooled.view_mut(), rect);
        match bind_item(source, &self.registrar, index, &mut pooled) {
            Ok(()) => report.bound += 1,
            Err(err) => report.failures.push(err),
        }
        if let Some(container) = self.containers.get_mut(index) {
            container.view = Some(pooled);
        }
    }

    fn recycle_index(&mut self, index: usize, transient: bool, report: &mut UpdateReport) {
        let Some(pooled) = self.containers.get_mut(index).and_then(|c| c.view.take()) else {
            return;
        };
        let template = self.source.as_ref().and_then(|s| s.template_of(index));
        if transient {
            self.pool
                .recycle_to_transient(index, template, pooled, &mut self.host);
        } else {
            self.pool
                .recycle_to_main(index, template, pooled, &mut self.host);
        }
        report.recycled += 1;
    }

    fn recycle_visible(&mut self, report: &mut UpdateReport) {
        if let Some(range) = self.visible.take() {
            for index in range.indexes() {
                self.recycle_index(index, false, report);
            }
        }
    }

    fn move_to_index_into(&mut self, index: usize, report: &mut UpdateReport) {
        if !self.enabled || index >= self.data_count {
            return;
        }
        let Some(rect) = self.containers.get(index).map(|c| c.rect) else {
            return;
        };
        self.host.stop_movement();
        self.anchor_hint = Some(index);
        self.apply_offset(rect.start(self.options.mode.scroll_axis()));
        self.update_visible_into(report);
    }

    fn apply_offset(&mut self, offset: f32) {
        let axis = self.options.mode.scroll_axis();
        let normalized = self.normalized_for_offset(offset);
        let position = self.host.normalized_position().with_along(axis, normalized);
        self.host.set_normalized_position(position);
    }
}

impl<D, H> fmt::Debug for LoopView<D, H>
where
    H: ViewHost + ScrollHost,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoopView")
            .field("options", &self.options)
            .field("data_count", &self.data_count)
            .field("content_size", &self.content_size)
            .field("visible", &self.visible)
            .field("drag_state", &self.arbiter.state())
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
