use core::fmt;

use loopview::{
    DataSource, DragEvent, DragState, LoopView, LoopViewOptions, ScrollHost, UpdateReport,
    ViewHost,
};

use crate::{Easing, ScrollAnchor, Tween, apply_anchor, capture_first_visible_anchor};

/// A framework-neutral controller that owns a [`LoopView`] and drives smooth scrolling.
///
/// Adapters drive it by calling:
/// - `tick(now_ms)` once per frame (advances the tween, then ticks the engine)
/// - `on_user_scroll` when the scroll container reports a user-driven change
/// - `begin_drag` / `drag` / `end_drag` for pointer gestures
///
/// Any user input cancels a running tween.
pub struct Controller<D, H>
where
    H: ViewHost + ScrollHost,
{
    view: LoopView<D, H>,
    tween: Option<Tween>,
}

impl<D, H> Controller<D, H>
where
    D: DataSource<H::View>,
    H: ViewHost + ScrollHost,
{
    pub fn new(options: LoopViewOptions, host: H) -> Self {
        Self::from_loop_view(LoopView::new(options, host))
    }

    pub fn from_loop_view(view: LoopView<D, H>) -> Self {
        Self { view, tween: None }
    }

    pub fn loop_view(&self) -> &LoopView<D, H> {
        &self.view
    }

    pub fn loop_view_mut(&mut self) -> &mut LoopView<D, H> {
        &mut self.view
    }

    pub fn into_loop_view(self) -> LoopView<D, H> {
        self.view
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        if self.tween.take().is_some() {
            adebug!("Controller: tween cancelled");
        }
    }

    /// Shows new data. Cancels any tween.
    pub fn show(&mut self, source: D, target: Option<usize>) -> UpdateReport {
        self.cancel_animation();
        self.view.show(source, target)
    }

    /// Advances the controller.
    ///
    /// While a tween is active its sample is applied as the scroll offset; the engine is
    /// ticked afterwards either way.
    pub fn tick(&mut self, now_ms: u64) -> UpdateReport {
        let mut report = UpdateReport::default();
        if let Some(tween) = self.tween {
            report.merge(self.view.scroll_to_offset(tween.sample(now_ms)));
            if tween.is_done(now_ms) {
                self.tween = None;
                adebug!(to = tween.to, "Controller: tween finished");
            }
        }
        report.merge(self.view.tick());
        report
    }

    /// Call this when the scroll container reports a user-driven scroll (wheel, drag, fling).
    ///
    /// This cancels any active tween.
    pub fn on_user_scroll(&mut self) -> UpdateReport {
        self.cancel_animation();
        self.view.update_visible()
    }

    /// Jumps to an item immediately (no animation).
    pub fn move_to_index(&mut self, index: usize) -> UpdateReport {
        self.cancel_animation();
        self.view.move_to_index(index)
    }

    /// Current scroll offset along the scroll axis.
    pub fn scroll_offset(&self) -> f32 {
        let axis = self.view.options().mode.scroll_axis();
        self.view.host().scroll_offset().along(axis)
    }

    /// Starts a tween that brings item `index` to the leading edge.
    ///
    /// Returns the clamped target offset, or `None` for an out-of-range index.
    pub fn start_tween_to_index(
        &mut self,
        index: usize,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Option<f32> {
        let axis = self.view.options().mode.scroll_axis();
        let start = self.view.container(index)?.rect.start(axis);
        Some(self.start_tween_to_offset(start, now_ms, duration_ms, easing))
    }

    /// Starts a tween to a scroll offset. A running tween is retargeted from its current
    /// sample.
    ///
    /// Returns the clamped target offset.
    pub fn start_tween_to_offset(
        &mut self,
        offset: f32,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> f32 {
        let to = offset.clamp(0.0, self.view.scrollable_extent());
        self.view.host_mut().stop_movement();
        match &mut self.tween {
            Some(tween) => {
                tween.retarget(now_ms, to, duration_ms);
                tween.easing = easing;
            }
            None => {
                let from = self.scroll_offset();
                self.tween = Some(Tween::new(from, to, now_ms, duration_ms, easing));
            }
        }
        atrace!(to, duration_ms, "Controller: tween started");
        to
    }

    pub fn begin_drag(&mut self, event: &DragEvent) -> DragState {
        self.cancel_animation();
        self.view.begin_drag(event)
    }

    pub fn drag(&mut self, event: &DragEvent) -> DragState {
        self.view.drag(event)
    }

    pub fn end_drag(&mut self, event: &DragEvent) -> DragState {
        self.view.end_drag(event)
    }

    pub fn capture_first_visible_anchor<K>(
        &self,
        key_of: impl FnOnce(usize) -> K,
    ) -> Option<ScrollAnchor<K>> {
        capture_first_visible_anchor(&self.view, key_of)
    }

    /// Applies a previously captured anchor. Cancels any tween.
    pub fn apply_anchor<K>(
        &mut self,
        anchor: &ScrollAnchor<K>,
        key_to_index: impl FnMut(&K) -> Option<usize>,
    ) -> Option<UpdateReport> {
        self.cancel_animation();
        apply_anchor(&mut self.view, anchor, key_to_index)
    }
}

impl<D, H> fmt::Debug for Controller<D, H>
where
    H: ViewHost + ScrollHost,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("view", &self.view)
            .field("tween", &self.tween)
            .finish()
    }
}
