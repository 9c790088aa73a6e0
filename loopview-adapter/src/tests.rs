use crate::*;

use loopview::{
    Axis, BindError, DataSource, DragEvent, DragState, ItemView, LayoutMode, LoopView,
    LoopViewOptions, ScrollHost, Size, TemplateId, Vec2, ViewHost, VisibleRange,
};

#[derive(Debug, Default)]
struct Label {
    template: TemplateId,
    text: String,
}

impl ItemView for Label {}

#[derive(Debug, Default)]
struct ScrollArea {
    viewport: Size,
    content: Size,
    offset: Vec2,
    velocity: Vec2,
}

impl ScrollArea {
    fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Size::new(width, height),
            ..Self::default()
        }
    }

    fn range(&self) -> Vec2 {
        Vec2::new(
            (self.content.width - self.viewport.width).max(0.0),
            (self.content.height - self.viewport.height).max(0.0),
        )
    }
}

impl ViewHost for ScrollArea {
    type View = Label;

    fn create(&mut self, template: TemplateId) -> Option<Label> {
        Some(Label {
            template,
            text: String::new(),
        })
    }

    fn destroy(&mut self, _view: Label) {}
}

impl ScrollHost for ScrollArea {
    type Bindings = ();

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn scroll_offset(&self) -> Vec2 {
        self.offset
    }

    fn set_content_size(&mut self, size: Size) {
        self.content = size;
    }

    fn normalized_position(&self) -> Vec2 {
        let range = self.range();
        let n = |offset: f32, range: f32| if range > 0.0 { offset / range } else { 0.0 };
        Vec2::new(n(self.offset.x, range.x), n(self.offset.y, range.y))
    }

    fn set_normalized_position(&mut self, position: Vec2) {
        let range = self.range();
        self.offset = Vec2::new(position.x * range.x, position.y * range.y);
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn suspend_bindings(&mut self) {}

    fn restore_bindings(&mut self, _bindings: ()) {}
}

fn vertical(item_height: f32) -> LoopViewOptions {
    LoopViewOptions::new(LayoutMode::Vertical, Size::new(100.0, item_height))
}

fn keyed_list(keys: Vec<u64>) -> ListSource<u64, Label> {
    ListSource::new(keys, |key: &u64, _index, view: &mut Label| {
        view.text = key.to_string();
        Ok(())
    })
}

fn offset_of(lv: &LoopView<ListSource<u64, Label>, ScrollArea>) -> f32 {
    lv.host().scroll_offset().along(Axis::Vertical)
}

#[test]
fn index_source_answers_by_index() {
    let source = IndexSource::new(100, |index, view: &mut Label| {
        view.text = format!("row {index}");
        Ok(())
    })
    .with_size(|index| Size::new(100.0, if index == 0 { 80.0 } else { 40.0 }));

    let mut lv = LoopView::new(vertical(50.0), ScrollArea::new(100.0, 120.0));
    let report = lv.show(source, None);

    assert!(report.is_clean());
    assert_eq!(lv.visible_range(), Some(VisibleRange::new(0, 1)));
    assert_eq!(lv.view(1).map(|v| v.text.as_str()), Some("row 1"));
    assert_eq!(lv.content_size(), Size::new(100.0, 80.0 + 99.0 * 40.0));
}

#[test]
fn index_source_defaults_to_option_size_and_default_template() {
    let mut source = IndexSource::new(3, |_, _: &mut Label| Ok(()));
    assert_eq!(source.size_of(0), None);
    assert_eq!(source.template_of(2), Some(TemplateId::DEFAULT));

    source.set_count(7);
    assert_eq!(source.count(), 7);

    let failing = IndexSource::new(1, |index, _: &mut Label| {
        Err(BindError::new(format!("no row {index}")))
    });
    let mut lv = LoopView::new(vertical(50.0), ScrollArea::new(100.0, 120.0));
    let report = lv.show(failing, None);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].to_string(), "binding item 0 failed: no row 0");
}

#[test]
fn list_source_resolves_templates_per_item() {
    let items = vec![("Fruit", true), ("apple", false), ("pear", false)];
    let source = ListSource::new(items, |item, index, view: &mut Label| {
        view.text = format!("{index}:{}", item.0);
        Ok(())
    })
    .with_template(|item| Some(if item.1 { TemplateId(1) } else { TemplateId::DEFAULT }))
    .with_size(|item| Size::new(100.0, if item.1 { 30.0 } else { 20.0 }));

    let mut lv = LoopView::new(vertical(50.0), ScrollArea::new(100.0, 120.0));
    lv.show(source, None);

    assert_eq!(lv.visible_range(), Some(VisibleRange::new(0, 2)));
    assert_eq!(lv.view(0).map(|v| v.template), Some(TemplateId(1)));
    assert_eq!(lv.view(1).map(|v| v.template), Some(TemplateId::DEFAULT));
    assert_eq!(lv.view(2).map(|v| v.text.as_str()), Some("2:pear"));

    lv.source_mut().unwrap().items_mut().push(("plum", false));
    lv.relayout();
    assert_eq!(lv.data_count(), 4);
    assert_eq!(lv.view(3).map(|v| v.text.as_str()), Some("3:plum"));
}

#[test]
fn list_source_rejects_out_of_range_bind() {
    let mut source = keyed_list(vec![7]);
    let mut view = Label::default();

    assert!(source.bind(0, &mut view).is_ok());
    assert_eq!(view.text, "7");
    assert!(source.bind(5, &mut view).is_err());
    assert_eq!(source.template_of(5), None);
    assert_eq!(source.into_items(), vec![7]);
}

#[test]
fn anchor_preserves_item_position_across_prepend() {
    let keys: Vec<u64> = (0..100).map(|i| 1000 + i).collect();
    let mut lv = LoopView::new(vertical(50.0), ScrollArea::new(100.0, 120.0));
    lv.show(keyed_list(keys), None);
    lv.host_mut().offset = Vec2::new(0.0, 2510.0);
    lv.update_visible();

    let anchor = capture_first_visible_anchor(&lv, |i| lv.source().unwrap().items()[i]).unwrap();
    assert_eq!(anchor.key, 1050);
    assert_eq!(anchor.offset_in_viewport, 10.0);

    // Prepend 10 items: old items shift by +10 indexes.
    let prepended: Vec<u64> = (0..10).map(|i| 2000 + i).chain(1000..1100).collect();
    lv.show(keyed_list(prepended), None);

    let report = apply_anchor(&mut lv, &anchor, |key| prepended_index_of(*key)).unwrap();
    assert!(report.is_clean());
    assert!((offset_of(&lv) - 3010.0).abs() < 1e-2, "{}", offset_of(&lv));
    assert_eq!(lv.visible_range().map(|r| r.first), Some(60));
    assert_eq!(lv.view(60).map(|v| v.text.as_str()), Some("1050"));
}

fn prepended_index_of(key: u64) -> Option<usize> {
    match key {
        2000..2010 => Some((key - 2000) as usize),
        1000..1100 => Some((key - 1000) as usize + 10),
        _ => None,
    }
}

#[test]
fn anchor_with_unknown_key_is_ignored() {
    let mut lv = LoopView::new(vertical(50.0), ScrollArea::new(100.0, 120.0));
    lv.show(keyed_list((0..10).collect()), None);
    let anchor = ScrollAnchor {
        key: 99u64,
        offset_in_viewport: 0.0,
    };

    assert_eq!(apply_anchor(&mut lv, &anchor, |_| None), None);
    assert_eq!(apply_anchor(&mut lv, &anchor, |_| Some(10)), None);
    assert_eq!(offset_of(&lv), 0.0);
}

fn controller(count: usize) -> Controller<IndexSource<Label>, ScrollArea> {
    let mut c = Controller::new(vertical(40.0), ScrollArea::new(100.0, 200.0));
    c.show(IndexSource::new(count, |_, _: &mut Label| Ok(())), None);
    c
}

#[test]
fn controller_tween_drives_scroll_offset() {
    let mut c = controller(1000);

    let to = c
        .start_tween_to_index(500, 0, 100, Easing::SmoothStep)
        .unwrap();
    assert_eq!(to, 20_000.0);
    assert!(c.is_animating());

    let mut last = 0.0f32;
    for now_ms in [0u64, 10, 20, 40, 80, 100, 120] {
        let report = c.tick(now_ms);
        assert!(report.is_clean());
        let offset = c.scroll_offset();
        assert!(offset + 1e-2 >= last, "{offset} < {last}");
        last = offset;
    }
    assert!(!c.is_animating());
    assert!((c.scroll_offset() - to).abs() < 1e-2);
    assert!(c.loop_view().visible_range().unwrap().contains(500));
}

#[test]
fn tween_targets_are_clamped() {
    let mut c = controller(10);
    assert_eq!(c.start_tween_to_index(10, 0, 100, Easing::Linear), None);
    assert_eq!(c.start_tween_to_offset(-50.0, 0, 100, Easing::Linear), 0.0);
    assert_eq!(c.start_tween_to_offset(1e9, 0, 100, Easing::Linear), 200.0);
}

#[test]
fn retargeting_continues_from_current_sample() {
    let mut c = controller(1000);
    c.start_tween_to_offset(1000.0, 0, 100, Easing::Linear);
    c.tick(50);
    let mid = c.scroll_offset();
    assert!((mid - 500.0).abs() < 1e-2, "{mid}");

    c.start_tween_to_offset(0.0, 50, 100, Easing::Linear);
    c.tick(100);
    assert!((c.scroll_offset() - 250.0).abs() < 1e-2);
    c.tick(150);
    assert_eq!(c.scroll_offset(), 0.0);
    assert!(!c.is_animating());
}

#[test]
fn user_input_cancels_tween() {
    let mut c = controller(1000);
    c.start_tween_to_index(500, 0, 100, Easing::EaseInOutCubic);
    c.tick(10);

    c.loop_view_mut().host_mut().offset = Vec2::new(0.0, 400.0);
    c.on_user_scroll();
    assert!(!c.is_animating());
    assert_eq!(
        c.loop_view().visible_range(),
        Some(VisibleRange::new(10, 14))
    );
    c.tick(50);
    assert_eq!(c.scroll_offset(), 400.0);

    c.start_tween_to_index(0, 60, 100, Easing::Linear);
    let event = DragEvent::new(Vec2::ZERO, Vec2::new(0.0, 4.0), Vec2::new(0.0, 4.0));
    assert_eq!(c.begin_drag(&event), DragState::ScrollDragging);
    assert!(!c.is_animating());
    assert_eq!(c.end_drag(&event), DragState::ScrollDragging);
}

#[test]
fn easing_curves_hit_endpoints() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
        assert!((easing.sample(0.5) - 0.5).abs() < 1e-6);
    }

    let tween = Tween::new(10.0, 30.0, 100, 0, Easing::Linear);
    assert_eq!(tween.duration_ms, 1);
    assert_eq!(tween.sample(50), 10.0);
    assert_eq!(tween.sample(101), 30.0);
    assert!(tween.is_done(101));
}
