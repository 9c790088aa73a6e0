// Example: a vertical list of 100k rows backed by a console "UI".
use loopview::{
    BindError, DataSource, ItemView, LayoutMode, LoopView, LoopViewOptions, Rect, ScrollHost,
    Size, TemplateId, Vec2, ViewHost,
};

#[derive(Debug)]
struct Row {
    text: String,
    rect: Rect,
}

impl ItemView for Row {}

#[derive(Default)]
struct Console {
    viewport: Size,
    content: Size,
    offset: Vec2,
    velocity: Vec2,
    created: usize,
}

impl Console {
    fn max_offset(&self) -> Vec2 {
        Vec2::new(
            (self.content.width - self.viewport.width).max(0.0),
            (self.content.height - self.viewport.height).max(0.0),
        )
    }
}

impl ViewHost for Console {
    type View = Row;

    fn create(&mut self, _template: TemplateId) -> Option<Row> {
        self.created += 1;
        Some(Row {
            text: String::new(),
            rect: Rect::default(),
        })
    }

    fn destroy(&mut self, _view: Row) {}

    fn place(&mut self, view: &mut Row, rect: Rect) {
        view.rect = rect;
    }
}

impl ScrollHost for Console {
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
        let max = self.max_offset();
        let n = |v: f32, max: f32| if max > 0.0 { v / max } else { 0.0 };
        Vec2::new(n(self.offset.x, max.x), n(self.offset.y, max.y))
    }

    fn set_normalized_position(&mut self, position: Vec2) {
        let max = self.max_offset();
        self.offset = Vec2::new(position.x * max.x, position.y * max.y);
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

struct Rows(usize);

impl DataSource<Row> for Rows {
    fn count(&self) -> usize {
        self.0
    }

    fn size_of(&self, index: usize) -> Option<Size> {
        // Every tenth row is a taller section header.
        (index % 10 == 0).then(|| Size::new(320.0, 48.0))
    }

    fn bind(&mut self, index: usize, view: &mut Row) -> Result<(), BindError> {
        view.text = format!("row {index}");
        Ok(())
    }
}

fn main() {
    let options = LoopViewOptions::new(LayoutMode::Vertical, Size::new(320.0, 24.0))
        .with_spacing(0.0, 2.0);
    let host = Console {
        viewport: Size::new(320.0, 240.0),
        ..Console::default()
    };
    let mut lv = LoopView::new(options, host);

    let report = lv.show(Rows(100_000), None);
    println!("content={:?} report={report:?}", lv.content_size());
    println!("visible={:?}", lv.visible_range());

    for y in [500.0, 5_000.0, 1_234_567.0] {
        lv.host_mut().offset = Vec2::new(0.0, y);
        lv.update_visible();
        let range = lv.visible_range();
        let first = range.and_then(|r| lv.view(r.first));
        println!("scroll={y} visible={range:?} first={first:?}");
    }

    lv.move_to_index(99_999);
    println!(
        "after move_to_index: offset={:?} visible={:?} views_created={}",
        lv.host().scroll_offset(),
        lv.visible_range(),
        lv.host().created
    );
}
