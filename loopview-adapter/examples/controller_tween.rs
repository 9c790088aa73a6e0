use loopview::{
    ItemView, LayoutMode, LoopViewOptions, ScrollHost, Size, TemplateId, Vec2, ViewHost,
};
use loopview_adapter::{Controller, Easing, ListSource};

#[derive(Debug, Default)]
struct Cell(String);

impl ItemView for Cell {}

#[derive(Default)]
struct Surface {
    viewport: Size,
    content: Size,
    offset: Vec2,
    velocity: Vec2,
}

impl Surface {
    fn max_offset(&self) -> Vec2 {
        Vec2::new(
            (self.content.width - self.viewport.width).max(0.0),
            (self.content.height - self.viewport.height).max(0.0),
        )
    }
}

impl ViewHost for Surface {
    type View = Cell;

    fn create(&mut self, _template: TemplateId) -> Option<Cell> {
        Some(Cell::default())
    }

    fn destroy(&mut self, _view: Cell) {}
}

impl ScrollHost for Surface {
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

fn main() {
    // Example: a controller driving tween scrolling through a 4-column photo grid.
    //
    // An adapter would:
    // - start a tween (e.g. in response to a "scroll to item" command)
    // - call tick(now_ms) in a frame loop / timer
    // - draw the views the engine placed
    let photos: Vec<String> = (0..10_000).map(|i| format!("IMG_{i:05}.jpg")).collect();
    let source = ListSource::new(photos, |name: &String, _index, cell: &mut Cell| {
        cell.0.clone_from(name);
        Ok(())
    });

    let options = LoopViewOptions::new(LayoutMode::GridColumnsThenRows, Size::new(100.0, 100.0))
        .with_spacing(4.0, 4.0);
    let surface = Surface {
        viewport: Size::new(412.0, 600.0),
        ..Surface::default()
    };
    let mut c = Controller::new(options, surface);
    c.show(source, None);

    let Some(target) = c.start_tween_to_index(2_000, 0, 240, Easing::SmoothStep) else {
        return;
    };
    println!("target_offset={target}");

    let mut now_ms = 0u64;
    while c.is_animating() {
        now_ms += 16;
        let report = c.tick(now_ms);
        if now_ms % 80 == 0 {
            println!(
                "t={now_ms} off={} visible={:?} rebound={}",
                c.scroll_offset(),
                c.loop_view().visible_range(),
                report.bound
            );
        }
    }

    let lv = c.loop_view();
    println!(
        "done: off={} range={:?} first={:?}",
        c.scroll_offset(),
        lv.visible_range(),
        lv.visible_range().and_then(|r| lv.view(r.first))
    );
}
