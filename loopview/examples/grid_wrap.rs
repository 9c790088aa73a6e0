// Example: the two wrapping grid modes and group alignment, computed without any host.
use loopview::{Containers, LayoutMode, LayoutParams, Size, Vec2, compute_layout};

fn main() {
    let sizes = [
        Size::new(150.0, 40.0),
        Size::new(150.0, 60.0),
        Size::new(100.0, 50.0),
        Size::new(120.0, 30.0),
        Size::new(80.0, 70.0),
    ];

    for mode in [LayoutMode::GridColumnsThenRows, LayoutMode::GridRowsThenColumns] {
        let mut containers: Containers<()> = Containers::new();
        let params = LayoutParams {
            mode,
            spacing: Vec2::new(4.0, 4.0),
            viewport: Size::new(300.0, 120.0),
        };
        let content = compute_layout(&mut containers, sizes.len(), |i| sizes[i], &params);
        println!("{mode:?}: content={content:?}");

        for (index, container) in containers.prefix(sizes.len()).iter().enumerate() {
            println!(
                "  #{index} slot={:?} leading={:?} trailing={:?}",
                container.rect,
                container.placement(mode, false),
                container.placement(mode, true),
            );
        }
    }
}
