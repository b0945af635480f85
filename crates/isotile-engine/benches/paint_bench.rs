use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use isotile_engine::coords::{CameraTile, TileCoord};
use isotile_engine::grid::{EntityId, GroundObjectLayer, WallSide, WallSlot};
use isotile_engine::painter::Painter;

/// A 104x104x4 region: walled plots, furniture and item stacks every few tiles.
fn build_region() -> Painter {
    let mut painter = Painter::new(104, 104, 4).expect("region dimensions are valid");
    let mut next = 1u32;
    let mut entity = || {
        next += 1;
        EntityId(next)
    };

    for z in (0..104u16).step_by(8) {
        for x in (0..104u16).step_by(8) {
            for i in 0..6 {
                painter.add_wall(TileCoord::new(x + i, z, 0), WallSlot::A, entity(), WallSide::SOUTH);
                painter.add_wall(TileCoord::new(x, z + i, 0), WallSlot::B, entity(), WallSide::WEST);
            }
            painter.add_normal_scenery(TileCoord::new(x + 2, z + 2, 0), entity(), 2, 3);
            painter.add_normal_scenery(TileCoord::new(x + 5, z + 1, 1), entity(), 1, 1);
            painter.add_ground_decor(TileCoord::new(x + 1, z + 4, 0), entity());
            painter.add_ground_object(TileCoord::new(x + 4, z + 5, 0), GroundObjectLayer::Bottom, entity());
        }
    }
    painter
}

fn bench_paint(c: &mut Criterion) {
    let mut painter = build_region();

    let mut group = c.benchmark_group("Painter");

    group.bench_function("paint centre camera", |b| {
        b.iter(|| {
            let commands = painter.paint(black_box(CameraTile::new(52, 52, 0)));
            black_box(commands.len());
        });
    });

    group.bench_function("paint camera sweep", |b| {
        let mut step = 0;
        b.iter(|| {
            step = (step + 7) % 104;
            let commands = painter.paint(black_box(CameraTile::new(step, 103 - step, 0)));
            black_box(commands.len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_paint);
criterion_main!(benches);
