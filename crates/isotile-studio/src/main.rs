mod scene;

use std::collections::HashMap;

use anyhow::{Context, Result, bail};
use isotile_engine::coords::{CameraTile, TileCoord};
use isotile_engine::grid::{EntityId, GroundObjectLayer};
use isotile_engine::logging::{LoggingConfig, init_logging};
use isotile_engine::painter::Painter;
use isotile_engine::scene::DrawCmd;

/// Entity id used for the player marker in the dynamic layer.
const PLAYER: EntityId = EntityId(9_000);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let camera = parse_camera(std::env::args().skip(1))?;
    let mut painter = Painter::new(scene::WIDTH, scene::HEIGHT, scene::LEVELS)?;
    scene::build(&mut painter);

    // Per-frame content goes on top of the static layer and is dropped after.
    let on_grid = (0..painter.width() as i32).contains(&camera.sx) && (0..painter.height() as i32).contains(&camera.sz);
    if on_grid {
        let tile = TileCoord::new(camera.sx as u16, camera.sz as u16, 0);
        if painter.tile_at(tile).ground_object(GroundObjectLayer::Top).is_none() {
            painter.add_ground_object(tile, GroundObjectLayer::Top, PLAYER);
        }
    }

    let commands: Vec<DrawCmd> = painter.paint(camera).iter().collect();
    let stats = painter.last_stats();
    painter.reset_to_static();

    println!();
    println!("  camera      ({}, {}, {})", camera.sx, camera.sz, camera.slevel);
    println!("  radius      {}", painter.config().draw_radius);
    println!("  commands    {}", stats.commands);
    println!("  tiles       {} processed, {} deferred, {} stale", stats.tiles_processed, stats.deferrals, stats.stale_pops);
    println!();
    print_order_map(&commands, painter.width(), painter.height());
    println!();
    print_elements(&commands);

    Ok(())
}

/// `[sx sz [slevel]]`, defaulting to the middle of the map.
fn parse_camera(mut args: impl Iterator<Item = String>) -> Result<CameraTile> {
    let mut next = |name: &str, default: i32| -> Result<i32> {
        match args.next() {
            Some(arg) => arg.parse().with_context(|| format!("invalid camera {name} {arg:?}")),
            None => Ok(default),
        }
    };

    let sx = next("x", scene::WIDTH as i32 / 2)?;
    let sz = next("z", scene::HEIGHT as i32 / 2)?;
    let slevel = next("level", 0)?;
    if !(0..scene::LEVELS as i32).contains(&slevel) {
        bail!("camera level {slevel} outside 0..{}", scene::LEVELS);
    }
    Ok(CameraTile::new(sx, sz, slevel))
}

/// Level-0 terrain draw order, north at the top. `..` marks tiles not drawn.
fn print_order_map(commands: &[DrawCmd], width: u16, height: u16) {
    let order: HashMap<(u16, u16), usize> = commands
        .iter()
        .filter_map(|c| match c {
            DrawCmd::Terrain(t) if t.slevel == 0 => Some((t.sx, t.sz)),
            _ => None,
        })
        .enumerate()
        .map(|(rank, tile)| (tile, rank))
        .collect();

    println!("  level 0 terrain order (rank / 10):");
    for z in (0..height).rev() {
        let row: String = (0..width)
            .map(|x| match order.get(&(x, z)) {
                Some(rank) => format!("{:>3}", rank / 10),
                None => "  .".to_string(),
            })
            .collect();
        println!("  {row}");
    }
}

fn print_elements(commands: &[DrawCmd]) {
    let elements: Vec<String> = commands
        .iter()
        .filter_map(|c| match c {
            DrawCmd::Element(e) => Some(e.0.to_string()),
            DrawCmd::Terrain(_) => None,
        })
        .collect();
    println!("  elements in draw order:");
    for chunk in elements.chunks(16) {
        println!("  {}", chunk.join(" "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn camera_defaults_to_map_centre() {
        let camera = parse_camera(args(&[])).unwrap();
        assert_eq!(camera, CameraTile::new(12, 12, 0));
    }

    #[test]
    fn camera_accepts_negative_offsets() {
        let camera = parse_camera(args(&["-5", "30", "2"])).unwrap();
        assert_eq!(camera, CameraTile::new(-5, 30, 2));
    }

    #[test]
    fn camera_rejects_garbage() {
        assert!(parse_camera(args(&["x"])).is_err());
        assert!(parse_camera(args(&["1", "2", "9"])).is_err());
    }

    #[test]
    fn demo_scene_paints_every_element() {
        let mut painter = Painter::new(scene::WIDTH, scene::HEIGHT, scene::LEVELS).unwrap();
        scene::build(&mut painter);

        let count = painter.element_count();
        let commands: Vec<DrawCmd> = painter.paint(CameraTile::new(12, 12, 0)).iter().collect();
        let drawn = commands.iter().filter(|c| matches!(c, DrawCmd::Element(_))).count();
        assert!(drawn > 0);
        assert!(drawn <= count);
    }
}
