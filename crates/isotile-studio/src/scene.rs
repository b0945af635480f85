use isotile_engine::coords::TileCoord;
use isotile_engine::grid::{EntityId, GroundObjectLayer, ThroughWallFlags, WallSide, WallSlot};
use isotile_engine::painter::Painter;

pub const WIDTH: u16 = 24;
pub const HEIGHT: u16 = 24;
pub const LEVELS: u8 = 4;

/// Hands out entity ids the way a model table would.
struct Entities(u32);

impl Entities {
    fn next(&mut self) -> EntityId {
        self.0 += 1;
        EntityId(self.0)
    }
}

/// Builds the demo village: a walled house with a window and a table, a long
/// bench in the yard, and a bridge over a stream.
pub fn build(painter: &mut Painter) {
    let mut ids = Entities(0);

    house(painter, &mut ids, 4, 4);
    yard(painter, &mut ids);
    bridge(painter, &mut ids, 16);
    painter.mark_static();
    log::info!("demo scene: {} elements", painter.element_count());
}

fn at(sx: u16, sz: u16, slevel: u8) -> TileCoord {
    TileCoord::new(sx, sz, slevel)
}

/// A 5x4 room with walls on all four sides and a window through the south wall.
fn house(painter: &mut Painter, ids: &mut Entities, x0: u16, z0: u16) {
    let (x1, z1) = (x0 + 4, z0 + 3);

    for x in x0..=x1 {
        painter.add_wall(at(x, z0, 0), WallSlot::A, ids.next(), WallSide::SOUTH);
        painter.add_wall(at(x, z1, 0), WallSlot::A, ids.next(), WallSide::NORTH);
    }
    for z in z0..=z1 {
        painter.add_wall(at(x0, z, 0), WallSlot::B, ids.next(), WallSide::WEST);
        painter.add_wall(at(x1, z, 0), WallSlot::B, ids.next(), WallSide::EAST);
    }

    let window = at(x0 + 2, z0, 0);
    painter.add_wall_decor(window, WallSlot::A, ids.next(), WallSide::SOUTH, ThroughWallFlags::THROUGH_WALL);
    painter.add_wall_decor(window, WallSlot::B, ids.next(), WallSide::SOUTH, ThroughWallFlags::empty());

    let table = at(x0 + 1, z0 + 1, 0);
    painter.add_normal_scenery(table, ids.next(), 2, 2);
    painter.add_ground_object(table, GroundObjectLayer::Middle, ids.next());
    painter.add_ground_decor(at(x0 + 3, z0 + 2, 0), ids.next());
}

fn yard(painter: &mut Painter, ids: &mut Entities) {
    painter.add_normal_scenery(at(11, 5, 0), ids.next(), 3, 1);
    painter.add_normal_scenery(at(12, 9, 0), ids.next(), 1, 1);
    painter.add_ground_object(at(10, 10, 0), GroundObjectLayer::Bottom, ids.next());
    painter.add_ground_object(at(10, 10, 0), GroundObjectLayer::Top, ids.next());
}

/// A stream along z = `stream_z` crossed by a bridge deck on level 1.
///
/// The column under the deck is shifted down one level so the deck draws as
/// level 0, and the ground beneath moves to the top level where it is drawn
/// only through the bridge link.
fn bridge(painter: &mut Painter, ids: &mut Entities, stream_z: u16) {
    for x in 6..10 {
        let bank = at(x, stream_z, 0);
        painter.add_wall(bank, WallSlot::A, ids.next(), WallSide::SOUTH);
        painter.add_ground_decor(bank.with_level(1), ids.next());
        painter.add_wall(bank.with_level(1), WallSlot::A, ids.next(), WallSide::NORTH);

        let under = painter.shift_column_down(x, stream_z);
        painter.set_terrain_level(under, 0);
        painter.set_terrain_level(bank, 1);
        painter.set_bridge(bank, under);
    }
}
