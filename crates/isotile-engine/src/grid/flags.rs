bitflags::bitflags! {
    /// Neighbor directions claimed by an object covering more than one tile.
    ///
    /// A set bit means the neighbor in that direction is covered by the same
    /// object, so this tile's loc phase waits for that neighbor's ground.
    #[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
    pub struct SpanFlags: u8 {
        const WEST  = 1 << 0;
        const NORTH = 1 << 1;
        const EAST  = 1 << 2;
        const SOUTH = 1 << 3;
    }
}

bitflags::bitflags! {
    /// Sides and corners of a tile a wall (or wall decoration) occupies.
    #[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
    pub struct WallSide: u8 {
        const WEST      = 1 << 0;
        const NORTH     = 1 << 1;
        const EAST      = 1 << 2;
        const SOUTH     = 1 << 3;
        const NORTHWEST = 1 << 4;
        const NORTHEAST = 1 << 5;
        const SOUTHEAST = 1 << 6;
        const SOUTHWEST = 1 << 7;
    }
}

impl WallSide {
    /// Sides and corners facing a camera at `(camera_sx, camera_sz)` for the
    /// tile at `(sx, sz)`.
    ///
    /// A camera on the tile's own row counts as south of it, and on its own
    /// column as west of it.
    pub fn facing_camera(camera_sx: i32, camera_sz: i32, sx: i32, sz: i32) -> Self {
        let mut near = WallSide::empty();

        if sz < camera_sz {
            near |= WallSide::NORTH | WallSide::NORTHWEST | WallSide::NORTHEAST;
        } else {
            near |= WallSide::SOUTH | WallSide::SOUTHEAST | WallSide::SOUTHWEST;
        }

        if sx < camera_sx {
            near |= WallSide::EAST | WallSide::NORTHEAST | WallSide::SOUTHEAST;
        } else {
            near |= WallSide::WEST | WallSide::NORTHWEST | WallSide::SOUTHWEST;
        }

        near
    }
}

bitflags::bitflags! {
    /// Per-tile flags.
    #[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
    pub struct TileFlags: u16 {
        /// Tile content is drawn underneath another tile through its bridge
        /// link; the tile itself is never painted directly.
        const BRIDGE_TARGET = 1 << 0;
    }
}

bitflags::bitflags! {
    /// Wall decoration options.
    #[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
    pub struct ThroughWallFlags: u8 {
        /// Decoration A and B are the two faces of one decoration passing
        /// through the wall; the visible face is chosen by camera quadrant.
        const THROUGH_WALL = 0x01;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_north_east_faces_north_east() {
        let near = WallSide::facing_camera(10, 10, 5, 5);
        assert!(near.contains(WallSide::NORTH | WallSide::EAST | WallSide::NORTHEAST));
        assert!(!near.intersects(WallSide::SOUTH | WallSide::WEST | WallSide::SOUTHWEST));
        // Mixed corners belong to whichever axis claims them.
        assert!(near.contains(WallSide::NORTHWEST | WallSide::SOUTHEAST));
    }

    #[test]
    fn camera_on_same_tile_faces_south_west() {
        let near = WallSide::facing_camera(5, 5, 5, 5);
        assert!(near.contains(WallSide::SOUTH | WallSide::WEST | WallSide::SOUTHWEST));
        assert!(!near.intersects(WallSide::NORTH | WallSide::EAST | WallSide::NORTHEAST));
    }

    #[test]
    fn far_mask_is_complement() {
        let near = WallSide::facing_camera(0, 9, 5, 5);
        let far = near.complement();
        assert_eq!(near | far, WallSide::all());
        assert!((near & far).is_empty());
        assert!(far.contains(WallSide::EAST));
    }
}
