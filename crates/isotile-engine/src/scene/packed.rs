use bytemuck::{Pod, Zeroable};

use crate::coords::TileCoord;
use crate::grid::EntityId;

use super::DrawCmd;

const KIND_MASK: u32 = 0xF;
const KIND_ELEMENT: u32 = 1;
const KIND_TERRAIN: u32 = 2;

const ENTITY_SHIFT: u32 = 4;

const TERRAIN_X_SHIFT: u32 = 4;
const TERRAIN_Z_SHIFT: u32 = 13;
const TERRAIN_LEVEL_SHIFT: u32 = 22;
const COORD_MASK: u32 = 0x1FF;
const LEVEL_MASK: u32 = 0xF;

/// Fixed-size 32-bit command record.
///
/// Layout (LSB first):
/// - bits 0..4: kind (0 invalid, 1 element, 2 terrain)
/// - element: bits 4..32 entity id
/// - terrain: bits 4..13 x, 13..22 z, 22..26 level
///
/// An all-zero record is the invalid kind, which makes zeroed buffers safe to
/// hand out.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Pod, Zeroable)]
pub struct PackedCmd(pub u32);

impl PackedCmd {
    /// Largest tile coordinate a terrain record can hold on either axis.
    pub const MAX_TERRAIN_COORD: u16 = COORD_MASK as u16;
    /// Largest level a terrain record can hold.
    pub const MAX_TERRAIN_LEVEL: u8 = LEVEL_MASK as u8;

    /// Packs a command.
    ///
    /// # Panics
    /// Panics if the entity id or terrain coordinate does not fit its field.
    #[inline]
    pub fn pack(cmd: DrawCmd) -> Self {
        match cmd {
            DrawCmd::Element(entity) => {
                assert!(entity <= EntityId::MAX, "entity id {} exceeds packed range", entity.0);
                Self(KIND_ELEMENT | (entity.0 << ENTITY_SHIFT))
            }
            DrawCmd::Terrain(coord) => {
                assert!(
                    coord.sx <= Self::MAX_TERRAIN_COORD
                        && coord.sz <= Self::MAX_TERRAIN_COORD
                        && coord.slevel <= Self::MAX_TERRAIN_LEVEL,
                    "terrain {coord} exceeds packed range"
                );
                Self(
                    KIND_TERRAIN
                        | ((coord.sx as u32) << TERRAIN_X_SHIFT)
                        | ((coord.sz as u32) << TERRAIN_Z_SHIFT)
                        | ((coord.slevel as u32) << TERRAIN_LEVEL_SHIFT),
                )
            }
        }
    }

    /// Decodes the record. Returns `None` for the invalid kind.
    #[inline]
    pub fn unpack(self) -> Option<DrawCmd> {
        match self.0 & KIND_MASK {
            KIND_ELEMENT => Some(DrawCmd::Element(EntityId(self.0 >> ENTITY_SHIFT))),
            KIND_TERRAIN => Some(DrawCmd::Terrain(TileCoord::new(
                ((self.0 >> TERRAIN_X_SHIFT) & COORD_MASK) as u16,
                ((self.0 >> TERRAIN_Z_SHIFT) & COORD_MASK) as u16,
                ((self.0 >> TERRAIN_LEVEL_SHIFT) & LEVEL_MASK) as u8,
            ))),
            _ => None,
        }
    }
}

impl From<DrawCmd> for PackedCmd {
    #[inline]
    fn from(cmd: DrawCmd) -> Self {
        Self::pack(cmd)
    }
}
