use crate::coords::TileCoord;
use crate::grid::EntityId;

use super::{DrawCmd, PackedCmd};

/// Command stream for one paint pass.
///
/// Performance characteristics:
/// - `push()` is amortized O(1); capacity grows geometrically and is never released
/// - `clear()` keeps the allocation, so a warmed buffer does not allocate per frame
///
/// Contents are only meaningful until the next `Painter::paint` call, which
/// clears and refills the buffer.
#[derive(Debug, Clone)]
pub struct CommandBuffer {
    commands: Vec<PackedCmd>,
}

impl CommandBuffer {
    pub const DEFAULT_CAPACITY: usize = 512;

    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { commands: Vec::with_capacity(capacity) }
    }

    /// Drops all commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.commands.push(PackedCmd::pack(cmd));
    }

    #[inline]
    pub fn push_terrain(&mut self, coord: TileCoord) {
        self.push(DrawCmd::Terrain(coord));
    }

    #[inline]
    pub fn push_element(&mut self, entity: EntityId) {
        self.push(DrawCmd::Element(entity));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.commands.capacity()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<DrawCmd> {
        self.commands.get(index).and_then(|p| p.unpack())
    }

    /// Iterates commands in draw order (back-to-front).
    pub fn iter(&self) -> impl Iterator<Item = DrawCmd> + '_ {
        self.commands.iter().filter_map(|p| p.unpack())
    }

    /// Returns the packed records as raw bytes, e.g. for a staging upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.commands)
    }
}

impl Default for CommandBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_push_order() {
        let mut buf = CommandBuffer::new();
        buf.push_terrain(TileCoord::new(1, 2, 0));
        buf.push_element(EntityId(7));
        buf.push(DrawCmd::terrain(3, 4, 1));

        let cmds: Vec<_> = buf.iter().collect();
        assert_eq!(
            cmds,
            vec![DrawCmd::terrain(1, 2, 0), DrawCmd::element(7), DrawCmd::terrain(3, 4, 1)]
        );
        assert_eq!(buf.get(1), Some(DrawCmd::element(7)));
        assert_eq!(buf.get(3), None);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buf = CommandBuffer::with_capacity(4);
        for i in 0..100 {
            buf.push_element(EntityId(i));
        }
        let grown = buf.capacity();
        assert!(grown >= 100);

        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), grown);
    }

    #[test]
    fn bytes_are_four_per_command() {
        let mut buf = CommandBuffer::new();
        buf.push_element(EntityId(1));
        buf.push_terrain(TileCoord::new(0, 0, 0));
        assert_eq!(buf.as_bytes().len(), 8);
        assert_eq!(&buf.as_bytes()[..4], &PackedCmd::pack(DrawCmd::element(1)).0.to_ne_bytes());
    }
}
