use super::{Element, ElementId};

/// Append-only element table.
///
/// Ids are table indices; they stay valid until the table is truncated by
/// `Painter::reset_to_static`.
#[derive(Debug, Default, Clone)]
pub struct ElementTable {
    elements: Vec<Element>,
}

impl ElementTable {
    pub const INITIAL_CAPACITY: usize = 128;

    pub fn new() -> Self {
        Self { elements: Vec::with_capacity(Self::INITIAL_CAPACITY) }
    }

    /// Appends an element and returns its id.
    ///
    /// # Panics
    /// Panics if the table would exceed `u32` ids.
    pub fn push(&mut self, element: Element) -> ElementId {
        assert!(self.elements.len() < u32::MAX as usize, "element table overflow");
        let id = ElementId(self.elements.len() as u32);
        self.elements.push(element);
        id
    }

    /// # Panics
    /// Panics if `id` was never issued (or was truncated away).
    #[inline]
    pub fn get(&self, id: ElementId) -> &Element {
        assert!(id.index() < self.elements.len(), "unknown element {}", id.0);
        &self.elements[id.index()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Drops every element with index `>= len`.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.elements.truncate(len);
    }
}
