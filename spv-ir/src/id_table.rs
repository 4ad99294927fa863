//! Result id to instruction table
//!
//! Ids are handed out densely by the builder, so the table is a plain
//! vector indexed by id. It grows a chunk beyond the highest id seen.

use crate::refs::InstrRef;
use log::{debug, trace};
use spv_common::{Id, NO_RESULT};

/// Dense map from result id to the instruction defining it
#[derive(Debug, Clone)]
pub struct IdTable {
    slots: Vec<Option<InstrRef>>,
    chunk: usize,
}

impl IdTable {
    /// Create an empty table that grows `chunk` slots past the id that
    /// overflowed it.
    pub fn new(chunk: usize) -> Self {
        assert!(chunk > 0, "id table growth chunk must be non-zero");
        Self {
            slots: Vec::new(),
            chunk,
        }
    }

    /// Register `instruction` as the definition of `id`.
    ///
    /// Panics if `id` is the reserved no-result id or is already mapped.
    pub fn map(&mut self, id: Id, instruction: InstrRef) {
        assert_ne!(id, NO_RESULT, "cannot map the reserved id 0");

        let index = id as usize;
        if index >= self.slots.len() {
            let new_len = index + self.chunk;
            debug!("Growing id table from {} to {} slots for %{}", self.slots.len(), new_len, id);
            self.slots.resize(new_len, None);
        }

        assert!(self.slots[index].is_none(), "id %{} is already mapped", id);
        trace!("map %{} -> {:?}", id, instruction);
        self.slots[index] = Some(instruction);
    }

    pub fn get(&self, id: Id) -> Option<InstrRef> {
        self.slots.get(id as usize).copied().flatten()
    }

    pub fn contains(&self, id: Id) -> bool {
        self.get(id).is_some()
    }

    /// Number of slots currently allocated
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of mapped ids
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grows_in_chunks() {
        let mut table = IdTable::new(16);
        assert_eq!(table.capacity(), 0);

        table.map(1, InstrRef(0));
        assert_eq!(table.capacity(), 17);

        // Still fits
        table.map(16, InstrRef(1));
        assert_eq!(table.capacity(), 17);

        table.map(40, InstrRef(2));
        assert_eq!(table.capacity(), 56);
        assert_eq!(table.get(40), Some(InstrRef(2)));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_unmapped_lookups() {
        let mut table = IdTable::new(4);
        assert!(table.is_empty());
        assert_eq!(table.get(3), None);

        table.map(2, InstrRef(0));
        assert!(!table.contains(1));
        assert!(table.contains(2));
        assert_eq!(table.get(1000), None);
    }

    #[test]
    #[should_panic(expected = "already mapped")]
    fn test_double_map_panics() {
        let mut table = IdTable::new(16);
        table.map(5, InstrRef(0));
        table.map(5, InstrRef(1));
    }

    #[test]
    #[should_panic(expected = "reserved id 0")]
    fn test_map_reserved_id_panics() {
        let mut table = IdTable::new(16);
        table.map(NO_RESULT, InstrRef(0));
    }
}
