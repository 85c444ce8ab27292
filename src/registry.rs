//! Decoration registry capability and an in-memory implementation.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::render::DecorationRequest;

/// Handle for a registered decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DecorationId(u64);

/// Host store for decorations.
pub trait DecorationRegistry {
    fn add(&mut self, request: DecorationRequest) -> DecorationId;

    /// Removes a decoration. Returns `false` if `id` was not registered.
    fn remove(&mut self, id: DecorationId) -> bool;
}

/// Registry kept in a map, ordered by creation.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    next_id: u64,
    decorations: BTreeMap<DecorationId, DecorationRequest>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.decorations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }

    pub fn get(&self, id: DecorationId) -> Option<&DecorationRequest> {
        self.decorations.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DecorationId, &DecorationRequest)> {
        self.decorations.iter().map(|(id, d)| (*id, d))
    }
}

impl DecorationRegistry for MemoryRegistry {
    fn add(&mut self, request: DecorationRequest) -> DecorationId {
        let id = DecorationId(self.next_id);
        self.next_id += 1;
        self.decorations.insert(id, request);
        id
    }

    fn remove(&mut self, id: DecorationId) -> bool {
        self.decorations.remove(&id).is_some()
    }
}
