use crate::types::NodeId;
use hashbrown::HashSet as FastHashSet;

#[derive(Debug, Default)]
pub struct IdentitySet {
    ids: FastHashSet<NodeId>,
}

impl IdentitySet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn insert(&mut self, id: NodeId) -> bool {
        self.ids.insert(id)
    }

    #[inline]
    pub fn remove(&mut self, id: NodeId) -> bool {
        self.ids.remove(&id)
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
