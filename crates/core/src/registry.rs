//! Live hazard bookkeeping for the turn scheduler.

use crate::types::EntityId;

/// Hazards in registration order; the scheduler steps them in this order every hazard phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntityRegistry {
    hazards: Vec<EntityId>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: EntityId) {
        if !self.hazards.contains(&id) {
            self.hazards.push(id);
        }
    }

    pub fn get(&self, index: usize) -> Option<EntityId> {
        self.hazards.get(index).copied()
    }

    pub fn hazards(&self) -> &[EntityId] {
        &self.hazards
    }

    pub fn len(&self) -> usize {
        self.hazards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hazards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use slotmap::SlotMap;

    use super::*;

    #[test]
    fn registration_order_is_preserved_and_duplicates_ignored() {
        let mut keys: SlotMap<EntityId, ()> = SlotMap::with_key();
        let a = keys.insert(());
        let b = keys.insert(());
        let c = keys.insert(());

        let mut registry = EntityRegistry::new();
        registry.register(b);
        registry.register(a);
        registry.register(b);
        registry.register(c);
        assert_eq!(registry.hazards(), &[b, a, c]);

        assert_eq!(registry.get(1), Some(a));
        assert_eq!(registry.get(3), None);
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }
}
