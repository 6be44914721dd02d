use std::sync::Arc;

use hashbrown::HashMap;

use crate::item::{Item, ItemLookup};
use crate::vanilla::{self, Family};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    #[error("item ({id}, {meta}) already registered as {existing}")]
    AlreadyExists {
        id: i32,
        meta: i16,
        existing: String,
    },
}

/// Registered item types keyed by their own (id, meta).
#[derive(Default, Clone, Debug)]
pub struct ItemRegistry {
    items: HashMap<(i32, i16), Arc<dyn Item>>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Registry holding every built-in item family.
    pub fn with_vanilla() -> Result<Self, RegisterError> {
        Self::with_families(Family::ALL)
    }

    pub fn with_families(families: &[Family]) -> Result<Self, RegisterError> {
        let mut reg = Self::new();
        for &family in families {
            vanilla::register_family(&mut reg, family)?;
        }
        Ok(reg)
    }

    pub fn register(&mut self, item: Arc<dyn Item>) -> Result<(), RegisterError> {
        let (id, meta) = item.encode_item();
        if let Some(existing) = self.items.get(&(id, meta)) {
            return Err(RegisterError::AlreadyExists {
                id,
                meta,
                existing: existing.name(),
            });
        }
        self.items.insert((id, meta), item);
        Ok(())
    }

    pub fn register_item<T: Item + 'static>(&mut self, item: T) -> Result<(), RegisterError> {
        self.register(Arc::new(item))
    }

    /// Exact (id, meta) match, without the meta 0 fallback of `item_by_id`.
    #[inline]
    pub fn get_exact(&self, id: i32, meta: i16) -> Option<&Arc<dyn Item>> {
        self.items.get(&(id, meta))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemLookup for ItemRegistry {
    /// Exact match first; otherwise the item registered for the same id at meta 0.
    /// Items whose meta carries durability or similar state are only registered once,
    /// at meta 0, so callers that need the exact variant must check `encode_item`.
    fn item_by_id(&self, id: i32, meta: i16) -> Option<Arc<dyn Item>> {
        self.items
            .get(&(id, meta))
            .or_else(|| self.items.get(&(id, 0)))
            .cloned()
    }
}
