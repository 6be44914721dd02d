use std::sync::Arc;

use parking_lot::RwLock;
use quarry_items::ItemStack;

/// Ordered list of stacks offered in the creative inventory.
/// Append-only: stacks are never removed or deduplicated.
#[derive(Default, Clone, Debug)]
pub struct CreativeRegistry {
    stacks: Vec<ItemStack>,
}

impl CreativeRegistry {
    pub fn new() -> Self {
        Self { stacks: Vec::new() }
    }

    pub(crate) fn from_stacks(stacks: Vec<ItemStack>) -> Self {
        Self { stacks }
    }

    #[inline]
    pub fn list(&self) -> &[ItemStack] {
        &self.stacks
    }

    pub fn register(&mut self, stack: ItemStack) {
        self.stacks.push(stack);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ItemStack> {
        self.stacks.iter()
    }
}

/// Creative registry shared between threads once the server is running.
#[derive(Clone, Debug, Default)]
pub struct SharedCreativeRegistry {
    inner: Arc<RwLock<CreativeRegistry>>,
}

impl SharedCreativeRegistry {
    pub fn new(reg: CreativeRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(reg)),
        }
    }

    pub fn register(&self, stack: ItemStack) {
        self.inner.write().register(stack);
    }

    /// Snapshot of the current contents; later registrations do not show up in it.
    pub fn list(&self) -> Vec<ItemStack> {
        self.inner.read().list().to_vec()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarry_items::vanilla::Plain;

    fn stone() -> ItemStack {
        ItemStack::single(Arc::new(Plain::new(1, "stone")))
    }

    #[test]
    fn register_does_not_dedup() {
        let mut reg = CreativeRegistry::new();
        reg.register(stone());
        reg.register(stone());
        assert_eq!(reg.len(), 2);
        assert!(reg.iter().all(|s| s.encode_item() == (1, 0)));
    }

    #[test]
    fn shared_snapshot_is_detached() {
        let shared = SharedCreativeRegistry::default();
        shared.register(stone());
        let snap = shared.list();
        shared.register(stone());
        assert_eq!(snap.len(), 1);
        assert_eq!(shared.len(), 2);
    }

    #[test]
    fn shared_register_from_threads() {
        let shared = SharedCreativeRegistry::default();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let s = shared.clone();
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        s.register(stone());
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(shared.len(), 100);
    }
}
