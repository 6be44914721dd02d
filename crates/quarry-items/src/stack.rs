use std::sync::Arc;

use crate::item::Item;

/// A count of one item type. Counts are always at least 1.
#[derive(Clone, Debug)]
pub struct ItemStack {
    item: Arc<dyn Item>,
    count: u32,
}

impl ItemStack {
    pub fn new(item: Arc<dyn Item>, count: u32) -> Self {
        Self {
            item,
            count: count.max(1),
        }
    }

    pub fn single(item: Arc<dyn Item>) -> Self {
        Self::new(item, 1)
    }

    #[inline]
    pub fn item(&self) -> &Arc<dyn Item> {
        &self.item
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[inline]
    pub fn encode_item(&self) -> (i32, i16) {
        self.item.encode_item()
    }

    /// Concrete view of the held item, if it is a `T`.
    pub fn downcast_ref<T: Item + 'static>(&self) -> Option<&T> {
        self.item.as_any().downcast_ref::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vanilla::{Plain, Planks, WoodType};

    #[test]
    fn zero_count_clamps_to_one() {
        let s = ItemStack::new(Arc::new(Plain::new(1, "stone")), 0);
        assert_eq!(s.count(), 1);
    }

    #[test]
    fn downcast_matches_only_the_held_type() {
        let s = ItemStack::single(Arc::new(Planks {
            wood: WoodType::Birch,
        }));
        assert_eq!(s.downcast_ref::<Planks>().map(|p| p.wood), Some(WoodType::Birch));
        assert!(s.downcast_ref::<Plain>().is_none());
        assert_eq!(s.encode_item(), (5, 2));
    }
}
