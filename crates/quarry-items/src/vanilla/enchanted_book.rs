use std::any::Any;
use std::sync::Arc;

use quarry_nbt::{Compound, NbtValue};

use crate::item::{AuxDecoder, Item};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Enchantment {
    pub id: i16,
    pub level: i16,
}

/// Enchanted book (403). The stored enchantments only come from aux data.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct EnchantedBook {
    pub enchantments: Vec<Enchantment>,
}

impl EnchantedBook {
    pub const ID: i32 = 403;
}

impl Item for EnchantedBook {
    fn encode_item(&self) -> (i32, i16) {
        (Self::ID, 0)
    }

    fn name(&self) -> String {
        "enchanted_book".to_string()
    }

    fn as_aux_decoder(&self) -> Option<&dyn AuxDecoder> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl AuxDecoder for EnchantedBook {
    fn decode_aux(&self, data: &Compound) -> Arc<dyn Item> {
        let Some(list) = data.get("ench").and_then(NbtValue::as_list) else {
            return Arc::new(self.clone());
        };
        let enchantments = list
            .iter()
            .filter_map(NbtValue::as_compound)
            .filter_map(|e| {
                let id = i16::try_from(e.get("id")?.as_integer()?).ok()?;
                let level = match e.get("lvl").and_then(NbtValue::as_integer) {
                    Some(l) => i16::try_from(l).ok()?,
                    None => 1,
                };
                Some(Enchantment { id, level })
            })
            .collect();
        Arc::new(EnchantedBook { enchantments })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ench(id: i16, lvl: i16) -> NbtValue {
        let mut c = Compound::new();
        c.insert("id".into(), NbtValue::Short(id));
        c.insert("lvl".into(), NbtValue::Short(lvl));
        NbtValue::Compound(c)
    }

    #[test]
    fn reads_enchantment_list() {
        let mut data = Compound::new();
        data.insert("ench".into(), NbtValue::List(vec![ench(9, 5), ench(0, 1)]));
        let item = EnchantedBook::default().decode_aux(&data);
        let book = item.as_any().downcast_ref::<EnchantedBook>().unwrap();
        assert_eq!(
            book.enchantments,
            vec![
                Enchantment { id: 9, level: 5 },
                Enchantment { id: 0, level: 1 }
            ]
        );
        assert_eq!(item.encode_item(), (403, 0));
    }

    #[test]
    fn entries_without_id_are_dropped() {
        let mut bad = Compound::new();
        bad.insert("lvl".into(), NbtValue::Short(2));
        let mut data = Compound::new();
        data.insert(
            "ench".into(),
            NbtValue::List(vec![NbtValue::Compound(bad), ench(3, 2)]),
        );
        let item = EnchantedBook::default().decode_aux(&data);
        let book = item.as_any().downcast_ref::<EnchantedBook>().unwrap();
        assert_eq!(book.enchantments, vec![Enchantment { id: 3, level: 2 }]);
    }

    #[test]
    fn out_of_range_values_are_dropped() {
        let wide = |id: i32, lvl: i32| {
            let mut c = Compound::new();
            c.insert("id".into(), NbtValue::Int(id));
            c.insert("lvl".into(), NbtValue::Int(lvl));
            NbtValue::Compound(c)
        };
        let mut data = Compound::new();
        data.insert(
            "ench".into(),
            NbtValue::List(vec![wide(65545, 1), wide(9, 70000), wide(12, 2)]),
        );
        let item = EnchantedBook::default().decode_aux(&data);
        let book = item.as_any().downcast_ref::<EnchantedBook>().unwrap();
        assert_eq!(book.enchantments, vec![Enchantment { id: 12, level: 2 }]);
    }
}
