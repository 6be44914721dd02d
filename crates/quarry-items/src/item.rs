use std::any::Any;
use std::fmt;
use std::sync::Arc;

use quarry_nbt::Compound;

/// A registered kind of item.
pub trait Item: fmt::Debug + Send + Sync {
    /// Numeric identity of the item: type id and variant (meta).
    fn encode_item(&self) -> (i32, i16);

    fn name(&self) -> String;

    /// Optional capability: items that can be rebuilt from auxiliary data return themselves here.
    fn as_aux_decoder(&self) -> Option<&dyn AuxDecoder> {
        None
    }

    fn as_any(&self) -> &dyn Any;
}

/// Rebuilds an item from decoded auxiliary data. Keys the decoder does not
/// understand are ignored; missing keys keep the receiver's values.
pub trait AuxDecoder {
    fn decode_aux(&self, data: &Compound) -> Arc<dyn Item>;
}

/// Lookup of a registered item by (id, meta).
pub trait ItemLookup {
    fn item_by_id(&self, id: i32, meta: i16) -> Option<Arc<dyn Item>>;
}

impl<F> ItemLookup for F
where
    F: Fn(i32, i16) -> Option<Arc<dyn Item>>,
{
    fn item_by_id(&self, id: i32, meta: i16) -> Option<Arc<dyn Item>> {
        self(id, meta)
    }
}
