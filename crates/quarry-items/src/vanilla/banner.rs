use std::any::Any;
use std::sync::Arc;

use quarry_nbt::{Compound, NbtValue};

use super::colour::Colour;
use crate::item::{AuxDecoder, Item};

/// Banner (446). Meta is the dye value of the base colour; `Type` 1 marks the ominous banner.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Banner {
    pub colour: Colour,
    pub ominous: bool,
}

impl Banner {
    pub const ID: i32 = 446;
}

impl Item for Banner {
    fn encode_item(&self) -> (i32, i16) {
        (Self::ID, self.colour.dye() as i16)
    }

    fn name(&self) -> String {
        if self.ominous {
            "ominous_banner".to_string()
        } else {
            format!("{}_banner", self.colour.name())
        }
    }

    fn as_aux_decoder(&self) -> Option<&dyn AuxDecoder> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl AuxDecoder for Banner {
    fn decode_aux(&self, data: &Compound) -> Arc<dyn Item> {
        let ominous = match data.get("Type").and_then(NbtValue::as_integer) {
            Some(t) => t == 1,
            None => self.ominous,
        };
        Arc::new(Banner {
            colour: self.colour,
            ominous,
        })
    }
}
