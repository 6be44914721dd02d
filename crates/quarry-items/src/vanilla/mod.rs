//! Built-in item types, grouped into families that can be registered independently.

pub mod banner;
pub mod colour;
pub mod coloured;
pub mod enchanted_book;
pub mod firework;
pub mod planks;
pub mod plain;

pub use banner::Banner;
pub use colour::Colour;
pub use coloured::{Coloured, ColouredKind};
pub use enchanted_book::{EnchantedBook, Enchantment};
pub use firework::{Firework, FireworkExplosion, FireworkShape, FireworkStar};
pub use planks::{Planks, WoodType};
pub use plain::Plain;

use crate::registry::{ItemRegistry, RegisterError};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Family {
    Plain,
    Planks,
    Coloured,
    Enchantments,
    Fireworks,
    Banners,
}

impl Family {
    pub const ALL: &'static [Family] = &[
        Family::Plain,
        Family::Planks,
        Family::Coloured,
        Family::Enchantments,
        Family::Fireworks,
        Family::Banners,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Family::Plain => "plain",
            Family::Planks => "planks",
            Family::Coloured => "coloured",
            Family::Enchantments => "enchantments",
            Family::Fireworks => "fireworks",
            Family::Banners => "banners",
        }
    }

    pub fn from_name(s: &str) -> Option<Family> {
        Family::ALL.iter().copied().find(|f| f.name() == s)
    }
}

pub fn register_family(reg: &mut ItemRegistry, family: Family) -> Result<(), RegisterError> {
    match family {
        Family::Plain => {
            for &(id, name) in plain::PLAIN_ITEMS {
                reg.register_item(Plain::new(id, name))?;
            }
        }
        Family::Planks => {
            for &wood in WoodType::ALL {
                reg.register_item(Planks { wood })?;
            }
        }
        Family::Coloured => {
            for &kind in ColouredKind::ALL {
                for &colour in Colour::ALL {
                    reg.register_item(Coloured { kind, colour })?;
                }
            }
        }
        Family::Enchantments => {
            reg.register_item(EnchantedBook::default())?;
        }
        Family::Fireworks => {
            reg.register_item(Firework::default())?;
            for &colour in Colour::ALL {
                reg.register_item(FireworkStar::new(colour))?;
            }
        }
        Family::Banners => {
            for &colour in Colour::ALL {
                reg.register_item(Banner {
                    colour,
                    ominous: false,
                })?;
            }
        }
    }
    log::debug!("registered item family {}", family.name());
    Ok(())
}
