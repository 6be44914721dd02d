use std::any::Any;

use crate::item::Item;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum WoodType {
    Oak,
    Spruce,
    Birch,
    Jungle,
    Acacia,
    DarkOak,
}

impl WoodType {
    pub const ALL: &'static [WoodType] = &[
        WoodType::Oak,
        WoodType::Spruce,
        WoodType::Birch,
        WoodType::Jungle,
        WoodType::Acacia,
        WoodType::DarkOak,
    ];

    pub fn meta(self) -> i16 {
        match self {
            WoodType::Oak => 0,
            WoodType::Spruce => 1,
            WoodType::Birch => 2,
            WoodType::Jungle => 3,
            WoodType::Acacia => 4,
            WoodType::DarkOak => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WoodType::Oak => "oak",
            WoodType::Spruce => "spruce",
            WoodType::Birch => "birch",
            WoodType::Jungle => "jungle",
            WoodType::Acacia => "acacia",
            WoodType::DarkOak => "dark_oak",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Planks {
    pub wood: WoodType,
}

impl Item for Planks {
    fn encode_item(&self) -> (i32, i16) {
        (5, self.wood.meta())
    }

    fn name(&self) -> String {
        format!("{}_planks", self.wood.name())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
