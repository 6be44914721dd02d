use std::any::Any;

use crate::item::Item;

/// Items with no variants and no extra data, registered at meta 0.
pub const PLAIN_ITEMS: &[(i32, &str)] = &[
    (1, "stone"),
    (2, "grass"),
    (3, "dirt"),
    (4, "cobblestone"),
    (7, "bedrock"),
    (12, "sand"),
    (13, "gravel"),
    (14, "gold_ore"),
    (15, "iron_ore"),
    (16, "coal_ore"),
    (20, "glass"),
    (41, "gold_block"),
    (42, "iron_block"),
    (45, "brick_block"),
    (48, "mossy_cobblestone"),
    (49, "obsidian"),
    (56, "diamond_ore"),
    (57, "diamond_block"),
    (80, "snow"),
    (82, "clay"),
    (87, "netherrack"),
    (89, "glowstone"),
    (133, "emerald_block"),
    (263, "coal"),
    (264, "diamond"),
    (265, "iron_ingot"),
    (266, "gold_ingot"),
    (280, "stick"),
];

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Plain {
    pub id: i32,
    pub name: &'static str,
}

impl Plain {
    pub const fn new(id: i32, name: &'static str) -> Self {
        Self { id, name }
    }
}

impl Item for Plain {
    fn encode_item(&self) -> (i32, i16) {
        (self.id, 0)
    }

    fn name(&self) -> String {
        self.name.to_string()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
