use std::any::Any;

use super::colour::Colour;
use crate::item::Item;

/// Block families that come in one variant per colour, meta = colour index.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ColouredKind {
    Wool,
    Carpet,
    Terracotta,
    StainedGlass,
    StainedGlassPane,
    Concrete,
    ConcretePowder,
}

impl ColouredKind {
    pub const ALL: &'static [ColouredKind] = &[
        ColouredKind::Wool,
        ColouredKind::Carpet,
        ColouredKind::Terracotta,
        ColouredKind::StainedGlass,
        ColouredKind::StainedGlassPane,
        ColouredKind::Concrete,
        ColouredKind::ConcretePowder,
    ];

    pub fn id(self) -> i32 {
        match self {
            ColouredKind::Wool => 35,
            ColouredKind::Carpet => 171,
            ColouredKind::Terracotta => 159,
            ColouredKind::StainedGlass => 241,
            ColouredKind::StainedGlassPane => 160,
            ColouredKind::Concrete => 236,
            ColouredKind::ConcretePowder => 237,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            ColouredKind::Wool => "wool",
            ColouredKind::Carpet => "carpet",
            ColouredKind::Terracotta => "terracotta",
            ColouredKind::StainedGlass => "stained_glass",
            ColouredKind::StainedGlassPane => "stained_glass_pane",
            ColouredKind::Concrete => "concrete",
            ColouredKind::ConcretePowder => "concrete_powder",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Coloured {
    pub kind: ColouredKind,
    pub colour: Colour,
}

impl Item for Coloured {
    fn encode_item(&self) -> (i32, i16) {
        (self.kind.id(), self.colour.index() as i16)
    }

    fn name(&self) -> String {
        format!("{}_{}", self.colour.name(), self.kind.suffix())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
