//! Item types, stacks, and the (id, meta) item registry.
#![forbid(unsafe_code)]

pub mod item;
pub mod registry;
pub mod stack;
pub mod vanilla;

// Re-exports for convenience
pub use item::{AuxDecoder, Item, ItemLookup};
pub use registry::{ItemRegistry, RegisterError};
pub use stack::ItemStack;
pub use vanilla::{Colour, Family};
