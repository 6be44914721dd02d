use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use quarry_nbt::Compound;

use crate::catalog::CatalogEntry;
use crate::error::CatalogError;

/// Decodes the entry's base64 payload into its root compound.
/// `index` is the entry's position in the catalog, for error reporting.
pub fn decode_payload(index: usize, entry: &CatalogEntry, b64: &str) -> Result<Compound, CatalogError> {
    let bytes = STANDARD
        .decode(b64)
        .map_err(|source| CatalogError::AuxEncoding {
            index,
            id: entry.id,
            meta: entry.meta,
            source,
        })?;
    quarry_nbt::from_network_bytes(&bytes).map_err(|source| CatalogError::AuxStructure {
        index,
        id: entry.id,
        meta: entry.meta,
        source,
    })
}
