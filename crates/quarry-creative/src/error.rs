use quarry_nbt::NbtError;

/// The embedded catalog or one of its payloads could not be decoded.
/// Any of these leaves the server without a creative inventory.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("creative catalog is malformed: {0}")]
    MalformedCatalog(#[from] serde_json::Error),
    #[error("catalog entry {index} ({id}, {meta}): aux data is not valid base64: {source}")]
    AuxEncoding {
        index: usize,
        id: i32,
        meta: i16,
        #[source]
        source: base64::DecodeError,
    },
    #[error("catalog entry {index} ({id}, {meta}): aux data is not valid NBT: {source}")]
    AuxStructure {
        index: usize,
        id: i32,
        meta: i16,
        #[source]
        source: NbtError,
    },
}
