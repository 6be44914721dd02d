use serde::Deserialize;

use crate::error::CatalogError;

/// Catalog shipped with the server, in creative inventory order.
pub const VANILLA_CATALOG: &str = include_str!("../assets/creative_items.json");

#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
pub struct CatalogEntry {
    pub id: i32,
    #[serde(default)]
    pub meta: i16,
    /// Base64 aux payload. Absent and empty are the same.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub nbt: Option<String>,
}

fn empty_as_none<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(de)?;
    Ok(s.filter(|s| !s.is_empty()))
}

/// Parses catalog text. Line breaks carry no meaning anywhere, even inside a
/// token, so they are stripped before the JSON is read.
pub fn parse_catalog(text: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
    let joined: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
    Ok(serde_json::from_str(&joined)?)
}
