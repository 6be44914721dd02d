use quarry_items::{ItemLookup, ItemStack};

use crate::catalog::{CatalogEntry, VANILLA_CATALOG, parse_catalog};
use crate::error::CatalogError;
use crate::payload::decode_payload;
use crate::registry::CreativeRegistry;

/// Counters from one resolve pass.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ResolveStats {
    pub entries: usize,
    pub added: usize,
    pub unknown: usize,
    pub variant_mismatch: usize,
    pub decoded: usize,
}

/// Resolves catalog entries against `lookup`, in order.
///
/// Entries whose (id, meta) is not registered, or that resolve to an item of
/// a different meta, are skipped. Payloads are only decoded for items that
/// can rebuild themselves from aux data; for those a bad payload is an error
/// and nothing is returned.
pub fn resolve_entries<L>(
    entries: &[CatalogEntry],
    lookup: &L,
) -> Result<(Vec<ItemStack>, ResolveStats), CatalogError>
where
    L: ItemLookup + ?Sized,
{
    let mut stats = ResolveStats {
        entries: entries.len(),
        ..Default::default()
    };
    let mut stacks = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let Some(mut item) = lookup.item_by_id(entry.id, entry.meta) else {
            log::trace!("creative: no item type for ({}, {})", entry.id, entry.meta);
            stats.unknown += 1;
            continue;
        };
        let (_, meta) = item.encode_item();
        if meta != entry.meta {
            log::trace!(
                "creative: ({}, {}) resolved to {} with meta {}; skipped",
                entry.id,
                entry.meta,
                item.name(),
                meta
            );
            stats.variant_mismatch += 1;
            continue;
        }

        if let (Some(decoder), Some(b64)) = (item.as_aux_decoder(), entry.nbt.as_deref()) {
            let data = decode_payload(index, entry, b64)?;
            if !data.is_empty() {
                let decoded = decoder.decode_aux(&data);
                log::debug!(
                    "creative: rebuilt {} from {} aux keys",
                    decoded.name(),
                    data.len()
                );
                item = decoded;
                stats.decoded += 1;
            }
        }

        stacks.push(ItemStack::single(item));
    }

    stats.added = stacks.len();
    Ok((stacks, stats))
}

/// Builds a creative registry from catalog text.
pub fn bootstrap_from_str<L>(text: &str, lookup: &L) -> Result<CreativeRegistry, CatalogError>
where
    L: ItemLookup + ?Sized,
{
    let entries = parse_catalog(text)?;
    let (stacks, stats) = resolve_entries(&entries, lookup)?;
    log::info!(
        "creative inventory: {} of {} catalog entries ({} unknown, {} variant mismatches, {} with aux data)",
        stats.added,
        stats.entries,
        stats.unknown,
        stats.variant_mismatch,
        stats.decoded
    );
    Ok(CreativeRegistry::from_stacks(stacks))
}

/// Builds the creative registry from the embedded vanilla catalog.
/// Call once, after every item type has been registered.
pub fn bootstrap<L>(lookup: &L) -> Result<CreativeRegistry, CatalogError>
where
    L: ItemLookup + ?Sized,
{
    bootstrap_from_str(VANILLA_CATALOG, lookup)
}
