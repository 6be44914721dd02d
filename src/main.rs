mod config;
mod logging;
mod paths;

use std::error::Error;

use clap::Parser;
use log::LevelFilter;
use quarry_creative::SharedCreativeRegistry;
use quarry_items::{ItemLookup, ItemRegistry, ItemStack};

use crate::config::{ExtraStack, QuarryConfig};

#[derive(Parser, Debug)]
#[command(name = "quarry")]
#[command(about = "Builds the creative inventory from the embedded item catalog", long_about = None)]
struct Args {
    /// Config file (default: $QUARRY_CONFIG, then quarry.toml searched upward)
    #[arg(long)]
    config: Option<String>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,

    /// Print every creative stack once the inventory is built
    #[arg(long)]
    list: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let cfg_path = paths::resolve_config_path(args.config.as_deref());
    let cfg = match &cfg_path {
        Some(p) => QuarryConfig::from_path(p)
            .map_err(|e| format!("failed to load {}: {}", p.display(), e))?,
        None => QuarryConfig::default(),
    };

    let level = args
        .log_level
        .as_deref()
        .and_then(config::parse_level)
        .or_else(|| cfg.logging.level_filter())
        .unwrap_or(LevelFilter::Info);
    logging::init(level, cfg.logging.file.as_deref())?;
    match &cfg_path {
        Some(p) => log::info!("config: {}", p.display()),
        None => log::info!("no {} found; using defaults", paths::CONFIG_FILE),
    }

    let families = cfg.items.enabled_families();
    let items = ItemRegistry::with_families(&families)?;
    log::info!(
        "item registry: {} types in {} families",
        items.len(),
        families.len()
    );

    let creative = match quarry_creative::bootstrap(&items) {
        Ok(reg) => reg,
        Err(e) => {
            log::error!("cannot build creative inventory: {}", e);
            std::process::exit(1);
        }
    };
    let creative = SharedCreativeRegistry::new(creative);
    register_extras(&creative, &items, &cfg.creative.extra);

    if args.list {
        for (i, stack) in creative.list().iter().enumerate() {
            let (id, meta) = stack.encode_item();
            println!("{:4} {:>5}:{:<3} {}", i, id, meta, stack.item().name());
        }
    }
    log::info!("creative inventory ready: {} stacks", creative.len());
    Ok(())
}

fn register_extras(creative: &SharedCreativeRegistry, items: &ItemRegistry, extras: &[ExtraStack]) {
    for extra in extras {
        match items.item_by_id(extra.id, extra.meta) {
            Some(item) if item.encode_item().1 == extra.meta => {
                log::debug!("creative: extra {}", item.name());
                creative.register(ItemStack::single(item));
            }
            _ => log::warn!(
                "quarry.toml: no item type for creative extra ({}, {}); skipped",
                extra.id,
                extra.meta
            ),
        }
    }
}
