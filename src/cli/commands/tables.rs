//! Weighted table commands - sample, shuffle, list

use anyhow::Context as _;
use log::{debug, warn};

use crate::cli::app::{Context, EntrySource};
use moulberry_utils::output::{SampleResult, TableInfo, TableListResult, WeightedEntry};
use moulberry_utils::probability::WeightedRandomSet;

/// Build the set an entry source refers to
fn resolve(ctx: &Context, source: &EntrySource) -> anyhow::Result<WeightedRandomSet<String>> {
    if let Some(name) = &source.table {
        return ctx
            .config
            .table(name)
            .with_context(|| format!("loading table from {}", ctx.config_path.display()));
    }

    if source.entries.is_empty() {
        anyhow::bail!("No entries given. Use --table NAME or --entry NAME=WEIGHT");
    }

    let mut set = WeightedRandomSet::new();
    for (name, weight) in &source.entries {
        if !set.insert(name.clone(), *weight)? {
            debug!("ignoring duplicate entry {name}");
        }
    }
    Ok(set)
}

/// Draw `count` entries, with or without replacement
pub fn sample(
    ctx: &mut Context,
    source: &EntrySource,
    count: usize,
    unique: bool,
) -> anyhow::Result<()> {
    let mut set = resolve(ctx, source)?;
    debug!("drawing {count} from {} entries (total weight {})", set.len(), set.total_weight());

    let draws: Vec<String> = if unique {
        std::iter::from_fn(|| set.pop_with(&mut ctx.rng)).take(count).collect()
    } else {
        (0..count)
            .filter_map(|_| set.sample_with(&mut ctx.rng).cloned())
            .collect()
    };

    SampleResult {
        table: source.table.clone(),
        unique,
        draws,
    }
    .render(ctx.mode);
    Ok(())
}

/// Print every entry once in weighted-random order
pub fn shuffle(ctx: &mut Context, source: &EntrySource) -> anyhow::Result<()> {
    let set = resolve(ctx, source)?;

    let entries: Vec<WeightedEntry> = set
        .iter_with(&mut ctx.rng)
        .map(|name| WeightedEntry {
            name: name.clone(),
            weight: set.weight_of(name).unwrap_or_default(),
        })
        .collect();

    WeightedEntry::render_all(&entries, ctx.mode);
    Ok(())
}

/// List configured tables
///
/// A table that cannot be built is listed with its error instead of aborting
/// the listing.
pub fn tables(ctx: &Context) -> anyhow::Result<()> {
    let mut tables = Vec::with_capacity(ctx.config.tables.len());
    for (name, entries) in &ctx.config.tables {
        let info = match ctx.config.table(name) {
            Ok(set) => TableInfo {
                name: name.clone(),
                entries: set.len(),
                total_weight: set.total_weight(),
                error: None,
            },
            Err(err) => {
                warn!("table {name} is unusable: {err}");
                TableInfo {
                    name: name.clone(),
                    entries: entries.len(),
                    total_weight: 0.0,
                    error: Some(err.to_string()),
                }
            },
        };
        tables.push(info);
    }

    TableListResult {
        source: ctx.config_path.display().to_string(),
        tables,
    }
    .render(ctx.mode);
    Ok(())
}
