use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use wavepick::analysis::{AisleMetrics, OrderMetrics};
use wavepick::entities::AisleId;

/// Writes the per-aisle metric table, one CSV row per aisle.
pub fn write_aisle_csv(rows: &[AisleMetrics], path: &Path) -> Result<()> {
    let mut writer = create(path)?;
    writeln!(
        writer,
        "aisle,items,uniqueItems,satOrders,contained,isUsed,rareness"
    )?;
    for row in rows {
        writeln!(
            writer,
            "{},{},{},{},{},{},{}",
            row.aisle,
            row.items,
            row.unique_items,
            row.sat_orders,
            row.contained,
            row.is_used,
            row.rareness
        )?;
    }
    Ok(())
}

/// Writes the per-order metric table, one CSV row per order.
pub fn write_order_csv(rows: &[OrderMetrics], path: &Path) -> Result<()> {
    let mut writer = create(path)?;
    writeln!(writer, "order,items,uniqueItems,isUsed,rareness")?;
    for row in rows {
        writeln!(
            writer,
            "{},{},{},{},{}",
            row.order, row.items, row.unique_items, row.is_used, row.rareness
        )?;
    }
    Ok(())
}

/// Writes the containment report: one line per aisle that dominates at least
/// one other (`aisle id id ...`). When no aisle dominates any other, no file
/// is written at all.
pub fn write_containment_report(contained: &[Vec<AisleId>], path: &Path) -> Result<()> {
    if contained.iter().all(|ids| ids.is_empty()) {
        return Ok(());
    }

    let mut writer = create(path)?;
    for (aisle, ids) in contained.iter().enumerate() {
        if ids.is_empty() {
            continue;
        }
        write!(writer, "{aisle}")?;
        for id in ids {
            write!(writer, " {id}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("could not create {}", path.display()))?;
    Ok(BufWriter::new(file))
}
