//! The demo pipeline: build the list, query it, export it, import it back.

use std::io::Write;

use anyhow::Context;

use stockroom_infra::{ItemStore, JsonFileStore};
use stockroom_inventory::{
    Category, Item, filter_by_category, filter_typed, project, sample_items, sample_mixed,
    sort_by_price_desc, total_quantity, total_stock_value, write_items,
};

use crate::config::Config;

/// Run every query over the sample list, writing the report to `out`.
///
/// The list is exported to `config.data_file` and imported back; the reloaded
/// items are returned. Store failures abort the run with the file path in
/// the error context.
pub fn run<W: Write + ?Sized>(config: &Config, out: &mut W) -> anyhow::Result<Vec<Item>> {
    let items = sample_items();

    writeln!(out, "Items:")?;
    write_items(out, &items)?;

    writeln!(out, "\nItems in category {}:", Category::Food)?;
    write_items(out, filter_by_category(&items, Category::Food))?;

    writeln!(out, "\nItems sorted by price, descending:")?;
    write_items(out, sort_by_price_desc(&items))?;

    writeln!(out, "\nTotal stock across all items: {}", total_quantity(&items))?;
    writeln!(
        out,
        "\nTotal stock value across all items: {} €",
        total_stock_value(&items)
    )?;

    let mixed = sample_mixed();
    writeln!(out, "\nItems selected from a mixed collection:")?;
    write_items(out, filter_typed(&mixed))?;

    writeln!(out, "\nItem names and prices:")?;
    for view in project(&items) {
        writeln!(out, "{view}")?;
    }

    let store = JsonFileStore::new(&config.data_file);
    store
        .save(&items)
        .with_context(|| format!("exporting items to {}", config.data_file.display()))?;
    writeln!(out, "\nItems exported to {}", config.data_file.display())?;

    let reloaded = store
        .load()
        .with_context(|| format!("importing items from {}", config.data_file.display()))?;
    writeln!(out, "\nItems loaded from {}:", config.data_file.display())?;
    write_items(out, &reloaded)?;

    Ok(reloaded)
}
