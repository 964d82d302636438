//! Console rendering of items.

use std::io::{self, Write};

use crate::item::Item;

/// Fixed one-line rendering of an item.
pub fn format_item(item: &Item) -> String {
    format!(
        "Name: {}, Price: {}, Quantity: {}, Category: {}",
        item.name(),
        item.price(),
        item.quantity(),
        item.category()
    )
}

/// Write one line per item to `out`.
pub fn write_items<'a, W, I>(out: &mut W, items: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a Item>,
{
    for item in items {
        writeln!(out, "{}", format_item(item))?;
    }
    Ok(())
}

/// Print one line per item to stdout.
pub fn display<'a, I>(items: I) -> io::Result<()>
where
    I: IntoIterator<Item = &'a Item>,
{
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_items(&mut lock, items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_items;
    use crate::item::Category;
    use crate::query::filter_by_category;

    #[test]
    fn format_item_uses_fixed_layout() {
        let items = sample_items();
        assert_eq!(
            format_item(&items[2]),
            "Name: T-shirt, Price: 15.0, Quantity: 20, Category: Apparel"
        );
    }

    #[test]
    fn write_items_accepts_query_results() {
        let items = sample_items();
        let mut out = Vec::new();
        write_items(&mut out, filter_by_category(&items, Category::Leisure)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Name: Jeu vidéo, Price: 60.0, Quantity: 10, Category: Leisure\n"
        );
    }

    #[test]
    fn display_prints_sorted_view_to_stdout() {
        let items = sample_items();
        display(crate::query::sort_by_price_desc(&items)).unwrap();
    }

    #[test]
    fn write_items_with_no_items_writes_nothing() {
        let mut out = Vec::new();
        write_items(&mut out, &[] as &[Item]).unwrap();
        assert!(out.is_empty());
    }
}
