//! Black-box tests driving the whole pipeline into an in-memory buffer.

use std::fs;

use rust_decimal::Decimal;
use stockroom_cli::{Config, run};
use stockroom_inventory::{Category, sample_items};
use tempfile::tempdir;

fn run_to_string(config: &Config) -> (anyhow::Result<Vec<stockroom_inventory::Item>>, String) {
    let mut out = Vec::new();
    let result = run(config, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn pipeline_prints_every_section_in_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("articles.json");
    let config = Config::default().with_data_file(&path);

    let (result, output) = run_to_string(&config);
    result.unwrap();

    let expected_sections = [
        "Items:",
        "Items in category Food:",
        "Items sorted by price, descending:",
        "Total stock across all items: 110",
        "Total stock value across all items: 1121.0 €",
        "Items selected from a mixed collection:",
        "Item names and prices:",
        "Items exported to",
        "Items loaded from",
    ];
    let mut cursor = 0;
    for section in expected_sections {
        let found = output[cursor..]
            .find(section)
            .unwrap_or_else(|| panic!("missing section {section:?} in:\n{output}"));
        cursor += found + section.len();
    }
}

#[test]
fn pipeline_output_lists_items_in_fixed_format() {
    let dir = tempdir().unwrap();
    let config = Config::default().with_data_file(dir.path().join("articles.json"));

    let (result, output) = run_to_string(&config);
    result.unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "Items:");
    assert_eq!(lines[1], "Name: Pomme, Price: 2.5, Quantity: 50, Category: Food");
    assert_eq!(lines[4], "Name: Jeu vidéo, Price: 60.0, Quantity: 10, Category: Leisure");

    // Food filter has exactly one match.
    let food_header = lines
        .iter()
        .position(|l| *l == "Items in category Food:")
        .unwrap();
    assert_eq!(lines[food_header + 1], "Name: Pomme, Price: 2.5, Quantity: 50, Category: Food");
    assert_eq!(lines[food_header + 2], "");

    // Mixed collection yields the two items only.
    let mixed_header = lines
        .iter()
        .position(|l| *l == "Items selected from a mixed collection:")
        .unwrap();
    assert_eq!(lines[mixed_header + 1], "Name: Pomme, Price: 2.5, Quantity: 50, Category: Food");
    assert_eq!(
        lines[mixed_header + 2],
        "Name: Savon, Price: 3.2, Quantity: 30, Category: Household"
    );
    assert_eq!(lines[mixed_header + 3], "");

    assert!(lines.contains(&"Name: T-shirt, Price: 15.0"));
}

#[test]
fn pipeline_returns_items_equal_to_sample() {
    let dir = tempdir().unwrap();
    let config = Config::default().with_data_file(dir.path().join("articles.json"));

    let (result, _) = run_to_string(&config);
    let reloaded = result.unwrap();

    assert_eq!(reloaded, sample_items());
    assert_eq!(reloaded[1].category(), Category::Household);
    assert_eq!(reloaded[1].price(), Decimal::new(32, 1));
}

#[test]
fn pipeline_overwrites_existing_data_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("articles.json");
    fs::write(&path, "not json at all").unwrap();
    let config = Config::default().with_data_file(&path);

    let (result, _) = run_to_string(&config);

    assert_eq!(result.unwrap().len(), 4);
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("[\n  {\n    \"Nom\": \"Pomme\""));
}

#[test]
fn pipeline_fails_when_data_file_is_not_writable() {
    let dir = tempdir().unwrap();
    let config = Config::default().with_data_file(dir.path().join("missing").join("articles.json"));

    let (result, output) = run_to_string(&config);

    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("exporting items to"));
    assert!(!output.contains("Items loaded from"));
}
