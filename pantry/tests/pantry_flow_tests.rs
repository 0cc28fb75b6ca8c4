use pantry::render::render_html;
use pantry::{
    AddOutcome, ConsumeOutcome, InventoryStore, ShoppingList, StandingListStore, StoreConfig,
};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

// Each helper call mimics one program run: load both stores fresh from disk.

fn load(config: &StoreConfig) -> (InventoryStore, StandingListStore) {
    (
        InventoryStore::load(&config.inventory_path, config.capacity),
        StandingListStore::load(&config.standing_path),
    )
}

fn setup() -> (StoreConfig, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    (StoreConfig::in_dir(temp_dir.path()), temp_dir)
}

#[test]
fn test_startup_without_files() {
    let (config, _dir) = setup();
    let (inventory, standing) = load(&config);

    assert!(inventory.is_empty());
    assert!(standing.is_empty());
    assert!(ShoppingList::generate(&inventory, &standing).is_empty());
}

#[test]
fn test_duplicate_add_across_runs() {
    let (config, _dir) = setup();

    let (mut inventory, _) = load(&config);
    inventory.add("butter", 0.25, "kg", 14).unwrap();

    let (mut inventory, _) = load(&config);
    let outcome = inventory.add("butter", 1.0, "kg", 14).unwrap();
    assert_eq!(outcome, AddOutcome::Duplicate("butter".to_string()));

    let (inventory, _) = load(&config);
    assert_eq!(inventory.len(), 1);
    assert!((inventory.get("butter").unwrap().quantity - 0.25).abs() < 1e-9);
}

#[test]
fn test_depletion_threshold_across_runs() {
    let (config, _dir) = setup();

    let (mut inventory, _) = load(&config);
    inventory.add("x", 5.0, "kg", 10).unwrap();

    let (mut inventory, _) = load(&config);
    inventory.consume("x", 4.99).unwrap();

    let (inventory, _) = load(&config);
    let remaining = inventory.get("x").unwrap().quantity;
    assert!((remaining - 0.01).abs() < 1e-9);

    let (mut inventory, _) = load(&config);
    let outcome = inventory.consume("x", 0.01).unwrap();
    assert!(matches!(outcome, ConsumeOutcome::Removed(_)));

    let (inventory, _) = load(&config);
    assert!(inventory.is_empty());
}

#[test]
fn test_capacity_across_runs() {
    let (mut config, _dir) = setup();
    config.capacity = 3;

    for name in ["a", "b", "c", "d", "e"] {
        let (mut inventory, _) = load(&config);
        inventory.add(name, 1.0, "kg", 5).unwrap();
    }

    let (inventory, _) = load(&config);
    assert_eq!(inventory.len(), 3);
    assert!(!inventory.exists("d"));

    // Freeing a slot allows a new add
    let (mut inventory, _) = load(&config);
    inventory.consume("a", 1.0).unwrap();
    let (mut inventory, _) = load(&config);
    assert!(matches!(
        inventory.add("d", 1.0, "kg", 5).unwrap(),
        AddOutcome::Added(_)
    ));
}

#[test]
fn test_corrupt_inventory_lines_are_skipped() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "flour|2.00|kg|2026-10-19|30\nthis is not a record\nsugar|0.40|kg|2026-10-19\nmilk|0.50|liter|2026-10-19|2\n"
    )
    .unwrap();

    let inventory = InventoryStore::load(file.path(), 100);
    let names: Vec<&str> = inventory.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["flour", "milk"]);
}

#[test]
fn test_shopping_list_from_files() {
    let (config, _dir) = setup();
    std::fs::write(
        &config.inventory_path,
        "flour|0.50|kg|2026-10-19|30\n\
         rice|2.00|kg|2026-10-19|30\n\
         tea|0.10|box|2026-10-19|30\n\
         yogurt|0.10|box|2026-10-19|2\n",
    )
    .unwrap();
    std::fs::write(&config.standing_path, "eggs\nrice\nbread|1.00|loaf\neggs\n").unwrap();

    let (inventory, standing) = load(&config);
    let list = ShoppingList::generate(&inventory, &standing);

    let restock: Vec<&str> = list.restock.iter().map(|i| i.record.name.as_str()).collect();
    assert_eq!(restock, vec!["flour", "yogurt"]);
    assert_eq!(list.missing_standard, vec!["eggs", "bread", "eggs"]);

    let html = render_html(&list);
    assert!(html.contains("<li>flour (0.50 kg, expires in 30 days)</li>"));
    assert!(html.contains("<li>yogurt (0.10 box, expires in 2 days)</li>"));
    assert!(html.contains("<li>bread</li>"));
}

#[test]
fn test_adding_standing_item_clears_missing_entry() {
    let (config, _dir) = setup();
    std::fs::write(&config.standing_path, "eggs\n").unwrap();

    let (inventory, standing) = load(&config);
    assert_eq!(
        ShoppingList::generate(&inventory, &standing).missing_standard,
        vec!["eggs"]
    );

    let (mut inventory, _) = load(&config);
    inventory.add("eggs", 12.0, "pcs", 14).unwrap();

    let (inventory, standing) = load(&config);
    let list = ShoppingList::generate(&inventory, &standing);
    assert!(list.missing_standard.is_empty());
    assert!(list.restock.is_empty());
}

#[test]
fn test_staple_edits_feed_shopping_list() {
    let (config, _dir) = setup();

    let (_, mut standing) = load(&config);
    standing.insert("coffee").unwrap();
    standing.insert("salt").unwrap();

    let (inventory, standing) = load(&config);
    assert_eq!(
        ShoppingList::generate(&inventory, &standing).missing_standard,
        vec!["coffee", "salt"]
    );

    let (_, mut standing) = load(&config);
    standing.remove("coffee").unwrap();

    let (inventory, standing) = load(&config);
    assert_eq!(
        ShoppingList::generate(&inventory, &standing).missing_standard,
        vec!["salt"]
    );
}
