//! Tests for the recipe book and its snapshot persistence.
use satei::recipe::{Recipe, RecipeBook};
use std::fs;
use std::path::PathBuf;

fn temp_snapshot_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("satei-test-{}-{}.bin", tag, std::process::id()))
}

#[test]
fn test_insert_and_find() {
    let mut book = RecipeBook::new();
    let mut widget = Recipe::new("Widget");
    widget.add_item("RAW_ORE", 10);
    let widget_id = book.insert(widget);
    let gear_id = book.insert(Recipe::new("Gear"));

    assert_eq!(book.len(), 2);
    assert_eq!(book.find("Widget"), Some(widget_id));
    assert_eq!(book.find("Gear"), Some(gear_id));
    assert_eq!(book.find("Missing"), None);
    assert_eq!(book.get(widget_id).unwrap().name(), "Widget");
}

#[test]
fn test_overwrite_keeps_id_and_position() {
    let mut book = RecipeBook::new();
    let mut first = Recipe::new("Widget");
    first.add_item("RAW_ORE", 10);
    let first_id = book.insert(first);
    book.insert(Recipe::new("Gear"));

    let mut replacement = Recipe::new("Widget");
    replacement.add_item("RAW_ORE", 3);
    let replacement_id = book.insert(replacement);

    assert_eq!(replacement_id, first_id);
    assert_eq!(book.len(), 2);
    assert_eq!(book.get(first_id).unwrap().items()[0].quantity, 3);

    // Enumeration order is unchanged by the overwrite.
    let names: Vec<&str> = book.iter().map(|(_, recipe)| recipe.name()).collect();
    assert_eq!(names, vec!["Widget", "Gear"]);
}

#[test]
fn test_iteration_follows_insertion_order() {
    let mut book = RecipeBook::new();
    for name in ["Zeta", "Alpha", "Mid"] {
        book.insert(Recipe::new(name));
    }
    let names: Vec<&str> = book.iter().map(|(_, recipe)| recipe.name()).collect();
    assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
}

#[test]
fn test_duplicate_ingredient_overwrites_quantity() {
    let mut recipe = Recipe::new("Widget");
    recipe.add_item("RAW_ORE", 2);
    recipe.add_item("COAL", 1);
    recipe.add_item("RAW_ORE", 5);

    assert_eq!(recipe.items().len(), 2);
    assert_eq!(recipe.items()[0].item_id, "RAW_ORE");
    assert_eq!(recipe.items()[0].quantity, 5);

    let mut outer = Recipe::new("Outer");
    outer.add_sub_recipe(0, 2);
    outer.add_sub_recipe(0, 7);
    assert_eq!(outer.sub_recipes().len(), 1);
    assert_eq!(outer.sub_recipes()[0].quantity, 7);
}

#[test]
fn test_snapshot_round_trip() {
    let path = temp_snapshot_path("round-trip");

    let mut book = RecipeBook::new();
    let mut gear = Recipe::new("Gear");
    gear.add_item("IRON_PLATE", 1);
    let gear_id = book.insert(gear);

    let mut widget = Recipe::new("Widget");
    widget.add_item("RAW_ORE", 10);
    widget.add_sub_recipe(gear_id, 2);
    let widget_id = book.insert(widget);
    book.get_mut(widget_id)
        .unwrap()
        .record_price(1_700_000_000_000, 130.0);

    book.save(&path).unwrap();
    let restored = RecipeBook::from_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(restored.len(), 2);
    assert_eq!(restored.find("Widget"), Some(widget_id));
    let widget = restored.get(widget_id).unwrap();
    assert_eq!(widget.items()[0].item_id, "RAW_ORE");
    assert_eq!(widget.sub_recipes()[0].recipe, gear_id);
    assert_eq!(widget.price_history().len(), 1);
    assert_eq!(widget.price_history()[0].cost, 130.0);
    assert_eq!(widget.price_history()[0].timestamp_ms, 1_700_000_000_000);
}

#[test]
fn test_corrupt_snapshot_fails_to_decode() {
    let path = temp_snapshot_path("corrupt");
    fs::write(&path, b"not a snapshot").unwrap();

    assert!(RecipeBook::from_file(&path).is_err());

    // The forgiving loader degrades to an empty book instead of failing.
    let book = RecipeBook::load_or_default(&path);
    assert!(book.is_empty());

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_load_or_default_on_missing_path() {
    let path = temp_snapshot_path("definitely-missing");
    let book = RecipeBook::load_or_default(&path);
    assert!(book.is_empty());
}
