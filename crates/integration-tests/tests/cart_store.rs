//! Integration tests for the cart store.
//!
//! These drive the store end to end through its public command/query surface,
//! including persistence round-trips across store instances and recovery from
//! corrupted storage.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;

use atelier_cart::{CART_STORAGE_KEY, CartStorage, CartStore, FileStorage, MemoryStorage};
use atelier_core::{Artwork, ArtworkId, CartItem};

fn nymphea() -> Artwork {
    Artwork::new("1")
        .with_title("Nymphéa")
        .with_price(Decimal::new(1500, 0))
}

fn infini() -> Artwork {
    Artwork::new("2")
        .with_title("Infini")
        .with_price(Decimal::new(2000, 0))
}

fn ids(store: &CartStore<impl CartStorage>) -> Vec<String> {
    store
        .items()
        .iter()
        .map(|item| item.artwork.id.to_string())
        .collect()
}

// =============================================================================
// Add / Remove Scenarios
// =============================================================================

#[test]
fn test_add_single_artwork() {
    let mut store = CartStore::new(MemoryStorage::new());
    store.initialize();

    store.add_to_cart(nymphea());

    assert_eq!(store.total_items(), 1);
    assert!(store.is_open());
    assert_eq!(store.total_price(), Decimal::new(1500, 0));
}

#[test]
fn test_adding_same_artwork_twice_keeps_one_entry() {
    let mut store = CartStore::new(MemoryStorage::new());
    store.initialize();

    store.add_to_cart(nymphea());
    store.add_to_cart(nymphea());

    assert_eq!(store.total_items(), 1);
    assert_eq!(store.total_price(), Decimal::new(1500, 0));
}

#[test]
fn test_two_artworks_keep_insertion_order() {
    let mut store = CartStore::new(MemoryStorage::new());
    store.initialize();

    store.add_to_cart(nymphea());
    store.add_to_cart(infini());

    assert_eq!(store.total_items(), 2);
    assert_eq!(store.total_price(), Decimal::new(3500, 0));
    assert_eq!(ids(&store), ["1", "2"]);
}

#[test]
fn test_remove_present_artwork() {
    let mut store = CartStore::new(MemoryStorage::new());
    store.initialize();
    store.add_to_cart(nymphea());
    store.add_to_cart(infini());

    store.remove_from_cart(&ArtworkId::new("1"));

    assert_eq!(store.total_items(), 1);
    assert_eq!(ids(&store), ["2"]);
    assert_eq!(store.total_price(), Decimal::new(2000, 0));
}

#[test]
fn test_remove_absent_artwork_changes_nothing() {
    let mut store = CartStore::new(MemoryStorage::new());
    store.initialize();
    store.add_to_cart(nymphea());
    store.add_to_cart(infini());
    let before = store.items().to_vec();

    store.remove_from_cart(&ArtworkId::new("999"));

    assert_eq!(store.items(), before.as_slice());
}

// =============================================================================
// Persistence Round-Trips
// =============================================================================

#[test]
fn test_new_store_restores_persisted_items() {
    let mut store = CartStore::new(MemoryStorage::new());
    store.initialize();
    store.add_to_cart(nymphea());
    store.add_to_cart(infini());
    let expected = store.items().to_vec();

    let mut fresh = CartStore::new(store.into_storage());
    fresh.initialize();

    assert_eq!(fresh.items(), expected.as_slice());
    assert_eq!(fresh.total_price(), Decimal::new(3500, 0));
}

#[test]
fn test_cart_survives_process_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();

    // First "session": add two artworks and drop the store
    {
        let storage = FileStorage::open(dir.path()).unwrap();
        let mut store = CartStore::new(storage);
        store.initialize();
        store.add_to_cart(nymphea());
        store.add_to_cart(infini());
        store.remove_from_cart(&ArtworkId::new("1"));
    }

    // Second "session": a fresh store over the same directory
    let storage = FileStorage::open(dir.path()).unwrap();
    let mut store = CartStore::new(storage);
    store.initialize();

    assert_eq!(ids(&store), ["2"]);
    assert_eq!(store.total_price(), Decimal::new(2000, 0));
    assert!(!store.is_open(), "open flag must not survive sessions");

    store.clear_cart();

    let storage = FileStorage::open(dir.path()).unwrap();
    let mut store = CartStore::new(storage);
    store.initialize();
    assert_eq!(store.total_items(), 0);
}

#[test]
fn test_persisted_format_is_item_array_under_fixed_key() {
    let mut store = CartStore::new(MemoryStorage::new());
    store.initialize();
    store.add_to_cart(nymphea());

    let storage = store.into_storage();
    let raw = storage.read(CART_STORAGE_KEY).unwrap().unwrap();
    let items: Vec<CartItem> = serde_json::from_str(&raw).unwrap();

    assert_eq!(items.len(), 1);
    let item = items.first().unwrap();
    assert_eq!(item.artwork.id, ArtworkId::new("1"));
    assert_eq!(item.artwork.title, "Nymphéa");
    assert_eq!(item.quantity, 1);
}

// =============================================================================
// Corrupt-Data Recovery
// =============================================================================

#[test]
fn test_truncated_json_yields_empty_cart() {
    let mut storage = MemoryStorage::new();
    storage
        .write(CART_STORAGE_KEY, r#"[{"artwork":{"id":"1","title":"Nym"#)
        .unwrap();

    let mut store = CartStore::new(storage);
    store.initialize();

    assert_eq!(store.total_items(), 0);
}

#[test]
fn test_non_json_payload_yields_empty_cart() {
    let mut storage = MemoryStorage::new();
    storage.write(CART_STORAGE_KEY, "definitely not json").unwrap();

    let mut store = CartStore::new(storage);
    store.initialize();

    assert_eq!(store.total_items(), 0);
}

#[test]
fn test_corrupt_file_on_disk_yields_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut storage = FileStorage::open(dir.path()).unwrap();
        storage.write(CART_STORAGE_KEY, "{{{{").unwrap();
    }

    let storage = FileStorage::open(dir.path()).unwrap();
    let mut store = CartStore::new(storage);
    store.initialize();

    assert_eq!(store.total_items(), 0);

    // The store stays usable after recovery
    store.add_to_cart(nymphea());
    assert_eq!(store.total_items(), 1);
}

#[test]
fn test_recovery_then_mutation_overwrites_corrupt_slot() {
    let mut storage = MemoryStorage::new();
    storage.write(CART_STORAGE_KEY, "garbage").unwrap();

    let mut store = CartStore::new(storage);
    store.initialize();
    store.add_to_cart(infini());

    let storage = store.into_storage();
    let raw = storage.read(CART_STORAGE_KEY).unwrap().unwrap();
    let items: Vec<CartItem> = serde_json::from_str(&raw).unwrap();
    assert_eq!(items.len(), 1);
}

// =============================================================================
// Review Panel Coupling
// =============================================================================

#[test]
fn test_add_opens_review_panel_even_for_duplicates() {
    let mut store = CartStore::new(MemoryStorage::new());
    store.initialize();
    store.add_to_cart(nymphea());
    store.close_cart();

    // Duplicate add: items unchanged, but the panel still opens
    store.add_to_cart(nymphea());

    assert_eq!(store.total_items(), 1);
    assert!(store.is_open());
}

#[test]
fn test_remove_and_clear_leave_panel_alone() {
    let mut store = CartStore::new(MemoryStorage::new());
    store.initialize();
    store.add_to_cart(nymphea());
    store.add_to_cart(infini());
    store.close_cart();

    store.remove_from_cart(&ArtworkId::new("2"));
    assert!(!store.is_open());

    store.clear_cart();
    assert!(!store.is_open());
}

// =============================================================================
// Totals
// =============================================================================

#[test]
fn test_totals_with_unpriced_artwork() {
    let mut store = CartStore::new(MemoryStorage::new());
    store.initialize();
    store.add_to_cart(nymphea());
    store.add_to_cart(Artwork::new("3").with_title("Étude"));

    assert_eq!(store.total_items(), 2);
    assert_eq!(store.total_price(), Decimal::new(1500, 0));
}

#[test]
fn test_total_items_tracks_length_through_mutations() {
    let mut store = CartStore::new(MemoryStorage::new());
    store.initialize();
    assert_eq!(store.total_items(), store.items().len());

    store.add_to_cart(nymphea());
    store.add_to_cart(infini());
    assert_eq!(store.total_items(), store.items().len());

    store.remove_from_cart(&ArtworkId::new("1"));
    assert_eq!(store.total_items(), store.items().len());

    store.clear_cart();
    assert_eq!(store.total_items(), 0);
}
