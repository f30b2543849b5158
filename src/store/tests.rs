#![allow(clippy::unwrap_used)]

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::Category;

fn draft(title: &str, amount: Decimal, month: u32, day: u32) -> NewExpense {
    NewExpense {
        title: title.into(),
        amount,
        category: Category::Other,
        date: Utc.with_ymd_and_hms(2024, month, day, 0, 0, 0).unwrap(),
    }
}

fn fresh_store() -> ExpenseStore {
    ExpenseStore::open(Storage::open_in_memory().unwrap())
}

// ── Lifecycle ─────────────────────────────────────────────────

#[test]
fn test_new_store_is_uninitialized() {
    let store = ExpenseStore::new(Storage::open_in_memory().unwrap());
    assert_eq!(store.lifecycle(), Lifecycle::Uninitialized);
    assert!(!store.is_initialized());
    assert!(store.expenses().is_empty());
}

#[test]
fn test_init_transitions_once() {
    let mut store = ExpenseStore::new(Storage::open_in_memory().unwrap());
    store.init();
    assert_eq!(store.lifecycle(), Lifecycle::Initialized);

    // A second init must not re-hydrate and wipe the collection.
    store.add(draft("Coffee", dec!(4.50), 1, 5));
    store.init();
    assert_eq!(store.expenses().len(), 1);
}

#[test]
fn test_open_is_initialized() {
    assert!(fresh_store().is_initialized());
}

#[test]
fn test_mutations_before_init_are_not_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trackflow.db");

    {
        let mut store = ExpenseStore::new(Storage::open(&path).unwrap());
        store.add(draft("Coffee", dec!(4.50), 1, 5));
        assert_eq!(store.expenses().len(), 1);
    }

    let store = ExpenseStore::open(Storage::open(&path).unwrap());
    assert!(store.expenses().is_empty());
}

// ── Ordering ──────────────────────────────────────────────────

#[test]
fn test_list_sorted_descending_after_every_add() {
    let mut store = fresh_store();
    store.add(draft("b", dec!(1), 1, 10));
    store.add(draft("a", dec!(1), 1, 5));
    store.add(draft("d", dec!(1), 2, 1));
    store.add(draft("c", dec!(1), 1, 20));

    let dates: Vec<_> = store.expenses().iter().map(|e| e.date).collect();
    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);
    assert_eq!(store.expenses()[0].title, "d");
}

#[test]
fn test_equal_dates_newest_addition_first() {
    let mut store = fresh_store();
    store.add(draft("first", dec!(1), 1, 5));
    store.add(draft("second", dec!(1), 1, 5));

    let titles: Vec<_> = store.expenses().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["second", "first"]);
}

// ── Ids and deletion ──────────────────────────────────────────

#[test]
fn test_ids_are_unique() {
    let mut store = fresh_store();
    for i in 1..=10 {
        store.add(draft("x", dec!(1), 1, i));
    }
    let mut ids: Vec<_> = store.expenses().iter().map(|e| e.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 10);
}

#[test]
fn test_delete_removes_record() {
    let mut store = fresh_store();
    store.add(draft("Coffee", dec!(4.50), 1, 5));
    store.add(draft("Flight", dec!(300), 1, 10));

    let coffee_id = store
        .expenses()
        .iter()
        .find(|e| e.title == "Coffee")
        .unwrap()
        .id;
    store.delete(coffee_id);

    assert!(store.expenses().iter().all(|e| e.id != coffee_id));
    assert_eq!(store.expenses().len(), 1);
}

#[test]
fn test_delete_missing_id_is_noop() {
    let mut store = fresh_store();
    store.add(draft("Coffee", dec!(4.50), 1, 5));
    store.delete(uuid::Uuid::new_v4());
    assert_eq!(store.expenses().len(), 1);
}

#[test]
fn test_delete_preserves_survivor_order() {
    let mut store = fresh_store();
    store.add(draft("a", dec!(1), 1, 1));
    store.add(draft("b", dec!(1), 1, 2));
    store.add(draft("c", dec!(1), 1, 3));

    let middle = store.expenses()[1].id;
    store.delete(middle);

    let titles: Vec<_> = store.expenses().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["c", "a"]);
}

// ── Total ─────────────────────────────────────────────────────

#[test]
fn test_total_empty_is_zero() {
    assert_eq!(fresh_store().total(), Decimal::ZERO);
}

#[test]
fn test_total_matches_sum_after_mutations() {
    let mut store = fresh_store();
    store.add(draft("a", dec!(4.50), 1, 5));
    store.add(draft("b", dec!(300), 1, 10));
    store.add(draft("c", dec!(0.05), 1, 12));
    assert_eq!(store.total(), dec!(304.55));

    let id = store.expenses()[0].id;
    store.delete(id);
    let expected: Decimal = store.expenses().iter().map(|e| e.amount).sum();
    assert_eq!(store.total(), expected);
}

// ── Write-through persistence ─────────────────────────────────

#[test]
fn test_add_writes_through_to_storage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trackflow.db");

    {
        let mut store = ExpenseStore::open(Storage::open(&path).unwrap());
        store.add(draft("Coffee", dec!(4.50), 1, 5));
        store.add(draft("Flight", dec!(300), 1, 10));
    }

    let store = ExpenseStore::open(Storage::open(&path).unwrap());
    assert_eq!(store.expenses().len(), 2);
    assert_eq!(store.expenses()[0].title, "Flight");
    assert_eq!(store.total(), dec!(304.50));
}

#[test]
fn test_delete_writes_through_to_storage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trackflow.db");

    {
        let mut store = ExpenseStore::open(Storage::open(&path).unwrap());
        store.add(draft("Coffee", dec!(4.50), 1, 5));
        let id = store.expenses()[0].id;
        store.delete(id);
    }

    let store = ExpenseStore::open(Storage::open(&path).unwrap());
    assert!(store.expenses().is_empty());
}

#[test]
fn test_corrupt_storage_hydrates_empty() {
    let storage = Storage::open_in_memory().unwrap();
    storage.put_raw("][ definitely not json").unwrap();
    let store = ExpenseStore::open(storage);
    assert!(store.is_initialized());
    assert!(store.expenses().is_empty());
    assert_eq!(store.total(), Decimal::ZERO);
}

// ── End-to-end scenario ───────────────────────────────────────

#[test]
fn test_coffee_flight_scenario() {
    let mut store = fresh_store();
    store.add(NewExpense {
        title: "Coffee".into(),
        amount: dec!(4.50),
        category: Category::Food,
        date: Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap(),
    });
    store.add(NewExpense {
        title: "Flight".into(),
        amount: dec!(300),
        category: Category::Travel,
        date: Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap(),
    });

    let titles: Vec<_> = store.expenses().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Flight", "Coffee"]);
    assert_eq!(store.total(), dec!(304.50));

    let coffee_id = store.expenses()[1].id;
    store.delete(coffee_id);
    let titles: Vec<_> = store.expenses().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Flight"]);
    assert_eq!(store.total(), dec!(300));
}
