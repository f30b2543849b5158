#![allow(clippy::unwrap_used)]

use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;
use uuid::Uuid;

use super::*;
use crate::models::{Category, Expense};

fn expense(title: &str, amount: rust_decimal::Decimal, day: u32) -> Expense {
    Expense {
        id: Uuid::new_v4(),
        title: title.into(),
        amount,
        category: Category::Other,
        date: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
    }
}

#[test]
fn test_load_empty_when_key_absent() {
    let storage = Storage::open_in_memory().unwrap();
    assert!(storage.load().is_empty());
}

#[test]
fn test_save_load_round_trip() {
    let storage = Storage::open_in_memory().unwrap();
    let expenses = vec![
        expense("Coffee", dec!(4.50), 5),
        expense("Flight", dec!(300), 10),
    ];
    storage.save(&expenses);

    let loaded = storage.load();
    assert_eq!(loaded.len(), 2);
    for (stored, original) in loaded.iter().zip(&expenses) {
        assert_eq!(stored.id, original.id);
        assert_eq!(stored.title, original.title);
        assert_eq!(stored.amount, original.amount);
        assert_eq!(stored.category, original.category);
        assert_eq!(stored.date, original.date);
    }
}

#[test]
fn test_save_overwrites_full_snapshot() {
    let storage = Storage::open_in_memory().unwrap();
    storage.save(&[expense("Coffee", dec!(4.50), 5)]);
    storage.save(&[expense("Flight", dec!(300), 10)]);

    let loaded = storage.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].title, "Flight");
}

#[test]
fn test_save_empty_collection() {
    let storage = Storage::open_in_memory().unwrap();
    storage.save(&[expense("Coffee", dec!(4.50), 5)]);
    storage.save(&[]);
    assert!(storage.load().is_empty());
}

#[test]
fn test_corrupt_value_yields_empty() {
    let storage = Storage::open_in_memory().unwrap();
    storage.put_raw("not json at all {{{").unwrap();
    assert!(storage.load().is_empty());
}

#[test]
fn test_wrong_shape_yields_empty() {
    let storage = Storage::open_in_memory().unwrap();
    // Valid JSON, wrong structure.
    storage.put_raw(r#"{"some":"object"}"#).unwrap();
    assert!(storage.load().is_empty());

    storage.put_raw(r#"[{"id":"x","title":1}]"#).unwrap();
    assert!(storage.load().is_empty());
}

#[test]
fn test_loads_browser_era_payload() {
    let storage = Storage::open_in_memory().unwrap();
    storage
        .put_raw(
            r#"[{"id":"5f0c9f9e-9f6a-4a6e-8f0f-0a1b2c3d4e5f",
                 "title":"Groceries","amount":52.25,"category":"Food",
                 "date":"2024-03-02T10:30:00.000Z"}]"#,
        )
        .unwrap();
    let loaded = storage.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].title, "Groceries");
    assert_eq!(loaded[0].amount, dec!(52.25));
}

#[test]
fn test_open_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trackflow.db");

    {
        let storage = Storage::open(&path).unwrap();
        storage.save(&[expense("Rent", dec!(1200), 1)]);
    }

    let storage = Storage::open(&path).unwrap();
    let loaded = storage.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].title, "Rent");
}

#[test]
fn test_migrate_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trackflow.db");
    {
        Storage::open(&path).unwrap();
    }
    // Opening an already-migrated database must not error or reset data.
    {
        let storage = Storage::open(&path).unwrap();
        storage.save(&[expense("Coffee", dec!(4.50), 5)]);
    }
    let storage = Storage::open(&path).unwrap();
    assert_eq!(storage.load().len(), 1);
}
