mod common;

use std::fs;
use std::path::{Path, PathBuf};

use common::{date, expense, income};
use fincontrol::config::{Config, ConfigManager};
use fincontrol::core::services::{EntryService, ServiceError};
use fincontrol::core::{compute_annual_matrix, compute_filtered_and_stats, FilterSet};
use fincontrol::domain::{EntryDraft, EntryKind, EntryStatus, YearMonth};
use fincontrol::storage::json_backend::{load_entries_from_path, save_entries_to_path};
use fincontrol::storage::{EntryStore, JsonEntryStore, MemoryEntryStore, STORAGE_KEY};
use tempfile::tempdir;

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    tmp.set_extension("json.tmp");
    tmp
}

#[test]
fn atomic_save_failure_preserves_original_file() {
    let temp = tempdir().unwrap();
    let store = JsonEntryStore::new(temp.path().join("data")).unwrap();
    store
        .save(&income("1", date(2024, 1, 5), "Salary", 42.0))
        .expect("initial save");
    let original = fs::read_to_string(store.path()).expect("read original file");

    // A directory squatting on the staging name makes File::create fail.
    fs::create_dir_all(tmp_path_for(store.path())).unwrap();

    let entries = vec![
        income("1", date(2024, 1, 5), "Salary", 42.0),
        expense("2", date(2024, 1, 6), "Food", 99.0),
    ];
    assert!(save_entries_to_path(&entries, store.path()).is_err());

    let current = fs::read_to_string(store.path()).expect("read after failure");
    assert_eq!(original, current, "original file must remain untouched");
}

#[test]
fn collection_lives_under_the_storage_key() {
    let temp = tempdir().unwrap();
    let store = JsonEntryStore::new(temp.path().to_path_buf()).unwrap();
    assert_eq!(
        store.path().file_name().and_then(|name| name.to_str()),
        Some(format!("{STORAGE_KEY}.json").as_str())
    );
}

#[test]
fn persisted_records_use_type_and_value_fields() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("entries.json");
    save_entries_to_path(&[expense("9", date(2023, 8, 1), "Transport", 12.5)], &path).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let record = &raw[0];
    assert_eq!(record["type"], "expense");
    assert_eq!(record["value"], 12.5);
    assert_eq!(record["status"], "paid");
    assert_eq!(record["date"], "2023-08-01");

    let loaded = load_entries_from_path(&path).unwrap();
    assert_eq!(loaded[0].amount, 12.5);
}

#[test]
fn config_driven_store_seeds_and_feeds_the_engine() {
    let temp = tempdir().unwrap();
    let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
    let config = manager.load().unwrap();
    let store = config.open_store(manager.base_dir()).unwrap();

    let entries = EntryService::new(&store).list().unwrap();
    let view = compute_filtered_and_stats(
        &entries,
        YearMonth::new(2023, 10).unwrap(),
        &FilterSet::default(),
    );
    assert_eq!(view.filtered.len(), 5);
    assert_eq!(view.stats.income, 5000.0);
    assert_eq!(view.stats.expenses_paid, 1950.5);
    assert_eq!(view.stats.expenses_pending, 200.0);
    assert_eq!(view.stats.balance_expected, 2999.75);
    assert_eq!(view.stats.balance_realized, 3049.5);
}

#[test]
fn disabling_the_seed_starts_empty() {
    let temp = tempdir().unwrap();
    let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
    let config = Config {
        seed_sample_data: false,
        data_dir: Some(temp.path().join("elsewhere")),
        ..Config::default()
    };
    manager.save(&config).unwrap();

    let reloaded = manager.load().unwrap();
    assert_eq!(reloaded, config);
    let store = reloaded.open_store(manager.base_dir()).unwrap();
    assert!(store.fetch_all().unwrap().is_empty());
    assert!(store.path().starts_with(temp.path().join("elsewhere")));
}

#[test]
fn service_lifecycle_over_the_json_store() {
    let temp = tempdir().unwrap();
    let store = JsonEntryStore::new(temp.path().to_path_buf()).unwrap();
    let service = EntryService::new(&store);

    let recorded = service
        .record(
            EntryDraft::new(
                date(2024, 4, 2),
                EntryKind::Expense,
                "Health",
                80.0,
                EntryStatus::Pending,
            )
            .with_description("Dentist"),
        )
        .unwrap();

    let mut settled = recorded.clone();
    settled.status = EntryStatus::Paid;
    service.replace(settled.clone()).unwrap();

    let reopened = JsonEntryStore::new(temp.path().to_path_buf()).unwrap();
    assert_eq!(reopened.fetch_all().unwrap(), vec![settled]);

    service.delete(&recorded.id).unwrap();
    service.delete(&recorded.id).unwrap();
    assert!(reopened.fetch_all().unwrap().is_empty());
}

#[test]
fn replacing_an_unknown_entry_is_not_found() {
    let store = MemoryEntryStore::default();
    let service = EntryService::new(&store);
    let err = service
        .replace(expense("ghost", date(2024, 1, 1), "Food", 1.0))
        .expect_err("no such entry");
    assert!(matches!(err, ServiceError::NotFound(id) if id == "ghost"));
}

#[test]
fn stored_negative_amount_never_reaches_the_totals() {
    let temp = tempdir().unwrap();
    let store = JsonEntryStore::new(temp.path().to_path_buf()).unwrap();
    fs::write(
        store.path(),
        r#"[{"id":"n","date":"2023-01-05","type":"expense","category":"Food",
             "description":"","value":-50,"status":"paid"}]"#,
    )
    .unwrap();

    let entries = store.fetch_all().unwrap();
    let view = compute_filtered_and_stats(
        &entries,
        YearMonth::new(2023, 1).unwrap(),
        &FilterSet::default(),
    );
    assert_eq!(view.invalid_amount, 1);
    assert!(view.filtered.is_empty());
    assert_eq!(view.stats.expenses_paid, 0.0);
    assert_eq!(view.stats.balance_realized, 0.0);

    let matrix = compute_annual_matrix(&entries, 2023);
    assert_eq!(matrix.invalid_amount, 1);
    assert!(matrix.expense_rows.is_empty());
    assert_eq!(matrix.total_expense_year, 0.0);
}
