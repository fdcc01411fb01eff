mod common;

use common::{date, demo_book, subscription};
use subtrack_core::storage::{book_warnings, JsonStorage, StorageBackend};
use subtrack_core::subscriptions::{BillingCycle, Category};
use tempfile::TempDir;

fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
    let temp = TempDir::new().expect("temp dir");
    let storage = JsonStorage::new(Some(temp.path().to_path_buf()), Some(3)).expect("json storage");
    (storage, temp)
}

#[test]
fn save_and_load_preserve_the_whole_book() {
    let (storage, _guard) = storage_with_temp_dir();
    let book = demo_book();
    storage.save(&book, "Pessoal").expect("save book");
    let loaded = storage.load("Pessoal").expect("load book");
    assert_eq!(loaded.name, book.name);
    assert_eq!(loaded.subscriptions, book.subscriptions);
}

#[test]
fn load_fails_for_unknown_books() {
    let (storage, _guard) = storage_with_temp_dir();
    assert!(storage.load("missing").is_err());
}

#[test]
fn canonical_names_map_to_stable_paths() {
    let (storage, _guard) = storage_with_temp_dir();
    let path = storage.book_path("Minha Conta!");
    assert!(path.ends_with("minha_conta_.json"));
}

#[test]
fn restore_rolls_back_to_the_backed_up_state() {
    let (storage, _guard) = storage_with_temp_dir();
    let mut book = demo_book();
    storage.save(&book, "pessoal").expect("save book");
    storage
        .backup(&book, "pessoal", Some("before changes"))
        .expect("create backup");

    book.add_subscription(subscription(
        "Xbox Game Pass",
        49.90,
        BillingCycle::Monthly,
        Category::Gaming,
        date(2025, 1, 5),
    ));
    storage.save(&book, "pessoal").expect("save updated book");
    assert_eq!(storage.load("pessoal").unwrap().subscriptions.len(), 6);

    let backups = storage.list_backups("pessoal").expect("list backups");
    let snapshot = backups.last().expect("at least one backup");
    let restored = storage.restore("pessoal", snapshot).expect("restore");
    assert_eq!(restored.subscriptions.len(), 5);
}

#[test]
fn restore_fails_for_unknown_backups() {
    let (storage, _guard) = storage_with_temp_dir();
    let book = demo_book();
    storage.save(&book, "pessoal").expect("save book");
    assert!(storage.restore("pessoal", "nope.json").is_err());
}

#[test]
fn state_file_remembers_the_last_book() {
    let (storage, _guard) = storage_with_temp_dir();
    assert_eq!(storage.last_book().expect("read state"), None);
    storage
        .record_last_book(Some("Pessoal"))
        .expect("record last book");
    assert_eq!(
        storage.last_book().expect("read state"),
        Some("pessoal".to_string())
    );
    storage.record_last_book(None).expect("clear last book");
    assert_eq!(storage.last_book().expect("read state"), None);
}

#[test]
fn ad_hoc_paths_roundtrip_outside_managed_storage() {
    let (storage, guard) = storage_with_temp_dir();
    let book = demo_book();
    let path = guard.path().join("export.json");
    storage.save_to_path(&book, &path).expect("export");
    let loaded = storage.load_from_path(&path).expect("import");
    assert_eq!(loaded.subscriptions.len(), 5);
}

#[test]
fn warnings_surface_invariant_violations_without_failing() {
    let mut book = demo_book();
    let mut bad = subscription(
        "",
        -10.0,
        BillingCycle::Monthly,
        Category::Other,
        date(2025, 1, 1),
    );
    bad.is_active = false;
    book.add_subscription(bad);
    let warnings = book_warnings(&book);
    assert_eq!(warnings.len(), 2);
    assert!(warnings.iter().any(|w| w.contains("empty name")));
    assert!(warnings.iter().any(|w| w.contains("negative price")));
}
