//! CalculationStore running on the file backend.

use gpa_core::engine::calculate_both_gpa;
use gpa_core::model::{Course, FormData, NewCalculation};
use gpa_core::store::{CalculationStore, CALCULATIONS_KEY, LAST_FORM_DATA_KEY, MAX_HISTORY};
use gpa_core::KeyValueStorage;
use gpa_storage::FileStorage;
use tempfile::TempDir;

fn new_calculation(courses: Vec<Course>, existing: Option<(f64, u32)>) -> NewCalculation {
    let (gpa, credits) = match existing {
        Some((g, c)) => (Some(g), c),
        None => (None, 0),
    };
    let results = calculate_both_gpa(gpa, credits, &courses).unwrap();
    NewCalculation {
        has_existing: existing.is_some(),
        existing_gpa: gpa,
        existing_credits: existing.map(|(_, c)| c),
        courses,
        results,
        label: None,
    }
}

#[test]
fn history_survives_reopening() {
    let dir = TempDir::new().unwrap();

    let calc = new_calculation(vec![Course::new("AA", 3)], Some((3.0, 30)));
    let id = {
        let store = CalculationStore::new(FileStorage::new(dir.path()));
        store.save(calc.clone()).unwrap()
    };

    let store = CalculationStore::new(FileStorage::new(dir.path()));
    let list = store.list();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, id);
    assert_eq!(list[0].calculation, calc);
    assert_eq!(list[0].results().term_gpa, 4.0);
}

#[test]
fn eleventh_save_evicts_oldest_on_disk() {
    let dir = TempDir::new().unwrap();
    let store = CalculationStore::new(FileStorage::new(dir.path()));

    let ids: Vec<String> = (0..11)
        .map(|i| {
            let grade = if i % 2 == 0 { "BB" } else { "3.7" };
            store
                .save(new_calculation(vec![Course::new(grade, 3)], None))
                .unwrap()
        })
        .collect();

    let raw = store.storage().get(CALCULATIONS_KEY).unwrap().unwrap();
    let on_disk: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(on_disk.len(), MAX_HISTORY);

    let list = store.list();
    assert!(list.iter().all(|c| c.id != ids[0]));
    assert_eq!(list.first().map(|c| c.id.as_str()), Some(ids[10].as_str()));
}

#[test]
fn corrupt_files_read_as_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("calculations.json"), "[{\"id\": 1").unwrap();
    std::fs::write(dir.path().join("last_form_data.json"), "null?").unwrap();

    let store = CalculationStore::new(FileStorage::new(dir.path()));
    assert!(store.list().is_empty());
    assert!(store.get_last_form_data().is_none());
}

#[test]
fn reads_history_written_in_storage_layout() {
    let dir = TempDir::new().unwrap();
    let legacy = r#"[
        {
            "id": "lx1a2b3c",
            "timestamp": 1727000000000,
            "hasExisting": true,
            "existingGPA": 3.2,
            "existingCredits": 40,
            "courses": [{"grade": "AA", "credit": 3}, {"grade": 3.5, "credit": 2}],
            "results": {"termGPA": 3.8, "cumulativeGPA": 3.27},
            "label": "Fall 2024"
        }
    ]"#;
    std::fs::write(dir.path().join("calculations.json"), legacy).unwrap();

    let store = CalculationStore::new(FileStorage::new(dir.path()));
    let list = store.list();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].label(), Some("Fall 2024"));
    assert_eq!(list[0].calculation.existing_credits, Some(40));
    assert_eq!(list[0].calculation.courses[1], Course::new(3.5, 2));
}

#[test]
fn delete_and_clear_on_disk() {
    let dir = TempDir::new().unwrap();
    let store = CalculationStore::new(FileStorage::new(dir.path()));

    let a = store
        .save(new_calculation(vec![Course::new("CC", 2)], None))
        .unwrap();
    let b = store
        .save(new_calculation(vec![Course::new("DD", 2)], None))
        .unwrap();
    store.save_last_form_data(&FormData::default());

    store.delete(&a).unwrap();
    store.delete("unknown").unwrap();
    let ids: Vec<_> = store.list().into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![b]);

    store.clear_all().unwrap();
    assert!(!dir.path().join("calculations.json").exists());
    assert!(store.storage().get(LAST_FORM_DATA_KEY).unwrap().is_none());
}
