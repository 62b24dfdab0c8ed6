use std::cell::Cell;
use std::rc::Rc;

use studytrack_core::{MemoryStorage, TaskStore};

#[test]
fn create_appends_one_undone_task() {
    let storage = MemoryStorage::new();
    let mut store = TaskStore::load(&storage).unwrap();

    let before = store.visible_tasks(None).len();
    let id = store.create("Study", "2025-12-01").unwrap().unwrap();

    let visible = store.visible_tasks(None);
    assert_eq!(visible.len(), before + 1);
    let task = visible.last().unwrap();
    assert_eq!(task.id, id);
    assert_eq!(task.name, "Study");
    assert_eq!(task.date, "2025-12-01");
    assert!(!task.done);
}

#[test]
fn create_trims_the_name() {
    let storage = MemoryStorage::new();
    let mut store = TaskStore::load(&storage).unwrap();

    store.create("  read chapter 4  ", "2025-12-01").unwrap();
    assert_eq!(store.visible_tasks(None)[0].name, "read chapter 4");
}

#[test]
fn create_with_empty_name_or_date_is_a_no_op() {
    let storage = MemoryStorage::new();
    let mut store = TaskStore::load(&storage).unwrap();

    assert!(store.create("", "2025-01-01").unwrap().is_none());
    assert!(store.create("   ", "2025-01-01").unwrap().is_none());
    assert!(store.create("x", "").unwrap().is_none());
    assert!(store.visible_tasks(None).is_empty());
}

#[test]
fn rapid_creations_get_distinct_ids() {
    let storage = MemoryStorage::new();
    let mut store = TaskStore::load(&storage).unwrap();

    let a = store.create("a", "2025-12-01").unwrap().unwrap();
    let b = store.create("b", "2025-12-01").unwrap().unwrap();
    let c = store.create("c", "2025-12-01").unwrap().unwrap();
    assert!(a < b && b < c);
}

#[test]
fn toggle_done_twice_is_an_involution() {
    let storage = MemoryStorage::new();
    let mut store = TaskStore::load(&storage).unwrap();
    let id = store.create("Study", "2025-12-01").unwrap().unwrap();

    assert!(store.toggle_done(id).unwrap());
    assert!(store.visible_tasks(None)[0].done);

    assert!(store.toggle_done(id).unwrap());
    assert!(!store.visible_tasks(None)[0].done);
}

#[test]
fn toggle_done_with_unknown_id_is_a_no_op() {
    let storage = MemoryStorage::new();
    let mut store = TaskStore::load(&storage).unwrap();
    store.create("Study", "2025-12-01").unwrap();

    assert!(!store.toggle_done(42).unwrap());
    assert!(!store.visible_tasks(None)[0].done);
}

#[test]
fn delete_removes_only_the_matching_task() {
    let storage = MemoryStorage::new();
    let mut store = TaskStore::load(&storage).unwrap();
    let keep = store.create("keep", "2025-12-01").unwrap().unwrap();
    let gone = store.create("gone", "2025-12-02").unwrap().unwrap();

    assert!(store.delete(gone).unwrap());
    assert!(!store.delete(gone).unwrap());

    let visible = store.visible_tasks(None);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, keep);
}

#[test]
fn visible_tasks_filters_by_date_preserving_order() {
    let storage = MemoryStorage::new();
    let mut store = TaskStore::load(&storage).unwrap();
    store.create("first", "2025-12-01").unwrap();
    store.create("other day", "2025-12-02").unwrap();
    store.create("second", "2025-12-01").unwrap();

    let filtered = store.visible_tasks(Some("2025-12-01"));
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].name, "first");
    assert_eq!(filtered[1].name, "second");

    assert!(store.visible_tasks(Some("2030-01-01")).is_empty());
    assert_eq!(store.visible_tasks(None).len(), 3);
}

#[test]
fn select_date_drives_the_visible_view() {
    let storage = MemoryStorage::new();
    let mut store = TaskStore::load(&storage).unwrap();
    store.create("a", "2025-12-01").unwrap();
    store.create("b", "2025-12-02").unwrap();

    assert_eq!(store.visible().len(), 2);
    store.select_date(Some("2025-12-02".to_string()));
    assert_eq!(store.selected_date(), Some("2025-12-02"));
    assert_eq!(store.visible().len(), 1);
    store.select_date(None);
    assert_eq!(store.visible().len(), 2);
}

#[test]
fn begin_edit_returns_the_draft_and_removes_the_task() {
    let storage = MemoryStorage::new();
    let mut store = TaskStore::load(&storage).unwrap();
    let id = store.create("Study", "2025-12-01").unwrap().unwrap();

    let draft = store.begin_edit(id).unwrap().unwrap();
    assert_eq!(draft.name, "Study");
    assert_eq!(draft.date, "2025-12-01");
    assert!(store.visible_tasks(None).is_empty());

    assert!(store.begin_edit(id).unwrap().is_none());
}

#[test]
fn dates_with_tasks_collects_every_task_date() {
    let storage = MemoryStorage::new();
    let mut store = TaskStore::load(&storage).unwrap();
    store.create("past", "1999-01-01").unwrap();
    store.create("future", "2099-01-01").unwrap();
    store.create("also future", "2099-01-01").unwrap();

    let dates = store.dates_with_tasks();
    assert_eq!(dates.len(), 2);
    assert!(dates.contains("1999-01-01"));
    assert!(dates.contains("2099-01-01"));
}

#[test]
fn tasks_round_trip_through_storage() {
    let storage = MemoryStorage::new();
    let mut store = TaskStore::load(&storage).unwrap();
    let id = store.create("Study", "2025-12-01").unwrap().unwrap();
    store.toggle_done(id).unwrap();

    let reloaded = TaskStore::load(&storage).unwrap();
    let original: Vec<_> = store.visible_tasks(None).into_iter().cloned().collect();
    let restored: Vec<_> = reloaded.visible_tasks(None).into_iter().cloned().collect();
    assert_eq!(original, restored);
}

#[test]
fn malformed_tasks_blob_degrades_to_empty_list() {
    let storage = MemoryStorage::with_entry("tasks", "{not json");
    let store = TaskStore::load(&storage).unwrap();
    assert!(store.visible_tasks(None).is_empty());
}

#[test]
fn on_change_fires_after_mutations_but_not_no_ops() {
    let storage = MemoryStorage::new();
    let mut store = TaskStore::load(&storage).unwrap();

    let fired = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&fired);
    store.set_on_change(Box::new(move || counter.set(counter.get() + 1)));

    store.create("", "2025-01-01").unwrap();
    assert_eq!(fired.get(), 0);

    let id = store.create("Study", "2025-12-01").unwrap().unwrap();
    assert_eq!(fired.get(), 1);

    store.toggle_done(id).unwrap();
    store.toggle_done(9999).unwrap();
    assert_eq!(fired.get(), 2);

    store.select_date(Some("2025-12-01".to_string()));
    assert_eq!(fired.get(), 3);

    store.delete(id).unwrap();
    assert_eq!(fired.get(), 4);
}
