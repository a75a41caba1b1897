use cadastro_core::{PersonStore, RepoError};
use std::collections::HashSet;
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> PersonStore {
    let store = PersonStore::new(dir.path().join("cadastros.db"));
    store.initialize().expect("initialize should succeed");
    store
}

#[test]
fn initialize_creates_file_and_is_idempotent() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let store = PersonStore::new(dir.path().join("cadastros.db"));

    store.initialize().expect("initialize should succeed");
    assert!(store.db_path().exists());
    store.insert("Ana", "ana@x.com").expect("insert should succeed");
    store.initialize().expect("initialize should succeed");

    assert_eq!(store.list_all().expect("listing should succeed").len(), 1);
}

#[test]
fn insert_update_delete_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let store = store_in(&dir);

    let id = store.insert("Ana", "ana@x.com").expect("insert should succeed");
    let people = store.list_all().expect("listing should succeed");
    assert_eq!(people.len(), 1);
    assert_eq!(people[0].id, id);
    assert_eq!(people[0].name, "Ana");
    assert_eq!(people[0].email, "ana@x.com");

    store
        .update(id, "Ana Silva", "ana@x.com")
        .expect("update should succeed");
    let people = store.list_all().expect("listing should succeed");
    assert_eq!(people.len(), 1);
    assert_eq!(people[0].id, id);
    assert_eq!(people[0].name, "Ana Silva");
    assert_eq!(people[0].email, "ana@x.com");

    store.delete(id).expect("delete should succeed");
    let remaining = store.list_all().expect("listing should succeed");
    assert!(remaining.iter().all(|person| person.id != id));
}

#[test]
fn insert_update_delete_sequence_leaves_no_residual_rows() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let store = store_in(&dir);

    let id = store.insert("Caio", "caio@x.com").expect("insert should succeed");
    store
        .update(id, "Caio Souza", "caio.souza@x.com")
        .expect("update should succeed");
    store.delete(id).expect("delete should succeed");

    assert!(store.list_all().expect("listing should succeed").is_empty());
}

#[test]
fn duplicate_email_leaves_table_with_first_record() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let store = store_in(&dir);

    store.insert("Ana", "ana@x.com").expect("insert should succeed");
    let err = store.insert("Ana Clone", "ana@x.com").expect_err("write should be rejected");
    assert!(matches!(err, RepoError::DuplicateEmail(_)));
    assert!(err.to_string().contains("ana@x.com"));

    let people = store.list_all().expect("listing should succeed");
    assert_eq!(people.len(), 1);
    assert_eq!(people[0].name, "Ana");
}

#[test]
fn updating_missing_id_leaves_listing_unchanged() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let store = store_in(&dir);

    store.insert("Ana", "ana@x.com").expect("insert should succeed");
    store.insert("Bia", "bia@x.com").expect("insert should succeed");
    let before = store.list_all().expect("listing should succeed");

    store
        .update(999, "Ghost", "ghost@x.com")
        .expect("update of missing id should not fail");

    assert_eq!(store.list_all().expect("listing should succeed"), before);
}

#[test]
fn deleting_one_record_leaves_others_untouched() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let store = store_in(&dir);

    let ana = store.insert("Ana", "ana@x.com").expect("insert should succeed");
    let bia = store.insert("Bia", "bia@x.com").expect("insert should succeed");
    let caio = store.insert("Caio", "caio@x.com").expect("insert should succeed");

    store.delete(bia).expect("delete should succeed");
    store.delete(bia).expect("delete should succeed");

    let people = store.list_all().expect("listing should succeed");
    let ids: HashSet<_> = people.iter().map(|person| person.id).collect();
    assert_eq!(ids, HashSet::from([ana, caio]));
    assert_eq!(people[0].name, "Ana");
    assert_eq!(people[1].name, "Caio");
}

#[test]
fn fresh_ids_are_unique_across_inserts() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let store = store_in(&dir);

    let ids: Vec<_> = (0..5)
        .map(|n| store.insert(&format!("P{n}"), &format!("p{n}@x.com")).expect("insert should succeed"))
        .collect();
    let unique: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn operations_on_unreadable_path_surface_errors() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let store = PersonStore::new(dir.path().join("missing-dir").join("cadastros.db"));

    assert!(store.initialize().is_err());
    assert!(matches!(store.list_all(), Err(RepoError::Db(_))));
}
