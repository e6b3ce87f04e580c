//! Calendar creation and lookup through the file repository.

use super::helpers::*;

/// ## Summary
/// Creating "me" lays out a directory with a manifest, and looking up the
/// default calendar returns it.
#[test_log::test]
fn create_default_calendar_and_look_it_up() {
    let store = TestStore::new();

    let created = store
        .repo
        .create_calendar(Some("me"))
        .expect("create should succeed")
        .expect("a calendar should be returned");

    assert!(store.calendar_dir("me").is_dir());
    assert!(store.calendar_dir("me").join(MANIFEST_FILE_NAME).is_file());

    let found = store
        .repo
        .calendar_by_id(None)
        .expect("lookup should succeed")
        .expect("default calendar should exist");
    assert_eq!(found.id, created.id);
    assert_eq!(found.filename, created.filename);
}

/// ## Summary
/// Empty and missing ids create nothing.
#[test_log::test]
fn empty_ids_create_nothing() {
    let store = TestStore::new();

    assert!(store.repo.create_calendar(Some("")).unwrap().is_none());
    assert!(store.repo.create_calendar(None).unwrap().is_none());

    let entries = std::fs::read_dir(store.root()).unwrap().count();
    assert_eq!(entries, 0, "no directory should have been created");
}

/// ## Summary
/// Creating the same sanitized id twice leaves one directory with one
/// manifest.
#[test_log::test]
fn create_is_idempotent_per_sanitized_id() {
    let store = TestStore::new();

    let a = store.repo.create_calendar(Some("team:*")).unwrap().unwrap();
    let b = store.repo.create_calendar(Some("team")).unwrap().unwrap();
    assert_eq!(a.id, "team");
    assert_eq!(b.id, "team");

    let dirs: Vec<_> = std::fs::read_dir(store.root())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(dirs, vec!["team"]);

    let files: Vec<_> = std::fs::read_dir(store.calendar_dir("team"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(MANIFEST_FILE_NAME))
        .collect();
    assert_eq!(files, vec![MANIFEST_FILE_NAME]);
}

/// ## Summary
/// Listing an empty store creates and returns only the default calendar.
#[test_log::test]
fn listing_empty_store_yields_default_calendar() {
    let store = TestStore::new();

    let calendars = store.repo.calendars().unwrap();
    let ids: Vec<_> = calendars.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec![DEFAULT_CALENDAR_ID]);
}

/// ## Summary
/// Unknown calendars are reported as absent and are not created.
#[test_log::test]
fn unknown_calendar_is_absent() {
    let store = TestStore::new();

    assert!(store.repo.calendar_by_id(Some("work")).unwrap().is_none());
    assert!(!store.calendar_dir("work").exists());
}

/// ## Summary
/// Ids that name the current or parent directory create and find nothing,
/// so no manifest is ever written outside a calendar directory.
#[test_log::test]
fn dot_ids_stay_inside_the_store() {
    let store = TestStore::new();

    for id in [".", ".."] {
        assert!(store.repo.create_calendar(Some(id)).unwrap().is_none());
        assert!(store.repo.calendar_by_id(Some(id)).unwrap().is_none());
    }

    assert!(!store.root().join(MANIFEST_FILE_NAME).exists());
    assert!(!store.scratch().join(MANIFEST_FILE_NAME).exists());
}
