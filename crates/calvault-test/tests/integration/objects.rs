//! Saving, reading, listing and deleting calendar objects.

use super::helpers::*;

fn default_calendar(store: &TestStore) -> CalendarInfo {
    store
        .repo
        .calendar_by_id(None)
        .expect("lookup should succeed")
        .expect("default calendar should exist")
}

/// ## Summary
/// A saved object lands in `me/<uid>.ics` and reads back by UID.
#[test_log::test]
fn save_and_get_by_uid() {
    let store = TestStore::new();
    let me = default_calendar(&store);

    store.repo.save_object(&me, &event("abc123", "Dentist")).unwrap();
    assert!(store.object_file("me", "abc123").is_file());

    let object = store
        .repo
        .object_by_uid(&me, "abc123")
        .unwrap()
        .expect("object should exist");
    assert_eq!(object.uid(), "abc123");
    assert_eq!(object, event("abc123", "Dentist"));
}

/// ## Summary
/// Deleting removes the file, and deleting again is a no-op.
#[test_log::test]
fn delete_twice_is_a_no_op() {
    let store = TestStore::new();
    let me = default_calendar(&store);
    store.repo.save_object(&me, &event("abc123", "Dentist")).unwrap();

    store.repo.delete_object(&me, "abc123").unwrap();
    assert!(!store.object_file("me", "abc123").exists());

    store.repo.delete_object(&me, "abc123").unwrap();
    assert!(store.repo.object_by_uid(&me, "abc123").unwrap().is_none());
}

/// ## Summary
/// Filtered listings always report that they are unsupported, even for an
/// empty calendar.
#[test_log::test]
fn filtered_listing_reports_unsupported() {
    let store = TestStore::new();
    let me = default_calendar(&store);

    let result = store.repo.objects_by_filter(&me, &ObjectFilter::default());
    assert!(matches!(result, Err(StoreError::Unsupported(_))));

    store.repo.save_object(&me, &event("abc123", "Dentist")).unwrap();
    let result = store.repo.objects_by_filter(&me, &ObjectFilter::default());
    assert!(matches!(result, Err(StoreError::Unsupported(_))));
}

/// ## Summary
/// Listing flattens every object of every file and sorts by UID.
#[test_log::test]
fn listing_flattens_multi_object_files() {
    let store = TestStore::new();
    let me = default_calendar(&store);

    store.repo.save_object(&me, &event("m-event", "Middle")).unwrap();
    store.write_raw(
        "me",
        "bundle.ics",
        "BEGIN:VCALENDAR\r\n\
         VERSION:2.0\r\n\
         BEGIN:VTODO\r\n\
         UID:z-todo\r\n\
         END:VTODO\r\n\
         BEGIN:VJOURNAL\r\n\
         UID:a-journal\r\n\
         END:VJOURNAL\r\n\
         END:VCALENDAR\r\n",
    );

    let uids: Vec<_> = store
        .repo
        .objects(&me)
        .unwrap()
        .iter()
        .map(|o| o.uid().to_string())
        .collect();
    assert_eq!(uids, vec!["a-journal", "m-event", "z-todo"]);
}

/// ## Summary
/// One malformed file aborts the listing with an error naming that file.
#[test_log::test]
fn malformed_file_aborts_listing() {
    let store = TestStore::new();
    let me = default_calendar(&store);
    store.repo.save_object(&me, &event("ok", "Fine")).unwrap();

    let bad = store.write_raw(
        "me",
        "broken.ics",
        "BEGIN:VCALENDAR\r\n\
         BEGIN:VTIMEZONE\r\n\
         BEGIN:STANDARD\r\n\
         TZOFFSETFROM:+2500\r\n\
         END:STANDARD\r\n\
         END:VTIMEZONE\r\n\
         END:VCALENDAR\r\n",
    );

    match store.repo.objects(&me) {
        Err(StoreError::ObjectFile { path, .. }) => assert_eq!(path, bad),
        other => panic!("expected an object file error, got {other:?}"),
    }
}

/// ## Summary
/// Path-based access resolves `<calendar>/<uid>.ics`.
#[test_log::test]
fn get_by_path() {
    let store = TestStore::new();
    let work = store.repo.create_calendar(Some("work")).unwrap().unwrap();
    store.repo.save_object(&work, &CalendarObject::ToDo(ToDo::new("todo-1"))).unwrap();

    let object = store.repo.object_by_path("work/todo-1.ics").unwrap();
    assert!(matches!(object, Some(CalendarObject::ToDo(ref t)) if t.uid == "todo-1"));

    assert!(store.repo.object_by_path("other/todo-1.ics").unwrap().is_none());
}

/// ## Summary
/// Every object kind survives a save and a read unchanged.
#[test_log::test]
fn all_object_kinds_round_trip_through_store() {
    let store = TestStore::new();
    let me = default_calendar(&store);

    let mut journal = JournalEntry::new("journal-1");
    journal.description = Some("Line one\nLine two, with comma; and semicolon".to_string());
    let mut free_busy = FreeBusy::new("fb-1");
    free_busy.url = Some("https://example.com/fb".to_string());

    let objects = vec![
        event("event-1", "Long summary ".repeat(10).trim_end()),
        CalendarObject::Journal(journal),
        CalendarObject::FreeBusy(free_busy),
    ];
    for object in &objects {
        store.repo.save_object(&me, object).unwrap();
    }

    for object in &objects {
        let read = store.repo.object_by_uid(&me, object.uid()).unwrap();
        assert_eq!(read.as_ref(), Some(object));
    }

    let text = std::fs::read_to_string(store.object_file("me", "event-1")).unwrap();
    assert!(text.lines().all(|line| line.len() <= 75));
}

/// ## Summary
/// A UID that cannot be a file name is refused instead of escaping the
/// calendar directory.
#[test_log::test]
fn unsafe_uid_is_refused() {
    let store = TestStore::new();
    let me = default_calendar(&store);

    let err = store
        .repo
        .save_object(&me, &event("../outside", "Nope"))
        .unwrap_err();
    assert!(matches!(err, StoreError::InvalidUid(_)));
    assert!(!store.scratch().join("outside.ics").exists());
}

/// ## Summary
/// A UID with dots in it, as most real UIDs have, is saved, found by path and
/// deleted like any other.
#[test_log::test]
fn dotted_uid_save_get_by_path_and_delete() {
    let store = TestStore::new();
    let me = default_calendar(&store);
    let uid = "minimal@example.com";

    store.repo.save_object(&me, &event(uid, "Dentist")).unwrap();
    assert!(store.object_file("me", uid).is_file());

    let object = store
        .repo
        .object_by_path("me/minimal@example.com.ics")
        .unwrap()
        .expect("object should be found by path");
    assert_eq!(object.uid(), uid);

    store.repo.delete_object(&me, uid).unwrap();
    assert!(!store.object_file("me", uid).exists());
    assert!(store.repo.objects(&me).unwrap().is_empty());
}
