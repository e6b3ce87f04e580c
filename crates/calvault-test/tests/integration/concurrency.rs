//! Concurrent access to a single object file.

use std::sync::{Arc, Barrier};
use std::thread;

use super::helpers::*;

/// ## Summary
/// Parallel writers and readers of one UID never observe a torn file: every
/// read parses and yields one of the written versions.
#[test_log::test]
fn parallel_saves_and_reads_of_one_uid() {
    const WRITERS: usize = 8;

    let store = TestStore::new();
    let me = store.repo.calendar_by_id(None).unwrap().unwrap();
    let repo = Arc::new(store.repo.clone());
    let barrier = Arc::new(Barrier::new(WRITERS * 2));

    let mut handles = Vec::new();
    for i in 0..WRITERS {
        {
            let repo = Arc::clone(&repo);
            let barrier = Arc::clone(&barrier);
            let me = me.clone();
            handles.push(thread::spawn(move || {
                barrier.wait();
                let summary = format!("version {i} ").repeat(50);
                repo.save_object(&me, &event("shared", &summary)).map(|()| None)
            }));
        }

        {
            let repo = Arc::clone(&repo);
            let barrier = Arc::clone(&barrier);
            let me = me.clone();
            handles.push(thread::spawn(move || {
                barrier.wait();
                repo.object_by_uid(&me, "shared")
            }));
        }
    }

    for handle in handles {
        let read = handle.join().unwrap().unwrap();
        if let Some(object) = read {
            assert_eq!(object.uid(), "shared");
        }
    }

    let last = store.repo.object_by_uid(&me, "shared").unwrap().unwrap();
    let CalendarObject::Event(last) = last else {
        panic!("expected an event");
    };
    assert!(last.summary.is_some_and(|s| s.starts_with("version ")));
}
