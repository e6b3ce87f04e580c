#![expect(clippy::expect_used, reason = "test fixtures fail loudly")]
//! Test helpers for integration tests.
//!
//! Every test gets its own store rooted in a temporary directory that is
//! removed when the [`TestStore`] is dropped, so tests can run in parallel.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::TempDir;

pub use calvault_test::component::constants::{DEFAULT_CALENDAR_ID, MANIFEST_FILE_NAME};
pub use calvault_test::component::ical::component::{
    CalendarObject, Event, FreeBusy, JournalEntry, ToDo,
};
pub use calvault_test::component::ical::core::{DateOrDateTime, DateTime};
pub use calvault_test::component::store::{
    CalendarInfo, CalendarRepository, FileCalendarRepository, ObjectFilter, StoreError,
};

/// An isolated store for one test.
pub struct TestStore {
    dir: TempDir,
    pub repo: FileCalendarRepository,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let repo = FileCalendarRepository::new(dir.path().join("calendars"), DEFAULT_CALENDAR_ID)
            .expect("Failed to open store");
        Self { dir, repo }
    }

    pub fn root(&self) -> &Path {
        self.repo.root()
    }

    pub fn calendar_dir(&self, id: &str) -> PathBuf {
        self.root().join(id)
    }

    pub fn object_file(&self, calendar_id: &str, uid: &str) -> PathBuf {
        self.calendar_dir(calendar_id).join(format!("{uid}.ics"))
    }

    /// Writes raw text as an object file, bypassing the repository.
    pub fn write_raw(&self, calendar_id: &str, file_name: &str, text: &str) -> PathBuf {
        let path = self.calendar_dir(calendar_id).join(file_name);
        std::fs::create_dir_all(self.calendar_dir(calendar_id)).expect("Failed to create dir");
        std::fs::write(&path, text).expect("Failed to write file");
        path
    }

    pub fn scratch(&self) -> &Path {
        self.dir.path()
    }
}

pub fn event(uid: &str, summary: &str) -> CalendarObject {
    let mut event = Event::new(uid);
    event.summary = Some(summary.to_string());
    event.dtstamp = Some(DateTime::utc(
        NaiveDate::from_ymd_opt(2026, 1, 1)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .expect("valid timestamp"),
    ));
    event.start = NaiveDate::from_ymd_opt(2026, 2, 14).map(DateOrDateTime::Date);
    CalendarObject::Event(event)
}
