//! Directory-tree implementation of [`CalendarRepository`].
//!
//! Layout: `<root>/<calendar id>/_.ical` holds the calendar manifest and
//! `<root>/<calendar id>/<uid>.ics` holds one calendar object each. Reads
//! and writes of a single file are serialized by an advisory lock on a
//! sidecar `.lock` file.

mod lock;


use std::fs::{self, File};
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use calvault_core::config::StorageConfig;
use calvault_core::constants::{MANIFEST_FILE_NAME, OBJECT_EXTENSION, OBJECT_FILE_SUFFIX};
use calvault_core::error::CoreError;
use calvault_core::util::path::{make_path_safe, split_object_path};
use calvault_rfc::rfc::ical::component::{
    Calendar, CalendarObject, parse_calendars, write_calendar,
};

pub use lock::{lock_path, with_lock, with_lock_then_remove};

use crate::error::{StoreError, StoreResult};
use crate::model::{CalendarInfo, ObjectFilter};
use crate::repository::CalendarRepository;

/// Calendar store rooted at a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileCalendarRepository {
    root: PathBuf,
    default_calendar_id: String,
}

impl FileCalendarRepository {
    /// ## Summary
    /// Opens a store rooted at `root`, creating the directory if needed.
    ///
    /// `default_calendar_id` names the calendar used when a caller does not
    /// name one. It is the only calendar created on demand.
    ///
    /// ## Errors
    /// Returns an error if `root` exists but is not a directory, if it cannot
    /// be created, or if `default_calendar_id` is not a usable directory name.
    pub fn new(root: impl Into<PathBuf>, default_calendar_id: &str) -> StoreResult<Self> {
        let root = root.into();
        if root.exists() && !root.is_dir() {
            return Err(CoreError::InvalidInput(format!(
                "storage root is not a directory: {}",
                root.display()
            ))
            .into());
        }

        let safe_default = make_path_safe(default_calendar_id);
        if safe_default.is_empty() {
            return Err(CoreError::InvalidInput(format!(
                "default calendar id is not a usable directory name: {default_calendar_id:?}"
            ))
            .into());
        }

        fs::create_dir_all(&root)?;

        tracing::debug!(root = %root.display(), default_calendar_id, "Opened calendar store");

        Ok(Self {
            root,
            default_calendar_id: safe_default,
        })
    }

    /// ## Summary
    /// Opens the store described by the storage settings.
    ///
    /// ## Errors
    /// See [`FileCalendarRepository::new`].
    pub fn from_config(config: &StorageConfig) -> StoreResult<Self> {
        Self::new(config.root.clone(), &config.default_calendar)
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn default_calendar_id(&self) -> &str {
        &self.default_calendar_id
    }

    fn calendar_dir(&self, id: &str) -> PathBuf {
        self.root.join(id)
    }

    fn manifest_path(&self, id: &str) -> PathBuf {
        self.calendar_dir(id).join(MANIFEST_FILE_NAME)
    }

    fn object_path(&self, calendar_id: &str, uid: &str) -> PathBuf {
        self.calendar_dir(calendar_id)
            .join(format!("{uid}{OBJECT_FILE_SUFFIX}"))
    }

    fn read_calendar_info(&self, id: &str) -> StoreResult<CalendarInfo> {
        let filename = self.manifest_path(id);
        let header = read_collection(&filename)?
            .into_iter()
            .next()
            .unwrap_or_default();

        Ok(CalendarInfo::new(id, filename, header))
    }
}

impl CalendarRepository for FileCalendarRepository {
    #[tracing::instrument(skip(self))]
    fn calendars(&self) -> StoreResult<Vec<CalendarInfo>> {
        let mut calendars = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let Some(id) = entry.file_name().to_str().map(str::to_owned) else {
                tracing::warn!(path = %entry.path().display(), "Skipping non-UTF-8 calendar directory");
                continue;
            };
            if !self.manifest_path(&id).is_file() {
                continue;
            }
            calendars.push(self.read_calendar_info(&id)?);
        }

        if calendars.is_empty() {
            tracing::debug!("No calendars found; creating the default calendar");
            let created = self.create_calendar(Some(self.default_calendar_id.as_str()))?;
            return Ok(created.into_iter().collect());
        }

        calendars.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(calendars)
    }

    #[tracing::instrument(skip(self))]
    fn create_calendar(&self, id: Option<&str>) -> StoreResult<Option<CalendarInfo>> {
        let Some(id) = id.filter(|id| !id.is_empty()) else {
            return Ok(None);
        };
        let id = make_path_safe(id);
        if id.is_empty() {
            tracing::debug!("Calendar id is empty after sanitizing");
            return Ok(None);
        }

        fs::create_dir_all(self.calendar_dir(&id))?;

        let filename = self.manifest_path(&id);
        let header = Calendar::new();
        write_collection(&filename, &header)?;

        tracing::info!(calendar_id = %id, "Calendar created");
        Ok(Some(CalendarInfo::new(id, filename, header)))
    }

    #[tracing::instrument(skip(self))]
    fn calendar_by_id(&self, id: Option<&str>) -> StoreResult<Option<CalendarInfo>> {
        let id = match id {
            Some(id) if !id.is_empty() => make_path_safe(id),
            _ => self.default_calendar_id.clone(),
        };
        if id.is_empty() {
            return Ok(None);
        }

        if !self.manifest_path(&id).is_file() {
            if id == self.default_calendar_id {
                return self.create_calendar(Some(&id));
            }
            return Ok(None);
        }

        self.read_calendar_info(&id).map(Some)
    }

    #[tracing::instrument(skip(self, calendar), fields(calendar_id = %calendar.id))]
    fn object_by_uid(
        &self,
        calendar: &CalendarInfo,
        uid: &str,
    ) -> StoreResult<Option<CalendarObject>> {
        if !is_path_safe(uid) {
            return Ok(None);
        }
        let path = self.object_path(&calendar.id, uid);
        if !path.is_file() {
            return Ok(None);
        }

        let object = read_collection(&path)?
            .into_iter()
            .next()
            .and_then(|ical| ical.into_objects().into_iter().next());

        Ok(object)
    }

    #[tracing::instrument(skip_all, fields(calendar_id = %calendar.id, uid = %object.uid()))]
    fn save_object(&self, calendar: &CalendarInfo, object: &CalendarObject) -> StoreResult<()> {
        let uid = object.uid();
        if !is_path_safe(uid) {
            return Err(StoreError::InvalidUid(uid.to_string()));
        }

        fs::create_dir_all(self.calendar_dir(&calendar.id))?;
        let path = self.object_path(&calendar.id, uid);
        write_collection(&path, &Calendar::with_object(object.clone()))?;

        tracing::debug!(path = %path.display(), "Object saved");
        Ok(())
    }

    fn objects_by_filter(
        &self,
        calendar: &CalendarInfo,
        _filter: &ObjectFilter,
    ) -> StoreResult<Vec<CalendarObject>> {
        tracing::warn!(calendar_id = %calendar.id, "Filtered object listing requested");
        Err(StoreError::Unsupported("filtered object listing"))
    }

    #[tracing::instrument(skip(self, calendar), fields(calendar_id = %calendar.id))]
    fn objects(&self, calendar: &CalendarInfo) -> StoreResult<Vec<CalendarObject>> {
        let dir = self.calendar_dir(&calendar.id);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut files = Vec::new();
        for entry in entries {
            let path = entry?.path();
            let is_object = path.is_file()
                && path.extension().is_some_and(|ext| ext == OBJECT_EXTENSION);
            if is_object {
                files.push(path);
            }
        }
        files.sort();

        let mut objects = Vec::new();
        for path in &files {
            for ical in read_collection(path)? {
                objects.extend(ical.into_objects());
            }
        }
        objects.sort_by(|a, b| a.uid().cmp(b.uid()));

        tracing::debug!(files = files.len(), objects = objects.len(), "Listed objects");
        Ok(objects)
    }

    #[tracing::instrument(skip(self))]
    fn object_by_path(&self, path: &str) -> StoreResult<Option<CalendarObject>> {
        let (calendar_id, uid) = split_object_path(path);
        let Some(calendar) = self.calendar_by_id(calendar_id)? else {
            return Ok(None);
        };
        self.object_by_uid(&calendar, uid)
    }

    #[tracing::instrument(skip(self, calendar), fields(calendar_id = %calendar.id))]
    fn delete_object(&self, calendar: &CalendarInfo, path_or_uid: &str) -> StoreResult<()> {
        let (_, uid) = split_object_path(path_or_uid);
        let Some(object) = self.object_by_uid(calendar, uid)? else {
            return Ok(());
        };

        if !is_path_safe(object.uid()) {
            return Ok(());
        }
        let path = self.object_path(&calendar.id, object.uid());
        with_lock_then_remove(&path, || match fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "Object deleted");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        })
    }
}

/// A UID is stored as a file stem, so it must be non-empty and survive
/// sanitizing unchanged. This also refuses `.` and `..`.
fn is_path_safe(uid: &str) -> bool {
    !uid.is_empty() && make_path_safe(uid) == uid
}

/// Reads every calendar in `path` under its lock. A file that vanished
/// before it was opened reads as empty.
fn read_collection(path: &Path) -> StoreResult<Vec<Calendar>> {
    with_lock(path, || {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        parse_calendars(BufReader::new(file)).map_err(|source| StoreError::ObjectFile {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
    })
}

/// Writes one calendar to `path` under its lock, truncating any previous
/// content. The calendar is encoded before the file is opened, so a value
/// the writer refuses leaves the old content in place.
fn write_collection(path: &Path, calendar: &Calendar) -> StoreResult<()> {
    let mut encoded = Vec::new();
    write_calendar(&mut encoded, calendar)?;

    with_lock(path, || {
        fs::write(path, &encoded)?;
        Ok(())
    })
}
