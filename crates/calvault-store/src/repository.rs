use calvault_rfc::rfc::ical::component::CalendarObject;

use crate::error::StoreResult;
use crate::model::{CalendarInfo, ObjectFilter};

/// Storage operations over calendars and their objects.
///
/// Absent calendars and objects are reported as `Ok(None)` rather than as
/// errors.
pub trait CalendarRepository: Send + Sync {
    /// ## Summary
    /// Lists every calendar, creating the default calendar when none exist.
    ///
    /// ## Errors
    /// Returns an error if the store cannot be read or a manifest is malformed.
    fn calendars(&self) -> StoreResult<Vec<CalendarInfo>>;

    /// ## Summary
    /// Creates a calendar, overwriting its manifest if it already exists.
    ///
    /// Returns `Ok(None)` when `id` is absent or sanitizes to nothing.
    ///
    /// ## Errors
    /// Returns an error if the directory or manifest cannot be written.
    fn create_calendar(&self, id: Option<&str>) -> StoreResult<Option<CalendarInfo>>;

    /// ## Summary
    /// Looks up a calendar, falling back to the default calendar when `id` is
    /// absent or empty. Only the default calendar is created on demand.
    ///
    /// ## Errors
    /// Returns an error if the manifest cannot be read or is malformed.
    fn calendar_by_id(&self, id: Option<&str>) -> StoreResult<Option<CalendarInfo>>;

    /// ## Summary
    /// Reads the object stored under `uid`.
    ///
    /// ## Errors
    /// Returns an error if the object file cannot be read or is malformed.
    fn object_by_uid(
        &self,
        calendar: &CalendarInfo,
        uid: &str,
    ) -> StoreResult<Option<CalendarObject>>;

    /// ## Summary
    /// Writes an object to its own file, replacing any previous version.
    ///
    /// ## Errors
    /// Returns an error if the UID is empty or not path-safe, or if writing
    /// fails.
    fn save_object(&self, calendar: &CalendarInfo, object: &CalendarObject) -> StoreResult<()>;

    /// ## Summary
    /// Filtered listing.
    ///
    /// ## Errors
    /// Always returns [`crate::StoreError::Unsupported`].
    fn objects_by_filter(
        &self,
        calendar: &CalendarInfo,
        filter: &ObjectFilter,
    ) -> StoreResult<Vec<CalendarObject>>;

    /// ## Summary
    /// Lists every object in a calendar, sorted by UID.
    ///
    /// ## Errors
    /// Returns an error naming the first object file that cannot be read or
    /// decoded.
    fn objects(&self, calendar: &CalendarInfo) -> StoreResult<Vec<CalendarObject>>;

    /// ## Summary
    /// Reads an object addressed as `<calendar>/<uid>.ics`.
    ///
    /// ## Errors
    /// Returns an error if the calendar or object cannot be read.
    fn object_by_path(&self, path: &str) -> StoreResult<Option<CalendarObject>>;

    /// ## Summary
    /// Deletes an object given its UID or path. Deleting a missing object
    /// does nothing.
    ///
    /// ## Errors
    /// Returns an error if the object cannot be read or its file removed.
    fn delete_object(&self, calendar: &CalendarInfo, path_or_uid: &str) -> StoreResult<()>;
}
