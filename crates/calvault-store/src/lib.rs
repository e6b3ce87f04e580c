//! Filesystem-backed calendar object store.
//!
//! Each calendar is a directory under the store root holding a manifest
//! (`_.ical`) and one `<uid>.ics` file per calendar object.

pub mod error;
pub mod file;
pub mod model;
pub mod repository;

pub use error::{StoreError, StoreResult};
pub use file::FileCalendarRepository;
pub use model::{CalendarInfo, ObjectFilter};
pub use repository::CalendarRepository;
