use std::path::PathBuf;

use calvault_rfc::rfc::ical::component::{Calendar, ComponentKind};

/// A calendar known to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarInfo {
    /// Directory name of the calendar, already path-safe.
    pub id: String,
    /// Path of the calendar's manifest file.
    pub filename: PathBuf,
    /// Calendar-level data read from the manifest.
    pub header: Calendar,
}

impl CalendarInfo {
    #[must_use]
    pub fn new(id: impl Into<String>, filename: impl Into<PathBuf>, header: Calendar) -> Self {
        Self {
            id: id.into(),
            filename: filename.into(),
            header,
        }
    }
}

/// Criteria for a filtered object listing.
///
/// No query semantics are defined yet. Every repository in this crate
/// rejects filtered listings with [`crate::StoreError::Unsupported`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectFilter {
    /// Component type the caller is interested in, if any.
    pub component: Option<ComponentKind>,
}
