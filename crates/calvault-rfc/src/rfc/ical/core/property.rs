//! Content lines and parameterized property values (RFC 5545 §3.1).

use super::{Parameter, Parameters};

/// A raw content line as read from iCalendar text.
///
/// This is the low-level representation before any value conversion. The
/// value is kept exactly as it appeared after the first unquoted `:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Parameters,
    /// Raw value string (after unfolding, before unescaping).
    pub raw_value: String,
    /// Line number where the logical line started (1-based).
    pub line: usize,
    /// Column where the value starts (1-based).
    pub value_column: usize,
}

impl ContentLine {
    /// Creates a content line without parameters or position information.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_params(name, Parameters::new(), value)
    }

    /// Creates a content line with parameters.
    #[must_use]
    pub fn with_params(
        name: impl Into<String>,
        params: impl Into<Parameters>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: params.into(),
            raw_value: value.into(),
            line: 0,
            value_column: 0,
        }
    }

    /// Returns the first value of a parameter.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.value(name)
    }

    /// Returns the VALUE parameter if present.
    #[must_use]
    pub fn value_type(&self) -> Option<&str> {
        self.param("VALUE")
    }

    /// Returns the TZID parameter if present.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        self.param("TZID")
    }

    /// Returns whether this line is a block marker (`BEGIN` or `END`).
    #[must_use]
    pub fn is_block_marker(&self) -> bool {
        self.name == "BEGIN" || self.name == "END"
    }
}

/// A property value stored verbatim together with its parameters.
///
/// Used for values the codecs carry through without interpreting, such as
/// calendar user addresses (`ORGANIZER;CN=Jane:mailto:jane@example.com`) or
/// free/busy period lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterizedValue {
    pub value: String,
    pub params: Parameters,
}

impl ParameterizedValue {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            params: Parameters::new(),
        }
    }

    /// Adds a parameter, replacing any parameter with the same name.
    #[must_use]
    pub fn with_param(mut self, name: &str, value: impl Into<String>) -> Self {
        self.params.set(Parameter::new(name, value));
        self
    }

    /// Takes the raw value and parameters of a content line.
    #[must_use]
    pub fn from_content_line(line: &ContentLine) -> Self {
        Self {
            value: line.raw_value.clone(),
            params: line.params.clone(),
        }
    }
}
