//! iCalendar property parameters (RFC 5545 §3.2).

use std::fmt;

/// A single property parameter.
///
/// For example, in `DTSTART;TZID=America/New_York:20260123T120000` the
/// parameter has name `TZID` and value `America/New_York`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name (normalized to uppercase).
    pub name: String,
    /// Parameter values. Most parameters have one value, but some (like
    /// MEMBER) carry a comma-separated list.
    pub values: Vec<String>,
}

impl Parameter {
    /// Creates a new parameter with a single value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values: vec![value.into()],
        }
    }

    /// Creates a new parameter with multiple values.
    #[must_use]
    pub fn with_values(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values,
        }
    }

    /// Returns the first (and usually only) value.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        f.write_str("=")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            if needs_quoting(value) {
                write!(f, "\"{}\"", caret_encode(value))?;
            } else {
                f.write_str(value)?;
            }
        }
        Ok(())
    }
}

/// Checks if a parameter value must be quoted.
fn needs_quoting(s: &str) -> bool {
    s.chars().any(|c| matches!(c, ':' | ';' | ',' | '"' | '\n'))
}

/// Applies RFC 6868 caret encoding to a quoted parameter value.
fn caret_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '^' => result.push_str("^^"),
            '\n' => result.push_str("^n"),
            '"' => result.push_str("^'"),
            _ => result.push(c),
        }
    }
    result
}

/// Case-insensitive multi-map of the parameters attached to one property.
///
/// Lookups match names regardless of case; insertion order is preserved and
/// a name may occur more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters(Vec<Parameter>);

impl Parameters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter, keeping any earlier parameter of the same name.
    pub fn push(&mut self, param: Parameter) {
        self.0.push(param);
    }

    /// Sets a parameter, replacing every existing parameter with the same name.
    pub fn set(&mut self, param: Parameter) {
        self.0.retain(|p| !p.name.eq_ignore_ascii_case(&param.name));
        self.0.push(param);
    }

    /// Returns the first parameter with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.0.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the first value of the first parameter with the given name.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Parameter::value)
    }

    /// Returns every value recorded under the given name, in order.
    pub fn values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |p| p.name.eq_ignore_ascii_case(name))
            .flat_map(|p| p.values.iter().map(String::as_str))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.0.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<Parameter>> for Parameters {
    fn from(params: Vec<Parameter>) -> Self {
        Self(params)
    }
}

impl FromIterator<Parameter> for Parameters {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_display_simple() {
        let param = Parameter::new("TZID", "America/New_York");
        assert_eq!(param.to_string(), "TZID=America/New_York");
    }

    #[test]
    fn parameter_display_quoted() {
        let param = Parameter::new("CN", "Doe; Jane");
        assert_eq!(param.to_string(), "CN=\"Doe; Jane\"");
    }

    #[test]
    fn parameter_display_caret_encoded() {
        let param = Parameter::new("CN", "Line1\nLine2");
        assert_eq!(param.to_string(), "CN=\"Line1^nLine2\"");
    }

    #[test]
    fn parameter_name_normalized() {
        let param = Parameter::new("tzid", "Europe/London");
        assert_eq!(param.name, "TZID");
    }

    #[test]
    fn parameters_lookup_is_case_insensitive() {
        let params: Parameters = vec![Parameter::new("FBTYPE", "BUSY")].into();
        assert_eq!(params.value("fbtype"), Some("BUSY"));
        assert!(params.contains("FbType"));
        assert!(!params.contains("VALUE"));
    }

    #[test]
    fn parameters_keep_repeated_names() {
        let mut params = Parameters::new();
        params.push(Parameter::new("MEMBER", "mailto:a@example.com"));
        params.push(Parameter::with_values(
            "member",
            vec!["mailto:b@example.com".to_string(), "mailto:c@example.com".to_string()],
        ));

        let members: Vec<&str> = params.values("MEMBER").collect();
        assert_eq!(
            members,
            vec![
                "mailto:a@example.com",
                "mailto:b@example.com",
                "mailto:c@example.com"
            ]
        );
    }

    #[test]
    fn parameters_set_replaces() {
        let mut params = Parameters::new();
        params.push(Parameter::new("VALUE", "DATE-TIME"));
        params.set(Parameter::new("value", "DATE"));
        assert_eq!(params.len(), 1);
        assert_eq!(params.value("VALUE"), Some("DATE"));
    }
}
