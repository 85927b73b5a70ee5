//! `{{ key }}` placeholder substitution for template names and contents

use regex::Regex;
use std::sync::LazyLock;

/// Matches any `{{ ... }}` sequence, known key or not
static INTERPOLATION_SEQUENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{.*\}\}").expect("interpolation pattern is valid"));

/// Placeholder substitution over a single source string
#[derive(Debug, Clone)]
pub struct Interpolator<'a> {
    source: &'a str,
}

impl<'a> Interpolator<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// True if the source contains at least one `{{ ... }}` marker
    pub fn is_interpolated(&self) -> bool {
        INTERPOLATION_SEQUENCE.is_match(self.source)
    }

    /// Replace every `{{ key }}` marker for each `(key, value)` pair.
    ///
    /// Whitespace inside the braces is ignored. Markers for keys not in
    /// `values` are left verbatim. `None` returns the source unchanged.
    pub fn interpolate<K, V>(&self, values: Option<&[(K, V)]>) -> String
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let Some(values) = values else {
            return self.source.to_string();
        };

        values.iter().fold(self.source.to_string(), |acc, (key, value)| {
            let pattern = format!(r"\{{\{{\s*{}\s*\}}\}}", regex::escape(key.as_ref()));
            let re = Regex::new(&pattern).expect("escaped key pattern is valid");
            re.replace_all(&acc, regex::NoExpand(value.as_ref())).into_owned()
        })
    }
}

/// Check whether `source` contains an interpolation marker
pub fn is_interpolated(source: &str) -> bool {
    Interpolator::new(source).is_interpolated()
}
