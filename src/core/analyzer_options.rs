use serde::{Deserialize, Serialize};

use crate::errors::{ensure_not_blank, Result};

/// Key/value configuration handed through to the analyzer under test.
///
/// The fixture pipeline never interprets these entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AnalyzerOptions {
    values: im::OrdMap<String, String>,
}

impl AnalyzerOptions {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Copy of these options with `key` set to `value`.
    pub fn with_value(&self, key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let key = key.into();
        ensure_not_blank(&key, "key")?;
        Ok(Self {
            values: self.values.update(key, value.into()),
        })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_value_leaves_original_untouched() {
        let original = AnalyzerOptions::empty();
        let updated = original.with_value("dotnet_diagnostic.AV1500.severity", "error").unwrap();

        assert!(original.is_empty());
        assert_eq!(updated.get("dotnet_diagnostic.AV1500.severity"), Some("error"));
        assert_eq!(updated.len(), 1);
    }

    #[test]
    fn test_blank_key_is_rejected() {
        let err = AnalyzerOptions::empty().with_value(" ", "x").unwrap_err();
        assert_eq!(err.parameter(), Some("key"));
    }
}
