use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{FixtureError, Result};

/// Language variants a fixture can target.
///
/// The set is closed: each variant carries its own baseline parse and compile
/// options (see [`crate::options`]), so adding a variant is a local change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LanguageVariant {
    /// Brace-delimited grammar modelled on C#.
    CSharp,
    /// Keyword-block grammar modelled on Visual Basic.
    VisualBasic,
}

impl LanguageVariant {
    pub const ALL: [LanguageVariant; 2] = [LanguageVariant::CSharp, LanguageVariant::VisualBasic];

    /// Canonical language name, as used in project metadata.
    pub fn name(&self) -> &'static str {
        match self {
            LanguageVariant::CSharp => "C#",
            LanguageVariant::VisualBasic => "Visual Basic",
        }
    }

    /// Default extension for documents in this variant.
    pub fn file_extension(&self) -> &'static str {
        match self {
            LanguageVariant::CSharp => "cs",
            LanguageVariant::VisualBasic => "vb",
        }
    }

    /// Whether the compiler for this variant understands graduated warning levels.
    pub fn supports_warning_levels(&self) -> bool {
        matches!(self, LanguageVariant::CSharp)
    }

    /// Parse a language name, failing with `InvalidArgument("language_name")`.
    pub fn from_name(name: &str) -> Result<Self> {
        crate::errors::ensure_not_blank(name, "language_name")?;
        static ALIASES: &[(&[&str], LanguageVariant)] = &[
            (&["c#", "csharp", "cs"], LanguageVariant::CSharp),
            (
                &["visual basic", "visualbasic", "vb", "vb.net"],
                LanguageVariant::VisualBasic,
            ),
        ];

        let normalized = name.trim().to_ascii_lowercase();
        ALIASES
            .iter()
            .find(|(names, _)| names.contains(&normalized.as_str()))
            .map(|(_, language)| *language)
            .ok_or_else(|| {
                FixtureError::invalid_argument(
                    "language_name",
                    format!("'{}' is not a supported language.", name.trim()),
                )
            })
    }
}

impl fmt::Display for LanguageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LanguageVariant {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

/// Grammar version requested by parse options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageVersion {
    /// The version the variant's compiler picks when none is requested.
    Default,
    /// The most recent grammar the variant supports.
    Latest,
}

impl LanguageVersion {
    /// Concrete version string this request maps to for `language`.
    pub fn effective(&self, language: LanguageVariant) -> &'static str {
        match (self, language) {
            (LanguageVersion::Default, LanguageVariant::CSharp) => "7.3",
            (LanguageVersion::Default, LanguageVariant::VisualBasic) => "15.5",
            (LanguageVersion::Latest, LanguageVariant::CSharp) => "12.0",
            (LanguageVersion::Latest, LanguageVariant::VisualBasic) => "16.9",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_accepts_aliases() {
        assert_eq!(LanguageVariant::from_name("C#").unwrap(), LanguageVariant::CSharp);
        assert_eq!(
            LanguageVariant::from_name("  visual basic ").unwrap(),
            LanguageVariant::VisualBasic
        );
        assert_eq!("vb".parse::<LanguageVariant>().unwrap(), LanguageVariant::VisualBasic);
    }

    #[test]
    fn test_from_name_rejects_blank_and_unknown() {
        let blank = LanguageVariant::from_name("   ").unwrap_err();
        assert_eq!(blank.parameter(), Some("language_name"));

        let unknown = LanguageVariant::from_name("F#").unwrap_err();
        assert_eq!(unknown.parameter(), Some("language_name"));
        assert!(unknown.to_string().contains("F#"));
    }

    #[test]
    fn test_latest_version_is_variant_specific() {
        assert_eq!(LanguageVersion::Latest.effective(LanguageVariant::CSharp), "12.0");
        assert_eq!(LanguageVersion::Latest.effective(LanguageVariant::VisualBasic), "16.9");
        assert_eq!(LanguageVersion::Default.effective(LanguageVariant::CSharp), "7.3");
    }
}
