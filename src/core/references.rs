use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Descriptor of a binary library a compilation resolves symbols against.
///
/// Only the location is recorded; the file is not opened. Identity is the path,
/// so a [`ReferenceSet`] holds each library once.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MetadataReference {
    path: PathBuf,
}

impl MetadataReference {
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name of the library, e.g. `System.Core.dll`.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

impl fmt::Display for MetadataReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Deduplicated, ordered collection of metadata references.
pub type ReferenceSet = im::OrdSet<MetadataReference>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_set_deduplicates_by_path() {
        let set: ReferenceSet = [
            MetadataReference::from_file("/rt/System.dll"),
            MetadataReference::from_file("/rt/mscorlib.dll"),
            MetadataReference::from_file("/rt/System.dll"),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 2);
        assert_eq!(
            set.iter().map(|r| r.display_name()).collect::<Vec<_>>(),
            vec!["System.dll", "mscorlib.dll"]
        );
    }
}
