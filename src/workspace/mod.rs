//! In-memory workspace model: one workspace, one project, one document.
//!
//! Nothing here touches the file system. A [`Document`] is a cheap handle; cloning
//! it shares the text, the owning project and the lazily parsed syntax tree.

mod compilation;

pub use compilation::Compilation;

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::config::get_config;
use crate::core::{LanguageVariant, MetadataReference, ReferenceSet};
use crate::formatting::FormattingOptions;
use crate::options::{CompileOptions, ParseOptions};
use crate::syntax::SyntaxTree;

/// Host for projects. Carries the formatting options documents are rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    formatting: FormattingOptions,
}

impl Workspace {
    pub fn new(formatting: FormattingOptions) -> Self {
        Self { formatting }
    }

    /// Throwaway workspace using the ambient formatting configuration.
    pub fn ephemeral() -> Arc<Self> {
        Arc::new(Self::new(get_config().formatting.clone()))
    }

    pub fn formatting_options(&self) -> &FormattingOptions {
        &self.formatting
    }

    /// Create an empty project in this workspace with the variant's baseline options.
    pub fn add_project(
        self: &Arc<Self>,
        name: impl Into<String>,
        assembly_name: impl Into<String>,
        language: LanguageVariant,
    ) -> Project {
        Project {
            name: name.into(),
            assembly_name: assembly_name.into(),
            language,
            parse_options: ParseOptions::baseline(language),
            compile_options: CompileOptions::baseline(language),
            references: ReferenceSet::new(),
            workspace: Arc::clone(self),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    name: String,
    assembly_name: String,
    language: LanguageVariant,
    parse_options: ParseOptions,
    compile_options: CompileOptions,
    references: ReferenceSet,
    workspace: Arc<Workspace>,
}

impl Project {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn assembly_name(&self) -> &str {
        &self.assembly_name
    }

    pub fn language(&self) -> LanguageVariant {
        self.language
    }

    pub fn parse_options(&self) -> &ParseOptions {
        &self.parse_options
    }

    pub fn compile_options(&self) -> &CompileOptions {
        &self.compile_options
    }

    pub fn references(&self) -> &ReferenceSet {
        &self.references
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn with_parse_options(self, parse_options: ParseOptions) -> Self {
        Self {
            parse_options,
            ..self
        }
    }

    pub fn with_compile_options(self, compile_options: CompileOptions) -> Self {
        Self {
            compile_options,
            ..self
        }
    }

    /// Add metadata references; references already present are kept once.
    pub fn add_references(self, references: impl IntoIterator<Item = MetadataReference>) -> Self {
        let mut all = self.references.clone();
        all.extend(references);
        Self {
            references: all,
            ..self
        }
    }

    /// Freeze the project and add a document holding `text`.
    pub fn add_document(self, name: impl Into<String>, text: impl Into<Arc<str>>) -> Document {
        Document {
            name: name.into(),
            text: text.into(),
            project: Arc::new(self),
            syntax_tree: Arc::new(OnceLock::new()),
        }
    }
}

/// Opaque handle to a fixture document.
#[derive(Clone)]
pub struct Document {
    name: String,
    text: Arc<str>,
    project: Arc<Project>,
    syntax_tree: Arc<OnceLock<SyntaxTree>>,
}

impl Document {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn language(&self) -> LanguageVariant {
        self.project.language
    }

    /// The document's syntax tree, parsed on first access. Concurrent callers
    /// block until the single parse finishes.
    pub fn syntax_tree(&self) -> &SyntaxTree {
        self.syntax_tree.get_or_init(|| {
            log::debug!("Parsing document '{}' ({})", self.name, self.language());
            SyntaxTree::parse(
                Arc::clone(&self.text),
                self.name.clone(),
                &self.project.parse_options,
            )
        })
    }

    pub fn compilation(&self) -> Compilation {
        Compilation::new(self)
    }
}

// The parse cache is derived state and takes no part in equality.
impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.text == other.text && self.project == other.project
    }
}

impl Eq for Document {}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("name", &self.name)
            .field("project", &self.project.name)
            .field("language", &self.language())
            .field("parsed", &self.syntax_tree.get().is_some())
            .finish()
    }
}
