//! Template-source capability: read-only, name-addressable template text.
//!
//! The pipeline never touches the filesystem directly; it resolves template
//! identifiers through a [`TemplateSource`]. Two implementations are provided:
//! [`DirSource`] backed by a static assets directory, and [`MemorySource`] for
//! tests and embedded template sets.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// A read-only collection of named template texts.
///
/// Loading takes `&self`, so concurrent render calls may share one source as
/// long as nobody mutates it underneath them.
pub trait TemplateSource {
    /// Load the raw contents of one named template.
    fn load(&self, name: &str) -> io::Result<String>;
}

/// Template source backed by a directory of static assets.
///
/// Construction reads the directory listing up front, so a missing or
/// unreadable directory fails at startup rather than on the first render.
/// Template names are resolved relative to the root; absolute paths and `..`
/// components are rejected so a name can never escape the root.
pub struct DirSource {
    root: PathBuf,
    entries: Vec<String>,
}

impl DirSource {
    /// Open a directory as a template source.
    ///
    /// # Errors
    ///
    /// Fails if the directory cannot be read.
    pub fn new(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        let mut entries = Vec::new();
        for entry in fs::read_dir(&root)? {
            entries.push(entry?.file_name().to_string_lossy().into_owned());
        }
        entries.sort();
        tracing::debug!("opened template source '{}' ({} entries)", root.display(), entries.len());
        Ok(Self {
            root,
            entries,
        })
    }

    /// Names of the top-level entries recorded at construction time.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    fn resolve(&self, name: &str) -> io::Result<PathBuf> {
        let path = Path::new(name);
        let escapes = path.is_absolute()
            || path.components().any(|c| matches!(c, Component::ParentDir));
        if escapes {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("template name escapes source root: {}", name),
            ));
        }
        Ok(self.root.join(path))
    }
}

impl TemplateSource for DirSource {
    fn load(&self, name: &str) -> io::Result<String> {
        fs::read_to_string(self.resolve(name)?)
    }
}

/// In-memory template source, mainly for tests.
///
/// ```
/// use renderguard::{MemorySource, TemplateSource};
///
/// let source: MemorySource = [("index.html", "<h1>{{ Title }}</h1>")].into_iter().collect();
/// assert!(source.load("index.html").is_ok());
/// ```
#[derive(Default)]
pub struct MemorySource {
    templates: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one named template.
    pub fn insert(&mut self, name: impl Into<String>, body: impl Into<String>) {
        self.templates.insert(name.into(), body.into());
    }
}

impl<N: Into<String>, B: Into<String>> FromIterator<(N, B)> for MemorySource {
    fn from_iter<I: IntoIterator<Item = (N, B)>>(iter: I) -> Self {
        Self {
            templates: iter.into_iter().map(|(n, b)| (n.into(), b.into())).collect(),
        }
    }
}

impl TemplateSource for MemorySource {
    fn load(&self, name: &str) -> io::Result<String> {
        self.templates.get(name).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no template named '{}'", name))
        })
    }
}
