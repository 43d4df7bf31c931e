//! Error types for the render pipeline.
//!
//! Every failure mode of a render call maps to one [`RenderError`] variant, and
//! every variant carries enough context (template identifiers, data paths) to be
//! actionable without re-running with extra instrumentation. All errors are
//! terminal for the current render call; nothing is retried internally.

use std::io;

use thiserror::Error;

/// The error type for a single render call.
///
/// Variants fall into three groups:
/// - Template-set problems: [`EmptyTemplateSet`], [`Resolve`], [`Parse`]
/// - Execution problems: [`Execute`], [`EmptyOutput`]
/// - Strict-mode data problems: [`NullData`], [`MissingData`]
///
/// plus [`Write`] for a destination that did not accept the full buffer.
///
/// [`EmptyTemplateSet`]: RenderError::EmptyTemplateSet
/// [`Resolve`]: RenderError::Resolve
/// [`Parse`]: RenderError::Parse
/// [`Execute`]: RenderError::Execute
/// [`EmptyOutput`]: RenderError::EmptyOutput
/// [`NullData`]: RenderError::NullData
/// [`MissingData`]: RenderError::MissingData
/// [`Write`]: RenderError::Write
#[derive(Debug, Error)]
pub enum RenderError {
    /// The template set contained no identifiers at all.
    #[error("template set is empty")]
    EmptyTemplateSet,

    /// A named template source could not be loaded from the backing store.
    #[error("resolve template source '{name}': {source}")]
    Resolve {
        name: String,
        #[source]
        source: io::Error,
    },

    /// One or more sources in the set failed to parse as templates.
    #[error("parse template set {names:?}: {source}")]
    Parse {
        names: Vec<String>,
        #[source]
        source: Box<tera::Error>,
    },

    /// Template execution raised against the given data.
    #[error("execute template '{name}': {source}")]
    Execute {
        name: String,
        #[source]
        source: Box<tera::Error>,
    },

    /// Execution succeeded but produced zero bytes.
    ///
    /// Kept distinct from [`RenderError::Execute`] because empty output is the
    /// primary symptom of a definitions-only template being executed before the
    /// page that composes it.
    #[error("template '{name}' produced empty output")]
    EmptyOutput { name: String },

    /// Flattening hit a null value while walking the input data.
    #[error("null value at '{path}' in input data")]
    NullData { path: String },

    /// Strict mode found a string leaf of the input absent from the rendered
    /// output. `path` is the flattened path of the offending leaf.
    #[error("data value '{path}' not present in rendered output")]
    MissingData { path: String },

    /// The destination sink did not accept the full rendered buffer.
    #[error("write rendered output: {source}")]
    Write {
        #[source]
        source: io::Error,
    },
}

impl RenderError {
    /// Whether this error means a data value was absent where one was required,
    /// either during flattening ([`RenderError::NullData`]) or during the
    /// strict containment check ([`RenderError::MissingData`]).
    pub fn is_missing_data(&self) -> bool {
        matches!(self, Self::NullData { .. } | Self::MissingData { .. })
    }
}
