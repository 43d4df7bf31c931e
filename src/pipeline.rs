//! The render pipeline: resolve, execute, validate, write.
//!
//! [`Pipeline`] sequences one render call end to end. The rendered output is
//! fully materialized in a private buffer before anything else happens: empty
//! output is rejected, strict validation (when enabled) inspects that exact
//! buffer, and only then is the buffer released to the destination. Validation
//! never triggers a second execution — re-executing could observe a different
//! snapshot of the input data than the bytes being written.

use std::io::Write;

use serde_json::Value;

use crate::error::RenderError;
use crate::executor::TemplateExecutor;
use crate::flatten::flatten;
use crate::source::TemplateSource;
use crate::validate::validate;

/// Renders ordered template sets against structured data, with an optional
/// strict post-render guard.
///
/// The pipeline owns its template source and holds no other state: each render
/// call builds and drops its own buffer and flat map, so one pipeline can
/// serve concurrent calls as long as the source itself is not mutated.
pub struct Pipeline<S> {
    source: S,
}

impl<S: TemplateSource> Pipeline<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
        }
    }

    /// The template source this pipeline resolves against.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Render a template set against `data` and write the output to `dest`.
    ///
    /// `templates` is ordered: the first identifier is the one executed, the
    /// rest supply partials and macros it composes. With `strict` enabled,
    /// every string leaf of `data` must appear verbatim in the output before
    /// any byte reaches `dest`; null `data` skips the check with a warning,
    /// since there is nothing to verify.
    ///
    /// On success the destination has received the full buffer. On any error
    /// the destination has received nothing.
    ///
    /// # Errors
    ///
    /// Any [`RenderError`]; all are terminal for this call, nothing is retried.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use renderguard::{MemorySource, Pipeline};
    ///
    /// let source: MemorySource =
    ///     [("index.html", "<h1>{{ Title }}</h1>")].into_iter().collect();
    /// let pipeline = Pipeline::new(source);
    ///
    /// let mut out = Vec::new();
    /// pipeline.render(&["index.html"], &json!({"Title": "Hello"}), &mut out, true)?;
    /// assert_eq!(out, b"<h1>Hello</h1>");
    /// # Ok::<(), renderguard::RenderError>(())
    /// ```
    pub fn render(
        &self,
        templates: &[&str],
        data: &Value,
        dest: &mut impl Write,
        strict: bool,
    ) -> Result<(), RenderError> {
        let executor = TemplateExecutor::resolve(&self.source, templates)?;
        let buffer = executor.execute(data)?;

        if strict {
            if data.is_null() {
                tracing::warn!("strict mode enabled but input data is null, nothing to validate");
            } else {
                let flat = flatten(data)?;
                validate(&flat, &buffer)?;
            }
        }

        let bytes_read = buffer.len();
        dest.write_all(buffer.as_bytes()).map_err(|source| RenderError::Write {
            source,
        })?;

        // Logging the full input data is a deliberate development aid.
        tracing::debug!(
            "template set executed: bytes_read={} bytes_written={} templates={:?} data={}",
            bytes_read,
            bytes_read,
            templates,
            data
        );

        Ok(())
    }
}
