//! Tera-backed template execution into an owned buffer.
//!
//! A [`TemplateExecutor`] is built from an ordered template set: every named
//! source is loaded and registered into one Tera instance, with later entries
//! overriding earlier ones. Execution always renders the FIRST identifier of
//! the set, mirroring how composed template sets are conventionally ordered
//! (page first, partials after). Executing a set whose first entry is a
//! definitions-only partial (e.g. a macro file) produces empty output, which
//! is surfaced as an explicit error rather than silently passed through.

use serde_json::Value;
use tera::{Context as TeraContext, Tera};

use crate::error::RenderError;
use crate::source::TemplateSource;

/// One parsed template set, ready to execute.
#[derive(Debug)]
pub struct TemplateExecutor {
    tera: Tera,
    entry: String,
}

impl TemplateExecutor {
    /// Load and parse an ordered template set from a source.
    ///
    /// # Errors
    ///
    /// - [`RenderError::EmptyTemplateSet`] if `names` is empty
    /// - [`RenderError::Resolve`] if a named source cannot be loaded
    /// - [`RenderError::Parse`] if the set fails to parse
    pub fn resolve(source: &impl TemplateSource, names: &[&str]) -> Result<Self, RenderError> {
        let entry = names.first().ok_or(RenderError::EmptyTemplateSet)?.to_string();

        let mut loaded = Vec::with_capacity(names.len());
        for name in names {
            let body = source.load(name).map_err(|source| RenderError::Resolve {
                name: (*name).to_string(),
                source,
            })?;
            loaded.push(((*name).to_string(), body));
        }

        let mut tera = Tera::default();
        tera.add_raw_templates(loaded).map_err(|e| RenderError::Parse {
            names: names.iter().map(|n| (*n).to_string()).collect(),
            source: Box::new(e),
        })?;

        Ok(Self {
            tera,
            entry,
        })
    }

    /// Execute the set against `data`, fully materializing the output.
    ///
    /// The whole buffer is built before any byte reaches a destination, so a
    /// later validation pass inspects exactly the bytes that would be written.
    /// Object data becomes the template context; null data renders with an
    /// empty context; any other top-level shape is rejected, since template
    /// contexts are keyed.
    ///
    /// # Errors
    ///
    /// - [`RenderError::Execute`] if the engine raises
    /// - [`RenderError::EmptyOutput`] if the rendered buffer has zero length
    pub fn execute(&self, data: &Value) -> Result<String, RenderError> {
        let context = match data {
            Value::Null => TeraContext::new(),
            Value::Object(_) => {
                TeraContext::from_value(data.clone()).map_err(|e| RenderError::Execute {
                    name: self.entry.clone(),
                    source: Box::new(e),
                })?
            }
            other => {
                return Err(RenderError::Execute {
                    name: self.entry.clone(),
                    source: Box::new(tera::Error::msg(format!(
                        "template data must be an object or null, got: {}",
                        other
                    ))),
                });
            }
        };

        let rendered = self.tera.render(&self.entry, &context).map_err(|e| {
            RenderError::Execute {
                name: self.entry.clone(),
                source: Box::new(e),
            }
        })?;

        if rendered.is_empty() {
            return Err(RenderError::EmptyOutput {
                name: self.entry.clone(),
            });
        }

        tracing::debug!("executed template '{}' ({} bytes)", self.entry, rendered.len());
        Ok(rendered)
    }

    /// The identifier that [`execute`](Self::execute) renders.
    pub fn entry(&self) -> &str {
        &self.entry
    }
}
