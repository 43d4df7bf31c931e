//! renderguard - template rendering with a strict post-render data guard.
//!
//! This crate renders named Tera templates against arbitrary structured data
//! and, in strict mode, verifies after rendering that every string-valued leaf
//! of the input actually appears in the output. The point is to catch silent
//! data-loss bugs cheaply: a field omitted by typo, a definitions-only partial
//! executed before the page that composes it (empty output), or logic that
//! conditionally drops a value. For a service emitting generated text or HTML
//! fragments, this replaces a pile of per-template snapshot tests with one
//! containment check.
//!
//! # How the guard works
//!
//! 1. The template set is resolved and parsed ([`executor`]); the first
//!    identifier is the one executed, the rest supply its partials.
//! 2. Output is rendered fully into a private buffer; zero-length output is an
//!    explicit error, never a silent success.
//! 3. In strict mode, the input data is flattened into a path → leaf map
//!    ([`flatten`]) and every string leaf is checked for verbatim containment
//!    in that exact buffer ([`validate`]).
//! 4. Only then is the buffer written to the destination ([`pipeline`]).
//!
//! Containment, not equality: output legitimately wraps values in markup, so
//! the check tolerates decoration while still catching omission. Non-string
//! leaves are skipped with a diagnostic; HTML-escaping differences are not
//! normalized.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use renderguard::{MemorySource, Pipeline};
//!
//! let source: MemorySource = [
//!     ("index.html", "<h1>{{ Title }}</h1>{% include \"footer.html\" %}"),
//!     ("footer.html", "<footer>&copy; {{ Year }}</footer>"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let pipeline = Pipeline::new(source);
//! let mut out = Vec::new();
//! pipeline.render(
//!     &["index.html", "footer.html"],
//!     &json!({"Title": "Hello, World!", "Year": "2025"}),
//!     &mut out,
//!     true, // strict
//! )?;
//! # Ok::<(), renderguard::RenderError>(())
//! ```
//!
//! Templates normally live in a static assets directory; see
//! [`DirSource`]. Strict mode is a per-call flag, not process-wide state, so
//! hot paths can opt out while development and staging environments keep the
//! guard on.

pub mod error;
pub mod executor;
pub mod flatten;
pub mod pipeline;
pub mod source;
pub mod validate;

pub use error::RenderError;
pub use executor::TemplateExecutor;
pub use flatten::{FlatMap, flatten};
pub use pipeline::Pipeline;
pub use source::{DirSource, MemorySource, TemplateSource};
pub use validate::validate;
