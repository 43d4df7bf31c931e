//! Strict containment check of flattened data against rendered output.

use serde_json::Value;

use crate::error::RenderError;
use crate::flatten::FlatMap;

/// Check that every string leaf of `flat` occurs verbatim in `rendered`.
///
/// Containment rather than equality: rendered output legitimately wraps values
/// in surrounding markup, and a substring check still catches omission bugs.
/// The comparison is case-sensitive with no normalization and no awareness of
/// HTML escaping, so a template that escapes a value differently than the raw
/// input will fail the check — a known limit of the guard, not a bug.
///
/// Non-string leaves (numbers, booleans) are skipped with a warn diagnostic;
/// validation can never fail because of them.
///
/// # Errors
///
/// Fails on the first absent value with [`RenderError::MissingData`] naming
/// the flattened path of the offending leaf. `flat` iterates in path order, so
/// the reported leaf is deterministic.
pub fn validate(flat: &FlatMap, rendered: &str) -> Result<(), RenderError> {
    for (path, value) in flat {
        let Value::String(expected) = value else {
            tracing::warn!("skipping strict check for non-string value '{}' ({})", path, value);
            continue;
        };
        if !rendered.contains(expected.as_str()) {
            return Err(RenderError::MissingData {
                path: path.clone(),
            });
        }
        tracing::debug!("data value '{}' present in rendered output", path);
    }
    Ok(())
}
