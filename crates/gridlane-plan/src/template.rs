//! Template store, marker scanning, and placeholder substitution.

use gridlane_core::errors::{ErrorInfo, GridlaneError};

use crate::grid::{ParameterGrid, ParameterPoint};

/// Raw template text with `##name##` placeholder markers.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    text: String,
}

/// Marker names may not contain whitespace or `#`.
fn is_marker_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c != '#' && !c.is_whitespace())
}

impl Template {
    /// Wraps raw template text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Returns the raw template text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Scans the template for `##name##` markers, first occurrence order,
    /// without duplicates.
    pub fn markers(&self) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();
        let mut at = 0;
        while let Some(off) = self.text[at..].find("##") {
            let start = at + off + 2;
            let Some(len) = self.text[start..].find("##") else {
                break;
            };
            let name = &self.text[start..start + len];
            if is_marker_name(name) {
                if !found.iter().any(|m| m == name) {
                    found.push(name.to_string());
                }
                at = start + len + 2;
            } else {
                // Not a marker; rescan from the closing pair.
                at = start;
            }
        }
        found
    }

    /// Checks every marker in the template against the grid's axis names.
    ///
    /// Fails on the first marker with no corresponding axis; the pipeline
    /// runs this before writing anything so a stale template cannot leave
    /// half a job set behind.
    pub fn validate(&self, grid: &ParameterGrid) -> Result<(), GridlaneError> {
        let known: Vec<&str> = grid.axes().iter().map(|axis| axis.name.as_str()).collect();
        for marker in self.markers() {
            if !known.contains(&marker.as_str()) {
                return Err(GridlaneError::Template(
                    ErrorInfo::new(
                        "unknown-marker",
                        format!("template marker ##{marker}## matches no axis"),
                    )
                    .with_context("marker", marker)
                    .with_context("axes", known.join(",")),
                ));
            }
        }
        Ok(())
    }

    /// Substitutes every axis marker with the point's canonical value text.
    ///
    /// Markers are replaced exactly; axes absent from the template are
    /// silently skipped. Callers are expected to have run [`Template::validate`]
    /// so that no unknown marker can survive substitution.
    pub fn render(&self, point: &ParameterPoint) -> Result<String, GridlaneError> {
        let mut out = self.text.clone();
        for (name, value) in point.bindings() {
            let marker = format!("##{name}##");
            if out.contains(&marker) {
                out = out.replace(&marker, &value.canonical_text()?);
            }
        }
        Ok(out)
    }
}
