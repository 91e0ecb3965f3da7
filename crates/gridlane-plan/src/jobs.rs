//! Job rendering: one file plus one invocation command per parameter point.

use std::fs;
use std::path::Path;

use gridlane_core::errors::{ErrorInfo, GridlaneError};
use serde::Serialize;

use crate::config::JobNaming;
use crate::grid::{JobId, ParameterGrid, ParameterPoint};
use crate::template::Template;

/// One rendered job: immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedJob {
    /// Sequential 1-based identifier.
    pub id: JobId,
    /// File name of the rendered job input (zero-padded id plus extension).
    pub file_name: String,
    /// Shell command that runs the job: interpreter prefix plus file name.
    pub command: String,
    /// Parameter point the job was rendered from.
    pub params: ParameterPoint,
}

/// Renders every point of the grid through the template and writes each job
/// file into `out_dir`, in enumeration order.
///
/// A write failure aborts at the failing job; files already written stay in
/// place, since the downstream engine is retried externally per job.
pub fn render_jobs(
    grid: &ParameterGrid,
    template: &Template,
    naming: &JobNaming,
    job_prefix: &str,
    out_dir: &Path,
) -> Result<Vec<RenderedJob>, GridlaneError> {
    let mut jobs = Vec::with_capacity(grid.total_points());
    for (id, point) in grid.enumerate() {
        let rendered = template.render(&point)?;
        let file_name = format!("{}.{}", id.zero_padded(naming.width), naming.extension);
        let path = out_dir.join(&file_name);
        fs::write(&path, rendered).map_err(|err| {
            GridlaneError::Io(
                ErrorInfo::new("job-write", err.to_string())
                    .with_context("job", id.as_raw().to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        let command = format!("{job_prefix} {file_name}");
        jobs.push(RenderedJob {
            id,
            file_name,
            command,
            params: point,
        });
    }
    Ok(jobs)
}
