use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use pdc_model::PipelineReport;

use crate::error::{OutputError, Result};
use crate::paths::ensure_parent_dir;

/// Write the batch report as pretty-printed JSON.
pub fn write_report_json(path: &Path, report: &PipelineReport) -> Result<()> {
    ensure_parent_dir(path)?;
    let io_error = |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report).map_err(|source| OutputError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.write_all(b"\n").map_err(io_error)?;
    writer.flush().map_err(io_error)?;
    info!(path = %path.display(), "report written");
    Ok(())
}
