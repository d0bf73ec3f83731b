//! CSV writers for the `full` and `clean` views.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use tracing::info;

use pdc_model::OutputBundle;

use crate::error::{OutputError, Result};
use crate::paths::{OutputPaths, ensure_parent_dir};

/// Write the `full` view: header of schema fields plus `upload_issues`.
pub fn write_full_csv<W: Write>(writer: W, bundle: &OutputBundle) -> csv::Result<()> {
    let mut out = Writer::from_writer(writer);
    out.write_record(bundle.full_header())?;
    for row in bundle.full_rows() {
        out.write_record(&row)?;
    }
    out.flush()?;
    Ok(())
}

/// Write the `clean` view: schema fields only, no header row.
pub fn write_clean_csv<W: Write>(writer: W, bundle: &OutputBundle) -> csv::Result<()> {
    let mut out = Writer::from_writer(writer);
    for row in bundle.clean_rows() {
        out.write_record(&row)?;
    }
    out.flush()?;
    Ok(())
}

/// Write both views to `paths`, creating parent directories as needed.
pub fn write_outputs(bundle: &OutputBundle, paths: &OutputPaths) -> Result<()> {
    write_file(&paths.full, |file| write_full_csv(file, bundle))?;
    write_file(&paths.clean, |file| write_clean_csv(file, bundle))?;
    info!(
        full = %paths.full.display(),
        clean = %paths.clean.display(),
        records = bundle.len(),
        "outputs written"
    );
    Ok(())
}

fn write_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(File) -> csv::Result<()>,
{
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write(file).map_err(|source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    })
}
