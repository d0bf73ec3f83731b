//! The `clean` workflow: load the registry, read the upload, run the
//! pipeline and write the outputs.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use pdc_output::{OutputPaths, write_outputs, write_report_json};
use pdc_standards::{Registry, load_default_registry, load_registry_from_path};

use crate::types::CleanResult;

/// Base name used when the input path has no usable file stem.
const FALLBACK_OUTPUT_NAME: &str = "output";

/// Appended to the input stem to form the default output name.
const DEFAULT_NAME_SUFFIX: &str = "_clean";

/// Resolved options for one `clean` run.
#[derive(Debug, Clone)]
pub struct CleanRequest {
    pub input: PathBuf,
    pub schema: String,
    pub country: String,
    /// Output base name (default: input file stem plus `_clean`).
    pub output_name: Option<String>,
    /// Output directory (default: the input file's directory).
    pub output_dir: Option<PathBuf>,
    /// Registry file replacing the embedded one.
    pub standards: Option<PathBuf>,
    pub dry_run: bool,
    pub report: Option<PathBuf>,
}

/// Load the embedded registry, or the override file when given.
pub fn load_registry(standards: Option<&Path>) -> Result<Registry> {
    match standards {
        Some(path) => load_registry_from_path(path)
            .with_context(|| format!("load standards from {}", path.display())),
        None => load_default_registry().context("load embedded standards"),
    }
}

/// Output locations derived from the request and its input path.
pub fn output_paths(request: &CleanRequest) -> OutputPaths {
    let name = request
        .output_name
        .clone()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| {
            let stem = request
                .input
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or(FALLBACK_OUTPUT_NAME);
            format!("{stem}{DEFAULT_NAME_SUFFIX}")
        });
    let dir = request.output_dir.clone().unwrap_or_else(|| {
        request
            .input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    });
    OutputPaths::new(&dir, name.trim())
}

/// Canonical form of `path` via its parent directory, so `./x.csv`, `x.csv`
/// and `out/../x.csv` compare equal. Falls back to the path as given when the
/// directory does not exist.
fn resolve_path(path: &Path) -> PathBuf {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    match (parent.canonicalize(), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}

/// Run the whole `clean` workflow.
pub fn clean_upload(request: &CleanRequest) -> Result<CleanResult> {
    let span = info_span!("clean", input = %request.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let registry = load_registry(request.standards.as_deref())?;
    let schema = registry.schema(&request.schema)?;
    let country = registry.country(&request.country)?;

    let table = pdc_ingest::read_table(&request.input)
        .with_context(|| format!("read {}", request.input.display()))?;
    let output = pdc_core::run(&table, schema, country);

    let outputs = if request.dry_run {
        info!("dry run: skipping output files");
        None
    } else {
        let paths = output_paths(request);
        let input = resolve_path(&request.input);
        if resolve_path(&paths.full) == input || resolve_path(&paths.clean) == input {
            bail!(
                "output {} would overwrite the input; choose another --name or --output-dir",
                request.input.display()
            );
        }
        write_outputs(&output.bundle, &paths).context("write output tables")?;
        Some(paths)
    };

    if let Some(path) = &request.report {
        write_report_json(path, &output.report).context("write report")?;
    }

    info!(
        records = output.bundle.len(),
        duration_ms = start.elapsed().as_millis(),
        "clean complete"
    );
    Ok(CleanResult {
        input: request.input.clone(),
        records: output.bundle.len(),
        outputs,
        report_path: request.report.clone(),
        report: output.report,
    })
}
