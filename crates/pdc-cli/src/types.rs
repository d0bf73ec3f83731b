use std::path::PathBuf;

use pdc_model::PipelineReport;
use pdc_output::OutputPaths;

/// Everything the `clean` command needs to print its summary.
#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    pub records: usize,
    /// `None` on a dry run.
    pub outputs: Option<OutputPaths>,
    pub report_path: Option<PathBuf>,
    pub report: PipelineReport,
}

impl CleanResult {
    pub fn clean_records(&self) -> usize {
        self.report.issue_frequency.clean_records
    }
}
