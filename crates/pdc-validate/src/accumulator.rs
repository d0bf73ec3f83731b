//! Per-record issue folding.

use pdc_model::{Issue, IssueList};

/// Stages contributing issues to a record, in the order they appear in
/// `upload_issues`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IssueStage {
    Date,
    Phone,
    Required,
    Enum,
}

impl IssueStage {
    fn index(self) -> usize {
        match self {
            IssueStage::Date => 0,
            IssueStage::Phone => 1,
            IssueStage::Required => 2,
            IssueStage::Enum => 3,
        }
    }
}

/// Append-only collector that emits issues in stage order regardless of the
/// order stages report them.
#[derive(Debug, Clone, Default)]
pub struct IssueAccumulator {
    stages: [Vec<Issue>; 4],
}

impl IssueAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, stage: IssueStage, issue: Issue) {
        self.stages[stage.index()].push(issue);
    }

    pub fn extend_stage<I: IntoIterator<Item = Issue>>(&mut self, stage: IssueStage, issues: I) {
        self.stages[stage.index()].extend(issues);
    }

    pub fn finish(self) -> IssueList {
        let mut list = IssueList::new();
        list.extend(self.stages.into_iter().flatten());
        list
    }
}
