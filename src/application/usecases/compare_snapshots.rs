//! 두 스냅샷 비교 유스케이스.

use crate::application::ports::{Reporter, SnapshotTool, Tone};
use crate::application::usecases::invoke_tool;
use crate::domain::changes::{ChangeSet, parse_status_output};

pub struct CompareSnapshotsUseCase<'a> {
    pub tool: &'a dyn SnapshotTool,
    pub reporter: &'a dyn Reporter,
}

impl<'a> CompareSnapshotsUseCase<'a> {
    /// `snapper status from..to` 결과를 분류한다. 실패/빈 출력이면 `None`.
    pub async fn execute(&self, from: &str, to: &str) -> Option<ChangeSet> {
        let action = format!("status {from}..{to}");
        let output = invoke_tool(self.reporter, &action, self.tool.status(from, to)).await;

        match output {
            Some(raw) if !raw.trim().is_empty() => Some(parse_status_output(&raw)),
            _ => {
                self.reporter.notice(Tone::Warning, "No changes found or error occurred");
                None
            }
        }
    }
}

pub fn summary_title(from: &str, to: &str) -> String {
    format!("Snapshot Comparison Summary ({from} → {to})")
}

pub fn summary_lines(changes: &ChangeSet) -> Vec<String> {
    vec![
        format!("Added: {} files", changes.added.len()),
        format!("Removed: {} files", changes.removed.len()),
        format!("Modified: {} files", changes.modified.len()),
        format!("Total changes: {} files", changes.total()),
    ]
}
