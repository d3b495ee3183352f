//! 스냅샷 상세 조회 유스케이스.

use crate::application::ports::{Reporter, SnapshotTool, Tone};
use crate::application::usecases::invoke_tool;
use crate::domain::snapshot::{Snapshot, find_snapshot, parse_snapshot_list};

pub struct SnapshotDetailsUseCase<'a> {
    pub tool: &'a dyn SnapshotTool,
    pub reporter: &'a dyn Reporter,
}

impl<'a> SnapshotDetailsUseCase<'a> {
    pub async fn execute(&self, number: &str) -> Option<Snapshot> {
        let Some(output) = invoke_tool(self.reporter, "list", self.tool.list()).await else {
            self.reporter.notice(Tone::Warning, "No snapshot details available");
            return None;
        };

        let listing = parse_snapshot_list(&output);
        let Some(snapshot) = find_snapshot(&listing.snapshots, number).cloned() else {
            self.reporter.notice(Tone::Warning, &format!("Snapshot {} not found", number.trim()));
            return None;
        };

        self.reporter.panel(
            &format!("Snapshot {} Details", snapshot.number),
            &snapshot.detail_lines(),
            Tone::Success,
        );
        Some(snapshot)
    }
}
