//! 스냅샷 목록 조회 유스케이스.

use crate::application::ports::{Reporter, SnapshotTool, TableView, Tone};
use crate::application::usecases::invoke_tool;
use crate::domain::snapshot::{Snapshot, parse_snapshot_list};

/// `snapper list` 결과를 레코드로 변환한다. 잘못된 행은 경고 후 건너뛴다.
pub struct ListSnapshotsUseCase<'a> {
    pub tool: &'a dyn SnapshotTool,
    pub reporter: &'a dyn Reporter,
}

impl<'a> ListSnapshotsUseCase<'a> {
    /// 실패하거나 스냅샷이 없으면 빈 목록을 반환한다.
    pub async fn execute(&self) -> Vec<Snapshot> {
        let Some(output) = invoke_tool(self.reporter, "list", self.tool.list()).await else {
            self.reporter.notice(Tone::Warning, "No snapshots found or error in Snapper output");
            return Vec::new();
        };

        if output.lines().count() <= 2 {
            self.reporter.notice(Tone::Warning, "No snapshots available");
            return Vec::new();
        }

        let listing = parse_snapshot_list(&output);
        for line in &listing.skipped {
            tracing::warn!(line = %line, "skipping malformed snapper list row");
            self.reporter.notice(Tone::Warning, &format!("Skipping malformed line: {line}"));
        }

        listing.snapshots
    }
}

pub fn snapshot_table(snapshots: &[Snapshot]) -> TableView {
    TableView {
        title: "Snapper Snapshots".to_string(),
        headers: ["Number", "Type", "Date", "Description"]
            .iter()
            .map(ToString::to_string)
            .collect(),
        rows: snapshots
            .iter()
            .map(|s| {
                vec![
                    s.number.clone(),
                    s.kind.to_string(),
                    s.date.clone(),
                    s.description.clone(),
                ]
            })
            .collect(),
    }
}
