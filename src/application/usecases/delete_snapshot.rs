//! 스냅샷 삭제 유스케이스.

use crate::application::ports::{Reporter, SnapshotTool, Tone};
use crate::application::usecases::invoke_tool;

pub struct DeleteSnapshotUseCase<'a> {
    pub tool: &'a dyn SnapshotTool,
    pub reporter: &'a dyn Reporter,
}

impl<'a> DeleteSnapshotUseCase<'a> {
    pub async fn execute(&self, number: &str) -> bool {
        let number = number.trim();
        let action = format!("delete {number}");
        if invoke_tool(self.reporter, &action, self.tool.delete(number))
            .await
            .is_none()
        {
            return false;
        }

        self.reporter.notice(Tone::Success, &format!("Snapshot {number} deleted"));
        true
    }
}
