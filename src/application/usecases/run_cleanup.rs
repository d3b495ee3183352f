//! 정리 알고리즘 실행 유스케이스.

use crate::application::ports::{Reporter, SnapshotTool, Tone};
use crate::application::usecases::invoke_tool;
use crate::domain::cleanup::CleanupAlgorithm;

pub struct RunCleanupUseCase<'a> {
    pub tool: &'a dyn SnapshotTool,
    pub reporter: &'a dyn Reporter,
}

impl<'a> RunCleanupUseCase<'a> {
    pub async fn execute(&self, algorithm: CleanupAlgorithm) -> bool {
        let action = format!("cleanup {algorithm}");
        if invoke_tool(self.reporter, &action, self.tool.cleanup(algorithm))
            .await
            .is_none()
        {
            self.reporter.notice(Tone::Warning, "No snapshots cleaned or error occurred");
            return false;
        }

        self.reporter.notice(Tone::Success, &format!("{algorithm} cleanup completed"));
        true
    }
}
