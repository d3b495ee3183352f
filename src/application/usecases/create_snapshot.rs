//! 스냅샷 생성 유스케이스.

use crate::application::ports::{Reporter, SnapshotTool, Tone};
use crate::application::usecases::invoke_tool;

pub const DEFAULT_DESCRIPTION: &str = "Manual snapshot";

pub struct CreateSnapshotUseCase<'a> {
    pub tool: &'a dyn SnapshotTool,
    pub reporter: &'a dyn Reporter,
}

impl<'a> CreateSnapshotUseCase<'a> {
    /// 성공 여부를 반환한다. 빈 설명은 기본 설명으로 대체한다.
    pub async fn execute(&self, description: &str) -> bool {
        let description = match description.trim() {
            "" => DEFAULT_DESCRIPTION,
            trimmed => trimmed,
        };

        if invoke_tool(self.reporter, "create", self.tool.create(description))
            .await
            .is_none()
        {
            return false;
        }

        self.reporter.notice(Tone::Success, &format!("Snapshot created: {description}"));
        true
    }
}
