//! 메뉴 동작 하나당 하나의 유스케이스.
//! 외부 도구 실패는 모두 여기서 메시지로 보고하고, 호출자에게는 "결과 없음"만 전달한다.

pub mod cleanup_settings;
pub mod compare_snapshots;
pub mod create_snapshot;
pub mod delete_snapshot;
pub mod inspect_config;
pub mod list_snapshots;
pub mod rollback_guide;
pub mod run_cleanup;
pub mod snapshot_details;

use std::future::Future;

use anyhow::Result;

use crate::application::ports::{Reporter, Tone};

/// 도구 호출 결과를 받아 실패 시 오류를 보고하고 `None`을 반환한다.
pub(crate) async fn invoke_tool<F>(reporter: &dyn Reporter, action: &str, call: F) -> Option<String>
where
    F: Future<Output = Result<String>>,
{
    match call.await {
        Ok(output) => Some(output),
        Err(err) => {
            tracing::warn!(action, error = %format!("{err:#}"), "snapper invocation failed");
            reporter.notice(Tone::Error, &format!("Error running snapper {action}: {err:#}"));
            None
        }
    }
}
