//! snapper 프로세스 실행기.

use std::process::Stdio;

use anyhow::{Context, Result, bail};
use tokio::process::Command;

/// 명령을 실행하고 표준 출력을 돌려준다.
/// 종료 코드가 0이 아니면 표준 에러 원문을 담은 에러를 반환한다.
pub async fn run_tool_command(program: &str, args: &[String]) -> Result<String> {
    tracing::debug!(program, ?args, "running snapshot tool");

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .with_context(|| format!("failed to spawn '{program}'"))?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

    tracing::debug!(
        program,
        status = %output.status,
        stdout_bytes = stdout.len(),
        "snapshot tool finished"
    );

    if !output.status.success() {
        bail!(
            "{}: {}",
            output.status,
            if stderr.is_empty() {
                "no stderr output"
            } else {
                stderr.as_str()
            }
        );
    }

    Ok(stdout)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[tokio::test]
    async fn returns_stdout_on_success() {
        let out = run_tool_command("sh", &args(&["-c", "printf 'a\\nb\\n'"]))
            .await
            .unwrap();
        assert_eq!(out, "a\nb\n");
    }

    #[tokio::test]
    async fn reports_stderr_on_failure() {
        let err = run_tool_command("sh", &args(&["-c", "echo 'Unknown config.' >&2; exit 1"]))
            .await
            .unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("Unknown config."), "{msg}");
        assert!(msg.contains("exit status: 1"), "{msg}");
    }

    #[tokio::test]
    async fn empty_stderr_is_described() {
        let err = run_tool_command("sh", &args(&["-c", "exit 3"]))
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("no stderr output"));
    }

    #[tokio::test]
    async fn missing_binary_is_an_error() {
        let err = run_tool_command("zypshot-definitely-missing-binary", &[])
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("failed to spawn"));
    }
}
