//! snapper CLI 어댑터.
//! 고정된 하위 명령 어휘(list/create/delete/status/cleanup)만 사용한다.

mod runner;

use anyhow::Result;
use async_trait::async_trait;

use crate::application::ports::SnapshotTool;
use crate::domain::cleanup::CleanupAlgorithm;

pub use runner::run_tool_command;

/// snapper 하위 명령.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapperCommand {
    List,
    Create { description: String },
    Delete { number: String },
    Status { from: String, to: String },
    Cleanup { algorithm: CleanupAlgorithm },
}

impl SnapperCommand {
    /// `--config <profile>` 뒤에 붙는 인자 목록.
    pub fn args(&self) -> Vec<String> {
        match self {
            Self::List => vec!["list".to_string()],
            Self::Create { description } => vec![
                "create".to_string(),
                "--description".to_string(),
                description.clone(),
            ],
            Self::Delete { number } => vec!["delete".to_string(), number.clone()],
            Self::Status { from, to } => vec!["status".to_string(), format!("{from}..{to}")],
            Self::Cleanup { algorithm } => {
                vec!["cleanup".to_string(), algorithm.as_str().to_string()]
            }
        }
    }
}

/// 지정 프로필에 대해 snapper를 실행하는 [`SnapshotTool`] 구현체.
pub struct SnapperCli {
    program: String,
    config: String,
}

impl SnapperCli {
    pub fn new(program: impl Into<String>, config: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            config: config.into(),
        }
    }

    /// 전체 인자 목록(`--config <profile>` + 하위 명령).
    pub fn full_args(&self, command: &SnapperCommand) -> Vec<String> {
        let mut args = vec!["--config".to_string(), self.config.clone()];
        args.extend(command.args());
        args
    }

    async fn run(&self, command: SnapperCommand) -> Result<String> {
        run_tool_command(&self.program, &self.full_args(&command)).await
    }
}

#[async_trait]
impl SnapshotTool for SnapperCli {
    async fn list(&self) -> Result<String> {
        self.run(SnapperCommand::List).await
    }

    async fn create(&self, description: &str) -> Result<String> {
        self.run(SnapperCommand::Create {
            description: description.to_string(),
        })
        .await
    }

    async fn delete(&self, number: &str) -> Result<String> {
        self.run(SnapperCommand::Delete {
            number: number.to_string(),
        })
        .await
    }

    async fn status(&self, from: &str, to: &str) -> Result<String> {
        self.run(SnapperCommand::Status {
            from: from.to_string(),
            to: to.to_string(),
        })
        .await
    }

    async fn cleanup(&self, algorithm: CleanupAlgorithm) -> Result<String> {
        self.run(SnapperCommand::Cleanup { algorithm }).await
    }
}
