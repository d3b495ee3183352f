//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

use crate::application::config::Config;
use crate::domain::cleanup::{CleanupAlgorithm, CleanupSetting, SettingsError};

pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 외부 스냅샷 도구(snapper) 실행 포트.
/// 성공 시 표준 출력 원문을, 실패 시 도구의 오류 메시지를 담은 에러를 반환한다.
#[async_trait]
pub trait SnapshotTool: Send + Sync {
    async fn list(&self) -> Result<String>;
    async fn create(&self, description: &str) -> Result<String>;
    async fn delete(&self, number: &str) -> Result<String>;
    async fn status(&self, from: &str, to: &str) -> Result<String>;
    async fn cleanup(&self, algorithm: CleanupAlgorithm) -> Result<String>;
}

pub trait SettingsStore: Send + Sync {
    fn path(&self) -> PathBuf;
    fn read_cleanup_settings(&self) -> Result<Vec<String>, SettingsError>;
    fn write_setting(&self, setting: CleanupSetting, value: &str) -> Result<(), SettingsError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Info,
    Success,
    Warning,
    Error,
    Muted,
}

#[derive(Debug, Clone, Default)]
pub struct TableView {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub trait Reporter: Send + Sync {
    fn clear(&self);
    fn banner(&self, title: &str, subtitle: &str);
    fn table(&self, table: &TableView);
    fn panel(&self, title: &str, lines: &[String], tone: Tone);
    fn notice(&self, tone: Tone, message: &str);
    fn raw(&self, line: &str);
}

/// 사용자가 Ctrl-C 등으로 입력을 중단했음을 나타낸다.
#[derive(Debug, Error)]
#[error("interrupted by user")]
pub struct Interrupted;

/// 대화형 입력 포트. 중단 시 [`Interrupted`]를 담은 에러를 반환한다.
pub trait Prompter: Send + Sync {
    /// 허용 목록 중 하나를 받는다. 빈 입력은 기본값, 목록 밖 입력은 다시 묻는다.
    fn choose(&self, message: &str, choices: &[&str], default: &str) -> Result<String>;
    fn text(&self, message: &str, default: Option<&str>) -> Result<String>;
    /// 후보 목록을 자동완성으로 제시하며 값을 받는다. 빈 입력/취소는 `None`.
    fn select(&self, message: &str, candidates: &[String]) -> Result<Option<String>>;
    fn confirm(&self, message: &str, default: bool) -> Result<bool>;
    fn pause(&self, message: &str) -> Result<()>;
}

/// 에러 체인에 사용자 중단이 포함되어 있는지 확인한다.
pub fn is_interrupted(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| cause.is::<Interrupted>())
}
