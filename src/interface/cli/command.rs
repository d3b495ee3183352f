//! CLI 명령 파싱 모듈.

use clap::{Parser, Subcommand};

use crate::application::config::Config;

#[derive(Debug, Parser)]
#[command(name = "zypshot")]
#[command(about = "Interactive terminal front-end for snapper snapshots")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Snapper config (profile) to manage, e.g. root or home
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Path or name of the snapper binary
    #[arg(long, global = true)]
    snapper: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective merged config and snapper availability
    Inspect,
}

/// 명령행에서 지정한 설정 덮어쓰기 값.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellOptions {
    pub config: Option<String>,
    pub snapper: Option<String>,
}

impl ShellOptions {
    /// 파일 설정보다 명령행 값을 우선한다.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(name) = &self.config {
            config.snapper.config = Some(name.clone());
        }
        if let Some(command) = &self.snapper {
            config.snapper.command = Some(command.clone());
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    Interactive(ShellOptions),
    InspectConfig,
}

impl Cli {
    /// 잘못된 인자나 `--help`는 clap이 직접 출력하고 종료한다.
    pub fn parse_action() -> CliAction {
        Self::parse().into_action()
    }

    pub fn into_action(self) -> CliAction {
        match self.command {
            Some(Commands::Inspect) => CliAction::InspectConfig,
            None => CliAction::Interactive(ShellOptions {
                config: self.config,
                snapper: self.snapper,
            }),
        }
    }
}
