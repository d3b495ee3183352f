//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수/프로세스 접근은 `infrastructure`에서만 수행한다.

use serde::{Deserialize, Serialize};

use crate::domain::paging::DEFAULT_PAGE_SIZE;

pub const DEFAULT_SNAPPER_COMMAND: &str = "snapper";
pub const DEFAULT_SNAPPER_CONFIG: &str = "root";
pub const DEFAULT_CONFIGS_DIR: &str = "/etc/snapper/configs";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// snapper 실행/프로필 설정
    #[serde(default)]
    pub snapper: SnapperConfig,
    /// 화면 표시 설정
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SnapperConfig {
    /// 실행할 snapper 명령(경로 가능)
    pub command: Option<String>,
    /// 대상 프로필 이름(`--config`)
    pub config: Option<String>,
    /// 프로필 설정 파일 디렉터리
    pub configs_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct UiConfig {
    /// 파일 목록 한 페이지의 항목 수
    pub page_size: Option<usize>,
    /// 메뉴를 다시 그릴 때 화면을 지울지 여부(기본 true)
    pub clear_screen: Option<bool>,
}

impl Config {
    pub fn snapper_command(&self) -> String {
        self.snapper
            .command
            .clone()
            .unwrap_or_else(|| DEFAULT_SNAPPER_COMMAND.to_string())
    }

    pub fn snapper_config(&self) -> String {
        self.snapper
            .config
            .clone()
            .unwrap_or_else(|| DEFAULT_SNAPPER_CONFIG.to_string())
    }

    pub fn configs_dir(&self) -> String {
        self.snapper
            .configs_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_CONFIGS_DIR.to_string())
    }

    /// 0은 허용하지 않으므로 최소 1로 보정한다.
    pub fn page_size(&self) -> usize {
        self.ui.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1)
    }

    pub fn clear_screen(&self) -> bool {
        self.ui.clear_screen.unwrap_or(true)
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        self.snapper.merge_from(other.snapper);
        self.ui.merge_from(other.ui);
    }
}

impl SnapperConfig {
    pub fn merge_from(&mut self, other: SnapperConfig) {
        if other.command.is_some() {
            self.command = other.command;
        }
        if other.config.is_some() {
            self.config = other.config;
        }
        if other.configs_dir.is_some() {
            self.configs_dir = other.configs_dir;
        }
    }
}

impl UiConfig {
    pub fn merge_from(&mut self, other: UiConfig) {
        if other.page_size.is_some() {
            self.page_size = other.page_size;
        }
        if other.clear_screen.is_some() {
            self.clear_screen = other.clear_screen;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = Config::default();
        assert_eq!(cfg.snapper_command(), "snapper");
        assert_eq!(cfg.snapper_config(), "root");
        assert_eq!(cfg.configs_dir(), "/etc/snapper/configs");
        assert_eq!(cfg.page_size(), 20);
        assert!(cfg.clear_screen());
    }

    #[test]
    fn later_values_override_earlier_ones() {
        let mut base: Config =
            serde_json::from_str(r#"{"snapper":{"config":"root","command":"/usr/bin/snapper"}}"#)
                .unwrap();
        let overlay: Config =
            serde_json::from_str(r#"{"snapper":{"config":"home"},"ui":{"page_size":0}}"#).unwrap();
        base.merge_from(overlay);

        assert_eq!(base.snapper_config(), "home");
        assert_eq!(base.snapper_command(), "/usr/bin/snapper");
        assert_eq!(base.page_size(), 1);
    }
}
