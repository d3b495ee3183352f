//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use super::utils::command_exists;
use crate::application::config::{SnapperConfig, UiConfig};

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub snapper: SnapperConfig,
    pub ui: UiConfig,
    pub effective: EffectiveSettings,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveSettings {
    pub snapper_command: String,
    pub snapper_available: bool,
    pub snapper_config: String,
    pub config_file: String,
    pub config_file_exists: bool,
    pub page_size: usize,
    pub clear_screen: bool,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let cfg = &loaded.config;
        let config_file =
            std::path::Path::new(&cfg.configs_dir()).join(cfg.snapper_config());
        let snapper_command = cfg.snapper_command();

        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            snapper: cfg.snapper.clone(),
            ui: cfg.ui.clone(),
            effective: EffectiveSettings {
                snapper_available: command_exists(&snapper_command),
                snapper_command,
                snapper_config: cfg.snapper_config(),
                config_file_exists: config_file.is_file(),
                config_file: config_file.display().to_string(),
                page_size: cfg.page_size(),
                clear_screen: cfg.clear_screen(),
            },
        }
    }
}
