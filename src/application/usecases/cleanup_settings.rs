//! 정리 설정 조회/편집 유스케이스.

use crate::application::ports::{Reporter, SettingsStore, Tone};
use crate::domain::cleanup::{CleanupSetting, SettingsError};

/// 프로필 설정 파일의 정리 관련 줄을 패널로 보여준다.
pub struct ViewCleanupSettingsUseCase<'a> {
    pub config_name: &'a str,
    pub store: &'a dyn SettingsStore,
    pub reporter: &'a dyn Reporter,
}

impl<'a> ViewCleanupSettingsUseCase<'a> {
    pub fn execute(&self) -> Option<Vec<String>> {
        match self.store.read_cleanup_settings() {
            Ok(lines) if lines.is_empty() => {
                self.reporter.notice(Tone::Warning, "No cleanup settings found");
                Some(lines)
            }
            Ok(lines) => {
                self.reporter.panel(
                    &format!("Cleanup Settings for {}", self.config_name),
                    &lines,
                    Tone::Success,
                );
                Some(lines)
            }
            Err(err) => {
                self.reporter.notice(Tone::Error, &err.to_string());
                None
            }
        }
    }
}

/// 설정 키/값을 검증한 뒤 설정 파일을 갱신한다.
/// 검증에 실패하면 파일을 건드리지 않는다.
pub struct EditCleanupSettingUseCase<'a> {
    pub store: &'a dyn SettingsStore,
    pub reporter: &'a dyn Reporter,
}

impl<'a> EditCleanupSettingUseCase<'a> {
    pub fn execute(&self, key: &str, raw_value: &str) -> Result<(), SettingsError> {
        let result = CleanupSetting::parse(key).and_then(|setting| {
            let value = setting.normalize(raw_value)?;
            self.store.write_setting(setting, &value)?;
            Ok((setting, value))
        });

        match result {
            Ok((setting, value)) => {
                self.reporter.notice(
                    Tone::Success,
                    &format!(
                        "Updated {setting} to {value} in {}",
                        self.store.path().display()
                    ),
                );
                Ok(())
            }
            Err(err) => {
                self.reporter.notice(Tone::Error, &err.to_string());
                Err(err)
            }
        }
    }
}
