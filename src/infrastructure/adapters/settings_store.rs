//! snapper 프로필 설정 파일 저장소 어댑터.

use std::fs;
use std::path::{Path, PathBuf};

use crate::application::ports::SettingsStore;
use crate::domain::cleanup::{CleanupSetting, SettingsError, apply_setting, cleanup_lines};

/// `<configs_dir>/<profile>` 파일을 읽고 쓰는 저장소.
/// 편집은 잠금 없는 read-modify-write이다.
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(configs_dir: impl AsRef<Path>, config_name: &str) -> Self {
        Self {
            path: configs_dir.as_ref().join(config_name),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.path.with_file_name(format!(".{name}.zypshot.tmp"))
    }

    fn read(&self) -> Result<String, SettingsError> {
        fs::read_to_string(&self.path).map_err(|err| SettingsError::from_io(self.path.clone(), err))
    }
}

impl SettingsStore for FileSettingsStore {
    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn read_cleanup_settings(&self) -> Result<Vec<String>, SettingsError> {
        Ok(cleanup_lines(&self.read()?))
    }

    fn write_setting(&self, setting: CleanupSetting, value: &str) -> Result<(), SettingsError> {
        let to_err = |err| SettingsError::from_io(self.path.clone(), err);

        let contents = self.read()?;
        let permissions = fs::metadata(&self.path).map_err(to_err)?.permissions();
        let updated = apply_setting(&contents, setting, value);

        // 임시 파일에 쓰고 rename으로 교체한다. 실패하면 원본은 그대로 남는다.
        let temp_path = self.temp_path();
        let replaced = fs::write(&temp_path, updated)
            .and_then(|_| fs::set_permissions(&temp_path, permissions))
            .and_then(|_| fs::rename(&temp_path, &self.path));

        if let Err(err) = replaced {
            tracing::warn!(path = %self.path.display(), error = %err, "failed to write config");
            let _ = fs::remove_file(&temp_path);
            return Err(to_err(err));
        }

        tracing::debug!(path = %self.path.display(), key = setting.key(), "updated setting");
        Ok(())
    }
}
