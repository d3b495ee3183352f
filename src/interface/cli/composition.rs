//! 애플리케이션 조립(composition root) 모듈.

use crate::application::config::Config;
use crate::application::ports::{Prompter, Reporter, SettingsStore, SnapshotTool};
use crate::application::usecases::cleanup_settings::{
    EditCleanupSettingUseCase, ViewCleanupSettingsUseCase,
};
use crate::application::usecases::compare_snapshots::CompareSnapshotsUseCase;
use crate::application::usecases::create_snapshot::CreateSnapshotUseCase;
use crate::application::usecases::delete_snapshot::DeleteSnapshotUseCase;
use crate::application::usecases::list_snapshots::ListSnapshotsUseCase;
use crate::application::usecases::rollback_guide::RollbackGuideUseCase;
use crate::application::usecases::run_cleanup::RunCleanupUseCase;
use crate::application::usecases::snapshot_details::SnapshotDetailsUseCase;
use crate::infrastructure::adapters::{ConsoleReporter, FileSettingsStore, SnapperCli};
use crate::interface::cli::prompt::TerminalPrompter;

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config: Config,
    tool: Box<dyn SnapshotTool>,
    settings: Box<dyn SettingsStore>,
    reporter: Box<dyn Reporter>,
    prompter: Box<dyn Prompter>,
}

impl AppComposition {
    /// 설정값으로 snapper/설정 파일/터미널 어댑터를 조립한다.
    pub fn new(config: Config) -> Self {
        let profile = config.snapper_config();
        let tool = SnapperCli::new(config.snapper_command(), profile.clone());
        let settings = FileSettingsStore::new(config.configs_dir(), &profile);
        let reporter = ConsoleReporter::new(config.clear_screen());

        Self::with_ports(
            config,
            Box::new(tool),
            Box::new(settings),
            Box::new(reporter),
            Box::new(TerminalPrompter::default()),
        )
    }

    /// 포트 구현체를 외부에서 주입한다.
    pub fn with_ports(
        config: Config,
        tool: Box<dyn SnapshotTool>,
        settings: Box<dyn SettingsStore>,
        reporter: Box<dyn Reporter>,
        prompter: Box<dyn Prompter>,
    ) -> Self {
        Self {
            config,
            tool,
            settings,
            reporter,
            prompter,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn reporter(&self) -> &dyn Reporter {
        self.reporter.as_ref()
    }

    pub fn prompter(&self) -> &dyn Prompter {
        self.prompter.as_ref()
    }

    pub fn list_snapshots_usecase(&self) -> ListSnapshotsUseCase<'_> {
        ListSnapshotsUseCase {
            tool: self.tool.as_ref(),
            reporter: self.reporter(),
        }
    }

    pub fn create_snapshot_usecase(&self) -> CreateSnapshotUseCase<'_> {
        CreateSnapshotUseCase {
            tool: self.tool.as_ref(),
            reporter: self.reporter(),
        }
    }

    pub fn delete_snapshot_usecase(&self) -> DeleteSnapshotUseCase<'_> {
        DeleteSnapshotUseCase {
            tool: self.tool.as_ref(),
            reporter: self.reporter(),
        }
    }

    pub fn compare_snapshots_usecase(&self) -> CompareSnapshotsUseCase<'_> {
        CompareSnapshotsUseCase {
            tool: self.tool.as_ref(),
            reporter: self.reporter(),
        }
    }

    pub fn snapshot_details_usecase(&self) -> SnapshotDetailsUseCase<'_> {
        SnapshotDetailsUseCase {
            tool: self.tool.as_ref(),
            reporter: self.reporter(),
        }
    }

    pub fn rollback_guide_usecase(&self) -> RollbackGuideUseCase<'_> {
        RollbackGuideUseCase {
            config_name: self.profile(),
            reporter: self.reporter(),
        }
    }

    pub fn run_cleanup_usecase(&self) -> RunCleanupUseCase<'_> {
        RunCleanupUseCase {
            tool: self.tool.as_ref(),
            reporter: self.reporter(),
        }
    }

    pub fn view_cleanup_settings_usecase(&self) -> ViewCleanupSettingsUseCase<'_> {
        ViewCleanupSettingsUseCase {
            config_name: self.profile(),
            store: self.settings.as_ref(),
            reporter: self.reporter(),
        }
    }

    pub fn edit_cleanup_setting_usecase(&self) -> EditCleanupSettingUseCase<'_> {
        EditCleanupSettingUseCase {
            store: self.settings.as_ref(),
            reporter: self.reporter(),
        }
    }

    fn profile(&self) -> &str {
        self.config
            .snapper
            .config
            .as_deref()
            .unwrap_or(crate::application::config::DEFAULT_SNAPPER_CONFIG)
    }
}
