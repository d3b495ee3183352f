mod common;

use std::fs;

use common::{FakeSnapper, LIST_OUTPUT, RecordingReporter};
use zypshot::application::usecases::cleanup_settings::{
    EditCleanupSettingUseCase, ViewCleanupSettingsUseCase,
};
use zypshot::application::usecases::compare_snapshots::CompareSnapshotsUseCase;
use zypshot::application::usecases::create_snapshot::CreateSnapshotUseCase;
use zypshot::application::usecases::delete_snapshot::DeleteSnapshotUseCase;
use zypshot::application::usecases::list_snapshots::ListSnapshotsUseCase;
use zypshot::application::usecases::rollback_guide::RollbackGuideUseCase;
use zypshot::application::usecases::run_cleanup::RunCleanupUseCase;
use zypshot::application::usecases::snapshot_details::SnapshotDetailsUseCase;
use zypshot::domain::cleanup::{CleanupAlgorithm, SettingsError};
use zypshot::domain::snapshot::SnapshotKind;
use zypshot::infrastructure::adapters::FileSettingsStore;

const PROFILE: &str = "\
SUBVOLUME=\"/\"
TIMELINE_CREATE=\"yes\"
TIMELINE_LIMIT_HOURLY=\"10\"
NUMBER_CLEANUP=\"yes\"
EMPTY_PRE_POST_CLEANUP=\"yes\"
";

fn profile_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("root"), PROFILE).unwrap();
    dir
}

#[tokio::test]
async fn list_parses_rows_in_column_order() {
    let tool = FakeSnapper::default().with_output("list", LIST_OUTPUT);
    let reporter = RecordingReporter::default();
    let snapshots = ListSnapshotsUseCase {
        tool: &tool,
        reporter: &reporter,
    }
    .execute()
    .await;

    assert_eq!(snapshots.len(), 3);
    assert_eq!(snapshots[1].number, "1");
    assert_eq!(snapshots[1].kind, SnapshotKind::Pre);
    assert_eq!(snapshots[1].description, "zypper install vim");
    assert_eq!(snapshots[2].pre_number, "1");
    assert_eq!(snapshots[2].userdata, "important=yes");
    assert!(reporter.lines().is_empty());
}

#[tokio::test]
async fn list_with_only_headers_is_empty() {
    let header_only: String = LIST_OUTPUT.lines().take(2).collect::<Vec<_>>().join("\n");
    let tool = FakeSnapper::default().with_output("list", &header_only);
    let reporter = RecordingReporter::default();
    let snapshots = ListSnapshotsUseCase {
        tool: &tool,
        reporter: &reporter,
    }
    .execute()
    .await;

    assert!(snapshots.is_empty());
    assert!(reporter.contains("No snapshots available"));
}

#[tokio::test]
async fn list_skips_short_rows_with_warning() {
    let output = format!("{LIST_OUTPUT}7  │ single │ │ today\n");
    let tool = FakeSnapper::default().with_output("list", &output);
    let reporter = RecordingReporter::default();
    let snapshots = ListSnapshotsUseCase {
        tool: &tool,
        reporter: &reporter,
    }
    .execute()
    .await;

    assert_eq!(snapshots.len(), 3);
    assert!(reporter.contains("Skipping malformed line: 7  │ single │ │ today"));
}

#[tokio::test]
async fn list_failure_is_reported_and_yields_nothing() {
    let tool = FakeSnapper::default().with_failure("list", "exit status: 1: Unknown config.");
    let reporter = RecordingReporter::default();
    let snapshots = ListSnapshotsUseCase {
        tool: &tool,
        reporter: &reporter,
    }
    .execute()
    .await;

    assert!(snapshots.is_empty());
    assert!(reporter.contains("Error running snapper list: exit status: 1: Unknown config."));
    assert!(reporter.contains("No snapshots found or error in Snapper output"));
}

#[tokio::test]
async fn create_uses_default_description_for_blank_input() {
    let tool = FakeSnapper::default();
    let reporter = RecordingReporter::default();
    let created = CreateSnapshotUseCase {
        tool: &tool,
        reporter: &reporter,
    }
    .execute("   ")
    .await;

    assert!(created);
    assert_eq!(tool.calls(), vec!["create Manual snapshot"]);
    assert!(reporter.contains("Snapshot created: Manual snapshot"));
}

#[tokio::test]
async fn empty_output_still_counts_as_success() {
    let tool = FakeSnapper::default().with_output("delete", "");
    let reporter = RecordingReporter::default();
    let deleted = DeleteSnapshotUseCase {
        tool: &tool,
        reporter: &reporter,
    }
    .execute("2")
    .await;

    assert!(deleted);
    assert!(reporter.contains("Snapshot 2 deleted"));
}

#[tokio::test]
async fn delete_failure_reports_tool_error() {
    let tool = FakeSnapper::default().with_failure("delete", "Snapshot '9' not found.");
    let reporter = RecordingReporter::default();
    let deleted = DeleteSnapshotUseCase {
        tool: &tool,
        reporter: &reporter,
    }
    .execute("9")
    .await;

    assert!(!deleted);
    assert!(reporter.contains("Error running snapper delete 9: Snapshot '9' not found."));
    assert!(!reporter.contains("deleted"));
}

#[tokio::test]
async fn compare_buckets_changes() {
    let tool = FakeSnapper::default().with_output(
        "status",
        "+..... /etc/new.conf\n-..... /etc/old.conf\nc..... /etc/fstab\n  /ignored\n",
    );
    let reporter = RecordingReporter::default();
    let changes = CompareSnapshotsUseCase {
        tool: &tool,
        reporter: &reporter,
    }
    .execute("1", "2")
    .await
    .unwrap();

    assert_eq!(changes.added, vec!["/etc/new.conf"]);
    assert_eq!(changes.removed, vec!["/etc/old.conf"]);
    assert_eq!(changes.modified, vec!["/etc/fstab"]);
    assert_eq!(tool.calls(), vec!["status 1..2"]);
}

#[tokio::test]
async fn compare_with_no_output_reports_nothing_found() {
    let tool = FakeSnapper::default();
    let reporter = RecordingReporter::default();
    let changes = CompareSnapshotsUseCase {
        tool: &tool,
        reporter: &reporter,
    }
    .execute("1", "1")
    .await;

    assert!(changes.is_none());
    assert!(reporter.contains("No changes found or error occurred"));
}

#[tokio::test]
async fn details_show_all_fields_with_placeholders() {
    let tool = FakeSnapper::default().with_output("list", LIST_OUTPUT);
    let reporter = RecordingReporter::default();
    let usecase = SnapshotDetailsUseCase {
        tool: &tool,
        reporter: &reporter,
    };

    let found = usecase.execute("2").await.unwrap();
    assert_eq!(found.description, "-");
    assert!(reporter.contains("[panel] Snapshot 2 Details"));
    assert!(reporter.contains("Description: -"));
    assert!(reporter.contains("Userdata: important=yes"));

    assert!(usecase.execute("42").await.is_none());
    assert!(reporter.contains("Snapshot 42 not found"));
}

#[tokio::test]
async fn cleanup_reports_completion_and_failure() {
    let reporter = RecordingReporter::default();
    let ok = FakeSnapper::default();
    assert!(
        RunCleanupUseCase {
            tool: &ok,
            reporter: &reporter,
        }
        .execute(CleanupAlgorithm::EmptyPrePost)
        .await
    );
    assert_eq!(ok.calls(), vec!["cleanup empty-pre-post"]);
    assert!(reporter.contains("empty-pre-post cleanup completed"));

    let failing = FakeSnapper::default().with_failure("cleanup", "busy");
    assert!(
        !RunCleanupUseCase {
            tool: &failing,
            reporter: &reporter,
        }
        .execute(CleanupAlgorithm::Number)
        .await
    );
    assert!(reporter.contains("No snapshots cleaned or error occurred"));
}

#[test]
fn rollback_guide_names_profile_and_number() {
    let reporter = RecordingReporter::default();
    RollbackGuideUseCase {
        config_name: "home",
        reporter: &reporter,
    }
    .execute("5");

    assert!(reporter.contains("[panel] Rollback Instructions for Snapshot 5"));
    assert!(reporter.contains("sudo snapper --config home rollback 5"));
}

#[test]
fn view_settings_lists_cleanup_lines_only() {
    let dir = profile_dir();
    let store = FileSettingsStore::new(dir.path(), "root");
    let reporter = RecordingReporter::default();
    let lines = ViewCleanupSettingsUseCase {
        config_name: "root",
        store: &store,
        reporter: &reporter,
    }
    .execute()
    .unwrap();

    assert_eq!(lines.len(), 4);
    assert!(reporter.contains("[panel] Cleanup Settings for root"));
    assert!(!reporter.contains("SUBVOLUME"));
}

#[test]
fn view_settings_reports_missing_profile() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSettingsStore::new(dir.path(), "home");
    let reporter = RecordingReporter::default();
    let lines = ViewCleanupSettingsUseCase {
        config_name: "home",
        store: &store,
        reporter: &reporter,
    }
    .execute();

    assert!(lines.is_none());
    assert!(reporter.contains("not found"));
}

#[test]
fn non_numeric_limit_leaves_file_untouched() {
    let dir = profile_dir();
    let store = FileSettingsStore::new(dir.path(), "root");
    let reporter = RecordingReporter::default();
    let err = EditCleanupSettingUseCase {
        store: &store,
        reporter: &reporter,
    }
    .execute("TIMELINE_LIMIT_HOURLY", "ten")
    .unwrap_err();

    assert!(matches!(err, SettingsError::InvalidInteger { .. }));
    assert_eq!(fs::read_to_string(dir.path().join("root")).unwrap(), PROFILE);
    assert!(reporter.contains("Invalid value for TIMELINE_LIMIT_HOURLY"));
}

#[test]
fn non_boolean_flag_is_rejected() {
    let dir = profile_dir();
    let store = FileSettingsStore::new(dir.path(), "root");
    let reporter = RecordingReporter::default();
    let err = EditCleanupSettingUseCase {
        store: &store,
        reporter: &reporter,
    }
    .execute("NUMBER_CLEANUP", "maybe")
    .unwrap_err();

    assert!(matches!(err, SettingsError::InvalidFlag { .. }));
    assert_eq!(fs::read_to_string(dir.path().join("root")).unwrap(), PROFILE);
}

#[test]
fn yes_rewrites_only_the_matching_line() {
    let dir = profile_dir();
    let store = FileSettingsStore::new(dir.path(), "root");
    let reporter = RecordingReporter::default();
    EditCleanupSettingUseCase {
        store: &store,
        reporter: &reporter,
    }
    .execute("TIMELINE_CREATE", "YES")
    .unwrap();
    EditCleanupSettingUseCase {
        store: &store,
        reporter: &reporter,
    }
    .execute("TIMELINE_CREATE", "no")
    .unwrap();

    let updated = fs::read_to_string(dir.path().join("root")).unwrap();
    assert_eq!(updated, PROFILE.replace("TIMELINE_CREATE=\"yes\"", "TIMELINE_CREATE=\"no\""));
    assert!(reporter.contains("Updated TIMELINE_CREATE to no in"));
}

#[test]
fn missing_key_is_appended() {
    let dir = profile_dir();
    let store = FileSettingsStore::new(dir.path(), "root");
    let reporter = RecordingReporter::default();
    EditCleanupSettingUseCase {
        store: &store,
        reporter: &reporter,
    }
    .execute("NUMBER_LIMIT", " 50 ")
    .unwrap();

    let updated = fs::read_to_string(dir.path().join("root")).unwrap();
    assert_eq!(updated, format!("{PROFILE}NUMBER_LIMIT=\"50\"\n"));
}

#[test]
fn unknown_key_is_rejected() {
    let dir = profile_dir();
    let store = FileSettingsStore::new(dir.path(), "root");
    let reporter = RecordingReporter::default();
    let err = EditCleanupSettingUseCase {
        store: &store,
        reporter: &reporter,
    }
    .execute("SUBVOLUME", "/home")
    .unwrap_err();

    assert!(matches!(err, SettingsError::UnknownSetting(_)));
    assert!(reporter.contains("Invalid setting: SUBVOLUME"));
}
