//! ZypShot 대화형 메뉴 쉘.

use anyhow::Result;

use crate::application::ports::{Prompter, Reporter, Tone, is_interrupted};
use crate::application::usecases::create_snapshot::DEFAULT_DESCRIPTION;
use crate::application::usecases::list_snapshots::snapshot_table;
use crate::domain::cleanup::{CleanupAlgorithm, CleanupSetting};
use crate::domain::snapshot::Snapshot;
use crate::interface::cli::composition::AppComposition;
use crate::interface::cli::views::show_comparison;

const BANNER_TITLE: &str = "ZypShot - Snapshot Management";
const BANNER_SUBTITLE: &str = "By Zypher Systems";
const FAREWELL: &str = "Exiting...";
const CONTINUE: &str = "Press Enter to continue...";

/// 메인 메뉴 항목. 번호는 화면에 표시되는 선택지와 같다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Create,
    Delete,
    Compare,
    Rollback,
    Details,
    Cleanup,
    Exit,
}

impl MenuItem {
    const ALL: [MenuItem; 7] = [
        MenuItem::Create,
        MenuItem::Delete,
        MenuItem::Compare,
        MenuItem::Rollback,
        MenuItem::Details,
        MenuItem::Cleanup,
        MenuItem::Exit,
    ];

    fn key(self) -> &'static str {
        match self {
            MenuItem::Create => "1",
            MenuItem::Delete => "2",
            MenuItem::Compare => "3",
            MenuItem::Rollback => "4",
            MenuItem::Details => "5",
            MenuItem::Cleanup => "6",
            MenuItem::Exit => "7",
        }
    }

    fn label(self) -> &'static str {
        match self {
            MenuItem::Create => "Create Snapshot",
            MenuItem::Delete => "Delete Snapshot",
            MenuItem::Compare => "Compare Snapshots",
            MenuItem::Rollback => "Rollback Snapshot",
            MenuItem::Details => "Snapshot Details",
            MenuItem::Cleanup => "Cleanup Management",
            MenuItem::Exit => "Exit",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|item| item.key() == key)
    }

    /// 비교 화면은 자체 "돌아가기" 선택지가 있어 멈춤 프롬프트를 생략한다.
    fn pauses_after(self) -> bool {
        !matches!(self, MenuItem::Compare | MenuItem::Exit)
    }
}

/// 메뉴 루프를 실행한다. 종료 선택이나 인터럽트(Ctrl-C/EOF)에서 인사말을 출력하고 끝난다.
pub async fn run_shell(composition: &AppComposition) -> Result<()> {
    match menu_loop(composition).await {
        Err(err) if is_interrupted(&err) => {
            composition.reporter().raw("");
            composition.reporter().notice(Tone::Warning, FAREWELL);
            Ok(())
        }
        other => other,
    }
}

async fn menu_loop(composition: &AppComposition) -> Result<()> {
    let reporter = composition.reporter();
    let prompter = composition.prompter();

    loop {
        reporter.clear();
        reporter.banner(BANNER_TITLE, BANNER_SUBTITLE);

        let snapshots = composition.list_snapshots_usecase().execute().await;
        if snapshots.is_empty() {
            reporter.notice(Tone::Warning, "No snapshots to display");
        } else {
            reporter.table(&snapshot_table(&snapshots));
        }

        reporter.raw("");
        reporter.raw("Menu:");
        for item in MenuItem::ALL {
            reporter.raw(&format!("{}. {}", item.key(), item.label()));
        }

        let keys: Vec<&str> = MenuItem::ALL.iter().map(|item| item.key()).collect();
        let choice = prompter.choose("Select an option", &keys, MenuItem::Exit.key())?;
        let item = MenuItem::from_key(&choice).unwrap_or(MenuItem::Exit);

        if item == MenuItem::Exit {
            reporter.notice(Tone::Warning, FAREWELL);
            return Ok(());
        }

        dispatch(composition, item, &snapshots).await?;

        if item.pauses_after() {
            prompter.pause(CONTINUE)?;
        }
    }
}

async fn dispatch(
    composition: &AppComposition,
    item: MenuItem,
    snapshots: &[Snapshot],
) -> Result<()> {
    let reporter = composition.reporter();
    let prompter = composition.prompter();

    match item {
        MenuItem::Create => {
            let description =
                prompter.text("Enter snapshot description", Some(DEFAULT_DESCRIPTION))?;
            composition
                .create_snapshot_usecase()
                .execute(&description)
                .await;
        }
        MenuItem::Delete => {
            if let Some(number) = select_snapshot(prompter, snapshots, "Select snapshot to delete")?
                && prompter.confirm(&format!("Delete snapshot {number}?"), false)?
            {
                composition.delete_snapshot_usecase().execute(&number).await;
            }
        }
        MenuItem::Compare => {
            reporter.raw("Select two snapshots to compare");
            let Some(from) = select_snapshot(prompter, snapshots, "Select first snapshot")? else {
                return Ok(());
            };
            let Some(to) = select_snapshot(prompter, snapshots, "Select second snapshot")? else {
                return Ok(());
            };
            if let Some(changes) = composition
                .compare_snapshots_usecase()
                .execute(&from, &to)
                .await
            {
                show_comparison(
                    reporter,
                    prompter,
                    &from,
                    &to,
                    &changes,
                    composition.config().page_size(),
                )?;
            }
        }
        MenuItem::Rollback => {
            let message = "Select snapshot for rollback";
            if let Some(number) = select_snapshot(prompter, snapshots, message)? {
                composition.rollback_guide_usecase().execute(&number);
            }
        }
        MenuItem::Details => {
            let message = "Select snapshot for details";
            if let Some(number) = select_snapshot(prompter, snapshots, message)? {
                composition.snapshot_details_usecase().execute(&number).await;
            }
        }
        MenuItem::Cleanup => cleanup_menu(composition).await?,
        MenuItem::Exit => {}
    }

    Ok(())
}

/// 목록의 번호를 후보로 보여주며 스냅샷 번호를 입력받는다. 빈 입력은 취소.
fn select_snapshot(
    prompter: &dyn Prompter,
    snapshots: &[Snapshot],
    message: &str,
) -> Result<Option<String>> {
    let numbers: Vec<String> = snapshots.iter().map(|s| s.number.clone()).collect();
    prompter.select(message, &numbers)
}

async fn cleanup_menu(composition: &AppComposition) -> Result<()> {
    let reporter = composition.reporter();
    let prompter = composition.prompter();

    reporter.raw("");
    reporter.raw("Cleanup Options:");
    reporter.raw("1. Run Cleanup");
    reporter.raw("2. View Cleanup Settings");
    reporter.raw("3. Edit Cleanup Settings");

    match prompter.choose("Select cleanup option", &["1", "2", "3"], "1")?.as_str() {
        "1" => {
            let algorithm = choose_algorithm(reporter, prompter)?;
            composition.run_cleanup_usecase().execute(algorithm).await;
        }
        "2" => {
            composition.view_cleanup_settings_usecase().execute();
        }
        _ => edit_setting(composition, reporter, prompter)?,
    }

    Ok(())
}

/// 대소문자를 가리지 않고 정리 알고리즘 이름을 받는다. 모르는 이름이면 다시 묻는다.
fn choose_algorithm(
    reporter: &dyn Reporter,
    prompter: &dyn Prompter,
) -> Result<CleanupAlgorithm> {
    let names: Vec<&str> = CleanupAlgorithm::ALL.iter().map(|a| a.as_str()).collect();
    let message = format!("Enter cleanup type ({})", names.join(", "));

    loop {
        let answer = prompter.text(&message, Some(CleanupAlgorithm::Timeline.as_str()))?;
        match CleanupAlgorithm::parse(&answer) {
            Some(algorithm) => return Ok(algorithm),
            None => reporter.notice(Tone::Error, &format!("Unknown cleanup type: {answer}")),
        }
    }
}

fn edit_setting(
    composition: &AppComposition,
    reporter: &dyn Reporter,
    prompter: &dyn Prompter,
) -> Result<()> {
    reporter.raw("");
    reporter.raw("Available settings to edit:");
    for setting in CleanupSetting::ALL {
        reporter.raw(&format!("- {setting}"));
    }

    let key = prompter.text("Enter setting to edit", Some(CleanupSetting::DEFAULT.key()))?;
    // 값을 묻기 전에 키부터 거른다.
    if let Err(err) = CleanupSetting::parse(&key) {
        reporter.notice(Tone::Error, &err.to_string());
        return Ok(());
    }

    let value = prompter.text(&format!("Enter new value for {key}"), None)?;
    if let Err(err) = composition.edit_cleanup_setting_usecase().execute(&key, &value) {
        tracing::debug!(key = %key, error = %err, "cleanup setting not updated");
    }
    Ok(())
}
