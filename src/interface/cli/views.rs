//! 비교 요약 화면과 페이지 단위 파일 목록 화면.

use anyhow::Result;

use crate::application::ports::{Prompter, Reporter, TableView, Tone};
use crate::application::usecases::compare_snapshots::{summary_lines, summary_title};
use crate::domain::changes::{ChangeSet, ChangeStatus};
use crate::domain::paging::{PageNav, Pager};

const BACK_CHOICE: &str = "4";

/// 비교 결과 요약을 보여주고, 선택한 변경 유형의 파일 목록을 연다.
pub fn show_comparison(
    reporter: &dyn Reporter,
    prompter: &dyn Prompter,
    from: &str,
    to: &str,
    changes: &ChangeSet,
    page_size: usize,
) -> Result<()> {
    loop {
        reporter.clear();
        reporter.panel(&summary_title(from, to), &summary_lines(changes), Tone::Info);

        if changes.is_empty() {
            reporter.notice(Tone::Warning, "No changes to display");
            return Ok(());
        }

        reporter.raw("");
        reporter.raw("View Details:");
        let mut choices = Vec::new();
        for (key, status) in detail_options() {
            let files = changes.files(status);
            if files.is_empty() {
                continue;
            }
            reporter.raw(&format!(
                "{key}. View {} Files ({})",
                status.label(),
                files.len()
            ));
            choices.push(key);
        }
        reporter.raw(&format!("{BACK_CHOICE}. Back to main menu"));
        choices.push(BACK_CHOICE);

        let choice = prompter.choose("Select an option", &choices, BACK_CHOICE)?;
        let Some((_, status)) = detail_options().into_iter().find(|(k, _)| *k == choice) else {
            return Ok(());
        };

        show_paginated(
            reporter,
            prompter,
            changes.files(status),
            &format!("{} Files", status.label()),
            page_size,
        )?;
    }
}

fn detail_options() -> [(&'static str, ChangeStatus); 3] {
    [
        ("1", ChangeStatus::Added),
        ("2", ChangeStatus::Removed),
        ("3", ChangeStatus::Modified),
    ]
}

/// 파일 목록을 페이지 단위로 보여준다. 한 페이지뿐이면 Enter 한 번으로 돌아간다.
pub fn show_paginated(
    reporter: &dyn Reporter,
    prompter: &dyn Prompter,
    files: &[String],
    title: &str,
    page_size: usize,
) -> Result<()> {
    if files.is_empty() {
        reporter.notice(
            Tone::Warning,
            &format!("No {} to display", title.to_lowercase()),
        );
        return Ok(());
    }

    let mut pager = Pager::new(files.len(), page_size);
    loop {
        reporter.clear();
        let range = pager.page_range();
        reporter.table(&page_table(files, title, &pager));
        reporter.notice(
            Tone::Muted,
            &format!(
                "Showing {}-{} of {} files",
                range.start + 1,
                range.end,
                pager.total_items()
            ),
        );

        if pager.total_pages() <= 1 {
            prompter.pause("Press Enter to return to summary...")?;
            return Ok(());
        }

        reporter.raw("");
        reporter.raw("Navigation:");
        let navigation = pager.navigation();
        for nav in &navigation {
            reporter.raw(&format!("{} - {}", nav.key(), nav.label()));
        }

        let keys: Vec<&str> = navigation.iter().map(|n| n.key()).collect();
        let choice = prompter.choose("Enter choice", &keys, PageNav::Quit.key())?;
        let nav = PageNav::from_key(&choice).unwrap_or(PageNav::Quit);
        if !pager.apply(nav) {
            return Ok(());
        }
    }
}

/// 현재 페이지의 번호/경로 표. 번호는 전체 목록 기준 1부터.
pub fn page_table(files: &[String], title: &str, pager: &Pager) -> TableView {
    let range = pager.page_range();
    TableView {
        title: format!(
            "{title} (Page {}/{})",
            pager.current_page(),
            pager.total_pages()
        ),
        headers: vec!["#".to_string(), "Path".to_string()],
        rows: files[range.clone()]
            .iter()
            .zip(range.start + 1..)
            .map(|(path, idx)| vec![idx.to_string(), path.clone()])
            .collect(),
    }
}
