//! zypshot library root.
//! Clean Architecture + DDD 계층을 외부에 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use application::ports::ConfigRepository;
use application::usecases::inspect_config::InspectConfigUseCase;
use infrastructure::adapters::JsonConfigRepository;
use interface::cli::{AppComposition, ShellOptions};

/// 라이브러리 직접 호출용 실행 함수. 설정을 읽고 메뉴 쉘을 돌린다.
pub async fn run(options: &ShellOptions) -> Result<()> {
    let mut config = JsonConfigRepository.load()?;
    options.apply_to(&mut config);
    let composition = AppComposition::new(config);
    interface::cli::run_shell(&composition).await
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json() -> Result<String> {
    let repo = JsonConfigRepository;
    InspectConfigUseCase { config_repo: &repo }.execute()
}
