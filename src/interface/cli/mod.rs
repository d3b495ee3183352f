//! CLI 인터페이스 모듈 묶음.
//! 입력 파싱/메뉴 쉘/화면/조립을 한 네임스페이스로 관리한다.

pub mod command;
pub mod composition;
pub mod line_input;
pub mod prompt;
pub mod shell;
pub mod views;

pub use command::{Cli, CliAction, ShellOptions};
pub use composition::AppComposition;
pub use shell::run_shell;
