//! 터미널 입력 포트 구현.

use std::io::{self, IsTerminal};

use anyhow::Result;

use crate::application::ports::{Interrupted, Prompter};
use crate::interface::cli::line_input::{LineInput, read_line};

/// stdin/stdout 기반 프롬프터.
pub struct TerminalPrompter {
    interactive: bool,
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self {
            interactive: io::stdout().is_terminal(),
        }
    }
}

impl TerminalPrompter {
    fn label(&self, message: &str, hint: Option<&str>) -> String {
        let base = if self.interactive {
            format!("\x1b[1m{message}\x1b[0m")
        } else {
            message.to_string()
        };
        match hint {
            Some(hint) => format!("{base} {hint}: "),
            None => format!("{base}: "),
        }
    }

    fn invalid(&self, message: &str) {
        if self.interactive {
            println!("\x1b[31m{message}\x1b[0m");
        } else {
            println!("{message}");
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// 입력 결과를 문자열로 풀고, 중단/EOF는 [`Interrupted`] 에러로 바꾼다.
fn submitted(input: LineInput) -> Result<Option<String>> {
    match input {
        LineInput::Submitted(text) => Ok(Some(text.trim().to_string())),
        LineInput::Cancelled => Ok(None),
        LineInput::Interrupted | LineInput::Eof => Err(Interrupted.into()),
    }
}

impl Prompter for TerminalPrompter {
    fn choose(&self, message: &str, choices: &[&str], default: &str) -> Result<String> {
        let label = self.label(message, Some(&format!("[{}] ({default})", choices.join("/"))));
        let candidates = owned(choices);

        loop {
            let answer = submitted(read_line(&label, &candidates)?)?.unwrap_or_default();
            if answer.is_empty() {
                return Ok(default.to_string());
            }
            if choices.contains(&answer.as_str()) {
                return Ok(answer);
            }
            self.invalid("Please select one of the available options");
        }
    }

    fn text(&self, message: &str, default: Option<&str>) -> Result<String> {
        let hint = default.map(|d| format!("({d})"));
        let label = self.label(message, hint.as_deref());
        let answer = submitted(read_line(&label, &[])?)?.unwrap_or_default();

        if answer.is_empty() {
            return Ok(default.unwrap_or_default().to_string());
        }
        Ok(answer)
    }

    fn select(&self, message: &str, candidates: &[String]) -> Result<Option<String>> {
        let label = self.label(message, None);
        let answer = submitted(read_line(&label, candidates)?)?;
        Ok(answer.filter(|a| !a.is_empty()))
    }

    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        let hint = if default { "[y/n] (y)" } else { "[y/n] (n)" };
        let label = self.label(message, Some(hint));

        loop {
            let answer = submitted(read_line(&label, &[])?)?
                .unwrap_or_default()
                .to_ascii_lowercase();
            match answer.as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.invalid("Please enter Y or N"),
            }
        }
    }

    fn pause(&self, message: &str) -> Result<()> {
        submitted(read_line(message, &[])?)?;
        Ok(())
    }
}
