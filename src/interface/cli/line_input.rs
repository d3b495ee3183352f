//! 한 줄 입력 처리기.
//! 후보 목록이 있으면 입력 중 실시간으로 일치하는 후보를 아래에 표시한다.

use std::env;
use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType};

use crate::infrastructure::text::{clip_display, display_width, tail_display};

const MAX_SUGGESTIONS: usize = 6;

/// 한 줄 입력 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineInput {
    Submitted(String),
    /// Esc로 입력을 취소했다.
    Cancelled,
    /// Ctrl-C
    Interrupted,
    /// stdin 종료 또는 빈 입력에서 Ctrl-D
    Eof,
}

/// 프롬프트를 출력하고 한 줄을 읽는다.
/// - TTY + 지원 터미널: 후보 추천 + 방향키 선택 + Tab 완성
/// - non-TTY/미지원 터미널: 일반 라인 입력
pub fn read_line(prompt: &str, candidates: &[String]) -> Result<LineInput> {
    if !supports_interactive_input() {
        return read_line_fallback(prompt);
    }

    match read_line_interactive(prompt, candidates) {
        Ok(v) => Ok(v),
        Err(err) => {
            tracing::debug!(error = %err, "interactive input failed; falling back to line mode");
            read_line_fallback(prompt)
        }
    }
}

fn supports_interactive_input() -> bool {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        return false;
    }

    // dumb 터미널에서는 제어 시퀀스 기반 UI를 비활성화한다.
    if let Ok(term) = env::var("TERM")
        && term.eq_ignore_ascii_case("dumb")
    {
        return false;
    }

    true
}

fn read_line_fallback(prompt: &str) -> Result<LineInput> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        return Ok(LineInput::Eof);
    }

    Ok(LineInput::Submitted(trim_newline(line)))
}

fn read_line_interactive(prompt: &str, candidates: &[String]) -> Result<LineInput> {
    let mut stdout = io::stdout();
    let reserved = if candidates.is_empty() {
        0
    } else {
        MAX_SUGGESTIONS
    };
    let input_row = reserve_rows(&mut stdout, reserved)?;
    let _guard = InputGuard::enter(&mut stdout)?;

    let mut input = String::new();
    let mut cursor_chars = 0usize;
    let mut selected_idx = 0usize;

    loop {
        let suggestions = match_candidates(&input, candidates);
        if suggestions.is_empty() {
            selected_idx = 0;
        } else if selected_idx >= suggestions.len() {
            selected_idx = suggestions.len() - 1;
        }

        render_frame(
            &mut stdout,
            input_row,
            prompt,
            &input,
            cursor_chars,
            &suggestions,
            selected_idx,
        )?;

        let key = match event::read()? {
            Event::Paste(text) => {
                for ch in text.chars().filter(|c| !c.is_control()) {
                    insert_char_at(&mut input, cursor_chars, ch);
                    cursor_chars += 1;
                }
                continue;
            }
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue,
        };

        match key.code {
            KeyCode::Enter => {
                finish_frame(&mut stdout, input_row, prompt, &input)?;
                return Ok(LineInput::Submitted(input));
            }
            KeyCode::Esc => {
                finish_frame(&mut stdout, input_row, prompt, "")?;
                return Ok(LineInput::Cancelled);
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                finish_frame(&mut stdout, input_row, prompt, &input)?;
                return Ok(LineInput::Interrupted);
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if input.is_empty() {
                    finish_frame(&mut stdout, input_row, prompt, "")?;
                    return Ok(LineInput::Eof);
                }
            }
            KeyCode::Backspace => {
                if cursor_chars > 0 {
                    remove_char_at(&mut input, cursor_chars - 1);
                    cursor_chars -= 1;
                }
            }
            KeyCode::Delete => {
                if cursor_chars < input.chars().count() {
                    remove_char_at(&mut input, cursor_chars);
                }
            }
            KeyCode::Left => {
                cursor_chars = cursor_chars.saturating_sub(1);
            }
            KeyCode::Right => {
                cursor_chars = (cursor_chars + 1).min(input.chars().count());
            }
            KeyCode::Home => {
                cursor_chars = 0;
            }
            KeyCode::End => {
                cursor_chars = input.chars().count();
            }
            KeyCode::Up | KeyCode::Down => {
                if !suggestions.is_empty() {
                    selected_idx = if key.code == KeyCode::Up {
                        selected_idx.saturating_sub(1)
                    } else {
                        (selected_idx + 1).min(suggestions.len() - 1)
                    };
                }
            }
            KeyCode::Tab => {
                if let Some(choice) = suggestions.get(selected_idx) {
                    input = (*choice).to_string();
                    cursor_chars = input.chars().count();
                }
            }
            KeyCode::Char(ch) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT)
                {
                    insert_char_at(&mut input, cursor_chars, ch);
                    cursor_chars += 1;
                }
            }
            _ => {}
        }
    }
}

/// 입력 접두사(대소문자 무시)와 일치하는 후보. 빈 입력이면 전체.
fn match_candidates<'a>(input: &str, candidates: &'a [String]) -> Vec<&'a str> {
    let q = input.trim().to_lowercase();
    candidates
        .iter()
        .map(String::as_str)
        .filter(|c| q.is_empty() || c.to_lowercase().starts_with(&q))
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// 추천 목록이 화면 아래로 넘치지 않도록 빈 줄을 확보하고 입력 행 번호를 돌려준다.
fn reserve_rows(stdout: &mut io::Stdout, rows: usize) -> Result<u16> {
    if rows > 0 {
        write!(stdout, "{}", "\n".repeat(rows))?;
        execute!(stdout, cursor::MoveUp(rows as u16))?;
    }
    stdout.flush()?;
    let (_, row) = cursor::position()?;
    Ok(row)
}

fn render_frame(
    stdout: &mut io::Stdout,
    input_row: u16,
    prompt: &str,
    input: &str,
    cursor_chars: usize,
    suggestions: &[&str],
    selected_idx: usize,
) -> Result<()> {
    let (w, _) = terminal::size().unwrap_or((120, 40));
    let width = (w as usize).max(20);

    execute!(
        stdout,
        cursor::MoveTo(0, input_row),
        terminal::Clear(ClearType::FromCursorDown)
    )?;

    let prompt_width = display_width(prompt);
    let available = width.saturating_sub(prompt_width + 1);
    let shown = tail_display(input, available);
    write!(stdout, "{prompt}{shown}")?;

    for (idx, item) in suggestions.iter().enumerate() {
        let marker = if idx == selected_idx { ">" } else { " " };
        let color = if idx == selected_idx {
            Color::Cyan
        } else {
            Color::DarkGrey
        };
        execute!(
            stdout,
            cursor::MoveTo(0, input_row + 1 + idx as u16),
            SetForegroundColor(color)
        )?;
        write!(stdout, "{}", clip_display(&format!("  {marker} {item}"), width))?;
        execute!(stdout, ResetColor)?;
    }

    let col = input_cursor_col(input, cursor_chars, prompt_width, available);
    execute!(stdout, cursor::MoveTo(col.min(width - 1) as u16, input_row), cursor::Show)?;
    stdout.flush()?;
    Ok(())
}

fn input_cursor_col(
    input: &str,
    cursor_chars: usize,
    prompt_width: usize,
    available: usize,
) -> usize {
    if display_width(input) <= available {
        let before_cursor: String = input.chars().take(cursor_chars).collect();
        return prompt_width + display_width(&before_cursor);
    }

    // 오버플로우 상태에서는 tail 표시 정책상 커서를 입력 끝쪽으로 정렬한다.
    prompt_width + display_width(&tail_display(input, available))
}

/// 추천 영역을 지우고 최종 입력을 일반 출력처럼 남긴 뒤 다음 줄로 이동한다.
fn finish_frame(stdout: &mut io::Stdout, input_row: u16, prompt: &str, input: &str) -> Result<()> {
    execute!(
        stdout,
        cursor::MoveTo(0, input_row),
        terminal::Clear(ClearType::FromCursorDown),
        ResetColor
    )?;
    write!(stdout, "{prompt}{input}\r\n")?;
    stdout.flush()?;
    Ok(())
}

fn trim_newline(mut s: String) -> String {
    while matches!(s.chars().last(), Some('\n' | '\r')) {
        s.pop();
    }
    s
}

struct InputGuard;

impl InputGuard {
    fn enter(stdout: &mut io::Stdout) -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(stdout, cursor::Show)?;
        Ok(Self)
    }
}

impl Drop for InputGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, ResetColor);
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
    }
}

fn insert_char_at(input: &mut String, char_idx: usize, ch: char) {
    let byte_idx = byte_index_at_char(input, char_idx);
    input.insert(byte_idx, ch);
}

fn remove_char_at(input: &mut String, char_idx: usize) {
    let start = byte_index_at_char(input, char_idx);
    let end = byte_index_at_char(input, char_idx + 1);
    if start < end && end <= input.len() {
        input.replace_range(start..end, "");
    }
}

fn byte_index_at_char(input: &str, char_idx: usize) -> usize {
    if char_idx == 0 {
        return 0;
    }
    input
        .char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(input.len())
}
