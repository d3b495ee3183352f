//! 콘솔 리포터 포트 구현 어댑터.

use std::io::{self, IsTerminal, Write};

use crossterm::terminal;

use crate::application::ports::{Reporter, TableView, Tone};
use crate::infrastructure::text::{clip_display, display_width, pad_display};

const FALLBACK_WIDTH: usize = 100;
const MIN_COLUMN_WIDTH: usize = 3;

/// 콘솔 전용 리포터 어댑터.
/// stdout이 TTY일 때만 색상과 화면 지우기를 사용한다.
pub struct ConsoleReporter {
    interactive: bool,
    clear_screen: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ConsoleReporter {
    pub fn new(clear_screen: bool) -> Self {
        Self {
            interactive: io::stdout().is_terminal(),
            clear_screen,
        }
    }

    fn width(&self) -> usize {
        if !self.interactive {
            return FALLBACK_WIDTH;
        }
        terminal::size()
            .map(|(w, _)| w as usize)
            .unwrap_or(FALLBACK_WIDTH)
            .max(20)
    }

    fn print_lines(&self, lines: &[String]) {
        let mut out = io::stdout().lock();
        for line in lines {
            let _ = writeln!(out, "{line}");
        }
        let _ = out.flush();
    }
}

impl Reporter for ConsoleReporter {
    fn clear(&self) {
        if self.interactive && self.clear_screen {
            print!("\x1b[2J\x1b[H");
            let _ = io::stdout().flush();
        }
    }

    fn banner(&self, title: &str, subtitle: &str) {
        let lines = vec![
            paint(title, "1;36", self.interactive),
            paint(subtitle, "2", self.interactive),
        ];
        let rendered = render_panel("", &lines, Tone::Info, self.interactive, self.width());
        self.print_lines(&rendered);
    }

    fn table(&self, table: &TableView) {
        self.print_lines(&render_table(table, self.interactive, self.width()));
    }

    fn panel(&self, title: &str, lines: &[String], tone: Tone) {
        self.print_lines(&render_panel(
            title,
            lines,
            tone,
            self.interactive,
            self.width(),
        ));
    }

    fn notice(&self, tone: Tone, message: &str) {
        println!("{}", paint(message, tone_code(tone), self.interactive));
    }

    fn raw(&self, line: &str) {
        println!("{line}");
    }
}

fn tone_code(tone: Tone) -> &'static str {
    match tone {
        Tone::Plain => "",
        Tone::Info => "36",
        Tone::Success => "32",
        Tone::Warning => "33",
        Tone::Error => "31",
        Tone::Muted => "2",
    }
}

fn paint(text: &str, ansi: &str, interactive: bool) -> String {
    if interactive && !ansi.is_empty() {
        format!("\x1b[{ansi}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

/// 제목이 윗변에 들어간 상자를 그린다. 본문은 최대 폭에 맞게 자른다.
pub(crate) fn render_panel(
    title: &str,
    lines: &[String],
    tone: Tone,
    interactive: bool,
    max_width: usize,
) -> Vec<String> {
    let code = tone_code(tone);
    let max_inner = max_width.saturating_sub(4).max(1);

    let title_width = if title.is_empty() {
        0
    } else {
        display_width(title) + 2
    };
    let content_width = lines
        .iter()
        .map(|l| display_width(&strip_ansi(l)))
        .max()
        .unwrap_or(0);
    let inner = content_width.max(title_width).min(max_inner);

    let mut out = Vec::with_capacity(lines.len() + 2);
    let top = if title.is_empty() {
        format!("┌{}┐", "─".repeat(inner + 2))
    } else {
        let shown = clip_display(title, inner.saturating_sub(2).max(1));
        let fill = (inner + 2).saturating_sub(display_width(&shown) + 3);
        format!("┌─ {shown} {}┐", "─".repeat(fill))
    };
    out.push(paint(&top, code, interactive));

    let side = paint("│", code, interactive);
    for line in lines {
        let plain_width = display_width(&strip_ansi(line));
        let body = if plain_width > inner {
            pad_display(&clip_display(&strip_ansi(line), inner), inner)
        } else {
            format!("{line}{}", " ".repeat(inner - plain_width))
        };
        out.push(format!("{side} {body} {side}"));
    }

    out.push(paint(&format!("└{}┘", "─".repeat(inner + 2)), code, interactive));
    out
}

/// 머리글과 구분선이 있는 표를 그린다.
/// 전체 폭이 넘치면 마지막 열부터 줄인다.
pub(crate) fn render_table(table: &TableView, interactive: bool, max_width: usize) -> Vec<String> {
    let columns = table.headers.len();
    let mut widths: Vec<usize> = table.headers.iter().map(|h| display_width(h)).collect();
    for row in &table.rows {
        for (idx, cell) in row.iter().enumerate().take(columns) {
            widths[idx] = widths[idx].max(display_width(cell));
        }
    }

    // 테두리: 열마다 "│ " + " " 3칸, 마지막 "│" 1칸
    let overhead = columns * 3 + 1;
    let mut total: usize = widths.iter().sum::<usize>() + overhead;
    for idx in (0..columns).rev() {
        if total <= max_width {
            break;
        }
        let shrink = (total - max_width).min(widths[idx].saturating_sub(MIN_COLUMN_WIDTH));
        widths[idx] -= shrink;
        total -= shrink;
    }

    let border = |left: &str, mid: &str, right: &str| {
        let parts: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{left}{}{right}", parts.join(mid))
    };
    let row_line = |cells: &[String], header: bool| {
        let parts: Vec<String> = (0..columns)
            .map(|idx| {
                let cell = cells.get(idx).map(String::as_str).unwrap_or("");
                let text = pad_display(&clip_display(cell, widths[idx]), widths[idx]);
                let code = match (header, idx) {
                    (true, _) => "1;35",
                    (false, 0) => "36",
                    _ => "",
                };
                format!(" {} ", paint(&text, code, interactive))
            })
            .collect();
        format!("│{}│", parts.join("│"))
    };

    let mut out = Vec::with_capacity(table.rows.len() + 5);
    if !table.title.is_empty() {
        out.push(paint(&table.title, "1", interactive));
    }
    out.push(border("┌", "┬", "┐"));
    out.push(row_line(&table.headers, true));
    out.push(border("├", "┼", "┤"));
    for row in &table.rows {
        out.push(row_line(row, false));
    }
    out.push(border("└", "┴", "┘"));
    out
}

fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
            continue;
        }
        out.push(ch);
    }
    out
}
