//! 터미널 표시 폭 계산 유틸리티.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

// unicode-width 크레이트를 사용하여 정확한 터미널 표시 폭을 계산한다.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

pub fn char_display_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// 표시 폭이 `max_width`를 넘으면 뒤를 잘라 `...`을 붙인다.
pub fn clip_display(line: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    if display_width(line) <= max_width {
        return line.to_string();
    }

    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let mut out = String::new();
    let mut used = 0usize;
    let cap = max_width - 3;

    for ch in line.chars() {
        let cw = char_display_width(ch);
        if used + cw > cap {
            break;
        }
        out.push(ch);
        used += cw;
    }

    out.push_str("...");
    out
}

/// 표시 폭이 `max_width`를 넘으면 앞을 잘라 `...`을 붙인다(입력줄 꼬리 표시용).
pub fn tail_display(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    if display_width(text) <= max_width {
        return text.to_string();
    }

    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target = max_width - 3;
    let mut tail_rev = String::new();
    let mut used = 0usize;

    for ch in text.chars().rev() {
        let cw = char_display_width(ch);
        if used + cw > target {
            break;
        }
        tail_rev.push(ch);
        used += cw;
    }

    let tail: String = tail_rev.chars().rev().collect();
    format!("...{tail}")
}

/// 오른쪽을 공백으로 채워 표시 폭을 `width`에 맞춘다.
pub fn pad_display(line: &str, width: usize) -> String {
    let mut out = line.to_string();
    let used = display_width(line);
    if used < width {
        out.push_str(&" ".repeat(width - used));
    }
    out
}
