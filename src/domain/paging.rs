//! 긴 파일 목록의 페이지 계산 규칙.

use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    Previous,
    Next,
    Quit,
}

impl PageNav {
    pub fn key(self) -> &'static str {
        match self {
            Self::Previous => "p",
            Self::Next => "n",
            Self::Quit => "q",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Previous => "Previous page",
            Self::Next => "Next page",
            Self::Quit => "Back to summary",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "p" => Some(Self::Previous),
            "n" => Some(Self::Next),
            "q" => Some(Self::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    total_items: usize,
    page_size: usize,
    current: usize,
}

impl Pager {
    /// 페이지 크기가 0이면 1로 보정한다.
    pub fn new(total_items: usize, page_size: usize) -> Self {
        Self {
            total_items,
            page_size: page_size.max(1),
            current: 1,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn is_first(&self) -> bool {
        self.current <= 1
    }

    pub fn is_last(&self) -> bool {
        self.current >= self.total_pages()
    }

    pub fn page_range(&self) -> Range<usize> {
        let start = ((self.current - 1) * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    /// 현재 페이지에서 허용되는 이동 명령(이전, 다음, 종료 순).
    pub fn navigation(&self) -> Vec<PageNav> {
        let mut out = Vec::with_capacity(3);
        if !self.is_first() {
            out.push(PageNav::Previous);
        }
        if !self.is_last() {
            out.push(PageNav::Next);
        }
        out.push(PageNav::Quit);
        out
    }

    /// 이동 명령을 적용한다. 페이지 화면을 계속 보여줘야 하면 `true`.
    pub fn apply(&mut self, nav: PageNav) -> bool {
        match nav {
            PageNav::Previous if !self.is_first() => self.current -= 1,
            PageNav::Next if !self.is_last() => self.current += 1,
            PageNav::Quit => return false,
            _ => {}
        }
        true
    }
}
