//! `snapper status <a>..<b>` 출력을 변경 유형별로 분류한다.

/// 파일 변경 유형. 상태 문자 `+`, `-`, `c`에 대응한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeStatus {
    Added,
    Removed,
    Modified,
}

impl ChangeStatus {
    /// 상태 문자를 변경 유형으로 변환한다. 공백(변경 없음)과 그 외 문자는 `None`.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            '+' => Some(Self::Added),
            '-' => Some(Self::Removed),
            'c' => Some(Self::Modified),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Removed => "Removed",
            Self::Modified => "Modified",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEntry {
    pub path: String,
    pub status: ChangeStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub modified: Vec<String>,
}

impl ChangeSet {
    pub fn push(&mut self, entry: ChangeEntry) {
        match entry.status {
            ChangeStatus::Added => self.added.push(entry.path),
            ChangeStatus::Removed => self.removed.push(entry.path),
            ChangeStatus::Modified => self.modified.push(entry.path),
        }
    }

    pub fn files(&self, status: ChangeStatus) -> &[String] {
        match status {
            ChangeStatus::Added => &self.added,
            ChangeStatus::Removed => &self.removed,
            ChangeStatus::Modified => &self.modified,
        }
    }

    pub fn total(&self) -> usize {
        self.added.len() + self.removed.len() + self.modified.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// 상태 출력 한 줄을 해석한다.
/// 첫 토큰의 첫 글자가 상태 문자이고, 나머지가 경로다.
/// `+ /a` 형태와 `c..... /etc/fstab` 형태를 모두 받는다.
pub fn parse_status_line(line: &str) -> Option<ChangeEntry> {
    let line = line.trim_end_matches(['\r', '\n']);
    let code = line.chars().next()?;
    let status = ChangeStatus::from_code(code)?;

    let split_at = line.find(char::is_whitespace)?;
    let path = line[split_at..].trim();
    if path.is_empty() {
        return None;
    }

    Some(ChangeEntry {
        path: path.to_string(),
        status,
    })
}

pub fn parse_status_output(output: &str) -> ChangeSet {
    let mut changes = ChangeSet::default();
    for entry in output.lines().filter_map(parse_status_line) {
        changes.push(entry);
    }
    changes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_by_status_character() {
        let changes = parse_status_output("+ /a\n- /b\nc /c\n  /d\n");
        assert_eq!(changes.added, vec!["/a"]);
        assert_eq!(changes.removed, vec!["/b"]);
        assert_eq!(changes.modified, vec!["/c"]);
        assert_eq!(changes.total(), 3);
    }

    #[test]
    fn accepts_snapper_multi_column_status() {
        let changes = parse_status_output("c..... /etc/fstab\n+..... /etc/new file.conf\n");
        assert_eq!(changes.modified, vec!["/etc/fstab"]);
        assert_eq!(changes.added, vec!["/etc/new file.conf"]);
    }

    #[test]
    fn ignores_unknown_codes_and_pathless_lines() {
        let changes = parse_status_output("t..... /etc/mtab\n+\n\nrandom text\n-   \n");
        assert!(changes.is_empty());
    }

    #[test]
    fn keeps_original_order_within_bucket() {
        let changes = parse_status_output("+ /z\nc /m\n+ /a\n");
        assert_eq!(changes.added, vec!["/z", "/a"]);
        assert_eq!(changes.files(ChangeStatus::Modified), ["/m".to_string()]);
    }

    #[test]
    fn handles_crlf_line_endings() {
        let entry = parse_status_line("- /old\r").map(|e| e.path);
        assert_eq!(entry.as_deref(), Some("/old"));
    }
}
