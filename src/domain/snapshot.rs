//! 스냅샷 레코드와 `snapper list` 표 출력 파서.

use std::fmt;

pub const PLACEHOLDER: &str = "-";

pub const COLUMN_DELIMITER: char = '│';

/// 한 행을 레코드로 받아들이기 위한 최소 필드 수(Description 열까지).
pub const MIN_FIELDS: usize = 7;

const HEADER_LINES: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotKind {
    Single,
    Pre,
    Post,
    /// 알 수 없는 태그는 원문 그대로 보존한다.
    Other(String),
}

impl SnapshotKind {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "single" => Self::Single,
            "pre" => Self::Pre,
            "post" => Self::Post,
            other => Self::Other(or_placeholder(other)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Single => "single",
            Self::Pre => "pre",
            Self::Post => "post",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for SnapshotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub number: String,
    pub kind: SnapshotKind,
    pub pre_number: String,
    pub date: String,
    pub user: String,
    pub cleanup: String,
    pub description: String,
    pub userdata: String,
}

impl Snapshot {
    /// 구분자로 나눈 필드 목록에서 레코드를 만든다. 필드가 부족하면 `None`.
    pub fn from_fields(fields: &[&str]) -> Option<Self> {
        if fields.len() < MIN_FIELDS {
            return None;
        }

        let field = |idx: usize| or_placeholder(fields.get(idx).copied().unwrap_or(""));

        Some(Self {
            number: field(0),
            kind: SnapshotKind::parse(fields[1].trim()),
            pre_number: field(2),
            date: field(3),
            user: field(4),
            cleanup: field(5),
            description: field(6),
            userdata: field(7),
        })
    }

    pub fn detail_lines(&self) -> Vec<String> {
        vec![
            format!("Number: {}", self.number),
            format!("Type: {}", self.kind),
            format!("Pre #: {}", self.pre_number),
            format!("Date: {}", self.date),
            format!("User: {}", self.user),
            format!("Cleanup: {}", self.cleanup),
            format!("Description: {}", self.description),
            format!("Userdata: {}", self.userdata),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotListing {
    pub snapshots: Vec<Snapshot>,
    pub skipped: Vec<String>,
}

/// `snapper list` 출력(헤더 2줄 + 데이터 행)을 스냅샷 목록으로 변환한다.
pub fn parse_snapshot_list(output: &str) -> SnapshotListing {
    let mut listing = SnapshotListing::default();

    for line in output.lines().skip(HEADER_LINES) {
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(COLUMN_DELIMITER).map(str::trim).collect();
        match Snapshot::from_fields(&fields) {
            Some(snapshot) => listing.snapshots.push(snapshot),
            None => listing.skipped.push(line.to_string()),
        }
    }

    listing
}

pub fn find_snapshot<'a>(snapshots: &'a [Snapshot], number: &str) -> Option<&'a Snapshot> {
    let wanted = number.trim();
    snapshots.iter().find(|s| s.number.trim() == wanted)
}

fn or_placeholder(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}
