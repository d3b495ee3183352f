//! 스냅샷 정리(cleanup) 알고리즘과 보존 정책 설정 규칙.
//!
//! 설정 파일은 `KEY="value"` 형식의 줄로 구성된 snapper 프로필 파일이다.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub const CLEANUP_PREFIXES: [&str; 3] = ["TIMELINE_", "NUMBER_", "EMPTY_"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupAlgorithm {
    Timeline,
    Number,
    EmptyPrePost,
}

impl CleanupAlgorithm {
    pub const ALL: [CleanupAlgorithm; 3] = [Self::Timeline, Self::Number, Self::EmptyPrePost];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Timeline => "timeline",
            Self::Number => "number",
            Self::EmptyPrePost => "empty-pre-post",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

impl fmt::Display for CleanupAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Integer,
    YesNo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupSetting {
    TimelineCreate,
    TimelineCleanup,
    TimelineMinAge,
    TimelineLimitHourly,
    TimelineLimitDaily,
    TimelineLimitWeekly,
    TimelineLimitMonthly,
    TimelineLimitYearly,
    NumberCleanup,
    NumberMinAge,
    NumberLimit,
    EmptyPrePostCleanup,
    EmptyPrePostMinAge,
}

impl CleanupSetting {
    pub const ALL: [CleanupSetting; 13] = [
        Self::TimelineCreate,
        Self::TimelineCleanup,
        Self::TimelineMinAge,
        Self::TimelineLimitHourly,
        Self::TimelineLimitDaily,
        Self::TimelineLimitWeekly,
        Self::TimelineLimitMonthly,
        Self::TimelineLimitYearly,
        Self::NumberCleanup,
        Self::NumberMinAge,
        Self::NumberLimit,
        Self::EmptyPrePostCleanup,
        Self::EmptyPrePostMinAge,
    ];

    pub const DEFAULT: CleanupSetting = Self::TimelineLimitHourly;

    pub fn key(self) -> &'static str {
        match self {
            Self::TimelineCreate => "TIMELINE_CREATE",
            Self::TimelineCleanup => "TIMELINE_CLEANUP",
            Self::TimelineMinAge => "TIMELINE_MIN_AGE",
            Self::TimelineLimitHourly => "TIMELINE_LIMIT_HOURLY",
            Self::TimelineLimitDaily => "TIMELINE_LIMIT_DAILY",
            Self::TimelineLimitWeekly => "TIMELINE_LIMIT_WEEKLY",
            Self::TimelineLimitMonthly => "TIMELINE_LIMIT_MONTHLY",
            Self::TimelineLimitYearly => "TIMELINE_LIMIT_YEARLY",
            Self::NumberCleanup => "NUMBER_CLEANUP",
            Self::NumberMinAge => "NUMBER_MIN_AGE",
            Self::NumberLimit => "NUMBER_LIMIT",
            Self::EmptyPrePostCleanup => "EMPTY_PRE_POST_CLEANUP",
            Self::EmptyPrePostMinAge => "EMPTY_PRE_POST_MIN_AGE",
        }
    }

    pub fn kind(self) -> SettingKind {
        match self {
            Self::TimelineCreate
            | Self::TimelineCleanup
            | Self::NumberCleanup
            | Self::EmptyPrePostCleanup => SettingKind::YesNo,
            _ => SettingKind::Integer,
        }
    }

    pub fn parse(raw: &str) -> Result<Self, SettingsError> {
        let wanted = raw.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.key() == wanted)
            .ok_or_else(|| SettingsError::UnknownSetting(wanted.to_string()))
    }

    /// 입력값을 검증하고 파일에 기록할 정규화된 값을 돌려준다.
    pub fn normalize(self, raw: &str) -> Result<String, SettingsError> {
        let value = raw.trim();
        match self.kind() {
            SettingKind::Integer => value
                .parse::<i64>()
                .map(|n| n.to_string())
                .map_err(|_| SettingsError::InvalidInteger {
                    key: self.key(),
                    value: value.to_string(),
                }),
            SettingKind::YesNo => {
                let lower = value.to_ascii_lowercase();
                if lower == "yes" || lower == "no" {
                    Ok(lower)
                } else {
                    Err(SettingsError::InvalidFlag {
                        key: self.key(),
                        value: value.to_string(),
                    })
                }
            }
        }
    }

    pub fn render_line(self, value: &str) -> String {
        format!("{}=\"{}\"", self.key(), value)
    }
}

impl fmt::Display for CleanupSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Invalid setting: {0}")]
    UnknownSetting(String),

    #[error("Invalid value for {key}: Must be a number (got '{value}')")]
    InvalidInteger { key: &'static str, value: String },

    #[error("Value must be 'yes' or 'no' for {key} (got '{value}')")]
    InvalidFlag { key: &'static str, value: String },

    #[error("Config file {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("Permission denied: Run as root to edit {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SettingsError {
    pub fn from_io(path: PathBuf, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _ => Self::Io { path, source: err },
        }
    }
}

pub fn cleanup_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .filter(|line| CLEANUP_PREFIXES.iter().any(|p| line.starts_with(p)))
        .map(ToString::to_string)
        .collect()
}

/// `KEY=`로 시작하는 줄을 모두 새 값으로 바꾸고, 없으면 끝에 추가한다.
/// 나머지 줄은 줄바꿈까지 그대로 보존한다.
pub fn apply_setting(contents: &str, setting: CleanupSetting, value: &str) -> String {
    let prefix = format!("{}=", setting.key());
    let replacement = setting.render_line(value);

    let mut out = String::with_capacity(contents.len() + replacement.len() + 1);
    let mut found = false;

    for line in contents.split_inclusive('\n') {
        if line.starts_with(&prefix) {
            out.push_str(&replacement);
            out.push('\n');
            found = true;
        } else {
            out.push_str(line);
        }
    }

    if !found {
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&replacement);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = "# subvolume\nSUBVOLUME=\"/\"\nTIMELINE_CREATE=\"yes\"\nTIMELINE_LIMIT_HOURLY=\"10\"\nNUMBER_LIMIT=\"50\"\n";

    #[test]
    fn allow_list_has_expected_kinds() {
        assert_eq!(CleanupSetting::ALL.len(), 13);
        let flags: Vec<&str> = CleanupSetting::ALL
            .iter()
            .filter(|s| s.kind() == SettingKind::YesNo)
            .map(|s| s.key())
            .collect();
        assert_eq!(
            flags,
            vec![
                "TIMELINE_CREATE",
                "TIMELINE_CLEANUP",
                "NUMBER_CLEANUP",
                "EMPTY_PRE_POST_CLEANUP"
            ]
        );
    }

    #[test]
    fn rejects_keys_outside_allow_list() {
        assert!(matches!(
            CleanupSetting::parse("SUBVOLUME"),
            Err(SettingsError::UnknownSetting(k)) if k == "SUBVOLUME"
        ));
        assert_eq!(
            CleanupSetting::parse(" NUMBER_LIMIT ").ok(),
            Some(CleanupSetting::NumberLimit)
        );
    }

    #[test]
    fn integer_values_are_normalized() {
        let setting = CleanupSetting::TimelineLimitHourly;
        assert_eq!(setting.normalize(" 007 ").ok().as_deref(), Some("7"));
        assert_eq!(setting.normalize("-1").ok().as_deref(), Some("-1"));
        assert!(matches!(
            setting.normalize("ten"),
            Err(SettingsError::InvalidInteger { .. })
        ));
        assert!(setting.normalize("").is_err());
    }

    #[test]
    fn flag_values_accept_yes_or_no() {
        let setting = CleanupSetting::NumberCleanup;
        assert_eq!(setting.normalize("YES").ok().as_deref(), Some("yes"));
        assert_eq!(setting.normalize("no").ok().as_deref(), Some("no"));
        assert!(matches!(
            setting.normalize("true"),
            Err(SettingsError::InvalidFlag { .. })
        ));
    }

    #[test]
    fn replaces_only_matching_line() {
        let updated = apply_setting(CONFIG, CleanupSetting::TimelineCreate, "no");
        let before: Vec<&str> = CONFIG.lines().collect();
        let after: Vec<&str> = updated.lines().collect();
        assert_eq!(before.len(), after.len());
        for (idx, (b, a)) in before.iter().zip(&after).enumerate() {
            if idx == 2 {
                assert_eq!(*a, "TIMELINE_CREATE=\"no\"");
            } else {
                assert_eq!(b, a);
            }
        }
    }

    #[test]
    fn prefix_match_requires_equals_sign() {
        let contents = "NUMBER_LIMIT_IMPORTANT=\"10\"\n";
        let updated = apply_setting(contents, CleanupSetting::NumberLimit, "5");
        assert_eq!(updated, "NUMBER_LIMIT_IMPORTANT=\"10\"\nNUMBER_LIMIT=\"5\"\n");
    }

    #[test]
    fn appends_missing_key_after_unterminated_last_line() {
        let updated = apply_setting("SUBVOLUME=\"/\"", CleanupSetting::NumberMinAge, "1800");
        assert_eq!(updated, "SUBVOLUME=\"/\"\nNUMBER_MIN_AGE=\"1800\"\n");
        assert_eq!(
            apply_setting("", CleanupSetting::NumberMinAge, "0"),
            "NUMBER_MIN_AGE=\"0\"\n"
        );
    }

    #[test]
    fn cleanup_lines_filters_by_prefix() {
        assert_eq!(
            cleanup_lines(CONFIG),
            vec![
                "TIMELINE_CREATE=\"yes\"",
                "TIMELINE_LIMIT_HOURLY=\"10\"",
                "NUMBER_LIMIT=\"50\""
            ]
        );
    }

    #[test]
    fn algorithm_parsing_is_case_insensitive() {
        assert_eq!(
            CleanupAlgorithm::parse("Empty-Pre-Post"),
            Some(CleanupAlgorithm::EmptyPrePost)
        );
        assert_eq!(CleanupAlgorithm::parse("weekly"), None);
    }

    #[test]
    fn io_errors_map_to_distinct_variants() {
        let path = PathBuf::from("/etc/snapper/configs/root");
        let not_found = io::Error::from(io::ErrorKind::NotFound);
        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        assert!(matches!(
            SettingsError::from_io(path.clone(), not_found),
            SettingsError::NotFound(_)
        ));
        assert!(matches!(
            SettingsError::from_io(path, denied),
            SettingsError::PermissionDenied(_)
        ));
    }
}
