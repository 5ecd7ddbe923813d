//! 从试卷名称中解析考试名称与年份

use regex::Regex;
use std::sync::LazyLock;

/// 考试名 + 四位年份，如 `JEE Main 2024 (27 Jan Shift 1) ...`
static EXAM_TITLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<name>.+?)\s+(?P<year>(?:19|20)\d{2})\b").expect("valid exam title regex")
});

/// 考试信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamInfo {
    pub name: String,
    pub year: u16,
}

impl ExamInfo {
    /// 解析试卷名称，名称里没有年份时返回 `None`
    pub fn from_title(title: &str) -> Option<Self> {
        let caps = EXAM_TITLE_REGEX.captures(title)?;
        let year = caps["year"].parse().ok()?;
        let name = caps["name"].trim().to_string();
        if name.is_empty() {
            return None;
        }
        Some(Self { name, year })
    }
}
