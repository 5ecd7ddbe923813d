//! 题号解析
//!
//! 依次尝试 `Q3.`、`Question 3`、`3.` 三种写法，先匹配者胜出，
//! 保证 `Q3.` 不会被裸数字规则误读。

use regex::Regex;
use std::sync::LazyLock;

static NUMBER_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"^\s*Q\s*\.?\s*(\d+)\s*[.:)]?").expect("valid Q-number regex"),
        Regex::new(r"^\s*Question\s*\.?\s*(\d+)\s*[.:)]?").expect("valid Question-number regex"),
        Regex::new(r"^\s*(\d+)\s*\.").expect("valid bare number regex"),
    ]
});

/// 解析片段开头的题号，返回题号和去掉题号后的剩余文本
///
/// 题号必须是正整数，解析不到时返回 `None`，该片段随后被丢弃
pub fn parse_question_number(text: &str) -> Option<(u32, &str)> {
    NUMBER_PATTERNS.iter().find_map(|re| {
        let caps = re.captures(text)?;
        let number: u32 = caps[1].parse().ok()?;
        if number == 0 {
            return None;
        }
        let end = caps.get(0)?.end();
        Some((number, text[end..].trim_start()))
    })
}
