//! 题内答案与解析
//!
//! 部分试卷在题目末尾直接附上 `Ans. (2)` 和 `Solution: ...`。
//! 这里把解析切出来，并取最后一个答案标记作为暂定答案；
//! 暂定答案之后会被答案页中的结果覆盖。
//!
//! 答案标记必须位于句首（文本开头或 `.?!)` 之后）或者跟在选项列表之后，
//! 且其后不能再出现选项标记，否则 "Choose the correct answer: (1) ..." 这类题干会被误切。

use regex::Regex;
use std::sync::LazyLock;

static EXPLANATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:explanation|solution)\s*:|\bsol\.\s").expect("valid explanation regex")
});

static ANSWER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:\bans\b\.?\s*[:\-]?|\banswer\s*[:.\-])\s*\(?\s*([A-D]|-?\d+(?:\.\d+)?)\b\s*\)?",
    )
    .expect("valid inline answer regex")
});

static OPTION_LABEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*\d\s*\)").expect("valid option label regex"));

/// 切分结果
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InlineAnswer<'a> {
    /// 去掉答案和解析后的题目正文
    pub body: &'a str,
    pub answer_key: Option<String>,
    pub explanation: Option<&'a str>,
}

/// 切出题目末尾的答案和解析
pub fn split_inline_answer(text: &str) -> InlineAnswer<'_> {
    let (before_explanation, explanation) = match EXPLANATION_REGEX.find(text) {
        Some(m) => {
            let rest = text[m.end()..].trim();
            (&text[..m.start()], (!rest.is_empty()).then_some(rest))
        }
        None => (text, None),
    };

    let answer = ANSWER_REGEX
        .captures_iter(before_explanation)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            is_answer_tail(before_explanation, whole.start(), whole.end())
                .then(|| (whole.start(), caps[1].to_uppercase()))
        })
        .last();

    match answer {
        Some((start, key)) => InlineAnswer {
            body: before_explanation[..start].trim(),
            answer_key: Some(key),
            explanation,
        },
        None => InlineAnswer {
            body: before_explanation.trim(),
            answer_key: None,
            explanation,
        },
    }
}

/// 标记之后没有选项，且标记位于句首或选项列表之后
fn is_answer_tail(text: &str, start: usize, end: usize) -> bool {
    if OPTION_LABEL_REGEX.is_match(&text[end..]) {
        return false;
    }
    let before = &text[..start];
    let sentence_start = before
        .trim_end()
        .chars()
        .last()
        .map_or(true, |c| matches!(c, '.' | '?' | '!' | ')'));
    sentence_start || OPTION_LABEL_REGEX.is_match(before)
}
