//! 选项抽取
//!
//! 如果题目中有 "In light of the above statements," / "choose the correct answer from
//! the options given below:" 这类引导语，只在引导语之后寻找选项；否则扫描整段文本。
//! 选项形如 `(1) ... (2) ...`，正文一直延续到下一个选项标记或文本结尾。

use regex::Regex;
use std::sync::LazyLock;

use crate::models::QuestionOption;
use crate::services::normalizer::{self, NotationStyle};
use crate::services::Extraction;

static OPTIONS_SECTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)in (?:the )?light of the above statements\s*,?",
        r"|choose the (?:correct|most appropriate) answer from the options given below\s*:?",
    ))
    .expect("valid options section regex")
});

static OPTION_LABEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*(\d)\s*\)").expect("valid option label regex"));

static LEFTOVER_TRANSITION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:in (?:the )?light of|choose the (?:correct|most appropriate) answer)")
        .expect("valid leftover transition regex")
});

/// 选项抽取器
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionExtractor {
    style: NotationStyle,
}

impl OptionExtractor {
    pub fn new(style: NotationStyle) -> Self {
        Self { style }
    }

    /// 抽取选项，返回选项之前的题干和选项列表
    ///
    /// 找不到任何选项标记时返回完整文本和空列表；同一标记只保留第一次出现
    pub fn extract(&self, text: &str) -> Extraction<QuestionOption> {
        let section = OPTIONS_SECTION_REGEX.find(text);
        let scan = section.map_or(text, |m| &text[m.end()..]);

        let labels: Vec<_> = OPTION_LABEL_REGEX.captures_iter(scan).collect();
        if labels.is_empty() {
            return Extraction {
                text: text.trim().to_string(),
                items: Vec::new(),
            };
        }

        let mut items: Vec<QuestionOption> = Vec::new();
        for (i, caps) in labels.iter().enumerate() {
            let Some(whole) = caps.get(0) else { continue };
            let body_end = labels
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map_or(scan.len(), |m| m.start());

            let body = normalizer::normalize(&scan[whole.end()..body_end], self.style);
            if body.is_empty() || LEFTOVER_TRANSITION_REGEX.is_match(&body) {
                continue;
            }

            let label = format!("({})", &caps[1]);
            if items.iter().any(|o| o.label == label) {
                continue;
            }
            items.push(QuestionOption::new(label, body));
        }

        // 没有引导语时，题干就是第一个选项标记之前的部分
        let question_text = match section {
            Some(m) => &text[..m.start()],
            None => labels[0].get(0).map_or(scan, |m| &scan[..m.start()]),
        };

        Extraction {
            text: question_text.trim().to_string(),
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_options_without_section_phrase() {
        let result = OptionExtractor::default()
            .extract("A particle moves with constant velocity. (1) True (2) False");

        assert_eq!(result.text, "A particle moves with constant velocity.");
        assert_eq!(
            result.items,
            vec![
                QuestionOption::new("(1)", "True"),
                QuestionOption::new("(2)", "False"),
            ]
        );
    }

    #[test]
    fn test_duplicate_label_keeps_first() {
        let result = OptionExtractor::default().extract("Pick one (1) first body (1) second body (2) other");

        assert_eq!(
            result.items,
            vec![
                QuestionOption::new("(1)", "first body"),
                QuestionOption::new("(2)", "other"),
            ]
        );
    }

    #[test]
    fn test_options_after_section_phrase() {
        let text = "Given below are two statements: Statement (I): x (1) y. \
            In light of the above statements, choose the correct answer from the options given below: \
            (1) Both are true (2) Both are false (3) I true, II false (4) I false, II true";
        let result = OptionExtractor::default().extract(text);

        assert_eq!(result.text, "Given below are two statements: Statement (I): x (1) y.");
        assert_eq!(result.items.len(), 4);
        assert_eq!(result.items[0], QuestionOption::new("(1)", "Both are true"));
        assert_eq!(result.items[3], QuestionOption::new("(4)", "I false, II true"));
    }

    #[test]
    fn test_no_labels_returns_full_text() {
        let result = OptionExtractor::default().extract("Calculate the value of g at the pole. ");
        assert_eq!(result.text, "Calculate the value of g at the pole.");
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_empty_bodies_are_skipped() {
        let result = OptionExtractor::default().extract("(3)");
        assert_eq!(result.text, "");
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_option_bodies_are_normalized() {
        let result = OptionExtractor::new(NotationStyle::Latex).extract("Speed? (1) 3 × 10 ^ 8 m/s (2) 0");
        assert_eq!(result.items[0].text, "3\\times 10^8 m/s");
    }
}
