//! 数学表达式识别
//!
//! 从左到右扫描题干，识别三类片段：
//! - 已带定界符的公式：`$...$`、`\(...\)`
//! - 带花括号参数的反斜杠命令：`\frac{1}{2}`
//! - 数字-运算符-数字：`3×10^8`、`1/2`、`5 - 3`
//!
//! 题干本身保持不变，调用方可以按 `position` 把表达式回填到渲染结果中。

use regex::Regex;
use std::sync::LazyLock;

use crate::models::MathExpression;
use crate::services::normalizer::{self, NotationStyle};
use crate::services::Extraction;

static MATH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\$[^$]+\$",
        r"|\\\((?s:.+?)\\\)",
        r"|\\[A-Za-z]+(?:\{[^{}]*\})+",
        r"|\d+(?:\.\d+)?(?:\s*(?:[-+×÷*/=<>≤≥≠±^]|\\times|\\div|\\cdot|\\pm|\\leq|\\geq|\\neq|\\approx)\s*-?\d+(?:\.\d+)?)+",
    ))
    .expect("valid math expression regex")
});

/// 数学表达式识别器
#[derive(Debug, Clone, Copy, Default)]
pub struct MathExtractor {
    style: NotationStyle,
}

impl MathExtractor {
    pub fn new(style: NotationStyle) -> Self {
        Self { style }
    }

    /// 识别题干中的所有表达式，返回原文和按出现顺序排列的表达式
    pub fn extract(&self, text: &str) -> Extraction<MathExpression> {
        let items = MATH_REGEX
            .find_iter(text)
            .enumerate()
            .map(|(position, m)| {
                let original = m.as_str();
                MathExpression {
                    original_text: original.to_string(),
                    math_notation: normalizer::normalize(strip_delimiters(original), self.style),
                    position,
                }
            })
            .collect();

        Extraction {
            text: text.to_string(),
            items,
        }
    }
}

fn strip_delimiters(span: &str) -> &str {
    if let Some(inner) = span.strip_prefix('$').and_then(|s| s.strip_suffix('$')) {
        return inner;
    }
    if let Some(inner) = span.strip_prefix("\\(").and_then(|s| s.strip_suffix("\\)")) {
        return inner;
    }
    span
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notations(extraction: &Extraction<MathExpression>) -> Vec<&str> {
        extraction
            .items
            .iter()
            .map(|m| m.original_text.as_str())
            .collect()
    }

    #[test]
    fn test_digit_operator_digit_in_scan_order() {
        let extractor = MathExtractor::new(NotationStyle::Symbol);
        let result = extractor.extract("If 2 + 3 = 5 then 1/2 of 3×10^8 is what?");

        assert_eq!(result.text, "If 2 + 3 = 5 then 1/2 of 3×10^8 is what?");
        assert_eq!(notations(&result), vec!["2 + 3 = 5", "1/2", "3×10^8"]);
        let positions: Vec<usize> = result.items.iter().map(|m| m.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_delimited_span_is_unwrapped() {
        let extractor = MathExtractor::new(NotationStyle::Latex);
        let result = extractor.extract("Evaluate $a × b$ now");

        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].original_text, "$a × b$");
        assert_eq!(result.items[0].math_notation, "a \\times b");
    }

    #[test]
    fn test_backslash_command_with_braces() {
        let extractor = MathExtractor::default();
        let result = extractor.extract("The value of \\frac{1}{2} is");

        assert_eq!(notations(&result), vec!["\\frac{1}{2}"]);
        assert_eq!(result.items[0].math_notation, "\\frac{1}{2}");
    }

    #[test]
    fn test_notation_follows_style() {
        let symbol = MathExtractor::new(NotationStyle::Symbol).extract("4 ÷ 2");
        let latex = MathExtractor::new(NotationStyle::Latex).extract("4 ÷ 2");

        assert_eq!(symbol.items[0].math_notation, "4 ÷ 2");
        assert_eq!(latex.items[0].math_notation, "4 \\div 2");
    }

    #[test]
    fn test_plain_prose_has_no_expressions() {
        let result = MathExtractor::default().extract("A particle moves with constant velocity.");
        assert!(result.items.is_empty());
    }
}
