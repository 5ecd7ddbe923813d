//! "Statement I / II" 类题目的陈述抽取
//!
//! 典型版式：
//!
//! ```text
//! Given below are two statements:
//! Statement (I): ...
//! Statement (II): ...
//! In light of the above statements, choose the correct answer ...
//! ```
//!
//! 每条陈述只保留第一句；以 "In light of" 开头的内容属于选项引导语，不算陈述。

use regex::Regex;
use std::sync::LazyLock;

use crate::models::Statement;
use crate::services::normalizer::{self, NotationStyle};
use crate::services::Extraction;

static GUARD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:given below are two statements)|(?i:statements?)\s*\(?\s*(?:II|I)\b")
        .expect("valid statement guard regex")
});

static STATEMENT_ONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:statement)\s*(?:\(\s*I\s*\)|I)\s*[:\-]").expect("valid statement I regex")
});

static STATEMENT_TWO_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:statement)\s*(?:\(\s*II\s*\)|II)\s*[:\-]").expect("valid statement II regex")
});

/// 陈述正文的结束位置：下一个 Statement、选项引导语、选项标记
static TERMINATOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)statement|in light of|\(\s*\d\s*\)").expect("valid statement terminator regex")
});

static LABEL_ECHO_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?i:statement)\s*\(?\s*(?:II|I)\s*\)?\s*[:\-]?").expect("valid label echo regex")
});

static SENTENCE_END_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(?:\s|$)").expect("valid sentence end regex"));

static TRANSITION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:in (?:the )?light of|choose the|based on the above)")
        .expect("valid transition regex")
});

/// 陈述抽取器
#[derive(Debug, Clone, Copy, Default)]
pub struct StatementExtractor {
    style: NotationStyle,
}

impl StatementExtractor {
    pub fn new(style: NotationStyle) -> Self {
        Self { style }
    }

    /// 抽取陈述，返回引导部分（作为暂定题干）和陈述列表
    ///
    /// 没有陈述特征时原样返回文本和空列表
    pub fn extract(&self, text: &str) -> Extraction<Statement> {
        if !GUARD_REGEX.is_match(text) {
            return Extraction {
                text: text.to_string(),
                items: Vec::new(),
            };
        }

        let first = STATEMENT_ONE_REGEX.find(text);
        let intro = match first {
            Some(m) => text[..m.start()].trim(),
            None => text.trim(),
        };

        let mut items = Vec::new();
        let mut search_from = 0;

        if let Some(m) = first {
            if let Some(statement) = self.statement_at(text, m.end(), 0) {
                items.push(statement);
            }
            search_from = m.end();
        }

        if let Some(m) = STATEMENT_TWO_REGEX.find_at(text, search_from) {
            if let Some(statement) = self.statement_at(text, m.end(), 1) {
                items.push(statement);
            }
        }

        Extraction {
            text: intro.to_string(),
            items,
        }
    }

    /// 从 `body_start` 开始截取一条陈述
    fn statement_at(&self, text: &str, body_start: usize, position: usize) -> Option<Statement> {
        let rest = &text[body_start..];
        let body_end = TERMINATOR_REGEX
            .find(rest)
            .map_or(rest.len(), |m| m.start());
        let body = LABEL_ECHO_REGEX.replace(&rest[..body_end], "");

        let sentence = SENTENCE_END_REGEX
            .split(&body)
            .map(str::trim)
            .find(|s| !s.is_empty())?;

        let cleaned = normalizer::normalize(sentence, self.style);
        if cleaned.is_empty() || TRANSITION_REGEX.is_match(&cleaned) {
            return None;
        }

        Some(Statement {
            text: cleaned,
            position,
        })
    }
}
