//! 题目切分
//!
//! 把一页的文本块序列切成若干题目片段：遇到以题号开头的文本块就开启新片段，
//! 之后的文本块都归入当前片段，直到下一个题号或页尾。
//! 第一个题号之前的文本块（页眉、说明文字等）不属于任何片段，直接丢弃。

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::models::{Block, BoundingBox};

/// 题目起始：`Q3` / `Q.3` / `Question 3`，或行首的 `12.`（排除 `3.5` 这类小数）
static QUESTION_START_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:Q(?:uestion)?\s*\.?\s*\d+|\d+\s*\.(?:[^\d]|$))")
        .expect("valid question start regex")
});

/// 一道候选题目的原始文本和合并坐标框
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionSpan {
    pub text: String,
    pub bbox: BoundingBox,
}

impl QuestionSpan {
    fn start(block: &Block) -> Self {
        Self {
            text: block.text.clone(),
            bbox: block.bbox,
        }
    }

    fn push(&mut self, block: &Block) {
        self.text.push(' ');
        self.text.push_str(&block.text);
        self.bbox = self.bbox.union(&block.bbox);
    }
}

/// 判断文本块是否以题号开头
pub fn is_question_start(text: &str) -> bool {
    QUESTION_START_REGEX.is_match(text)
}

/// 把一页的文本块切分为题目片段
pub fn segment(blocks: &[Block]) -> Vec<QuestionSpan> {
    let mut spans = Vec::new();
    let mut current: Option<QuestionSpan> = None;
    let mut orphaned = 0usize;

    for block in blocks {
        if is_question_start(&block.text) {
            if let Some(span) = current.take() {
                spans.push(span);
            }
            current = Some(QuestionSpan::start(block));
        } else if let Some(span) = current.as_mut() {
            span.push(block);
        } else {
            orphaned += 1;
        }
    }

    // 页尾的最后一个片段
    if let Some(span) = current {
        spans.push(span);
    }

    if orphaned > 0 {
        debug!("丢弃 {} 个位于首个题号之前的文本块", orphaned);
    }

    spans
}
