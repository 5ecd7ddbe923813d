//! 答案页解析与答案回填
//!
//! 从最后一页往前找，遇到第一个带 "Answer Key(s)" 标题的页面就停止，只解析这一页。
//! 解析出的答案在所有题目抽取完成后统一回填，并覆盖题内的暂定答案。

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::{debug, info};

use crate::models::{Page, Question};

static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\banswer\s*keys?\b").expect("valid answer key heading regex"));

/// `<题号><分隔符><可选括号><答案><可选括号>`，如 `1. (3)`、`12 - B`、`21) 25`
static ANSWER_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,3})\s*[.):\-]\s*[(\[]?\s*(-?\d+(?:\.\d+)?|[A-Da-d])\s*[)\]]?")
        .expect("valid answer line regex")
});

/// 题号 => 答案
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnswerKeyMap {
    entries: BTreeMap<u32, String>,
    /// 答案页页码
    page: Option<u32>,
}

impl AnswerKeyMap {
    /// 倒序扫描页面，解析第一个答案页；没有答案页时返回空表
    pub fn from_pages(pages: &[Page]) -> Self {
        let Some((page_number, text)) = pages
            .iter()
            .rev()
            .map(|page| (page.number, page.text()))
            .find(|(_, text)| HEADING_REGEX.is_match(text))
        else {
            debug!("未找到答案页");
            return Self::default();
        };

        let mut map = Self::parse(&text);
        map.page = Some(page_number);
        info!("✓ 第 {} 页为答案页，解析到 {} 个答案", page_number, map.len());
        map
    }

    /// 解析一页答案文本，同一题号以后出现的为准
    pub fn parse(text: &str) -> Self {
        let body = HEADING_REGEX
            .find(text)
            .map_or(text, |m| &text[m.end()..]);

        let mut entries = BTreeMap::new();
        for caps in ANSWER_LINE_REGEX.captures_iter(body) {
            let Ok(number) = caps[1].parse::<u32>() else {
                continue;
            };
            let token = caps[2]
                .trim_matches(|c| matches!(c, '(' | ')' | '[' | ']'))
                .to_uppercase();
            entries.insert(number, token);
        }

        Self {
            entries,
            page: None,
        }
    }

    /// 答案页所在页码，解析自文本时为 `None`
    pub fn page(&self) -> Option<u32> {
        self.page
    }

    pub fn get(&self, number: u32) -> Option<&str> {
        self.entries.get(&number).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 回填答案，表中有的题号覆盖题目原有答案，返回被回填的题目数
    pub fn apply<'a>(&self, questions: impl IntoIterator<Item = &'a mut Question>) -> usize {
        let mut applied = 0;
        for question in questions {
            if let Some(answer) = self.get(question.number) {
                question.answer_key = Some(answer.to_string());
                applied += 1;
            }
        }
        applied
    }
}

impl FromIterator<(u32, String)> for AnswerKeyMap {
    fn from_iter<I: IntoIterator<Item = (u32, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            page: None,
        }
    }
}
