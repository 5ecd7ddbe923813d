//! 题目处理上下文
//!
//! 封装"我正在处理哪份试卷第几页的第几个片段"这一信息

use std::fmt::Display;

/// 题目处理上下文
///
/// 只用于日志定位，不参与抽取逻辑
#[derive(Debug, Clone)]
pub struct QuestionCtx {
    /// 试卷索引（仅用于日志显示）
    pub paper_index: usize,

    /// 页码（从1开始）
    pub page: u32,

    /// 片段在本页中的索引（从1开始）
    pub span_index: usize,
}

impl QuestionCtx {
    /// 创建新的题目上下文
    pub fn new(paper_index: usize, page: u32, span_index: usize) -> Self {
        Self {
            paper_index,
            page,
            span_index,
        }
    }
}

impl Display for QuestionCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[试卷 {} 第{}页 片段#{}]",
            self.paper_index, self.page, self.span_index
        )
    }
}
