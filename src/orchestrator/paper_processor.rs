//! 单个试卷处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责把一份试卷（`Document`）变成抽取结果，是试卷级别的编排器。
//!
//! ## 处理顺序
//!
//! 1. **逐页遍历**：按页码顺序处理每一页
//! 2. **切分片段**：页面块流 → `QuestionSpan`
//! 3. **拆解题目**：每个片段交给复用的 `QuestionFlow`
//! 4. **收集结果**：失败的片段只影响自己，不影响整份试卷
//! 5. **答案回填**：所有页面处理完后倒序找答案页，覆盖题内答案
//! 6. **去掉内部字段**：包围盒不出现在结果中
//! 7. **整理图片**：按页输出图片描述，不与题目关联

use tracing::{debug, info};

use crate::config::Config;
use crate::models::{
    Document, ExamInfo, ExtractedData, ExtractedQuestion, Image, Page, PageText, Question,
};
use crate::services::{segmenter, AnswerKeyMap};
use crate::workflow::{ProcessResult, QuestionCtx, QuestionFlow, SkipReason};

/// 题目处理统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QuestionStats {
    pub extracted: usize,
    pub skipped: usize,
    /// 被答案页覆盖答案的题目数
    pub answers_applied: usize,
}

/// 处理单个试卷
///
/// # 参数
/// - `document`: 试卷数据
/// - `paper_index`: 试卷索引（用于日志）
/// - `config`: 配置
///
/// # 返回
/// 返回抽取结果，格式不正确的片段只会被跳过，不会导致整份试卷失败
pub fn process_paper(document: &Document, paper_index: usize, config: &Config) -> ExtractedData {
    log_paper_start(
        paper_index,
        &document.name,
        document.file_path.as_deref(),
        document.pages.len(),
    );

    let exam = ExamInfo::from_title(&document.name);
    if let Some(exam) = &exam {
        info!("[试卷 {}] 考试: {} ({})", paper_index, exam.name, exam.year);
    }

    // 创建流程对象（只创建一次，复用）
    let question_flow = QuestionFlow::new(config).with_exam(exam);
    let mut stats = QuestionStats::default();
    let mut extracted: Vec<ExtractedQuestion> = Vec::new();

    // ========== 逐页抽取 ==========
    for page in &document.pages {
        let spans = segmenter::segment(&page.blocks);
        debug!(
            "[试卷 {}] 第 {} 页: {} 个块, {} 个片段",
            paper_index,
            page.number,
            page.blocks.len(),
            spans.len()
        );

        for (index, span) in spans.iter().enumerate() {
            let ctx = QuestionCtx::new(paper_index, page.number, index + 1);
            match question_flow.run(span, &ctx) {
                ProcessResult::Extracted(question) => {
                    stats.extracted += 1;
                    extracted.push(*question);
                }
                ProcessResult::Skipped(SkipReason::MissingNumber | SkipReason::EmptyText) => {
                    stats.skipped += 1;
                }
            }
        }
    }

    // ========== 答案回填（所有页面处理完之后） ==========
    let answer_keys = AnswerKeyMap::from_pages(&document.pages);

    // 答案页上的 "1. (3) 2. (2)" 会被切成没有题干的片段
    if let Some(answer_page) = answer_keys.page() {
        let before = extracted.len();
        extracted.retain(|e| e.question.page != answer_page || !e.question.text.is_empty());
        let dropped = before - extracted.len();
        if dropped > 0 {
            debug!("[试卷 {}] 丢弃答案页上 {} 个无题干片段", paper_index, dropped);
            stats.extracted -= dropped;
            stats.skipped += dropped;
        }
    }
    stats.answers_applied = answer_keys.apply(extracted.iter_mut().map(|e| &mut e.question));

    // ========== 去掉内部字段 ==========
    let questions: Vec<Question> = extracted
        .into_iter()
        .map(ExtractedQuestion::into_question)
        .collect();

    let images = package_images(&document.pages, &config.image_dir_name)
        .into_iter()
        .map(|(image, _)| image)
        .collect();

    let text = if config.include_page_text {
        page_texts(&document.pages)
    } else {
        Vec::new()
    };

    log_paper_complete(paper_index, &stats);

    ExtractedData {
        questions,
        images,
        text,
    }
}

/// 整理图片描述及其字节
///
/// 文件名为 `page{页码}_img{序号}.{扩展名}`，序号在每页内从 1 开始。
/// 扩展名只保留 ASCII 字母和数字，为空时用 `bin`。
/// `image_dir` 为空时图片直接放在试卷目录下。
pub fn package_images<'a>(pages: &'a [Page], image_dir: &str) -> Vec<(Image, &'a [u8])> {
    pages
        .iter()
        .flat_map(|page| {
            page.images.iter().enumerate().map(move |(index, source)| {
                let file_name = format!(
                    "page{}_img{}.{}",
                    page.number,
                    index + 1,
                    image_extension(&source.ext)
                );
                let path = if image_dir.is_empty() {
                    file_name
                } else {
                    format!("{}/{}", image_dir, file_name)
                };
                (
                    Image {
                        page: page.number,
                        path,
                    },
                    source.data.as_slice(),
                )
            })
        })
        .collect()
}

fn image_extension(ext: &str) -> String {
    let cleaned: String = ext
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if cleaned.is_empty() {
        "bin".to_string()
    } else {
        cleaned
    }
}

/// 每页原始文本，跳过空白页
fn page_texts(pages: &[Page]) -> Vec<PageText> {
    pages
        .iter()
        .filter_map(|page| {
            let text = page.text();
            let text = text.trim();
            (!text.is_empty()).then(|| PageText {
                page: page.number,
                text: text.to_string(),
            })
        })
        .collect()
}

// ========== 日志辅助函数 ==========

fn log_paper_start(paper_index: usize, name: &str, file_path: Option<&str>, page_count: usize) {
    info!("[试卷 {}] 开始处理", paper_index);
    info!("[试卷 {}] 名称: {}", paper_index, name);
    if let Some(file_path) = file_path {
        info!("[试卷 {}] 来源: {}", paper_index, file_path);
    }
    info!("[试卷 {}] 页数: {}", paper_index, page_count);
}

fn log_paper_complete(paper_index: usize, stats: &QuestionStats) {
    info!(
        "[试卷 {}] 题目统计: 抽取 {}, 跳过 {}, 答案回填 {}",
        paper_index, stats.extracted, stats.skipped, stats.answers_applied
    );
    info!("[试卷 {}] ✅ 试卷处理完成", paper_index);
}
