//! 题目处理流程 - 流程层
//!
//! 核心职责：定义"一个片段"变成一道题的完整处理流程
//!
//! 流程顺序：
//! 1. 题号解析（失败则丢弃片段）
//! 2. 切出题内答案和解析
//! 3. 陈述抽取
//! 4. 选项抽取（与第 3 步各自读取同一段剩余文本）
//! 5. 题干规范化
//! 6. 数学表达式识别
//! 7. 科目、题型判定

use tracing::{debug, info};

use crate::config::Config;
use crate::models::{ExamInfo, ExtractedQuestion, Question};
use crate::services::inline_answer::split_inline_answer;
use crate::services::normalizer::{self, NotationStyle};
use crate::services::question_number::parse_question_number;
use crate::services::{Classifier, MathExtractor, OptionExtractor, QuestionSpan, StatementExtractor};
use crate::utils::logging::truncate_text;
use crate::workflow::question_ctx::QuestionCtx;

/// 片段被丢弃的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// 解析不到题号
    MissingNumber,
    /// 拆解后题干、选项、陈述都为空
    EmptyText,
}

/// 题目处理结果
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessResult {
    /// 成功抽取出一道题
    Extracted(Box<ExtractedQuestion>),
    /// 跳过
    Skipped(SkipReason),
}

/// 题目处理流程
///
/// - 编排单个片段的拆解步骤
/// - 不持有页面或试卷级别的状态
/// - 只依赖业务能力（services）
pub struct QuestionFlow {
    style: NotationStyle,
    statements: StatementExtractor,
    options: OptionExtractor,
    math: MathExtractor,
    classifier: Classifier,
    exam: Option<ExamInfo>,
    verbose_logging: bool,
}

impl QuestionFlow {
    /// 创建新的题目处理流程
    pub fn new(config: &Config) -> Self {
        let style = config.notation_style;
        Self {
            style,
            statements: StatementExtractor::new(style),
            options: OptionExtractor::new(style),
            math: MathExtractor::new(style),
            classifier: Classifier::new(config.default_subject, config.default_question_type),
            exam: None,
            verbose_logging: config.verbose_logging,
        }
    }

    /// 设置试卷的考试信息，之后抽出的每道题都会带上
    pub fn with_exam(mut self, exam: Option<ExamInfo>) -> Self {
        self.exam = exam;
        self
    }

    pub fn run(&self, span: &QuestionSpan, ctx: &QuestionCtx) -> ProcessResult {
        // ========== 1. 题号 ==========
        let Some((number, rest)) = parse_question_number(&span.text) else {
            debug!("{} 无法解析题号，丢弃: {}", ctx, truncate_text(&span.text, 40));
            return ProcessResult::Skipped(SkipReason::MissingNumber);
        };

        // ========== 2. 题内答案 / 解析 ==========
        let inline = split_inline_answer(rest);

        // ========== 3-4. 陈述、选项 ==========
        let statements = self.statements.extract(inline.body);
        let options = self.options.extract(inline.body);

        // 有陈述时以陈述前的引导语为题干，否则取选项之前的部分
        let raw_text = if !statements.items.is_empty() && !statements.text.is_empty() {
            &statements.text
        } else {
            &options.text
        };

        // ========== 5-6. 规范化、数学表达式 ==========
        // 题干是图片时文字为空，只要还有选项或陈述就保留
        let text = normalizer::normalize(raw_text, self.style);
        if text.is_empty() && options.items.is_empty() && statements.items.is_empty() {
            debug!("{} 第 {} 题没有题干、选项和陈述，丢弃", ctx, number);
            return ProcessResult::Skipped(SkipReason::EmptyText);
        }
        let math = self.math.extract(&text);

        // ========== 7. 分类 ==========
        let subject = self.classifier.classify_subject(&math.text);
        let question_type = self
            .classifier
            .classify_type(&math.text, options.items.len());

        if self.verbose_logging {
            info!(
                "{} 第 {} 题 [{} / {}] 选项 {} 陈述 {} 公式 {}: {}",
                ctx,
                number,
                subject,
                question_type,
                options.items.len(),
                statements.items.len(),
                math.items.len(),
                truncate_text(&math.text, 80)
            );
        }

        let question = Question {
            number,
            text: math.text,
            subject,
            question_type,
            answer_key: inline.answer_key,
            explanation: inline
                .explanation
                .map(|e| normalizer::normalize(e, self.style)),
            page: ctx.page,
            options: options.items,
            statements: statements.items,
            math_expressions: math.items,
            exam_name: self.exam.as_ref().map(|e| e.name.clone()),
            exam_year: self.exam.as_ref().map(|e| e.year),
        };

        ProcessResult::Extracted(Box::new(ExtractedQuestion {
            question,
            bbox: span.bbox,
        }))
    }
}
