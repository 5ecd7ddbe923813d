//! 业务能力层
//!
//! 每个模块只描述"我能做什么"，只处理单段文本或单页，不关心整体流程。
//! 各抽取步骤都是对同一段只读文本的独立处理，返回 `(剩余文本, 抽到的条目)`，
//! 由流程层负责组合。

pub mod answer_key;
pub mod artifact_writer;
pub mod classifier;
pub mod inline_answer;
pub mod math_extractor;
pub mod normalizer;
pub mod option_extractor;
pub mod question_number;
pub mod segmenter;
pub mod statement_extractor;

pub use answer_key::AnswerKeyMap;
pub use artifact_writer::ArtifactWriter;
pub use classifier::Classifier;
pub use math_extractor::MathExtractor;
pub use normalizer::NotationStyle;
pub use option_extractor::OptionExtractor;
pub use segmenter::QuestionSpan;
pub use statement_extractor::StatementExtractor;

/// 一次抽取的结果
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Extraction<T> {
    /// 抽取后留下的文本
    pub text: String,
    /// 按原文顺序排列的条目
    pub items: Vec<T>,
}
