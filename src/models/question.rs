use serde::{Deserialize, Serialize};

use crate::models::block::BoundingBox;
use crate::models::subject::Subject;

/// 选择题选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// 选项标记，如 `(1)`
    pub label: String,
    pub text: String,
}

impl QuestionOption {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// "Statement I / II" 类题目中的一条陈述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub text: String,
    /// Statement I 为 0，Statement II 为 1
    pub position: usize,
}

/// 题干中识别出的数学表达式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MathExpression {
    /// 原文中匹配到的片段
    pub original_text: String,
    /// 规范化后的记法
    pub math_notation: String,
    /// 在题干中的出现顺序（从0开始）
    pub position: usize,
}

/// 题型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    #[default]
    Mcq,
    Numerical,
}

impl QuestionType {
    pub fn name(self) -> &'static str {
        match self {
            QuestionType::Mcq => "mcq",
            QuestionType::Numerical => "numerical",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "mcq" | "choice" => Some(QuestionType::Mcq),
            "numerical" | "integer" | "numeric" => Some(QuestionType::Numerical),
            _ => None,
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 最终输出的一道题
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// 原卷上印的题号
    pub number: u32,
    pub text: String,
    pub subject: Subject,
    pub question_type: QuestionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// 所在页码（从1开始）
    pub page: u32,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
    #[serde(default)]
    pub statements: Vec<Statement>,
    #[serde(default)]
    pub math_expressions: Vec<MathExpression>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_year: Option<u16>,
}

/// 流水线内部使用的题目，额外携带合并后的坐标框
///
/// 坐标框只在抽取过程中有意义，输出前通过 [`ExtractedQuestion::into_question`] 去掉
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedQuestion {
    pub question: Question,
    pub bbox: BoundingBox,
}

impl ExtractedQuestion {
    pub fn into_question(self) -> Question {
        self.question
    }
}

/// 输出的图片描述，只按页归属，不关联到具体题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub page: u32,
    pub path: String,
}

/// 单页原始文本
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    pub page: u32,
    pub text: String,
}

/// 一份试卷的抽取结果
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtractedData {
    pub questions: Vec<Question>,
    pub images: Vec<Image>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<PageText>,
}
