//! 科目与题型判定
//!
//! 科目：统计每个科目命中了多少个不同关键词，命中数唯一最高者胜出；
//! 全部为零或并列最高时使用默认科目（默认物理，可配置）。
//!
//! 题型：有选项即为选择题；否则含计算线索（calculate / find / value / `=` / 任意数字）为数值题；
//! 其余情况使用默认题型（默认选择题，可配置）。

use tracing::debug;

use crate::models::{QuestionType, Subject};

const NUMERICAL_CUES: [&str; 4] = ["calculate", "find", "value", "="];

/// 科目与题型分类器
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    default_subject: Subject,
    default_question_type: QuestionType,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(Subject::Physics, QuestionType::Mcq)
    }
}

impl Classifier {
    pub fn new(default_subject: Subject, default_question_type: QuestionType) -> Self {
        Self {
            default_subject,
            default_question_type,
        }
    }

    /// 按关键词命中数判定科目
    pub fn classify_subject(&self, text: &str) -> Subject {
        let lowered = text.to_lowercase();
        let scores: Vec<(Subject, usize)> = Subject::ALL
            .iter()
            .map(|&subject| {
                let hits = subject
                    .keywords()
                    .iter()
                    .filter(|kw| lowered.contains(*kw))
                    .count();
                (subject, hits)
            })
            .collect();

        let best = scores.iter().map(|(_, hits)| *hits).max().unwrap_or(0);
        let leaders: Vec<Subject> = scores
            .iter()
            .filter(|(_, hits)| *hits == best)
            .map(|(subject, _)| *subject)
            .collect();

        match leaders.as_slice() {
            [only] if best > 0 => *only,
            _ => {
                debug!("科目关键词无命中或并列 ({:?})，使用默认科目", scores);
                self.default_subject
            }
        }
    }

    /// 判定题型
    pub fn classify_type(&self, text: &str, option_count: usize) -> QuestionType {
        if option_count > 0 {
            return QuestionType::Mcq;
        }

        let lowered = text.to_lowercase();
        let has_cue = NUMERICAL_CUES.iter().any(|cue| lowered.contains(cue))
            || lowered.chars().any(|c| c.is_ascii_digit());

        if has_cue {
            QuestionType::Numerical
        } else {
            self.default_question_type
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keyword_defaults_to_physics() {
        let classifier = Classifier::default();
        assert_eq!(
            classifier.classify_subject("A particle moves with constant velocity."),
            Subject::Physics
        );
        assert_eq!(classifier.classify_subject(""), Subject::Physics);
    }

    #[test]
    fn test_highest_distinct_hit_count_wins() {
        let classifier = Classifier::default();
        assert_eq!(
            classifier.classify_subject("The enthalpy of the reaction of benzene with an acid"),
            Subject::Chemistry
        );
        assert_eq!(
            classifier.classify_subject("Find the determinant of the matrix and the limit"),
            Subject::Mathematics
        );
    }

    #[test]
    fn test_tie_falls_back_to_default() {
        // 化学 1 个（reaction），数学 1 个（function）
        let classifier = Classifier::new(Subject::Mathematics, QuestionType::Mcq);
        assert_eq!(
            classifier.classify_subject("reaction rate as a function"),
            Subject::Mathematics
        );
        let classifier = Classifier::default();
        assert_eq!(
            classifier.classify_subject("reaction rate as a function"),
            Subject::Physics
        );
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        let classifier = Classifier::default();
        // 物理 force 重复三次仍只算 1，数学 matrix + vector 为 2
        assert_eq!(
            classifier.classify_subject("force force force on a matrix of vector"),
            Subject::Mathematics
        );
    }

    #[test]
    fn test_question_type_rules() {
        let classifier = Classifier::default();
        assert_eq!(classifier.classify_type("anything 42", 4), QuestionType::Mcq);
        assert_eq!(classifier.classify_type("Calculate the work done", 0), QuestionType::Numerical);
        assert_eq!(classifier.classify_type("The answer is 25 J", 0), QuestionType::Numerical);
        assert_eq!(classifier.classify_type("Which is true?", 0), QuestionType::Mcq);

        let numerical_default = Classifier::new(Subject::Physics, QuestionType::Numerical);
        assert_eq!(numerical_default.classify_type("Which is true?", 0), QuestionType::Numerical);
    }
}
