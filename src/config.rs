use crate::models::{QuestionType, Subject};
use crate::services::normalizer::NotationStyle;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 待处理试卷（页面块导出文件）所在目录
    pub input_folder: String,
    /// 抽取结果输出目录
    pub output_folder: String,
    /// 同时处理的试卷数量
    pub max_concurrent_papers: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    // --- 抽取策略 ---
    /// 数学符号输出形式
    pub notation_style: NotationStyle,
    /// 关键词无命中或并列时使用的科目
    pub default_subject: Subject,
    /// 既无选项又无计算线索时使用的题型
    pub default_question_type: QuestionType,
    /// 是否在结果中附带每页原始文本
    pub include_page_text: bool,
    /// 图片输出子目录名
    pub image_dir_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_folder: "input_pages".to_string(),
            output_folder: "output".to_string(),
            max_concurrent_papers: 4,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            notation_style: NotationStyle::Symbol,
            default_subject: Subject::Physics,
            default_question_type: QuestionType::Mcq,
            include_page_text: false,
            image_dir_name: "images".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            input_folder: std::env::var("INPUT_FOLDER").unwrap_or(default.input_folder),
            output_folder: std::env::var("OUTPUT_FOLDER").unwrap_or(default.output_folder),
            max_concurrent_papers: std::env::var("MAX_CONCURRENT_PAPERS").ok().and_then(|v| v.parse().ok()).filter(|n| *n > 0).unwrap_or(default.max_concurrent_papers),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            notation_style: std::env::var("NOTATION_STYLE").ok().and_then(|v| NotationStyle::from_name(&v)).unwrap_or(default.notation_style),
            default_subject: std::env::var("DEFAULT_SUBJECT").ok().and_then(|v| Subject::from_name(&v)).unwrap_or(default.default_subject),
            default_question_type: std::env::var("DEFAULT_QUESTION_TYPE").ok().and_then(|v| QuestionType::from_name(&v)).unwrap_or(default.default_question_type),
            include_page_text: std::env::var("INCLUDE_PAGE_TEXT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.include_page_text),
            image_dir_name: std::env::var("IMAGE_DIR_NAME").unwrap_or(default.image_dir_name),
        }
    }
}
