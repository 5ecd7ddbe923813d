//! # Exam Question Extract
//!
//! 从试卷页面块中抽取结构化题目的 Rust 程序
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 数据模型（Models）
//! - `models/` - 输入的页面块、输出的题目记录以及文件加载
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单段文本或单页
//! - `segmenter` - 页面块切分为题目片段
//! - `StatementExtractor` / `OptionExtractor` - 陈述与选项拆解
//! - `MathExtractor` / `normalizer` - 数学表达式与文本规范化
//! - `Classifier` - 科目与题型判定
//! - `AnswerKeyMap` - 答案页解析与回填
//! - `ArtifactWriter` - 写出 extracted_data.json 与图片
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个片段"变成一道题的完整处理流程
//! - `QuestionCtx` - 上下文封装（试卷 + 页码 + 片段序号）
//! - `QuestionFlow` - 流程编排（题号 → 陈述 → 选项 → 规范化 → 公式 → 分类）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量试卷处理器，管理并发和落盘
//! - `orchestrator/paper_processor` - 单个试卷处理器，逐页抽取并回填答案
//!
//! ## 模块结构

pub mod config;
pub mod error;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, Result};
pub use models::{Document, ExtractedData, Page, Question};
pub use orchestrator::{process_paper, App};
pub use workflow::{ProcessResult, QuestionCtx, QuestionFlow};
