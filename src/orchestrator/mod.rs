//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量试卷处理器
//! - 管理应用生命周期（初始化、运行）
//! - 批量加载试卷（Vec<Document>）
//! - 控制并发数量（Semaphore）
//! - 写出每份试卷的抽取结果
//! - 输出全局统计信息
//!
//! ### `paper_processor` - 单个试卷处理器
//! - 逐页切分片段，创建并复用 QuestionFlow
//! - 所有页面处理完后统一回填答案页
//! - 去掉包围盒等内部字段，整理图片描述
//! - 输出单个试卷的统计信息
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<Document>)
//!     ↓
//! paper_processor (处理 Vec<Page>)
//!     ↓
//! workflow::QuestionFlow (处理单个 QuestionSpan)
//!     ↓
//! services (能力层：segment / statements / options / math / classify / answer key)
//! ```

pub mod batch_processor;
pub mod paper_processor;

// 重新导出主要类型
pub use batch_processor::{App, ProcessingStats};
pub use paper_processor::{package_images, process_paper, QuestionStats};
