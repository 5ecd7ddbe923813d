//! 批量试卷处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量试卷的加载、调度和结果落盘。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：初始化日志文件、创建结果写出服务
//! 2. **批量加载**：扫描并加载所有待处理的试卷（`Vec<Document>`）
//! 3. **并发控制**：使用 Semaphore 限制同时处理的试卷数量
//! 4. **分批处理**：每批完成后再开始下一批
//! 5. **结果落盘**：每份试卷写出 `extracted_data.json` 和图片
//! 6. **全局统计**：汇总所有试卷的处理结果
//!
//! 单份试卷的抽取是纯 CPU 计算，放在 `spawn_blocking` 中执行；
//! 一份试卷失败只计入失败数，不影响其他试卷。

use std::sync::Arc;

use anyhow::Result;
use futures::future::join_all;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::models::{load_all_documents, Document};
use crate::orchestrator::paper_processor::{self, package_images};
use crate::services::ArtifactWriter;
use crate::utils::logging::{
    init_log_file, log_batch_complete, log_batch_start, log_papers_loaded, log_startup,
    print_final_stats,
};

/// 应用主结构
pub struct App {
    config: Config,
    writer: Arc<ArtifactWriter>,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        init_log_file(&config.output_log_file)?;

        log_startup(
            &config.input_folder,
            &config.output_folder,
            config.max_concurrent_papers,
        );

        let writer = Arc::new(ArtifactWriter::new(&config.output_folder));

        Ok(Self { config, writer })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<ProcessingStats> {
        let all_papers = self.load_papers().await?;

        if all_papers.is_empty() {
            warn!("⚠️ 没有找到待处理的试卷文件，程序结束");
            return Ok(ProcessingStats::default());
        }

        log_papers_loaded(all_papers.len(), self.config.max_concurrent_papers);

        let stats = self.process_all_papers(all_papers).await?;

        print_final_stats(
            stats.success,
            stats.failed,
            stats.total,
            stats.questions,
            &self.config.output_log_file,
        );

        Ok(stats)
    }

    async fn load_papers(&self) -> Result<Vec<Document>> {
        info!("\n📁 正在扫描待处理的试卷...");
        Ok(load_all_documents(&self.config.input_folder).await?)
    }

    /// 处理所有试卷
    async fn process_all_papers(&self, all_papers: Vec<Document>) -> Result<ProcessingStats> {
        let batch_size = self.config.max_concurrent_papers.max(1);
        let semaphore = Arc::new(Semaphore::new(batch_size));
        let total_papers = all_papers.len();
        let total_batches = total_papers.div_ceil(batch_size);
        let mut stats = ProcessingStats {
            total: total_papers,
            ..Default::default()
        };

        let mut remaining = all_papers.into_iter();
        for batch_num in 1..=total_batches {
            let batch_start = (batch_num - 1) * batch_size;
            let batch_papers: Vec<Document> = remaining.by_ref().take(batch_size).collect();
            let batch_end = batch_start + batch_papers.len();

            log_batch_start(
                batch_num,
                total_batches,
                batch_start + 1,
                batch_end,
                total_papers,
            );

            let batch_result = self
                .process_batch(batch_papers, batch_start, semaphore.clone())
                .await?;

            stats.success += batch_result.success;
            stats.failed += batch_result.failed;
            stats.questions += batch_result.questions;

            log_batch_complete(
                batch_num,
                batch_result.success,
                batch_result.success + batch_result.failed,
            );
        }

        Ok(stats)
    }

    /// 处理单个批次
    async fn process_batch(
        &self,
        batch_papers: Vec<Document>,
        batch_start: usize,
        semaphore: Arc<Semaphore>,
    ) -> Result<BatchResult> {
        let mut batch_handles = Vec::with_capacity(batch_papers.len());

        for (idx, document) in batch_papers.into_iter().enumerate() {
            let paper_index = batch_start + idx + 1;
            let permit = semaphore.clone().acquire_owned().await?;
            let config = self.config.clone();
            let writer = self.writer.clone();

            let handle = tokio::spawn(async move {
                let _permit = permit;
                process_and_write(document, paper_index, config, writer).await
            });
            batch_handles.push((paper_index, handle));
        }

        // 等待本批所有任务完成
        let mut result = BatchResult::default();
        let (indices, handles): (Vec<_>, Vec<_>) = batch_handles.into_iter().unzip();

        for (paper_index, joined) in indices.into_iter().zip(join_all(handles).await) {
            match joined {
                Ok(Ok(question_count)) => {
                    result.success += 1;
                    result.questions += question_count;
                }
                Ok(Err(e)) => {
                    error!("[试卷 {}] ❌ 处理过程中发生错误: {:#}", paper_index, e);
                    result.failed += 1;
                }
                Err(e) => {
                    error!("[试卷 {}] 任务执行失败: {}", paper_index, e);
                    result.failed += 1;
                }
            }
        }

        Ok(result)
    }
}

/// 抽取一份试卷并写出结果，返回抽取到的题目数
async fn process_and_write(
    document: Document,
    paper_index: usize,
    config: Config,
    writer: Arc<ArtifactWriter>,
) -> Result<usize> {
    let image_dir = config.image_dir_name.clone();
    let (document, data) = tokio::task::spawn_blocking(move || {
        let data = paper_processor::process_paper(&document, paper_index, &config);
        (document, data)
    })
    .await?;

    let images = package_images(&document.pages, &image_dir);
    let path = writer.write(&document.name, &data, &images).await?;

    info!(
        "[试卷 {}] 💾 结果已写入: {} (来源: {})",
        paper_index,
        path.display(),
        document.file_path.as_deref().unwrap_or(&document.name)
    );
    Ok(data.questions.len())
}

/// 处理统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    pub success: usize,
    pub failed: usize,
    pub total: usize,
    /// 所有成功试卷抽取到的题目总数
    pub questions: usize,
}

/// 批次处理结果
#[derive(Debug, Default)]
struct BatchResult {
    success: usize,
    failed: usize,
    questions: usize,
}
