//! 结果写出服务 - 业务能力层
//!
//! 只负责把一份试卷的抽取结果和图片落盘，不关心抽取流程

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::error::{AppError, Result};
use crate::models::{ExtractedData, Image};

/// 抽取结果文件名
pub const EXTRACTED_DATA_FILE: &str = "extracted_data.json";

/// 结果写出服务
///
/// 目录结构：
///
/// ```text
/// <output_folder>/<试卷名>/extracted_data.json
/// <output_folder>/<试卷名>/images/page1_img1.png
/// ```
pub struct ArtifactWriter {
    output_folder: PathBuf,
}

impl ArtifactWriter {
    pub fn new(output_folder: impl Into<PathBuf>) -> Self {
        Self {
            output_folder: output_folder.into(),
        }
    }

    /// 某份试卷的输出目录
    pub fn paper_dir(&self, paper_name: &str) -> PathBuf {
        self.output_folder.join(sanitize_dir_name(paper_name))
    }

    /// 写出抽取结果和图片
    ///
    /// # 参数
    /// - `paper_name`: 试卷名称，用作输出子目录名
    /// - `data`: 抽取结果
    /// - `images`: 图片描述及其字节，`Image.path` 为相对试卷目录的路径
    ///
    /// # 返回
    /// 返回 JSON 文件路径
    pub async fn write(
        &self,
        paper_name: &str,
        data: &ExtractedData,
        images: &[(Image, &[u8])],
    ) -> Result<PathBuf> {
        let dir = self.paper_dir(paper_name);
        create_dir(&dir).await?;

        for (image, bytes) in images {
            let path = dir.join(&image.path);
            if let Some(parent) = path.parent() {
                create_dir(parent).await?;
            }
            fs::write(&path, bytes)
                .await
                .map_err(|e| AppError::io(&path, e))?;
            debug!("写入图片: {} ({} 字节)", path.display(), bytes.len());
        }

        let json_path = dir.join(EXTRACTED_DATA_FILE);
        let json = serde_json::to_string_pretty(data).map_err(|e| AppError::json(&json_path, e))?;
        fs::write(&json_path, json)
            .await
            .map_err(|e| AppError::io(&json_path, e))?;

        debug!(
            "写入抽取结果: {} | 题目 {} | 图片 {}",
            json_path.display(),
            data.questions.len(),
            data.images.len()
        );

        Ok(json_path)
    }
}

async fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .map_err(|e| AppError::io(path, e))
}

/// 去掉不适合作目录名的字符
fn sanitize_dir_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c => c,
        })
        .collect();
    let trimmed = cleaned.trim().trim_matches('.');
    if trimmed.is_empty() {
        "paper".to_string()
    } else {
        trimmed.to_string()
    }
}
