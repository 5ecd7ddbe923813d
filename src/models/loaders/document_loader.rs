use crate::error::{AppError, Result};
use crate::models::block::Document;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 支持的试卷文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    fn of(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Some(DocumentFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Some(DocumentFormat::Toml),
            _ => None,
        }
    }
}

/// 从 JSON / TOML 文件加载页面块数据并转换为 Document 对象
pub async fn load_document(path: &Path) -> Result<Document> {
    let format = DocumentFormat::of(path).ok_or_else(|| AppError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::io(path, e))?;

    let mut document: Document = match format {
        DocumentFormat::Json => {
            serde_json::from_str(&content).map_err(|e| AppError::json(path, e))?
        }
        DocumentFormat::Toml => toml::from_str(&content).map_err(|e| AppError::toml(path, e))?,
    };

    // 未写名称时使用文件名
    if document.name.trim().is_empty() {
        document.name = path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
    }

    Ok(document.with_file_path(path.to_string_lossy().to_string()))
}

/// 从文件夹中加载所有试卷文件，按文件名排序
///
/// 单个文件加载失败只记录警告，不影响其他文件
pub async fn load_all_documents(folder_path: &str) -> Result<Vec<Document>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        return Err(AppError::DirectoryNotFound { path: folder });
    }

    let mut paths = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .map_err(|e| AppError::io(&folder, e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::io(&folder, e))?
    {
        let path = entry.path();
        if DocumentFormat::of(&path).is_some() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut documents = Vec::new();
    for path in paths {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_document(&path).await {
            Ok(document) => {
                tracing::info!("成功加载 {} 页", document.pages.len());
                documents.push(document);
            }
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {}", path.display(), e);
            }
        }
    }

    Ok(documents)
}
