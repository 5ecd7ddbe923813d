use std::path::PathBuf;
use thiserror::Error;

/// 应用程序错误类型
///
/// 抽取核心本身不会失败，只有读取试卷文件、写出结果这类资源操作会返回错误
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件读写失败
    #[error("文件操作失败 ({}): {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON 解析或序列化失败
    #[error("JSON处理失败 ({}): {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// TOML 解析失败
    #[error("TOML解析失败 ({}): {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// 不支持的试卷文件格式
    #[error("不支持的文件格式: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// 目录不存在
    #[error("目录不存在: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件操作错误
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }

    /// 创建 JSON 错误
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        AppError::Json {
            path: path.into(),
            source,
        }
    }

    /// 创建 TOML 错误
    pub fn toml(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        AppError::Toml {
            path: path.into(),
            source,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type Result<T> = std::result::Result<T, AppError>;
