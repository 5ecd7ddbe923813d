//! 页面输入数据
//!
//! 由外部的文档解码环节（PDF 解析或 OCR）产生：每页一串带坐标的文本块，外加该页的内嵌图片

use serde::{Deserialize, Serialize};

/// 页面坐标系下的矩形框
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BoundingBox {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// 按坐标取 min/max 合并两个框
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }
}

/// 页面上的一个文本块
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub text: String,
    pub bbox: BoundingBox,
}

impl Block {
    pub fn new(text: impl Into<String>, bbox: BoundingBox) -> Self {
        Self {
            text: text.into(),
            bbox,
        }
    }
}

/// 页面内嵌图片的原始字节
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSource {
    /// 图片扩展名，如 `png`、`jpeg`
    pub ext: String,
    #[serde(default)]
    pub data: Vec<u8>,
}

/// 试卷的一页
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// 页码（从1开始）
    pub number: u32,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub images: Vec<ImageSource>,
}

impl Page {
    pub fn new(number: u32, blocks: Vec<Block>) -> Self {
        Self {
            number,
            blocks,
            images: Vec::new(),
        }
    }

    pub fn with_images(mut self, images: Vec<ImageSource>) -> Self {
        self.images = images;
        self
    }

    /// 整页文本，文本块之间以换行连接
    pub fn text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// 一份完整的试卷文档
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// 试卷名称，一般就是源文件名
    #[serde(default)]
    pub name: String,
    pub pages: Vec<Page>,
    #[serde(skip_serializing, skip_deserializing)]
    pub file_path: Option<String>,
}

impl Document {
    pub fn new(name: impl Into<String>, pages: Vec<Page>) -> Self {
        Self {
            name: name.into(),
            pages,
            file_path: None,
        }
    }

    /// 设置源文件路径
    pub fn with_file_path(mut self, file_path: String) -> Self {
        self.file_path = Some(file_path);
        self
    }
}
