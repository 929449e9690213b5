//! # 图像文件收集器
//!
//! 递归遍历根目录，按扩展名白名单收集待处理的图像文件。
//!
//! ## 功能
//! - 递归目录搜索（任意深度）
//! - 扩展名匹配（不区分大小写）
//! - 按文件名排序，结果顺序稳定
//!
//! ## 依赖关系
//! - 被 `commands/process.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{ProcessAllError, Result};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 支持的图像扩展名（小写，不含点）
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif"];

/// 图像文件收集器
pub struct ImageCollector {
    /// 根目录
    root: PathBuf,
}

impl ImageCollector {
    /// 创建新的收集器
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// 检查文件名后缀是否在白名单内
    ///
    /// 按小写文件名的后缀匹配，`.png` 这类点文件同样算作图像。
    pub fn is_image(path: &Path) -> bool {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_lowercase(),
            None => return false,
        };

        IMAGE_EXTENSIONS
            .iter()
            .any(|ext| name.ends_with(&format!(".{}", ext)))
    }

    /// 收集根目录下所有匹配的文件
    ///
    /// 根目录不存在或不是目录时返回 `InvalidInput`。
    /// 遍历过程中无法读取的条目会被跳过。
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.root.exists() {
            return Err(ProcessAllError::InvalidInput {
                path: self.root.display().to_string(),
                reason: "directory not found".to_string(),
            });
        }

        if !self.root.is_dir() {
            return Err(ProcessAllError::InvalidInput {
                path: self.root.display().to_string(),
                reason: "not a directory".to_string(),
            });
        }

        let files = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| Self::is_image(e.path()))
            .map(|e| e.into_path())
            .collect();

        Ok(files)
    }
}
