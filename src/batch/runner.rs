//! # 批量执行器
//!
//! 按顺序逐个处理文件列表，单项失败不中断批处理。
//!
//! ## 功能
//! - 顺序执行（一次只处理一个文件）
//! - 进度条显示（处理期间挂起，避免与子进程输出交错）
//! - 错误收集与汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/process.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `utils/output.rs` 输出失败信息

use crate::utils::{output, progress};

use indicatif::ProgressBar;
use std::path::{Path, PathBuf};

/// 单个文件处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessResult {
    /// 处理成功
    Success(String),
    /// 跳过（dry run）
    Skipped(String),
    /// 处理失败
    Failed(String, String), // (文件路径, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success(_) => self.success += 1,
            ProcessResult::Skipped(_) => self.skipped += 1,
            ProcessResult::Failed(path, err) => {
                self.failed += 1;
                self.failures.push((path, err));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 是否显示进度条
    show_progress: bool,
}

impl Default for BatchRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new() -> Self {
        Self {
            show_progress: true,
        }
    }

    /// 设置是否显示进度条
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// 顺序处理文件列表
    ///
    /// 每个文件的处理在进度条挂起期间完成，处理结束后才开始下一个。
    pub fn run<F>(&self, files: &[PathBuf], mut processor: F) -> BatchResult
    where
        F: FnMut(&Path) -> ProcessResult,
    {
        let pb = if self.show_progress {
            progress::create_progress_bar(files.len() as u64, "Processing")
        } else {
            ProgressBar::hidden()
        };

        let mut batch_result = BatchResult::default();

        for file in files {
            pb.set_message(file_label(file));
            let result = pb.suspend(|| processor(file));

            if let ProcessResult::Failed(path, err) = &result {
                pb.suspend(|| {
                    output::print_error(&format!("Error processing {}: {}", path, err));
                });
            }

            batch_result.merge(result);
            pb.inc(1);
        }

        pb.finish_and_clear();
        batch_result
    }
}

/// 进度条上显示的文件名
fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
