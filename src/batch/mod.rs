//! # 批量处理模块
//!
//! 提供图像文件的收集与逐个处理能力。
//!
//! ## 功能
//! - 递归收集匹配扩展名的图像文件
//! - 顺序处理
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/process.rs` 使用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::ImageCollector;
pub use runner::{BatchResult, BatchRunner, ProcessResult};
