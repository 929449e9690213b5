//! # 工具函数模块
//!
//! 提供美化输出、进度条、外部命令调用等工具。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `batch/` 模块使用
//! - 子模块: exec, output, progress

pub mod exec;
pub mod output;
pub mod progress;
