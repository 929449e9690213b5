//! # 命令执行模块
//!
//! 实现处理流程的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `utils/`
//! - 子模块: process

pub mod process;

use crate::batch::BatchResult;
use crate::cli::process::ProcessArgs;
use crate::error::Result;

use std::path::PathBuf;

/// 执行命令
pub fn run(root: PathBuf, args: ProcessArgs) -> Result<BatchResult> {
    process::execute(root, args)
}
