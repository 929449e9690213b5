//! # 处理参数定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/process.rs`

use crate::utils::exec::DEFAULT_COMMAND;

use clap::Args;
use std::path::PathBuf;

/// 处理参数
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Root directory to scan recursively for .jpg/.jpeg/.png/.bmp/.gif files
    pub path: Option<PathBuf>,

    /// External program invoked once per image file
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_COMMAND)]
    pub exec: PathBuf,

    /// Only list matched files, do not run the external program
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
