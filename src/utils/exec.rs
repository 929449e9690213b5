//! # 外部命令调用
//!
//! 对单个图像文件调用外部处理程序并检查退出码。
//!
//! 子进程的标准输入输出直接继承自当前终端，不做捕获。
//!
//! ## 依赖关系
//! - 被 `commands/process.rs` 使用
//! - 使用 `error.rs` 的 `CommandLaunch` / `CommandFailed`

use crate::error::{ProcessAllError, Result};

use std::path::{Path, PathBuf};
use std::process::Command;

/// 默认外部程序（相对当前工作目录，位于应用包内部）
pub const DEFAULT_COMMAND: &str = "./processImage.app/Contents/MacOS/processImage";

/// 外部处理程序
#[derive(Debug, Clone)]
pub struct ExternalCommand {
    program: PathBuf,
}

impl Default for ExternalCommand {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND)
    }
}

impl ExternalCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// 以 `[program, file]` 调用外部程序，阻塞直到子进程退出
    pub fn invoke(&self, file: &Path) -> Result<()> {
        let status = Command::new(&self.program)
            .arg(file)
            .status()
            .map_err(|e| ProcessAllError::CommandLaunch {
                command: self.program.display().to_string(),
                path: file.display().to_string(),
                source: e,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ProcessAllError::CommandFailed {
                command: self.program.display().to_string(),
                path: file.display().to_string(),
                status: status.to_string(),
            })
        }
    }
}
