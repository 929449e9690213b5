//! # 统一错误处理模块
//!
//! 定义 process_all 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - 输入错误 (`InvalidInput`)：致命，直接退出
//! - 单项处理错误 (`CommandLaunch` / `CommandFailed`)：记录后继续下一项
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// process_all 统一错误类型
#[derive(Error, Debug)]
pub enum ProcessAllError {
    // ─────────────────────────────────────────────────────────────
    // 输入错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid input '{path}': {reason}")]
    InvalidInput { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to launch '{command}' for {path}")]
    CommandLaunch {
        command: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' returned {status} for {path}")]
    CommandFailed {
        command: String,
        path: String,
        status: String,
    },
}

impl ProcessAllError {
    /// 是否为单文件处理失败（可恢复，批处理继续）
    pub fn is_item_failure(&self) -> bool {
        matches!(
            self,
            ProcessAllError::CommandLaunch { .. } | ProcessAllError::CommandFailed { .. }
        )
    }

    /// 不含文件路径的失败原因，用于逐项报告
    ///
    /// 非单项失败的错误返回完整描述。
    pub fn cause(&self) -> String {
        if !self.is_item_failure() {
            return self.to_string();
        }

        match self {
            ProcessAllError::CommandLaunch {
                command, source, ..
            } => format!("failed to launch '{}': {}", command, source),
            ProcessAllError::CommandFailed { status, .. } => status.clone(),
            other => other.to_string(),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ProcessAllError>;
