//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 命令结构
//! `process_all <path> [--exec <PROGRAM>] [--dry-run]`
//!
//! 位置参数在这里声明为可选：缺失时由 `main.rs` 打印用法并以状态码 1 退出，
//! 而不是交给 clap 的默认错误处理。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: process

pub mod process;

use clap::Parser;

/// process_all - 批量调用外部图像处理程序
#[derive(Parser, Debug)]
#[command(name = "process_all")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Run processImage on every image file under a directory",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub args: process::ProcessArgs,
}
