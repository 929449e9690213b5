//! # process_all - 批量图像处理调度器
//!
//! 递归扫描目录，对每个图像文件调用一次外部处理程序
//! (`processImage.app` 内部的可执行文件)，单个文件失败只报告不中断。
//!
//! ## 用法
//! ```text
//! process_all <path> [--exec <PROGRAM>] [--dry-run]
//! ```
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── batch/     (文件收集与顺序执行)
//!   ├── utils/      (输出、进度条、外部命令)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod utils;

use clap::{CommandFactory, Parser};
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    let Some(root) = cli.args.path.clone() else {
        println!("{}", Cli::command().render_usage());
        std::process::exit(1);
    };

    // 单个文件的失败已在批处理中报告，不影响退出码
    if let Err(e) = commands::run(root, cli.args) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
