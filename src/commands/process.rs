//! # process 命令实现
//!
//! 对根目录下的所有图像文件逐个调用外部处理程序。
//!
//! ## 功能
//! - 递归收集图像文件（.jpg/.jpeg/.png/.bmp/.gif）
//! - 顺序调用外部程序，单个失败不中断
//! - 可选 dry run，仅列出匹配文件
//! - 失败汇总表格
//!
//! ## 依赖关系
//! - 使用 `cli/process.rs` 定义的参数
//! - 使用 `batch/`
//! - 使用 `utils/exec.rs`, `utils/output.rs`, `utils/progress.rs`

use crate::batch::{BatchResult, BatchRunner, ImageCollector, ProcessResult};
use crate::cli::process::ProcessArgs;
use crate::error::Result;
use crate::utils::exec::ExternalCommand;
use crate::utils::{output, progress};

use std::path::PathBuf;
use tabled::{Table, Tabled};

/// 失败汇总行
#[derive(Debug, Clone, Tabled)]
struct FailureRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Cause")]
    cause: String,
}

/// 执行 process 命令
pub fn execute(root: PathBuf, args: ProcessArgs) -> Result<BatchResult> {
    output::print_header("Processing Images");

    let spinner = progress::create_spinner("Scanning for image files...");
    let collected = ImageCollector::new(root.clone()).collect();
    spinner.finish_and_clear();
    let files = collected?;

    output::print_info(&format!(
        "Found {} image files under '{}'",
        files.len(),
        root.display()
    ));

    if files.is_empty() {
        output::print_warning("No image files found, nothing to do.");
        return Ok(BatchResult::default());
    }

    let runner = BatchRunner::new().show_progress(!args.dry_run);

    let result = if args.dry_run {
        runner.run(&files, |path| {
            output::print_skip(&path.display().to_string());
            ProcessResult::Skipped(path.display().to_string())
        })
    } else {
        let command = ExternalCommand::new(args.exec);
        output::print_info(&format!("Using '{}'", command.program().display()));

        runner.run(&files, |path| {
            let label = path.display().to_string();
            match command.invoke(path) {
                Ok(()) => ProcessResult::Success(label),
                Err(e) => ProcessResult::Failed(label, e.cause()),
            }
        })
    };

    print_summary(&result, args.dry_run);
    Ok(result)
}

/// 打印处理汇总
fn print_summary(result: &BatchResult, dry_run: bool) {
    output::print_separator();

    if dry_run {
        output::print_done(&format!(
            "[DRY] Listed {} files, nothing was run",
            result.skipped
        ));
        return;
    }

    if !result.failures.is_empty() {
        let rows: Vec<FailureRow> = result
            .failures
            .iter()
            .map(|(file, cause)| FailureRow {
                file: file.clone(),
                cause: cause.clone(),
            })
            .collect();
        println!("{}", Table::new(&rows));
    }

    output::print_done(&format!(
        "Processed {} files: {} succeeded, {} failed",
        result.total(),
        result.success,
        result.failed
    ));
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::error::ProcessAllError;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    // `sh` 作为外部程序：每个“图像文件”都是一段脚本，记录调用并按内容决定退出码
    fn write_image(root: &Path, rel: &str, log: &Path, exit_code: i32) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(
            &path,
            format!("echo \"$0\" >> '{}'\nexit {}\n", log.display(), exit_code),
        )
        .unwrap();
    }

    fn args(exec: &str, dry_run: bool) -> ProcessArgs {
        ProcessArgs {
            path: None,
            exec: PathBuf::from(exec),
            dry_run,
        }
    }

    fn logged_calls(log: &Path) -> Vec<String> {
        fs::read_to_string(log)
            .unwrap_or_default()
            .lines()
            .map(|l| l.to_string())
            .collect()
    }

    #[test]
    fn test_failure_in_middle_does_not_abort() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("images");
        let log = tmp.path().join("calls.log");
        write_image(&root, "1.jpg", &log, 0);
        write_image(&root, "2.jpg", &log, 1);
        write_image(&root, "3.jpg", &log, 0);

        let result = execute(root.clone(), args("sh", false)).unwrap();

        assert_eq!(result.success, 2);
        assert_eq!(result.failed, 1);
        assert_eq!(result.failures[0].0, root.join("2.jpg").display().to_string());

        let calls = logged_calls(&log);
        assert_eq!(calls.len(), 3);
        for name in ["1.jpg", "2.jpg", "3.jpg"] {
            let expected = root.join(name).display().to_string();
            assert!(calls.contains(&expected), "missing call for {}", expected);
        }
    }

    #[test]
    fn test_only_images_are_invoked() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("images");
        let log = tmp.path().join("calls.log");
        write_image(&root, "a/b/c/photo.png", &log, 0);
        write_image(&root, "PHOTO.JPG", &log, 0);
        write_image(&root, "notes.txt", &log, 0);

        let result = execute(root, args("sh", false)).unwrap();

        assert_eq!(result.success, 2);
        assert_eq!(logged_calls(&log).len(), 2);
    }

    #[test]
    fn test_missing_launcher_is_item_failure() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("images");
        let log = tmp.path().join("calls.log");
        write_image(&root, "a.png", &log, 0);
        write_image(&root, "b.gif", &log, 0);

        let missing = tmp.path().join("processImage");
        let result = execute(root, args(&missing.display().to_string(), false)).unwrap();

        assert_eq!(result.failed, 2);
        assert!(result.failures[0].1.starts_with("failed to launch"));
    }

    #[test]
    fn test_missing_root_invokes_nothing() {
        let tmp = TempDir::new().unwrap();
        let log = tmp.path().join("calls.log");

        let err = execute(tmp.path().join("nope"), args("sh", false)).unwrap_err();

        assert!(matches!(err, ProcessAllError::InvalidInput { .. }));
        assert!(logged_calls(&log).is_empty());
    }

    #[test]
    fn test_dry_run_invokes_nothing() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("images");
        let log = tmp.path().join("calls.log");
        write_image(&root, "a.bmp", &log, 0);
        write_image(&root, "b.jpeg", &log, 0);

        let result = execute(root, args("sh", true)).unwrap();

        assert_eq!(result.skipped, 2);
        assert_eq!(result.success, 0);
        assert!(logged_calls(&log).is_empty());
    }

    #[test]
    fn test_empty_tree() {
        let tmp = TempDir::new().unwrap();
        let result = execute(tmp.path().to_path_buf(), args("sh", false)).unwrap();
        assert_eq!(result.total(), 0);
    }
}
