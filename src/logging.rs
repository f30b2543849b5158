use anyhow::{Context, Result};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::path::Path;

const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Starts rotating file logging under the data directory. Logs go to files
/// only: the TUI owns the terminal while in raw mode. The returned handle
/// must stay alive for the duration of the process.
pub(crate) fn init(log_dir: &Path) -> Result<LoggerHandle> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let handle = Logger::try_with_env_or_str("info")
        .context("Invalid log spec")?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename("trackflow"),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .context("Failed to start logger")?;

    Ok(handle)
}
