use std::fs::{self, File};
use std::path::{Path, PathBuf};

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::error::AppError;

const APP_DIR_NAME: &str = "grid-snake";
const LOG_FILE_NAME: &str = "grid-snake.log";

/// Returns the platform-correct default log file path.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

/// Sends `log` records to `path`, truncating any previous log.
///
/// The terminal is in raw mode while playing, so records never go to stderr.
pub fn init(path: &Path, level: LevelFilter) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    WriteLogger::init(level, config, File::create(path)?)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::default_log_path;

    #[test]
    fn default_log_path_ends_with_app_file() {
        let path = default_log_path();

        assert!(path.ends_with("grid-snake/grid-snake.log"));
    }
}
