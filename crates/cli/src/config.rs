use std::path::PathBuf;

use stockroom_observability::LogFormat;

/// Interchange file written and read back by the demo.
pub const DEFAULT_DATA_FILE: &str = "articles.json";

/// Runtime configuration.
///
/// The binary always runs with the defaults; callers embedding the pipeline
/// (tests in particular) point `data_file` elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Relative paths resolve against the working directory.
    pub data_file: PathBuf,
    pub log_format: LogFormat,
}

impl Config {
    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = data_file.into();
        self
    }

    pub fn with_log_format(mut self, log_format: LogFormat) -> Self {
        self.log_format = log_format;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_format: LogFormat::Pretty,
        }
    }
}
