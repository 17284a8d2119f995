//! Global constants used across the application.

/// The default configuration file name looked up at startup.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "zoo.toml";

pub const BEARER_TOKEN: &str = "Bearer";

/// Number of quiz questions presented per attempt.
pub const QUIZ_PAGE_SIZE: u64 = 5;

pub const DATA_DIR: &str = "./data";
