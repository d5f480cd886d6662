//! Widget Configuration
//!
//! Compile-time defaults shared by state, storage and logging.

use log::LevelFilter;

/// localStorage key holding the serialized list
pub const DEFAULT_STORAGE_KEY: &str = "todoList";

/// Maximum title length, in characters
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetConfig {
    pub storage_key: &'static str,
    pub max_input_length: usize,
    pub log_level: LevelFilter,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY,
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}
