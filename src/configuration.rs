use std::path::PathBuf;

use crate::render::OutputFormat;

pub const DEFAULT_ROOM_CAPACITY: u32 = 400;
pub const DEFAULT_ACTIVITY_LIMIT: usize = 4;

#[derive(Clone, Debug)]
pub struct Configuration {
    pub log_file: Option<String>,
    pub script: Option<PathBuf>,
    pub format: OutputFormat,
    pub room_capacity: u32,
    pub activity_limit: usize,
    /// Start every page with its mock records.
    pub seed: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            log_file: None,
            script: None,
            format: OutputFormat::Table,
            room_capacity: DEFAULT_ROOM_CAPACITY,
            activity_limit: DEFAULT_ACTIVITY_LIMIT,
            seed: true,
        }
    }
}
