use std::path::PathBuf;
use shiritori::ShiritoriConfig;

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub engine: ShiritoriConfig,
    pub warn_below_seconds: u32,
    pub history_file: Option<PathBuf>,
}

impl CliConfig {
    pub fn repl(&self) -> ReplConfig {
        ReplConfig {
            history_file: self.history_file.clone(),
            ..ReplConfig::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReplConfig {
    pub prompt: String,
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "shiritori> ".to_string(),
            history_file: None,
        }
    }
}
