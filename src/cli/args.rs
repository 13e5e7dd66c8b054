//! CLI argument parsing and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::client::{ClientConfig, DEFAULT_BASE_URL};
use crate::course::extract_course_id;
use crate::error::Result;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Terminal score panel for a course on the course-management site
#[derive(Debug, Parser)]
#[command(name = "score-tui", version, about)]
pub struct Args {
    /// Course page URL or path, e.g. https://courses.zju.edu.cn/course/12345/content
    #[arg(env = "SCORE_TUI_LOCATION")]
    pub location: String,

    /// Site root the feed paths are appended to
    #[arg(long, env = "SCORE_TUI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Cookie header of a logged-in browser session
    #[arg(long, env = "SCORE_TUI_COOKIE", hide_env_values = true)]
    pub cookie: Option<String>,

    /// Seconds between scheduled refreshes
    #[arg(long, env = "SCORE_TUI_INTERVAL_SECS", default_value_t = 300,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_secs: u64,

    /// Per-request timeout in seconds
    #[arg(long, env = "SCORE_TUI_TIMEOUT_SECS", default_value_t = 10,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// Where to write logs (the terminal belongs to the panel)
    #[arg(long, env = "SCORE_TUI_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

/// Validated runtime configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub course_id: u64,
    pub client: ClientConfig,
    pub refresh_interval: Duration,
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Resolve the course id and assemble the runtime configuration
    pub fn into_config(self) -> Result<CliConfig> {
        let course_id = extract_course_id(&self.location)?;

        Ok(CliConfig {
            course_id,
            client: ClientConfig {
                base_url: self.base_url,
                course_id,
                cookie: self.cookie.filter(|c| !c.trim().is_empty()),
                timeout: Duration::from_secs(self.timeout_secs),
            },
            refresh_interval: Duration::from_secs(self.interval_secs),
            log_file: self.log_file,
        })
    }
}

/// Parse CLI arguments
pub fn parse_args() -> Args {
    Args::parse()
}
