pub mod cli;

use crate::adapters::chat_db::DEFAULT_LIMIT;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_hours, validate_positive_number,
    Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "imessage-probe")]
#[command(about = "Health check for recent-message retrieval from the Messages database")]
pub struct CliConfig {
    #[arg(long, default_value_t = 1.0, help = "How many hours back to look for messages")]
    pub hours: f64,

    #[arg(long, help = "Path to chat.db (defaults to ~/Library/Messages/chat.db)")]
    pub db_path: Option<String>,

    #[arg(long, default_value_t = DEFAULT_LIMIT, help = "Maximum number of messages to read")]
    pub limit: usize,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines on stderr")]
    pub log_json: bool,

    /// External command to probe instead of the database; `{hours}` is substituted.
    #[arg(last = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            hours: 1.0,
            db_path: None,
            limit: DEFAULT_LIMIT,
            verbose: false,
            log_json: false,
            command: Vec::new(),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_hours("hours", self.hours)?;
        validate_positive_number("limit", self.limit, 1)?;

        if let Some(path) = &self.db_path {
            validate_path("db_path", path)?;
        }

        if let Some(program) = self.command.first() {
            validate_non_empty_string("command", program)?;
        }

        Ok(())
    }
}
