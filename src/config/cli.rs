use crate::adapters::{ChatDbSource, CommandSource};
use crate::config::CliConfig;
use crate::core::MessageSource;
use crate::utils::error::{ProbeError, Result};
use std::path::PathBuf;

/// `~/Library/Messages/chat.db` for the current user.
pub fn default_db_path() -> Result<PathBuf> {
    let home = std::env::var_os("HOME").ok_or_else(|| ProbeError::MissingConfig {
        field: "HOME".to_string(),
    })?;
    Ok(PathBuf::from(home).join("Library").join("Messages").join("chat.db"))
}

/// Picks the message source the config asks for: an external command if one
/// was given, otherwise the Messages database.
pub fn build_source(config: &CliConfig) -> Result<Box<dyn MessageSource>> {
    if let Some(source) = CommandSource::from_argv(&config.command) {
        tracing::debug!("Using command source: {}", source.program());
        return Ok(Box::new(source));
    }

    let path = match &config.db_path {
        Some(path) => PathBuf::from(path),
        None => default_db_path()?,
    };
    tracing::debug!("Using database source: {}", path.display());
    Ok(Box::new(ChatDbSource::new(path).with_limit(config.limit)))
}
