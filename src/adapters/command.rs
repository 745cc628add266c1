use crate::core::MessageSource;
use crate::utils::error::{ProbeError, Result};
use async_trait::async_trait;
use tokio::process::Command;

/// Placeholder in command arguments that is replaced by the window in hours.
pub const HOURS_PLACEHOLDER: &str = "{hours}";

/// Runs an external program and treats its stdout as the recent-messages text.
#[derive(Debug, Clone)]
pub struct CommandSource {
    program: String,
    args: Vec<String>,
}

impl CommandSource {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Splits `argv` into program and arguments. `None` when `argv` is empty.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.to_vec()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn resolved_args(&self, hours: f64) -> Vec<String> {
        let hours = hours.to_string();
        self.args
            .iter()
            .map(|arg| arg.replace(HOURS_PLACEHOLDER, &hours))
            .collect()
    }
}

#[async_trait]
impl MessageSource for CommandSource {
    async fn get_recent_messages(&self, hours: f64) -> Result<String> {
        let args = self.resolved_args(hours);
        tracing::debug!("Running {} {:?}", self.program, args);

        let output = Command::new(&self.program).args(&args).output().await?;

        if !output.status.success() {
            return Err(ProbeError::CommandFailed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.trim_end().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_args_substitutes_hours() {
        let source = CommandSource::new(
            "python3",
            vec!["fetch.py".to_string(), "--hours={hours}".to_string()],
        );
        assert_eq!(
            source.resolved_args(2.5),
            vec!["fetch.py".to_string(), "--hours=2.5".to_string()]
        );
        assert_eq!(source.resolved_args(1.0)[1], "--hours=1");
    }

    #[test]
    fn test_from_argv() {
        assert!(CommandSource::from_argv(&[]).is_none());

        let source = CommandSource::from_argv(&["echo".to_string(), "hi".to_string()]).unwrap();
        assert_eq!(source.program(), "echo");
        assert_eq!(source.resolved_args(1.0), vec!["hi".to_string()]);
    }
}
