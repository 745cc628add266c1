use anyhow::Result;
use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_imessage-probe"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

#[test]
fn test_invalid_window_reports_failed_on_stdout() -> Result<()> {
    let output = run_cli(&["--hours", "0"])?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout,
        "FAILED: Invalid value for hours: '0' (Window must be a positive number of hours)\n"
    );
    Ok(())
}

#[test]
fn test_missing_database_reports_failed_on_stdout() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let db_path = temp_dir.path().join("chat.db");
    let output = run_cli(&["--db-path", db_path.to_str().unwrap()])?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.starts_with("Attempting to fetch recent messages...\n"));
    assert!(stdout.contains("FAILED: Exception occurred: Messages database not found at"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_command_source_success_exits_zero() -> Result<()> {
    let output = run_cli(&["--hours", "3", "--", "echo", "Fetched messages for {hours}h"])?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.ends_with("Sample output: Fetched messages for 3h...\n"));
    Ok(())
}
