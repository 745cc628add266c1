#![cfg(unix)]

use anyhow::Result;
use imessage_probe::{run_probe, CommandSource, ExitStatus, MessageSource, ProbeError};

fn sh(script: &str) -> CommandSource {
    CommandSource::new("sh", vec!["-c".to_string(), script.to_string()])
}

#[tokio::test]
async fn test_stdout_becomes_result_text() -> Result<()> {
    let source = CommandSource::new("echo", vec!["window={hours}".to_string()]);
    let text = source.get_recent_messages(3.0).await?;
    assert_eq!(text, "window=3");
    Ok(())
}

#[tokio::test]
async fn test_error_text_on_stdout_is_flagged() -> Result<()> {
    let source = sh("echo 'Error: unable to open chat.db'");
    let mut out = Vec::new();
    let status = run_probe(source, 1.0, &mut out).await?;

    assert_eq!(status, ExitStatus::Failure);
    assert!(String::from_utf8(out)?.ends_with("FAILED: Error: unable to open chat.db\n"));
    Ok(())
}

#[tokio::test]
async fn test_non_zero_exit_is_a_fault() -> Result<()> {
    let source = sh("echo 'permission denied' >&2; exit 3");
    let err = source.get_recent_messages(1.0).await.unwrap_err();

    match err {
        ProbeError::CommandFailed { program, stderr, .. } => {
            assert_eq!(program, "sh");
            assert_eq!(stderr, "permission denied");
        }
        other => panic!("unexpected error: {other}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_missing_program_is_a_fault() -> Result<()> {
    let source = CommandSource::new("imessage-probe-no-such-program", vec![]);
    let mut out = Vec::new();
    let status = run_probe(source, 1.0, &mut out).await?;

    assert_eq!(status.code(), 1);
    assert!(String::from_utf8(out)?.contains("FAILED: Exception occurred: IO error:"));
    Ok(())
}
