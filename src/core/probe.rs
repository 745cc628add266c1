use crate::core::{ExitStatus, MessageSource, ProbeOutcome};
use crate::utils::error::{ProbeError, Result};
use futures::FutureExt;
use std::any::Any;
use std::io::Write;
use std::panic::AssertUnwindSafe;

/// Substring that marks a returned text as a failure.
pub const ERROR_MARKER: &str = "Error";

/// Maximum number of characters echoed back on success.
pub const EXCERPT_CHARS: usize = 100;

pub struct Probe<S: MessageSource> {
    source: S,
    window_hours: f64,
}

impl<S: MessageSource> Probe<S> {
    pub fn new(source: S, window_hours: f64) -> Self {
        Self {
            source,
            window_hours,
        }
    }

    pub fn window_hours(&self) -> f64 {
        self.window_hours
    }

    /// Makes the single call and classifies it, without writing a report.
    pub async fn check(&self) -> ProbeOutcome {
        tracing::debug!("Requesting messages for the last {} hour(s)", self.window_hours);
        let result = AssertUnwindSafe(self.source.get_recent_messages(self.window_hours))
            .catch_unwind()
            .await
            .unwrap_or_else(|payload| {
                Err(ProbeError::SourcePanicked {
                    message: panic_message(&*payload),
                })
            });

        let outcome = classify(result);
        match &outcome {
            ProbeOutcome::Success { excerpt } => {
                tracing::info!("✅ Message source responded ({} chars in excerpt)", excerpt.chars().count());
            }
            ProbeOutcome::ErrorFlagged { text } => {
                tracing::warn!("❌ Message source returned an error-flagged result: {}", text);
            }
            ProbeOutcome::Fault { description } => {
                tracing::error!("❌ Message source call failed: {}", description);
            }
        }
        outcome
    }

    /// Runs the probe and writes the human-readable report to `out`.
    ///
    /// Only a failure to write the report is returned as `Err`.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<ExitStatus> {
        writeln!(out, "Attempting to fetch recent messages...")?;
        out.flush()?;

        let outcome = self.check().await;
        for line in outcome.report_lines() {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;

        Ok(outcome.exit_status())
    }
}

/// Probes `source` once over `window_hours` and reports to `out`.
pub async fn run_probe<S, W>(source: S, window_hours: f64, out: &mut W) -> Result<ExitStatus>
where
    S: MessageSource,
    W: Write,
{
    Probe::new(source, window_hours).run(out).await
}

pub fn classify(result: Result<String>) -> ProbeOutcome {
    match result {
        Err(e) => ProbeOutcome::Fault {
            description: e.to_string(),
        },
        Ok(text) if text.contains(ERROR_MARKER) => ProbeOutcome::ErrorFlagged { text },
        Ok(text) => ProbeOutcome::Success {
            excerpt: excerpt(&text, EXCERPT_CHARS).to_string(),
        },
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Returns the first `max_chars` characters of `text`, split on a char boundary.
pub fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
