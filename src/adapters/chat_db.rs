//! Reads recent messages from the macOS Messages database (`chat.db`).
//!
//! The database is opened read-only and never created. Timestamps in the
//! `message.date` column are nanoseconds since the Apple epoch
//! (2001-01-01T00:00:00Z).

use crate::core::{Message, MessageSource, Sender};
use crate::utils::error::{ProbeError, Result};
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{FromRow, SqlitePool};
use std::path::{Path, PathBuf};

/// Seconds between the Unix epoch and the Apple epoch.
pub const APPLE_EPOCH_OFFSET_SECS: i64 = 978_307_200;

const NANOS_PER_SEC: i64 = 1_000_000_000;

pub const DEFAULT_LIMIT: usize = 100;

const RECENT_MESSAGES_QUERY: &str = r#"
    SELECT m.ROWID AS rowid, m.date AS date, m.text AS text, m.is_from_me AS is_from_me, h.id AS handle
    FROM message m
    LEFT JOIN handle h ON m.handle_id = h.ROWID
    WHERE m.date > ?1 AND m.text IS NOT NULL AND m.text != ''
    ORDER BY m.date DESC
    LIMIT ?2
"#;

#[derive(Debug, FromRow)]
struct DbMessage {
    rowid: i64,
    date: i64,
    text: Option<String>,
    is_from_me: i64,
    handle: Option<String>,
}

impl From<DbMessage> for Message {
    fn from(row: DbMessage) -> Self {
        let sender = if row.is_from_me != 0 {
            Sender::Me
        } else {
            match row.handle {
                Some(handle) if !handle.is_empty() => Sender::Contact(handle),
                _ => Sender::Unknown,
            }
        };

        Message {
            rowid: row.rowid,
            sent_at: from_apple_nanos(row.date),
            sender,
            text: row.text.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatDbSource {
    path: PathBuf,
    limit: usize,
}

impl ChatDbSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn connect(&self) -> Result<SqlitePool> {
        // Only a definite "absent" is reported as not found; stat errors such as
        // EACCES or ENOTDIR surface as IO faults.
        if !self.path.try_exists()? {
            return Err(ProbeError::DatabaseNotFound {
                path: self.path.display().to_string(),
            });
        }

        let options = SqliteConnectOptions::new()
            .filename(&self.path)
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        Ok(pool)
    }

    /// Messages newer than `now - hours`, newest first.
    pub async fn fetch_recent(&self, hours: f64) -> Result<Vec<Message>> {
        let cutoff = to_apple_nanos(window_start(Utc::now(), hours));
        tracing::debug!(
            "Querying {} for messages after apple-time {}",
            self.path.display(),
            cutoff
        );

        let pool = self.connect().await?;
        let limit = i64::try_from(self.limit).unwrap_or(i64::MAX);
        let rows = sqlx::query_as::<_, DbMessage>(RECENT_MESSAGES_QUERY)
            .bind(cutoff)
            .bind(limit)
            .fetch_all(&pool)
            .await;
        pool.close().await;

        let messages: Vec<Message> = rows?.into_iter().map(Message::from).collect();
        tracing::debug!("Read {} message(s)", messages.len());
        Ok(messages)
    }
}

#[async_trait]
impl MessageSource for ChatDbSource {
    async fn get_recent_messages(&self, hours: f64) -> Result<String> {
        let messages = self.fetch_recent(hours).await?;
        Ok(render_messages(&messages, hours))
    }
}

pub fn render_messages(messages: &[Message], hours: f64) -> String {
    if messages.is_empty() {
        return format!("No messages found in the last {} hour(s).", hours);
    }

    messages
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Start of a window of `hours` ending at `now`. Oversized windows clamp to the
/// earliest time; negative or NaN windows collapse to `now`.
pub fn window_start(now: DateTime<Utc>, hours: f64) -> DateTime<Utc> {
    let millis = (hours * 3_600_000.0).clamp(0.0, i64::MAX as f64) as i64;
    now.checked_sub_signed(TimeDelta::milliseconds(millis))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

pub fn to_apple_nanos(t: DateTime<Utc>) -> i64 {
    (t.timestamp() - APPLE_EPOCH_OFFSET_SECS)
        .saturating_mul(NANOS_PER_SEC)
        .saturating_add(i64::from(t.timestamp_subsec_nanos()))
}

pub fn from_apple_nanos(nanos: i64) -> DateTime<Utc> {
    let secs = APPLE_EPOCH_OFFSET_SECS + nanos.div_euclid(NANOS_PER_SEC);
    let subsec = nanos.rem_euclid(NANOS_PER_SEC) as u32;
    DateTime::from_timestamp(secs, subsec).unwrap_or_default()
}
