//! Append-only request log
//!
//! One line per parsed request:
//!
//! ```text
//! [2024-05-01 12:00:00] Method: GET, Path: /home, User-Agent: curl/8.0
//! ```
//!
//! Write failures are reported through `tracing` and never reach the caller.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

use crate::http::request::Request;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Default)]
pub struct RequestLog {
    path: Option<PathBuf>,
}

impl RequestLog {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn disabled() -> Self {
        Self { path: None }
    }

    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }

    /// Appends an entry for `request`, stamped with the local time.
    pub async fn record(&self, request: &Request) {
        let Some(path) = &self.path else {
            return;
        };

        let line = format_entry(request, Local::now());
        if let Err(e) = append_line(path, &line).await {
            tracing::warn!(path = %path.display(), error = %e, "Failed to write request log");
        }
    }
}

pub fn format_entry(request: &Request, at: DateTime<Local>) -> String {
    format!(
        "[{}] Method: {}, Path: {}, User-Agent: {}\n",
        at.format(TIMESTAMP_FORMAT),
        request.method,
        request.path,
        request.user_agent()
    )
}

async fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(line.as_bytes()).await?;
    file.flush().await
}
