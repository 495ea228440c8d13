//! Append-only value file: one number per line, the last non-blank line is current.

use crate::error::AppError;
use serde_json::Number;
use std::io::{ErrorKind, SeekFrom};
use std::path::{Path, PathBuf};
use tokio::fs::{self, File, OpenOptions};
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};

/// Bytes read per step when scanning backwards for the last line.
const TAIL_CHUNK: usize = 4096;

#[derive(Debug, Clone)]
pub struct ValueStore {
    path: PathBuf,
}

impl ValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the file; `.` for a bare file name.
    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }

    /// True when the directory that holds (or will hold) the file exists.
    pub async fn is_available(&self) -> bool {
        fs::metadata(self.dir())
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }

    /// Append `value` as a new line, creating the file and its parent directories if needed.
    pub async fn append(&self, value: &Number) -> Result<(), AppError> {
        fs::create_dir_all(self.dir()).await?;
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .await?;

        let mut line = String::new();
        if !ends_with_newline(&mut file).await? {
            line.push('\n');
        }
        line.push_str(&value.to_string());
        line.push('\n');

        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        tracing::debug!(path = %self.path.display(), value = %value, "appended value");
        Ok(())
    }

    /// Last non-blank line, trimmed. `None` when the file is missing or holds only whitespace.
    pub async fn last(&self) -> Result<Option<String>, AppError> {
        let mut file = match File::open(&self.path).await {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let mut end = file.metadata().await?.len();
        // Candidate last line: bytes from `end` up to its final non-whitespace byte.
        let mut tail: Vec<u8> = Vec::new();

        while end > 0 {
            let start = end.saturating_sub(TAIL_CHUNK as u64);
            let mut buf = vec![0u8; (end - start) as usize];
            file.seek(SeekFrom::Start(start)).await?;
            file.read_exact(&mut buf).await?;
            buf.extend_from_slice(&tail);
            tail = buf;
            end = start;

            if let Some(line) = last_line(&tail, end == 0) {
                return Ok(Some(line));
            }
            // No newline precedes the content, so only the partial line is worth keeping.
            match tail.iter().rposition(|b| !b.is_ascii_whitespace()) {
                Some(i) => tail.truncate(i + 1),
                None => tail.clear(),
            }
        }
        Ok(None)
    }
}

/// Empty files count as ending in a newline.
async fn ends_with_newline(file: &mut File) -> Result<bool, AppError> {
    let len = file.metadata().await?.len();
    if len == 0 {
        return Ok(true);
    }
    let mut last = [0u8; 1];
    file.seek(SeekFrom::Start(len - 1)).await?;
    file.read_exact(&mut last).await?;
    Ok(last[0] == b'\n')
}

/// Last non-blank line in `buf`. Without `at_file_start`, a line that is not preceded
/// by a newline inside `buf` may be truncated, so the caller has to read further back.
fn last_line(buf: &[u8], at_file_start: bool) -> Option<String> {
    let end = buf.iter().rposition(|b| !b.is_ascii_whitespace())? + 1;
    let start = match buf[..end].iter().rposition(|b| *b == b'\n') {
        Some(i) => i + 1,
        None if at_file_start => 0,
        None => return None,
    };
    Some(String::from_utf8_lossy(&buf[start..end]).trim().to_string())
}
