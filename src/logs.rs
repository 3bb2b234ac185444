//! Retrieves recent output from a running compose service.

use std::process::Command;

use crate::cli::LOG_TAIL_CHARS;
use crate::errors::BuddyError;

/// A source of recent service output. Workflows depend on this trait so the
/// external orchestration tool can be swapped for a fake in tests.
pub trait LogSource {
    /// Fetch the most recent output for the named service, bounded to a
    /// trailing window of characters.
    fn fetch_recent_output(&self, service: &str) -> Result<String, BuddyError>;
}

/// Reads logs by invoking `<program> compose logs <service>` and keeping the
/// trailing [`LOG_TAIL_CHARS`] characters of the combined output.
pub struct ComposeLogSource {
    program: String,
    cap: usize,
}

impl ComposeLogSource {
    pub fn new<S: Into<String>>(program: S, cap: usize) -> Self {
        ComposeLogSource {
            program: program.into(),
            cap,
        }
    }
}

impl Default for ComposeLogSource {
    fn default() -> Self {
        ComposeLogSource::new("docker", LOG_TAIL_CHARS)
    }
}

impl LogSource for ComposeLogSource {
    fn fetch_recent_output(&self, service: &str) -> Result<String, BuddyError> {
        let output = Command::new(&self.program)
            .args(["compose", "logs", service])
            .output()
            .map_err(|e| BuddyError::SourceUnavailable {
                service: service.to_string(),
                detail: format!("could not run `{} compose logs`: {}", self.program, e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = if stderr.trim().is_empty() {
                output.status.to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(BuddyError::SourceUnavailable {
                service: service.to_string(),
                detail,
            });
        }

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        if combined.trim().is_empty() {
            return Err(BuddyError::SourceUnavailable {
                service: service.to_string(),
                detail: "command produced no output".to_string(),
            });
        }
        Ok(tail_chars(&combined, self.cap).to_string())
    }
}

/// Returns the trailing `cap` characters of `text`, or all of `text` if it is
/// shorter. Truncation counts characters so multi-byte text is never split.
pub fn tail_chars(text: &str, cap: usize) -> &str {
    let count = text.chars().count();
    if count <= cap {
        return text;
    }
    let start = text
        .char_indices()
        .nth(count - cap)
        .map(|(i, _)| i)
        .unwrap_or(0);
    &text[start..]
}
