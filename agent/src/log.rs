use std::{fs, io::ErrorKind, path::Path, sync::LazyLock};

use regex::Regex;

use crate::error::Result;

/// `HH:MM DD.MM.20YY` followed by the entry text.
static ENTRY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[0-2][0-9]:[0-5][0-9]\s[0-3][0-9]\.[0-1][0-9]\.2[0-1][0-9]{2}\s[\[\]a-zA-Z0-9_ ]*",
    )
    .expect("log entry pattern is valid")
});

/// Returns the last timestamped entry of `text`, or an empty string.
///
/// The entry text ends at the first character other than letters, digits, `_`,
/// spaces and square brackets.
pub fn last_entry(text: &str) -> String {
    ENTRY_PATTERN
        .find_iter(text)
        .last()
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Reads the log file and extracts its last entry.
///
/// A missing log file yields an empty entry so the heartbeat is still sent.
pub fn read_last_entry(path: &Path) -> Result<String> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!("Log file {} not found", path.display());
            return Ok(String::new());
        }
        Err(e) => return Err(e.into()),
    };

    Ok(last_entry(&String::from_utf8_lossy(&bytes)))
}
