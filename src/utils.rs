//! Small helpers for logging and file system checks.

use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Truncate a string for logging purposes.
///
/// Keeps at most `max` bytes, cutting back to the nearest character
/// boundary, and appends an ellipsis with the number of bytes dropped.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then probes it with a throwaway write.
/// Used at startup so a read-only archive path fails the process instead of
/// the first scheduled run.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;

    let probe = format!("{}/.probe_write", path.trim_end_matches('/'));
    fs::write(&probe, b"").await?;
    fs::remove_file(&probe).await?;
    info!("Directory is writable");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Hello, world!", 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_respects_char_boundaries() {
        // 'é' is two bytes; cutting at 1 would split it.
        let result = truncate_for_log("née", 3);
        assert!(result.starts_with("né"));
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_creates_missing_dir() {
        let dir = std::env::temp_dir().join("hn_digest_writable_test");
        let dir = dir.to_str().unwrap().to_string();
        let _ = fs::remove_dir_all(&dir).await;

        ensure_writable_dir(&dir).await.unwrap();
        assert!(std::path::Path::new(&dir).is_dir());

        let _ = fs::remove_dir_all(&dir).await;
    }
}
