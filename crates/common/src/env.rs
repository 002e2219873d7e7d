//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

/// Filesystem path of a file-backed SQLite URL; `None` for in-memory or non-SQLite URLs.
pub fn sqlite_file_path(url: &str) -> Option<PathBuf> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path.starts_with(":memory:") {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Create the parent directory of a file-backed SQLite database if it is missing.
pub async fn ensure_sqlite_dir(url: &str) -> anyhow::Result<()> {
    let Some(path) = sqlite_file_path(url) else {
        return Ok(());
    };
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if tokio::fs::metadata(parent).await.is_err() {
        info!(dir = %parent.display(), "creating database directory");
    }
    tokio::fs::create_dir_all(parent)
        .await
        .with_context(|| format!("cannot create {}", parent.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_urls_resolve_to_paths() {
        assert_eq!(sqlite_file_path("sqlite://data/parcels.db?mode=rwc"), Some(PathBuf::from("data/parcels.db")));
        assert_eq!(sqlite_file_path("sqlite:tracker.db"), Some(PathBuf::from("tracker.db")));
    }

    #[test]
    fn memory_and_remote_urls_have_no_path() {
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgres://localhost/parcels"), None);
    }

    #[tokio::test]
    async fn creates_missing_parent_dir() -> anyhow::Result<()> {
        let root = std::env::temp_dir().join(format!("parcels-env-{}", std::process::id()));
        let db = root.join("nested/parcels.db");
        ensure_sqlite_dir(&format!("sqlite://{}?mode=rwc", db.display())).await?;
        assert!(root.join("nested").is_dir());
        tokio::fs::remove_dir_all(&root).await?;
        Ok(())
    }

    #[tokio::test]
    async fn parent_blocked_by_file_names_the_dir() -> anyhow::Result<()> {
        let file = std::env::temp_dir().join(format!("parcels-env-file-{}", std::process::id()));
        tokio::fs::write(&file, b"x").await?;
        let err = ensure_sqlite_dir(&format!("sqlite://{}/sub/parcels.db", file.display()))
            .await
            .unwrap_err();
        tokio::fs::remove_file(&file).await?;
        assert!(err.to_string().starts_with("cannot create "), "{err:#}");
        assert!(err.to_string().contains("sub"));
        Ok(())
    }
}
