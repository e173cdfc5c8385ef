//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the router is built.

use std::path::Path;

use tracing::warn;

/// Returns the frontend directory if it exists; warns and returns `None` otherwise.
pub async fn resolve_frontend_dir(frontend_dir: Option<&str>) -> Option<String> {
    let dir = frontend_dir?.trim();
    if dir.is_empty() {
        return None;
    }
    match tokio::fs::metadata(dir).await {
        Ok(meta) if meta.is_dir() => Some(dir.to_string()),
        _ => {
            warn!(%dir, "frontend assets directory not found; static assets disabled");
            None
        }
    }
}

/// Ensure the parent directory of a SQLite database file exists.
/// Non-file URLs (postgres, in-memory sqlite) are left alone.
pub async fn ensure_sqlite_parent(database_url: &str) -> anyhow::Result<()> {
    let Some(rest) = database_url.strip_prefix("sqlite:") else { return Ok(()) };
    let path = rest.trim_start_matches("//").split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return Ok(());
    }
    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    }
    Ok(())
}
