use crate::types::Report;
use dirs::data_dir;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Best-effort local persistence for the reports cache and the last-used
/// repository URL. Every operation degrades to a no-op (with a warning) when
/// the filesystem is unavailable; callers never see an error.
///
/// Files are scoped per service base URL so pointing the client at a
/// different server does not mix caches.
pub struct LocalStore {
    dir: PathBuf,
    digest: String,
}

impl LocalStore {
    /// Opens the store under the platform data directory. `None` when the
    /// platform has no data directory; the client then runs without
    /// persistence.
    pub fn open(base_url: &str) -> Option<Self> {
        let dir = data_dir()?.join("repolens");
        Some(Self::at(dir, base_url))
    }

    pub fn at(dir: PathBuf, base_url: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(base_url.as_bytes());
        let digest = hex::encode(hasher.finalize());
        Self { dir, digest }
    }

    fn reports_path(&self) -> PathBuf {
        self.dir.join(format!("reports-cache-{}.json", self.digest))
    }

    fn last_url_path(&self) -> PathBuf {
        self.dir.join(format!("last-repo-url-{}.txt", self.digest))
    }

    pub fn load_reports(&self) -> Vec<Report> {
        let path = self.reports_path();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            // A missing cache file is the normal first-run state.
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&contents) {
            Ok(reports) => reports,
            Err(error) => {
                warn!(path = %path.display(), %error, "discarding unreadable reports cache");
                Vec::new()
            }
        }
    }

    pub fn save_reports(&self, reports: &[Report]) {
        let data = match serde_json::to_string_pretty(reports) {
            Ok(data) => data,
            Err(error) => {
                warn!(%error, "failed to serialize reports cache");
                return;
            }
        };
        if let Err(error) =
            fs::create_dir_all(&self.dir).and_then(|_| fs::write(self.reports_path(), data))
        {
            warn!(%error, "failed to persist reports cache");
            return;
        }
        debug!(count = reports.len(), "persisted reports cache");
    }

    pub fn load_last_url(&self) -> Option<String> {
        let url = fs::read_to_string(self.last_url_path()).ok()?;
        let url = url.trim().to_string();
        if url.is_empty() {
            None
        } else {
            Some(url)
        }
    }

    pub fn save_last_url(&self, url: &str) {
        if let Err(error) =
            fs::create_dir_all(&self.dir).and_then(|_| fs::write(self.last_url_path(), url))
        {
            warn!(%error, "failed to persist last repository URL");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn report(id: i64) -> Report {
        Report {
            id,
            repo_url: format!("https://example.com/repo-{id}"),
            status: "completed".to_string(),
            result: "fine".to_string(),
        }
    }

    #[test]
    fn reports_round_trip() {
        let dir = tempdir().unwrap();
        let store = LocalStore::at(dir.path().to_path_buf(), "http://localhost:8000");

        let reports = vec![report(1), report(2)];
        store.save_reports(&reports);

        assert_eq!(store.load_reports(), reports);
    }

    #[test]
    fn missing_cache_loads_empty() {
        let dir = tempdir().unwrap();
        let store = LocalStore::at(dir.path().to_path_buf(), "http://localhost:8000");
        assert!(store.load_reports().is_empty());
    }

    #[test]
    fn corrupt_cache_is_discarded() {
        let dir = tempdir().unwrap();
        let store = LocalStore::at(dir.path().to_path_buf(), "http://localhost:8000");
        store.save_reports(&[report(1)]);

        fs::write(store.reports_path(), "not json").unwrap();
        assert!(store.load_reports().is_empty());
    }

    #[test]
    fn caches_are_scoped_per_service() {
        let dir = tempdir().unwrap();
        let local = LocalStore::at(dir.path().to_path_buf(), "http://localhost:8000");
        let remote = LocalStore::at(dir.path().to_path_buf(), "https://analysis.example.com");

        local.save_reports(&[report(1)]);

        assert!(remote.load_reports().is_empty());
        assert_eq!(local.load_reports().len(), 1);
    }

    #[test]
    fn last_url_round_trip() {
        let dir = tempdir().unwrap();
        let store = LocalStore::at(dir.path().to_path_buf(), "http://localhost:8000");

        assert_eq!(store.load_last_url(), None);
        store.save_last_url("https://example.com/repo");
        assert_eq!(
            store.load_last_url().as_deref(),
            Some("https://example.com/repo")
        );
    }
}
