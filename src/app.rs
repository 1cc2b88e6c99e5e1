use crate::client::ServiceClient;
use crate::export::{self, ExportFormat};
use crate::storage::LocalStore;
use crate::types::{number_reports, Report};
use crate::view::ReportView;
use std::path::Path;

/// Owns all mutable client state (last report text, reports cache) and runs
/// the user-facing operations. Rendering goes through the [`ReportView`]
/// seam; network calls go through the [`ServiceClient`].
pub struct ReportApp<V: ReportView> {
    client: ServiceClient,
    store: Option<LocalStore>,
    view: V,
    last_report: Option<String>,
    reports_cache: Vec<Report>,
}

impl<V: ReportView> ReportApp<V> {
    pub fn new(client: ServiceClient, store: Option<LocalStore>, view: V) -> Self {
        let reports_cache = store
            .as_ref()
            .map(LocalStore::load_reports)
            .unwrap_or_default();
        Self {
            client,
            store,
            view,
            last_report: None,
            reports_cache,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn last_report(&self) -> Option<&str> {
        self.last_report.as_deref()
    }

    pub fn cached_reports(&self) -> &[Report] {
        &self.reports_cache
    }

    /// URL saved by the previous analysis, for pre-fill.
    pub fn last_url(&self) -> Option<String> {
        self.store.as_ref().and_then(LocalStore::load_last_url)
    }

    /// Submits a repository for analysis. Failures become the displayed
    /// text and the remembered last report, same as successes.
    pub fn analyze(&mut self, url: &str) {
        let url = url.trim();
        if url.is_empty() {
            self.view.alert("Please enter a repository URL");
            return;
        }
        if let Some(store) = &self.store {
            store.save_last_url(url);
        }

        self.view.set_loading(true);
        let text = match self.client.analyze(url) {
            Ok(result) => result,
            Err(error) => error.to_string(),
        };
        self.view.set_loading(false);

        self.last_report = Some(text.clone());
        self.view.show_result(&text);
    }

    /// Renders the cached list first for instant feedback, then refreshes
    /// from the service. A failed refresh falls back to the cache with an
    /// offline notice; with no cache the error text is shown instead.
    pub fn load_reports(&mut self) {
        if !self.reports_cache.is_empty() {
            self.view
                .show_reports(&number_reports(&self.reports_cache), false);
        }

        match self.client.list_reports() {
            Ok(reports) => {
                self.reports_cache = reports;
                self.persist_cache();
                self.view
                    .show_reports(&number_reports(&self.reports_cache), false);
            }
            Err(error) => {
                if self.reports_cache.is_empty() {
                    self.view.show_result(&error.to_string());
                } else {
                    self.view
                        .show_reports(&number_reports(&self.reports_cache), true);
                }
            }
        }
    }

    /// Deletes on the server, then drops the entry from the local cache and
    /// re-renders. No confirmation, no undo.
    pub fn delete_report(&mut self, id: i64) {
        match self.client.delete_report(id) {
            Ok(()) => {
                self.reports_cache.retain(|report| report.id != id);
                self.persist_cache();
                self.view
                    .show_reports(&number_reports(&self.reports_cache), false);
            }
            Err(error) => self.view.alert(&error.to_string()),
        }
    }

    /// Fetches a single stored report and makes it the current report text.
    pub fn show_report(&mut self, id: i64) {
        match self.client.get_report(id) {
            Ok(report) => {
                self.last_report = Some(report.result.clone());
                self.view.show_result(&report.result);
            }
            Err(error) => self.view.show_result(&error.to_string()),
        }
    }

    /// Saves the last report text as `report.<ext>` under `dir`.
    pub fn export_report(&mut self, format: ExportFormat, dir: &Path) {
        let Some(content) = self.last_report.as_deref() else {
            self.view.alert("No report to download yet");
            return;
        };
        match export::export_to(dir, format, content) {
            Ok(path) => self.view.show_result(&format!("Saved {}", path.display())),
            Err(error) => self.view.alert(&format!("Export failed: {error}")),
        }
    }

    pub fn health(&mut self) {
        match self.client.health() {
            Ok(status) => self.view.show_result(&status),
            Err(error) => self.view.show_result(&error.to_string()),
        }
    }

    fn persist_cache(&self) {
        if let Some(store) = &self.store {
            store.save_reports(&self.reports_cache);
        }
    }
}
