// Export service - Use case for dumping every dashboard to disk
use crate::application::dashboard_source::DashboardSource;
use crate::domain::error::ExportError;
use crate::infrastructure::file_writer::DashboardWriter;
use std::path::PathBuf;
use std::sync::Arc;

/// Files written by a successful run, in list order.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub written: Vec<PathBuf>,
}

#[derive(Clone)]
pub struct ExportService {
    source: Arc<dyn DashboardSource>,
    writer: DashboardWriter,
}

impl ExportService {
    pub fn new(source: Arc<dyn DashboardSource>, writer: DashboardWriter) -> Self {
        Self { source, writer }
    }

    /// Search, then fetch and write each dashboard one at a time.
    ///
    /// The first failure aborts the run. Files written before it stay on disk.
    pub async fn run(&self) -> Result<ExportReport, ExportError> {
        let dashboards = self
            .source
            .search_dashboards()
            .await
            .map_err(ExportError::Search)?;
        tracing::debug!("Search returned {} dashboards", dashboards.len());

        let mut report = ExportReport::default();
        for dashboard in &dashboards {
            let base_name = dashboard
                .base_name()
                .ok_or_else(|| ExportError::InvalidReference(dashboard.uri.clone()))?;
            println!("Exporting {}", base_name);

            let document = self
                .source
                .fetch_dashboard(dashboard)
                .await
                .map_err(|source| ExportError::Fetch {
                    uri: dashboard.uri.clone(),
                    source,
                })?;

            let path = self.writer.write(dashboard, &document).await?;
            tracing::info!("Wrote {}", path.display());
            report.written.push(path);
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::{DashboardDocument, DashboardRef};
    use crate::domain::error::ApiError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// In-memory source that records fetch order and can fail on demand
    struct FakeSource {
        uris: Vec<&'static str>,
        fail_search: bool,
        fail_fetch_at: Option<usize>,
        fetched: Mutex<Vec<String>>,
    }

    impl FakeSource {
        fn new(uris: Vec<&'static str>) -> Self {
            Self {
                uris,
                fail_search: false,
                fail_fetch_at: None,
                fetched: Mutex::new(Vec::new()),
            }
        }

        fn fetched(&self) -> Vec<String> {
            self.fetched.lock().unwrap().clone()
        }
    }

    fn fake_failure() -> ApiError {
        ApiError::InvalidUrl {
            url: "fake".to_string(),
            reason: "simulated failure".to_string(),
        }
    }

    #[async_trait]
    impl DashboardSource for FakeSource {
        async fn search_dashboards(&self) -> Result<Vec<DashboardRef>, ApiError> {
            if self.fail_search {
                return Err(fake_failure());
            }
            Ok(self.uris.iter().map(|uri| DashboardRef::new(*uri)).collect())
        }

        async fn fetch_dashboard(&self, dashboard: &DashboardRef) -> Result<DashboardDocument, ApiError> {
            let mut fetched = self.fetched.lock().unwrap();
            let index = fetched.len();
            fetched.push(dashboard.uri.clone());
            if self.fail_fetch_at == Some(index) {
                return Err(fake_failure());
            }
            Ok(DashboardDocument::new(json!({
                "uri": dashboard.uri,
                "dashboard": {"title": dashboard.base_name(), "version": index}
            })))
        }
    }

    fn service(source: &Arc<FakeSource>, dir: &tempfile::TempDir) -> ExportService {
        ExportService::new(source.clone(), DashboardWriter::new(dir.path()))
    }

    fn json_files(dir: &tempfile::TempDir) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn test_exports_every_dashboard_in_list_order() {
        let dir = tempfile::tempdir().unwrap();
        let source = Arc::new(FakeSource::new(vec!["db/zeta", "db/alpha", "db/mid"]));

        let report = service(&source, &dir).run().await.unwrap();

        assert_eq!(source.fetched(), vec!["db/zeta", "db/alpha", "db/mid"]);
        assert_eq!(
            report.written,
            vec![
                dir.path().join("zeta.json"),
                dir.path().join("alpha.json"),
                dir.path().join("mid.json"),
            ]
        );

        let written = std::fs::read_to_string(dir.path().join("alpha.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["dashboard"]["title"], "alpha");
    }

    #[tokio::test]
    async fn test_search_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut fake = FakeSource::new(vec!["db/one"]);
        fake.fail_search = true;
        let source = Arc::new(fake);

        let err = service(&source, &dir).run().await.unwrap_err();

        assert!(matches!(err, ExportError::Search(_)));
        assert!(err.to_string().starts_with("failed to search for dashboards"));
        assert!(source.fetched().is_empty());
        assert!(json_files(&dir).is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_stops_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let mut fake = FakeSource::new(vec!["db/a", "db/b", "db/c", "db/d", "db/e"]);
        fake.fail_fetch_at = Some(2);
        let source = Arc::new(fake);

        let err = service(&source, &dir).run().await.unwrap_err();

        assert!(matches!(err, ExportError::Fetch { ref uri, .. } if uri == "db/c"));
        assert!(err.to_string().starts_with("failed to get dashboard"));
        assert_eq!(source.fetched(), vec!["db/a", "db/b", "db/c"]);
        assert_eq!(json_files(&dir), vec!["a.json", "b.json"]);
    }

    #[tokio::test]
    async fn test_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let source = Arc::new(FakeSource::new(vec!["db/a", "db/b"]));

        let err = ExportService::new(source.clone(), DashboardWriter::new(&missing))
            .run()
            .await
            .unwrap_err();

        assert!(matches!(err, ExportError::Write { .. }));
        assert!(err.to_string().starts_with("failed to write file"));
        assert_eq!(source.fetched(), vec!["db/a"]);
    }

    #[tokio::test]
    async fn test_reference_without_base_name_aborts_before_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let source = Arc::new(FakeSource::new(vec!["db/ok", "db/.."]));

        let err = service(&source, &dir).run().await.unwrap_err();

        assert!(matches!(err, ExportError::InvalidReference(ref uri) if uri == "db/.."));
        assert_eq!(source.fetched(), vec!["db/ok"]);
        assert_eq!(json_files(&dir), vec!["ok.json"]);
    }

    #[tokio::test]
    async fn test_empty_listing_is_a_successful_noop() {
        let dir = tempfile::tempdir().unwrap();
        let source = Arc::new(FakeSource::new(Vec::new()));

        let report = service(&source, &dir).run().await.unwrap();

        assert!(report.written.is_empty());
        assert!(json_files(&dir).is_empty());
    }
}
