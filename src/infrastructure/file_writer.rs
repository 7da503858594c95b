// Writes exported dashboards to the output directory
use crate::domain::dashboard::{DashboardDocument, DashboardRef};
use crate::domain::error::ExportError;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

#[derive(Debug, Clone)]
pub struct DashboardWriter {
    output_dir: PathBuf,
}

impl DashboardWriter {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Create or overwrite `<output_dir>/<base name>.json` (mode 0644 on Unix).
    pub async fn write(
        &self,
        dashboard: &DashboardRef,
        document: &DashboardDocument,
    ) -> Result<PathBuf, ExportError> {
        let file_name = dashboard
            .file_name()
            .ok_or_else(|| ExportError::InvalidReference(dashboard.uri.clone()))?;
        let path = self.output_dir.join(file_name);

        let write_error = |source| ExportError::Write {
            path: path.clone(),
            source,
        };

        let contents = document
            .to_pretty_json()
            .map_err(|e| write_error(std::io::Error::other(e)))?;

        let mut options = tokio::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o644);

        let mut file = options.open(&path).await.map_err(write_error)?;
        file.write_all(&contents).await.map_err(write_error)?;
        file.flush().await.map_err(write_error)?;

        Ok(path)
    }
}
