use crate::domain::ports::ReportStore;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Writes reports to the filesystem under a base path.
#[derive(Debug, Clone)]
pub struct LocalReportStore {
    base_path: String,
}

impl LocalReportStore {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl ReportStore for LocalReportStore {
    async fn save(&self, name: &str, data: &[u8]) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(name);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, data)?;
        Ok(full_path.to_string_lossy().into_owned())
    }

    async fn load(&self, name: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(name);
        let data = fs::read(full_path)?;
        Ok(data)
    }
}
