use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::{AppError, Result};
use crate::modules::invoices::models::CreateInvoiceRequest;

/// Reads stored `{customer, cart}` documents from a data directory
#[derive(Debug, Clone)]
pub struct InvoiceLoader {
    data_dir: PathBuf,
}

impl InvoiceLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Resolve `name` (with or without `.json`) to a file inside the data dir.
    ///
    /// Only plain stems are accepted, so a request can never climb out of the
    /// directory.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        let stem = name.strip_suffix(".json").unwrap_or(name);

        let is_plain = !stem.is_empty()
            && stem
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !is_plain {
            return Err(AppError::invalid_request(format!(
                "Invalid invoice file name: {}",
                name
            )));
        }

        Ok(self.data_dir.join(format!("{}.json", stem)))
    }

    pub async fn load(&self, name: &str) -> Result<CreateInvoiceRequest> {
        let path = self.resolve(name)?;

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(AppError::not_found(format!("Invoice file '{}'", name)));
            }
            Err(e) => return Err(AppError::Io(e)),
        };

        Ok(serde_json::from_slice(&bytes)?)
    }
}
