use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::core::docs::{ApiIndex, DocIndexError, DocIndexSource};

/// JSON file source for the documentation index.
///
/// The file is generated offline from rustdoc JSON and checked for the
/// nested `{root_name, root: {doc, children}}` shape on load. A missing
/// file degrades to an empty index so the bot still boots with /doc dark
/// instead of refusing to start.
pub struct JsonIndexStore {
    path: PathBuf,
    root_name: String,
}

impl JsonIndexStore {
    pub fn new(path: impl AsRef<Path>, root_name: &str) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            root_name: root_name.to_string(),
        }
    }
}

#[async_trait]
impl DocIndexSource for JsonIndexStore {
    async fn load(&self) -> Result<ApiIndex, DocIndexError> {
        if !self.path.exists() {
            return Ok(ApiIndex::empty(&self.root_name));
        }

        let text = fs::read_to_string(&self.path)
            .await
            .map_err(|e| DocIndexError::Store(e.to_string()))?;

        serde_json::from_str(&text).map_err(|e| DocIndexError::Store(e.to_string()))
    }
}
