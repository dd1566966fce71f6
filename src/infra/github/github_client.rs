use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::core::examples::{ExampleError, RepoRef, RepoTreeClient, TreeEntry};

/// Minimal GitHub REST API client. It deliberately exposes only the
/// recursive tree listing the example service needs.
pub struct GithubApiClient {
    client: Client,
    base_url: String,
}

impl GithubApiClient {
    pub fn new(token: Option<String>) -> Result<Self, ExampleError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Accept",
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "User-Agent",
            HeaderValue::from_static("TokioCommunityBot/1.0"),
        );
        if let Some(token) = token {
            headers.insert(
                "Authorization",
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| ExampleError::Api(e.to_string()))?,
            );
        }

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ExampleError::Api(e.to_string()))?;

        Ok(Self {
            client,
            base_url: "https://api.github.com".to_string(),
        })
    }

    fn map_entries(tree: ApiTree) -> Vec<TreeEntry> {
        tree.tree
            .into_iter()
            .filter_map(|entry| {
                entry.path.map(|path| TreeEntry {
                    path,
                    is_blob: entry.kind.as_deref() == Some("blob"),
                })
            })
            .collect()
    }
}

#[async_trait]
impl RepoTreeClient for GithubApiClient {
    async fn fetch_tree(&self, repo: &RepoRef) -> Result<Vec<TreeEntry>, ExampleError> {
        let url = format!(
            "{}/repos/{}/{}/git/trees/{}",
            self.base_url, repo.owner, repo.name, repo.branch
        );

        let resp = self
            .client
            .get(url)
            .query(&[("recursive", "1")])
            .send()
            .await
            .map_err(|e| ExampleError::Api(e.to_string()))?;

        if resp.status() == StatusCode::FORBIDDEN {
            return Err(ExampleError::Api(
                "GitHub API rate limit hit or token missing permission".to_string(),
            ));
        }
        if !resp.status().is_success() {
            return Err(ExampleError::Api(format!(
                "GitHub returned {} for the tree listing",
                resp.status()
            )));
        }

        let tree: ApiTree = resp
            .json()
            .await
            .map_err(|e| ExampleError::Api(e.to_string()))?;

        Ok(Self::map_entries(tree))
    }
}

#[derive(Debug, Deserialize)]
struct ApiTree {
    #[serde(default)]
    tree: Vec<ApiTreeEntry>,
}

#[derive(Debug, Deserialize)]
struct ApiTreeEntry {
    path: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_entries_from_api_payload() {
        let payload = r#"{
            "sha": "abc123",
            "tree": [
                { "path": "examples/chat.rs", "mode": "100644", "type": "blob" },
                { "path": "examples", "mode": "040000", "type": "tree" },
                { "path": "Cargo.toml", "mode": "100644", "type": "blob" }
            ],
            "truncated": false
        }"#;

        let tree: ApiTree = serde_json::from_str(payload).unwrap();
        let entries = GithubApiClient::map_entries(tree);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].path, "examples/chat.rs");
        assert!(entries[0].is_blob);
        assert!(!entries[1].is_blob);
    }

    #[test]
    fn test_map_entries_skips_pathless_rows() {
        let tree: ApiTree = serde_json::from_str(r#"{ "tree": [ { "type": "blob" } ] }"#).unwrap();
        assert!(GithubApiClient::map_entries(tree).is_empty());
    }
}
