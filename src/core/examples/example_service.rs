// Example lookup - core logic for the /example command.
//
// The service keeps one in-process cache slot holding the latest recursive
// file listing of the target repository, fetched through the `RepoTreeClient`
// port. The listing is populated on first use and refetched once it is older
// than the TTL; a failed refetch falls back to the stale copy so a GitHub
// hiccup never makes autocomplete go dark.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use tokio::sync::RwLock;

/// Listing age after which the next lookup refetches the tree.
const CACHE_TTL_MINUTES: i64 = 15;

/// Repository subdirectory the bot links examples from.
const EXAMPLES_PREFIX: &str = "examples/";

#[derive(Debug, Error)]
pub enum ExampleError {
    #[error("GitHub API error: {0}")]
    Api(String),
}

/// Coordinates of the repository whose examples are linked.
#[derive(Debug, Clone)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
    pub branch: String,
}

impl RepoRef {
    pub fn new(owner: &str, name: &str, branch: &str) -> Self {
        Self {
            owner: owner.to_string(),
            name: name.to_string(),
            branch: branch.to_string(),
        }
    }
}

/// One entry of a recursive git tree listing.
#[derive(Debug, Clone)]
pub struct TreeEntry {
    pub path: String,
    pub is_blob: bool,
}

/// Minimal repository operations the service needs.
#[async_trait]
pub trait RepoTreeClient: Send + Sync {
    async fn fetch_tree(&self, repo: &RepoRef) -> Result<Vec<TreeEntry>, ExampleError>;
}

/// An example name resolved into its repository path and display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedExample {
    /// Path relative to the examples directory, extension included.
    pub path: String,
    /// Final path component, used as the button label.
    pub file_name: String,
    /// Human-readable name: file stem with underscores as spaces.
    pub display_name: String,
}

struct CachedListing {
    files: Vec<String>,
    fetched_at: DateTime<Utc>,
}

/// Cached view over the repository's example files.
pub struct ExampleService<C: RepoTreeClient> {
    client: C,
    repo: RepoRef,
    cache: RwLock<Option<CachedListing>>,
}

impl<C: RepoTreeClient> ExampleService<C> {
    pub fn new(client: C, repo: RepoRef) -> Self {
        Self {
            client,
            repo,
            cache: RwLock::new(None),
        }
    }

    /// Example paths relative to `examples/`, from the cache when fresh.
    pub async fn listing(&self) -> Result<Vec<String>, ExampleError> {
        {
            let guard = self.cache.read().await;
            if let Some(cached) = guard.as_ref() {
                if !is_stale(cached.fetched_at, Utc::now()) {
                    return Ok(cached.files.clone());
                }
            }
        }

        self.refresh().await
    }

    /// Fetch the tree and replace the cache. On failure the previous listing
    /// is served if one exists; only a failure with a cold cache surfaces
    /// the error.
    pub async fn refresh(&self) -> Result<Vec<String>, ExampleError> {
        match self.client.fetch_tree(&self.repo).await {
            Ok(entries) => {
                let files = example_paths(&entries);
                let mut guard = self.cache.write().await;
                *guard = Some(CachedListing {
                    files: files.clone(),
                    fetched_at: Utc::now(),
                });
                Ok(files)
            }
            Err(err) => {
                let guard = self.cache.read().await;
                match guard.as_ref() {
                    Some(cached) => Ok(cached.files.clone()),
                    None => Err(err),
                }
            }
        }
    }

    /// Substring filter for autocomplete. The query is matched against the
    /// path as it appears in the repository (prefix included), so queries
    /// like `examples/ch` and plain `chat` both work.
    pub async fn search(&self, query: &str) -> Result<Vec<String>, ExampleError> {
        let files = self.listing().await?;
        Ok(files
            .into_iter()
            .filter(|path| format!("{EXAMPLES_PREFIX}{path}").contains(query))
            .collect())
    }

    /// Browser URL of an example file on GitHub.
    pub fn example_url(&self, path: &str) -> String {
        format!(
            "https://github.com/{}/{}/blob/{}/{}{}",
            self.repo.owner, self.repo.name, self.repo.branch, EXAMPLES_PREFIX, path
        )
    }

}

/// Turn a user-supplied name into a repository path and display strings.
/// Subdirectory components pass through untouched; only the extension is
/// appended when missing.
pub fn resolve_name(name: &str) -> ResolvedExample {
    let path = if name.ends_with(".rs") {
        name.to_string()
    } else {
        format!("{name}.rs")
    };

    let file_name = path
        .rsplit('/')
        .next()
        .unwrap_or(path.as_str())
        .to_string();

    let display_name = file_name
        .split('.')
        .next()
        .unwrap_or(file_name.as_str())
        .replace('_', " ");

    ResolvedExample {
        path,
        file_name,
        display_name,
    }
}

/// Keep blobs under `examples/` ending in `.rs`, stripped of the prefix.
fn example_paths(entries: &[TreeEntry]) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| entry.is_blob && entry.path.ends_with(".rs"))
        .filter_map(|entry| entry.path.strip_prefix(EXAMPLES_PREFIX))
        .map(str::to_string)
        .collect()
}

fn is_stale(fetched_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now - fetched_at > Duration::minutes(CACHE_TTL_MINUTES)
}
