// Documentation lookup - core logic for the /doc command.
//
// The service walks a namespace tree of the target library's public API
// (crate -> modules -> items), loaded once at startup from a JSON file that
// is generated offline from rustdoc output. Path resolution and autocomplete
// both run against that tree; nothing here touches Discord or the network.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Discord rejects autocomplete responses with more than 25 choices.
pub const MAX_SUGGESTIONS: usize = 25;

#[derive(Debug, Error)]
pub enum DocIndexError {
    #[error("Failed to load documentation index: {0}")]
    Store(String),
}

/// One node in the API namespace tree.
///
/// Children are keyed by item name. A `BTreeMap` keeps suggestion order
/// stable and alphabetical without an extra sort.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiItem {
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub children: BTreeMap<String, ApiItem>,
}

/// The full namespace tree plus the crate name it is rooted at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiIndex {
    pub root_name: String,
    #[serde(default)]
    pub root: ApiItem,
}

impl ApiIndex {
    /// An index with a root and nothing under it. Used when no index file is
    /// available so the bot can still boot with /doc degraded.
    pub fn empty(root_name: &str) -> Self {
        Self {
            root_name: root_name.to_string(),
            root: ApiItem::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }
}

/// Where the index comes from (JSON file in production, fixtures in tests).
#[async_trait]
pub trait DocIndexSource: Send + Sync {
    async fn load(&self) -> Result<ApiIndex, DocIndexError>;
}

/// Path resolution and autocomplete over the loaded index.
///
/// The index never changes after startup, so the service holds it without a
/// lock and every lookup is a plain tree walk.
pub struct DocService {
    index: ApiIndex,
}

impl DocService {
    /// Create the service by eagerly loading the index from its source.
    pub async fn new(source: impl DocIndexSource) -> Result<Self, DocIndexError> {
        let index = source.load().await?;
        Ok(Self::from_index(index))
    }

    pub fn from_index(index: ApiIndex) -> Self {
        Self { index }
    }

    pub fn root_name(&self) -> &str {
        &self.index.root_name
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Users paste both `tokio::sync::Mutex` and `tokio.sync.Mutex`; treat
    /// the separators interchangeably.
    fn segments(path: &str) -> Vec<&str> {
        path.split("::").flat_map(|part| part.split('.')).collect()
    }

    /// Resolve a path to an item, one segment at a time.
    ///
    /// A leading segment equal to the crate name is skipped so `sync::Mutex`
    /// and `tokio::sync::Mutex` land on the same node. The returned path is
    /// canonical: `::`-separated and rooted at the crate name. Any segment
    /// that does not exist in the tree makes the whole lookup `None`.
    pub fn resolve(&self, path: &str) -> Option<(&ApiItem, String)> {
        let mut item = &self.index.root;
        let mut canonical = self.index.root_name.clone();

        for (i, segment) in Self::segments(path).iter().enumerate() {
            if i == 0 && *segment == self.index.root_name {
                continue;
            }
            item = item.children.get(*segment)?;
            canonical.push_str("::");
            canonical.push_str(segment);
        }

        Some((item, canonical))
    }

    /// Autocomplete suggestions for a partially typed path.
    ///
    /// Walks as deep as the input resolves. If every segment resolved, the
    /// suggestions are all children of that node; if a segment failed, they
    /// are the children of the deepest resolved node whose names start with
    /// the failing segment. Either way each suggestion is a full canonical
    /// path, capped at the platform limit.
    pub fn suggest(&self, partial: &str) -> Vec<String> {
        let mut item = &self.index.root;
        let mut canonical = self.index.root_name.clone();
        // Empty when the whole input resolved; then every child matches.
        let mut name_filter = "";

        for (i, segment) in Self::segments(partial).iter().enumerate() {
            if i == 0 && *segment == self.index.root_name {
                continue;
            }
            match item.children.get(*segment) {
                Some(child) => {
                    item = child;
                    canonical.push_str("::");
                    canonical.push_str(segment);
                }
                None => {
                    name_filter = segment;
                    break;
                }
            }
        }

        item.children
            .keys()
            .filter(|name| name.starts_with(name_filter))
            .take(MAX_SUGGESTIONS)
            .map(|name| format!("{canonical}::{name}"))
            .collect()
    }

    /// Normalize a docstring for display: strip the common indentation of
    /// every line after the first, strip the first line's own leading
    /// whitespace, and drop surrounding blank lines. Index files carry docs
    /// as extracted, so display-time cleanup lives here.
    pub fn clean_doc(raw: &str) -> String {
        let lines: Vec<&str> = raw.lines().collect();

        let margin = lines
            .iter()
            .skip(1)
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
            .min()
            .unwrap_or(0);

        let mut cleaned: Vec<&str> = Vec::with_capacity(lines.len());
        for (i, line) in lines.iter().enumerate() {
            if i == 0 {
                cleaned.push(line.trim_start());
            } else if line.trim().is_empty() {
                cleaned.push("");
            } else {
                cleaned.push(Self::strip_margin(line, margin));
            }
        }

        while cleaned.first().is_some_and(|line| line.is_empty()) {
            cleaned.remove(0);
        }
        while cleaned.last().is_some_and(|line| line.is_empty()) {
            cleaned.pop();
        }

        cleaned.join("\n")
    }

    /// Drop a line's first `margin` characters. The margin counts characters,
    /// not bytes; doc indentation is not always ASCII.
    fn strip_margin(line: &str, margin: usize) -> &str {
        match line.char_indices().nth(margin) {
            Some((start, _)) => &line[start..],
            None => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(doc: Option<&str>, children: Vec<(&str, ApiItem)>) -> ApiItem {
        ApiItem {
            doc: doc.map(str::to_string),
            children: children
                .into_iter()
                .map(|(name, child)| (name.to_string(), child))
                .collect(),
        }
    }

    fn sample_index() -> ApiIndex {
        ApiIndex {
            root_name: "tokio".to_string(),
            root: item(
                Some("A runtime for writing reliable async applications."),
                vec![
                    (
                        "sync",
                        item(
                            Some("Synchronization primitives."),
                            vec![
                                ("Mutex", item(Some("An async mutex."), vec![])),
                                ("Notify", item(None, vec![])),
                                (
                                    "mpsc",
                                    item(
                                        Some("Multi-producer, single-consumer channel."),
                                        vec![("channel", item(Some("Create a channel."), vec![]))],
                                    ),
                                ),
                            ],
                        ),
                    ),
                    ("net", item(Some("Networking types."), vec![])),
                ],
            ),
        }
    }

    fn service() -> DocService {
        DocService::from_index(sample_index())
    }

    #[test]
    fn test_resolve_full_path() {
        let svc = service();
        let (resolved, path) = svc.resolve("tokio::sync::Mutex").unwrap();
        assert_eq!(path, "tokio::sync::Mutex");
        assert_eq!(resolved.doc.as_deref(), Some("An async mutex."));
    }

    #[test]
    fn test_resolve_without_leading_root() {
        let svc = service();
        let (_, path) = svc.resolve("sync::Mutex").unwrap();
        assert_eq!(path, "tokio::sync::Mutex");
    }

    #[test]
    fn test_resolve_dotted_path() {
        let svc = service();
        let (_, path) = svc.resolve("tokio.sync.mpsc.channel").unwrap();
        assert_eq!(path, "tokio::sync::mpsc::channel");
    }

    #[test]
    fn test_resolve_root_only() {
        let svc = service();
        let (resolved, path) = svc.resolve("tokio").unwrap();
        assert_eq!(path, "tokio");
        assert!(resolved.doc.is_some());
    }

    #[test]
    fn test_resolve_unknown_segment_is_none() {
        let svc = service();
        assert!(svc.resolve("tokio::sync::Nope").is_none());
        assert!(svc.resolve("tokio::bogus::Mutex").is_none());
        assert!(svc.resolve("tokio::sync::").is_none());
    }

    #[test]
    fn test_suggest_lists_children_of_resolved_path() {
        let svc = service();
        let suggestions = svc.suggest("tokio::sync");
        assert_eq!(
            suggestions,
            vec![
                "tokio::sync::Mutex".to_string(),
                "tokio::sync::Notify".to_string(),
                "tokio::sync::mpsc".to_string(),
            ]
        );
    }

    #[test]
    fn test_suggest_filters_by_unresolved_tail() {
        let svc = service();
        let suggestions = svc.suggest("tokio::sync::Mu");
        assert_eq!(suggestions, vec!["tokio::sync::Mutex".to_string()]);
    }

    #[test]
    fn test_suggest_empty_input_lists_top_level() {
        let svc = service();
        let suggestions = svc.suggest("");
        assert_eq!(
            suggestions,
            vec!["tokio::net".to_string(), "tokio::sync".to_string()]
        );
    }

    #[test]
    fn test_suggest_dead_middle_segment_filters_on_it() {
        // The filter applies at the point of failure; trailing segments are
        // ignored, matching how the lookup walker stops.
        let svc = service();
        let suggestions = svc.suggest("tokio::syn::Mutex");
        assert_eq!(suggestions, vec!["tokio::sync".to_string()]);
    }

    #[test]
    fn test_suggest_caps_at_limit() {
        let children: Vec<(String, ApiItem)> = (0..40)
            .map(|i| (format!("item{i:02}"), ApiItem::default()))
            .collect();
        let index = ApiIndex {
            root_name: "tokio".to_string(),
            root: ApiItem {
                doc: None,
                children: children.into_iter().collect(),
            },
        };
        let svc = DocService::from_index(index);
        assert_eq!(svc.suggest("tokio").len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_clean_doc_strips_common_indent() {
        let raw = "    Creates a new channel.\n\n        let (tx, rx) = mpsc::channel(8);\n";
        // First line loses its own indent; later lines lose the common margin.
        assert_eq!(
            DocService::clean_doc(raw),
            "Creates a new channel.\n\nlet (tx, rx) = mpsc::channel(8);"
        );
    }

    #[test]
    fn test_clean_doc_preserves_relative_indent() {
        let raw = "Header\n    outer\n        inner";
        assert_eq!(DocService::clean_doc(raw), "Header\nouter\n    inner");
    }

    #[test]
    fn test_clean_doc_drops_surrounding_blank_lines() {
        let raw = "\n\n  text body  \n\n";
        assert_eq!(DocService::clean_doc(raw), "text body  ");
    }

    #[test]
    fn test_clean_doc_strips_multibyte_indent() {
        // U+3000 is a single whitespace character three bytes wide.
        assert_eq!(DocService::clean_doc("Title\n x\n\u{3000}y"), "Title\nx\ny");
        // No-break spaces past the margin survive as relative indent.
        assert_eq!(
            DocService::clean_doc("Intro\n\u{a0}\u{a0}first\n\u{a0}\u{a0}\u{a0}second"),
            "Intro\nfirst\n\u{a0}second"
        );
    }

    #[tokio::test]
    async fn test_service_loads_from_source() {
        struct FixtureSource;

        #[async_trait]
        impl DocIndexSource for FixtureSource {
            async fn load(&self) -> Result<ApiIndex, DocIndexError> {
                Ok(sample_index())
            }
        }

        let svc = DocService::new(FixtureSource).await.unwrap();
        assert_eq!(svc.root_name(), "tokio");
        assert!(!svc.is_empty());
    }
}
