// The infra module contains implementations of core traits.
// Each feature implementation goes in its own submodule.

#[path = "docs/json_index_store.rs"]
pub mod docs;

#[path = "github/github_client.rs"]
pub mod github;
