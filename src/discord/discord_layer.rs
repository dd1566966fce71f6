// Discord layer - commands and event handlers.

#[path = "commands/command_catalog.rs"]
pub mod commands;

#[path = "pastes/paste_handler.rs"]
pub mod pastes;

pub mod community;

use std::sync::Arc;

use crate::core::docs::DocService;
use crate::core::examples::ExampleService;
use crate::discord::commands::staff::StaffListPoster;
use crate::infra::github::GithubApiClient;

/// Type aliases for our bot's context.
/// This is what every command receives as its first parameter.
pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Data that's shared across all commands and event handlers.
pub struct Data {
    pub docs: Arc<DocService>,
    pub examples: Arc<ExampleService<GithubApiClient>>,
    pub staff_list: Arc<StaffListPoster>,
}
