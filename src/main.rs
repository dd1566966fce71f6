// This is the entry point of the Discord bot.
//
// **Architecture Overview:**
// - `core/` = Business logic (platform-agnostic)
// - `infra/` = Implementations of core traits (files, APIs)
// - `discord/` = Discord-specific adapters (commands, events)
//
// This file's job is to:
// 1. Load configuration
// 2. Initialize services (dependency injection)
// 3. Set up the Discord framework
// 4. Register commands and event handlers

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with half a dozen mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
mod core;
#[path = "discord/discord_layer.rs"]
mod discord;
#[path = "infra/infra_layer.rs"]
mod infra;

use std::sync::Arc;

use crate::core::docs::DocService;
use crate::core::examples::{ExampleService, RepoRef};
use crate::discord::commands::staff::StaffListPoster;
use crate::discord::community;
use crate::discord::pastes::handle_message_for_pastes;
use crate::discord::{Data, Error};
use crate::infra::docs::JsonIndexStore;
use crate::infra::github::GithubApiClient;
use poise::serenity_prelude as serenity;

/// Event handler for non-command Discord events.
/// This is where pastebin links get answered with their raw equivalents.
async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    _data: &Data,
) -> Result<(), Error> {
    if let serenity::FullEvent::Message { new_message } = event {
        if let Err(err) = handle_message_for_pastes(ctx, new_message).await {
            tracing::warn!(error = %err, "Failed to answer paste links");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Initialize logging so we can see what's happening
    tracing_subscriber::fmt::init();

    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();

    // Get Discord bot token from environment
    let token = std::env::var("DISCORD_TOKEN").expect(
        "Missing DISCORD_TOKEN environment variable! Create a .env file with your bot token.",
    );

    // ========================================================================
    // DEPENDENCY INJECTION
    // ========================================================================
    // Create our services with their dependencies.
    // This is the "composition root" where we wire everything together.

    // Documentation index, generated offline and loaded once at startup
    let index_path = std::env::var("DOCS_INDEX_PATH")
        .unwrap_or_else(|_| community::DEFAULT_DOCS_INDEX_PATH.to_string());
    let doc_service = Arc::new(
        DocService::new(JsonIndexStore::new(
            &index_path,
            community::DOCS_ROOT_CRATE,
        ))
        .await
        .expect("Failed to load documentation index"),
    );
    if doc_service.is_empty() {
        tracing::warn!(
            path = %index_path,
            root = doc_service.root_name(),
            "Documentation index is empty; /doc will have nothing to offer"
        );
    }

    // GitHub listing of the runnable examples, cached between lookups
    let github_token = std::env::var("GITHUB_TOKEN").ok();
    let github_client =
        GithubApiClient::new(github_token).expect("Failed to create GitHub API client");
    let example_service = Arc::new(ExampleService::new(
        github_client,
        RepoRef::new(
            community::REPO_OWNER,
            community::REPO_NAME,
            community::REPO_BRANCH,
        ),
    ));

    let staff_list = Arc::new(StaffListPoster::new());

    // Create the data structure that will be shared across all commands
    let data = Data {
        docs: Arc::clone(&doc_service),
        examples: Arc::clone(&example_service),
        staff_list: Arc::clone(&staff_list),
    };

    // ========================================================================
    // DISCORD FRAMEWORK SETUP
    // ========================================================================
    // Configure the poise framework with our commands and settings.

    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT // Required to read message content
        | serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MEMBERS;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            // Register all our commands here
            commands: vec![
                discord::commands::docs::doc(),
                discord::commands::examples::example(),
                discord::commands::threads::close(),
                discord::commands::staff::update_staff_list(),
            ],
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(community::COMMAND_PREFIX.to_string()),
                ..Default::default()
            },
            // Event handler for messages and other events
            event_handler: |ctx, event, framework, data| {
                Box::pin(event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(|ctx, _ready, framework| {
            Box::pin(async move {
                // The commands only make sense in the community guild, and
                // guild registration shows up instantly, unlike global.
                poise::builtins::register_in_guild(
                    ctx,
                    &framework.options().commands,
                    serenity::GuildId::new(community::COMMUNITY_GUILD_ID),
                )
                .await?;

                tracing::info!("Commands registered, bot is ready");
                Ok(data)
            })
        })
        .build();

    // Create the client and start the bot
    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await
        .expect("Error creating client");

    client.start().await.expect("Error running bot");
}
