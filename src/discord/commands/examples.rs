use poise::serenity_prelude as serenity;

use crate::core::examples::resolve_name;
use crate::discord::{Context, Error};

// Discord refuses autocomplete responses with more than 25 choices.
const MAX_CHOICES: usize = 25;

/// Get a link to an example from the tokio repository
#[poise::command(slash_command, guild_only)]
pub async fn example(
    ctx: Context<'_>,
    #[description = "Name of the example to link"]
    #[autocomplete = "autocomplete_examples"]
    name: String,
) -> Result<(), Error> {
    let resolved = resolve_name(&name);
    let url = ctx.data().examples.example_url(&resolved.path);

    let button = serenity::CreateButton::new_link(url).label(resolved.file_name);
    let reply = poise::CreateReply::default()
        .content(format!("Here's the {} example.", resolved.display_name))
        .components(vec![serenity::CreateActionRow::Buttons(vec![button])]);

    ctx.send(reply).await?;
    Ok(())
}

/// Autocomplete function for example names. Autocomplete has no way to
/// surface an error, so a failed listing fetch degrades to no suggestions.
async fn autocomplete_examples<'a>(
    ctx: Context<'_>,
    partial: &'a str,
) -> impl Iterator<Item = String> + 'a {
    let matches = match ctx.data().examples.search(partial).await {
        Ok(files) => files,
        Err(err) => {
            tracing::warn!(error = %err, "Failed to fetch example listing");
            Vec::new()
        }
    };

    matches.into_iter().take(MAX_CHOICES)
}
