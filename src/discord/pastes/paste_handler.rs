// Discord glue for the paste rewriter - watches messages and answers with
// raw links.

use crate::core::pastes::raw_paste_links;
use crate::discord::community::COMMUNITY_GUILD_ID;
use crate::discord::Error;
use poise::serenity_prelude as serenity;

/// Answer a message containing pastebin links with their raw equivalents.
///
/// Returns `true` if a reply was sent.
pub async fn handle_message_for_pastes(
    ctx: &serenity::Context,
    msg: &serenity::Message,
) -> Result<bool, Error> {
    // Skip bots
    if msg.author.bot {
        return Ok(false);
    }

    // Only rewrite inside the community guild
    if msg.guild_id.map(|id| id.get()) != Some(COMMUNITY_GUILD_ID) {
        return Ok(false);
    }

    let links = raw_paste_links(&msg.content);
    if links.is_empty() {
        return Ok(false);
    }

    msg.channel_id.say(&ctx.http, links.join("\n")).await?;
    Ok(true)
}
