use poise::serenity_prelude as serenity;
use tokio::sync::Mutex;

use crate::core::staff::{render_staff_list, RoleRoster};
use crate::discord::community::{COMMUNITY_GUILD_ID, STAFF_LIST_CHANNEL_ID, STAFF_ROLE_IDS};
use crate::discord::{Context, Error};

/// Discord returns at most 1000 members per list request.
const MEMBER_PAGE_SIZE: u64 = 1000;

/// Handle to the live staff-list message. While the process runs, refreshes
/// edit the same message in place; the first refresh after a restart replaces
/// whatever the previous process left in the channel.
pub struct StaffListPoster {
    message: Mutex<Option<serenity::Message>>,
}

impl StaffListPoster {
    pub fn new() -> Self {
        Self {
            message: Mutex::new(None),
        }
    }

    async fn publish(
        &self,
        http: &serenity::Http,
        embed: serenity::CreateEmbed,
    ) -> Result<(), serenity::Error> {
        let mut cached = self.message.lock().await;

        if let Some(message) = cached.as_mut() {
            message
                .edit(http, serenity::EditMessage::new().embed(embed))
                .await?;
            return Ok(());
        }

        // No handle yet, so the newest message in the channel is the list a
        // previous process posted. Drop it before sending the replacement.
        let channel = serenity::ChannelId::new(STAFF_LIST_CHANNEL_ID);
        let recent = channel
            .messages(http, serenity::GetMessages::new().limit(1))
            .await?;
        for message in recent {
            message.delete(http).await?;
        }

        *cached = Some(
            channel
                .send_message(http, serenity::CreateMessage::new().embed(embed))
                .await?,
        );
        Ok(())
    }
}

/// Rebuild the staff-list message from the current role membership
#[poise::command(
    prefix_command,
    guild_only,
    required_permissions = "MANAGE_GUILD"
)]
pub async fn update_staff_list(ctx: Context<'_>) -> Result<(), Error> {
    if ctx.guild_id().map(|id| id.get()) != Some(COMMUNITY_GUILD_ID) {
        ctx.say("This command only works in the community server.")
            .await?;
        return Ok(());
    }

    let members = fetch_all_members(ctx, serenity::GuildId::new(COMMUNITY_GUILD_ID)).await?;

    let embed = serenity::CreateEmbed::new()
        .title("Staff List")
        .description(render_staff_list(&build_rosters(&members)))
        .colour(serenity::Colour::from_rgb(47, 49, 54));

    ctx.data()
        .staff_list
        .publish(&ctx.serenity_context().http, embed)
        .await?;

    ctx.say("Done!").await?;
    Ok(())
}

/// Fetch the full member list one page at a time. The guild holds more
/// members than a single request returns, and the roster must cover all of
/// them, not the first page.
async fn fetch_all_members(
    ctx: Context<'_>,
    guild_id: serenity::GuildId,
) -> Result<Vec<serenity::Member>, serenity::Error> {
    let mut members = Vec::new();
    let mut after: Option<serenity::UserId> = None;

    loop {
        let page = guild_id
            .members(ctx.serenity_context(), Some(MEMBER_PAGE_SIZE), after)
            .await?;
        after = next_page_cursor(&page, MEMBER_PAGE_SIZE, |member| member.user.id);
        members.extend(page);
        if after.is_none() {
            return Ok(members);
        }
    }
}

/// Where the next page resumes: after the last id of a full page, or nowhere
/// when a short page ends the listing.
fn next_page_cursor<T, I>(page: &[T], page_size: u64, id_of: impl Fn(&T) -> I) -> Option<I> {
    if (page.len() as u64) < page_size {
        None
    } else {
        page.last().map(id_of)
    }
}

/// Group the fetched members under each staff role, in roster order.
fn build_rosters(members: &[serenity::Member]) -> Vec<RoleRoster> {
    STAFF_ROLE_IDS
        .iter()
        .map(|&role_id| RoleRoster {
            role_id,
            member_ids: members
                .iter()
                .filter(|member| member.roles.iter().any(|role| role.get() == role_id))
                .map(|member| member.user.id.get())
                .collect(),
        })
        .collect()
}
