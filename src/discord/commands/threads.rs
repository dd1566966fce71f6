use poise::serenity_prelude as serenity;

use crate::core::threads::{decide_close, CloseDecision, CloseNotice, CloseRequest};
use crate::discord::{Context, Error};

/// Close the current thread. Staff can also lock it
#[poise::command(slash_command, guild_only)]
pub async fn close(
    ctx: Context<'_>,
    #[description = "Also lock the thread (staff only)"] lock: Option<bool>,
) -> Result<(), Error> {
    let channel = ctx
        .channel_id()
        .to_channel(ctx.serenity_context())
        .await?
        .guild();
    let thread = channel.filter(|ch| ch.thread_metadata.is_some());

    // Resolve the caller's member before taking the cache guard; the guard
    // must not be held across an await point.
    let member = ctx.author_member().await;
    let can_manage_threads = match (thread.as_ref(), ctx.guild(), member.as_deref()) {
        (Some(thread_channel), Some(guild), Some(member)) => guild
            .user_permissions_in(thread_channel, member)
            .contains(serenity::Permissions::MANAGE_THREADS),
        _ => false,
    };

    let request = CloseRequest {
        is_thread: thread.is_some(),
        can_manage_threads,
        is_thread_owner: thread.as_ref().and_then(|t| t.owner_id) == Some(ctx.author().id),
        lock_requested: lock.unwrap_or(false),
    };

    match decide_close(request) {
        CloseDecision::Archive { lock, notice } => {
            // Post the notice first; an archived thread no longer accepts the
            // interaction response.
            ctx.send(poise::CreateReply::default().embed(notice_embed(notice)))
                .await?;
            ctx.channel_id()
                .edit_thread(
                    &ctx.serenity_context().http,
                    serenity::EditThread::new().archived(true).locked(lock),
                )
                .await?;
        }
        CloseDecision::NotAThread => {
            ctx.send(
                poise::CreateReply::default()
                    .content("This command can only be used in threads.")
                    .ephemeral(true),
            )
            .await?;
        }
        CloseDecision::NotPermitted => {
            ctx.send(
                poise::CreateReply::default()
                    .content(
                        "This command can only be used by staff or the person \
                         who opened the thread.",
                    )
                    .ephemeral(true),
            )
            .await?;
        }
    }

    Ok(())
}

fn notice_embed(notice: CloseNotice) -> serenity::CreateEmbed {
    let (description, colour) = match notice {
        CloseNotice::StaffLocked => (
            "This thread was archived and locked by a staff member. \
             Please open another thread for more help.",
            serenity::Colour::from_rgb(255, 0, 0),
        ),
        CloseNotice::Staff => (
            "This thread was archived by a staff member. If you have a \
             different problem, please open another thread. If it is the \
             same problem, send another message.",
            serenity::Colour::from_rgb(255, 255, 0),
        ),
        CloseNotice::Owner => (
            "This thread was archived by the person who opened it. If you \
             have a question, please open a new thread.",
            serenity::Colour::from_rgb(255, 255, 0),
        ),
    };

    serenity::CreateEmbed::new()
        .description(description)
        .colour(colour)
}
