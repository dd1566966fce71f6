use crate::core::docs::DocService;
use crate::discord::{Context, Error};

// Discord messages cap at 2000 characters and the code fence costs the rest.
const DOC_BODY_LIMIT: usize = 1993;

/// Look up the documentation of an item in the tokio API
#[poise::command(slash_command, guild_only)]
pub async fn doc(
    ctx: Context<'_>,
    #[description = "Path of the item, e.g. tokio::sync::mpsc"]
    #[autocomplete = "autocomplete_api_paths"]
    thing: String,
) -> Result<(), Error> {
    let Some((entry, path)) = ctx.data().docs.resolve(&thing) else {
        ctx.say("Item not found.").await?;
        return Ok(());
    };

    match &entry.doc {
        Some(raw) => {
            let body = truncate_chars(&DocService::clean_doc(raw), DOC_BODY_LIMIT);
            ctx.say(format!("```\n{body}```")).await?;
        }
        None => {
            ctx.say(format!("Couldn't find documentation for `{path}`."))
                .await?;
        }
    }

    Ok(())
}

/// Autocomplete function for API paths
async fn autocomplete_api_paths<'a>(
    ctx: Context<'_>,
    partial: &'a str,
) -> impl Iterator<Item = String> + 'a {
    ctx.data().docs.suggest(partial).into_iter()
}

/// Cut `text` down to at most `limit` characters. Discord counts characters
/// rather than bytes, so slicing by byte index could split a code point.
fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        text.chars().take(limit).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate_chars("spawn a task", 20), "spawn a task");
    }

    #[test]
    fn test_truncate_cuts_on_char_boundary() {
        assert_eq!(truncate_chars("héllo", 3), "hél");
        assert_eq!(truncate_chars("abcdef", 4), "abcd");
    }
}
