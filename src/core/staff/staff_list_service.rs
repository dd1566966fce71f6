// Staff-list rendering - builds the roster body the update_staff_list
// command posts. Pure string assembly over role and member ids; collecting
// the ids from the guild is the Discord layer's job.

/// Discord caps embed descriptions at 4096 characters.
pub const EMBED_DESCRIPTION_LIMIT: usize = 4096;

/// One staff role and the members currently holding it, in display order.
#[derive(Debug, Clone)]
pub struct RoleRoster {
    pub role_id: u64,
    pub member_ids: Vec<u64>,
}

/// Render the roster into the embed body.
///
/// Each role becomes a mention header with a bold member count, followed by
/// one quoted line per member, with a blank line between roles:
///
/// ```text
/// <@&role> | **2**
/// > `id` <@member>
/// > `id` <@member>
/// ```
pub fn render_staff_list(rosters: &[RoleRoster]) -> String {
    let mut body = String::new();

    for roster in rosters {
        body.push_str(&format!(
            "<@&{}> | **{}**\n",
            roster.role_id,
            roster.member_ids.len()
        ));
        for member_id in &roster.member_ids {
            body.push_str(&format!("> `{member_id}` <@{member_id}>\n"));
        }
        body.push('\n');
    }

    let body = body.trim_end().to_string();
    clamp_to_description_limit(body)
}

/// An overlong roster is cut rather than rejected; the platform refuses
/// descriptions past the cap outright.
fn clamp_to_description_limit(body: String) -> String {
    if body.chars().count() <= EMBED_DESCRIPTION_LIMIT {
        return body;
    }

    let mut clamped: String = body.chars().take(EMBED_DESCRIPTION_LIMIT - 3).collect();
    clamped.push_str("...");
    clamped
}
