// Fixed ids and coordinates of the community this bot serves. Everything
// here is specific to one guild; point these at your own server before
// running the bot anywhere else.

/// The community guild. Slash commands are registered here and the paste
/// listener ignores every other guild.
pub const COMMUNITY_GUILD_ID: u64 = 500028886025895936;

/// Channel the staff list is posted into.
pub const STAFF_LIST_CHANNEL_ID: u64 = 500336333911490561;

/// Staff roles in the order they appear on the staff list.
pub const STAFF_ROLE_IDS: [u64; 6] = [
    500287547089748000, // Project Lead
    500287841279918082, // Maintainer
    500565946155728907, // Core Contributor
    612551902951112721, // Server Manager
    500566886348681226, // Moderator
    612552203519721474, // Helper
];

/// Repository whose examples directory the /example command links into.
pub const REPO_OWNER: &str = "tokio-rs";
pub const REPO_NAME: &str = "tokio";
pub const REPO_BRANCH: &str = "master";

/// Crate the /doc command documents.
pub const DOCS_ROOT_CRATE: &str = "tokio";

/// Documentation index location, unless `DOCS_INDEX_PATH` overrides it.
pub const DEFAULT_DOCS_INDEX_PATH: &str = "data/api_index.json";

/// Prefix for the non-slash maintenance commands.
pub const COMMAND_PREFIX: &str = "!";
