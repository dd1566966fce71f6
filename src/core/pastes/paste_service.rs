// Pastebin link rewriting - core logic for the paste listener.
//
// Pastebin's paste pages wrap the content in their viewer UI; the raw
// endpoint serves the text directly, which is what people helping in a
// support channel actually want to open.

use once_cell::sync::Lazy;
use regex::Regex;

/// Scheme, host, then the 8-character paste id right after the first slash.
/// `/raw/...` links cannot match since `raw/` breaks the id pattern, so the
/// bot never reacts to its own replies.
static PASTEBIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(https?://pastebin\.com)/([a-zA-Z0-9]{8})").expect("pastebin pattern is valid")
});

/// The raw-content counterpart of every pastebin link in `content`, in
/// order of appearance. Empty when nothing matched.
pub fn raw_paste_links(content: &str) -> Vec<String> {
    PASTEBIN_RE
        .captures_iter(content)
        .map(|caps| format!("{}/raw/{}", &caps[1], &caps[2]))
        .collect()
}
