use crate::payload::Comment;
use once_cell::sync::Lazy;
use regex::Regex;

/// Login of the bot that comments the ticket link on linked pull requests.
pub const TICKET_BOT_LOGIN: &str = "linear";

// `\w` is spelled out as ASCII so non-latin letters end the path.
const URL_PATH: &str = r"[A-Za-z0-9_.,@?^=%\&:/\~+#\-]*[A-Za-z0-9_@?^=%\&/\~+#\-]";

static TICKET_URL: Lazy<Regex> = Lazy::new(|| url_regex(r"linear\.app"));

static LOOM_URL: Lazy<Regex> = Lazy::new(|| url_regex(r"www\.loom\.com"));

fn url_regex(host: &str) -> Regex {
    let pattern = format!("(http|ftp|https)://{host}{URL_PATH}");
    Regex::new(&pattern).expect("url pattern must be valid")
}

/// Finds the ticket link in the first comment written by the ticket bot.
///
/// A bot comment without a link is treated the same as no bot comment.
pub fn find_ticket_url(comments: &[Comment]) -> Option<&str> {
    let comment = comments
        .iter()
        .find(|comment| comment.author.login == TICKET_BOT_LOGIN)?;

    let url = TICKET_URL.find(&comment.body).map(|m| m.as_str());
    if url.is_none() {
        log::warn!(
            "comment from {} has no ticket link, skipping it",
            TICKET_BOT_LOGIN
        );
    }

    url
}

pub fn find_loom_url(body: &str) -> Option<&str> {
    LOOM_URL.find(body).map(|m| m.as_str())
}
