//! Pure helpers for the community panel: HTML escaping, percent-decoding,
//! and the host-dependent navigation-target policy.

use common::model::context::HostContext;

/// Prefix of the Teams deep link that opens a community in the Viva Engage
/// entity of the Teams client. The `groups/` suffix of the community URL is
/// spliced between this and `TEAMS_DEEP_LINK_SUFFIX`.
pub const TEAMS_DEEP_LINK_PREFIX: &str = "https://teams.microsoft.com/l/entity/db5e5970-212f-477f-a3fc-2227dc7782bf/vivaengage?context=%7B%22subEntityId%22:%22type=custom,data=group:";

/// Closing fragment of the Teams deep link (the encoded `"}` terminator).
pub const TEAMS_DEEP_LINK_SUFFIX: &str = "%22%7D";

/// Redirect used when the panel is embedded in a surface other than Teams.
pub const OUTLOOK_REDIRECT_URL: &str = "https://aka.ms/VivaEngage/Outlook";

/// Builds the Teams deep link for a community URL, if one can be derived:
/// everything after the first `groups/` segment is spliced into the
/// deep-link template. URLs without the segment produce no candidate.
pub fn deep_link_candidate(web_url: &str) -> Option<String> {
    web_url.split_once("groups/").map(|(_, suffix)| {
        format!(
            "{}{}{}",
            TEAMS_DEEP_LINK_PREFIX, suffix, TEAMS_DEEP_LINK_SUFFIX
        )
    })
}

/// Selects the navigation target for one card.
///
/// Inside Teams and embedded, the deep link wins — or an empty (inert) href
/// when the URL yields no candidate. Embedded outside Teams always goes to
/// the fixed Outlook redirect. Standalone surfaces use the plain URL.
pub fn navigation_target(web_url: &str, context: &HostContext) -> String {
    if context.is_teams && context.is_embedded {
        deep_link_candidate(web_url).unwrap_or_default()
    } else if !context.is_teams && context.is_embedded {
        OUTLOOK_REDIRECT_URL.to_string()
    } else {
        web_url.to_string()
    }
}

/// Percent-decodes a configured URL; values that fail to decode are used
/// verbatim.
pub fn decode_percent(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Escapes special HTML characters in a string.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
