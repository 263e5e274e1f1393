use serde::Deserialize;

/// A community entry as displayed in the panel grid.
///
/// This is the canonical display model: `web_url` has already been resolved
/// from the heterogeneous wire shape (`CommunityUrl`) into a plain string at
/// ingestion, so consumers never re-check the URL's shape.
#[derive(Debug, Clone, PartialEq)]
pub struct CommunityRecord {
    pub full_name: String,
    pub description: String,
    pub web_url: String,
    pub mugshot_url: String,
}

/// Wire shape of the `CommunityURL` column.
///
/// The backend returns either a bare string or an object wrapping the string
/// under `Url`. A wrapped value without a `Url` key resolves to an empty
/// string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CommunityUrl {
    Plain(String),
    Wrapped {
        #[serde(rename = "Url", default)]
        url: String,
    },
}

impl CommunityUrl {
    /// Canonical string form of the URL, whatever shape it arrived in.
    pub fn resolve(&self) -> &str {
        match self {
            CommunityUrl::Plain(url) => url,
            CommunityUrl::Wrapped { url } => url,
        }
    }
}

impl Default for CommunityUrl {
    fn default() -> Self {
        CommunityUrl::Plain(String::new())
    }
}

/// One raw item from the community list endpoint. All columns are defaulted:
/// a column missing from the response yields an empty value, not a decode
/// error.
#[derive(Debug, Clone, Deserialize)]
pub struct CommunityListItem {
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "CommunityDescription", default)]
    pub community_description: String,
    #[serde(rename = "CommunityURL", default)]
    pub community_url: CommunityUrl,
    #[serde(rename = "MugShotURL", default)]
    pub mug_shot_url: String,
}

/// Response envelope for the item read. `value` stays optional so that a
/// malformed envelope is distinguishable from an empty result set.
#[derive(Debug, Clone, Deserialize)]
pub struct CommunityItemsResponse {
    #[serde(default)]
    pub value: Option<Vec<CommunityListItem>>,
}

impl From<CommunityListItem> for CommunityRecord {
    fn from(item: CommunityListItem) -> Self {
        CommunityRecord {
            full_name: item.title,
            description: item.community_description,
            web_url: item.community_url.resolve().to_string(),
            mugshot_url: item.mug_shot_url,
        }
    }
}
