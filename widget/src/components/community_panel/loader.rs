//! Data loading for the community panel: enumerates the available lists and
//! fetches the community records, both as metadata-free OData reads.
//!
//! Every operation returns an explicit outcome instead of raising an error:
//! the update handler logs the failure and decides what the grid should
//! show. Nothing here retries, times out, or surfaces an error to the user.

use gloo_net::http::Request;

use common::model::community::{CommunityItemsResponse, CommunityRecord};
use common::model::source::{DisplaySource, ListCatalogResponse};

const ODATA_ACCEPT: &str = "application/json;odata=nometadata";

/// Outcome of the list enumeration.
pub enum SourceFetch {
    /// The catalog was read; the prior source set is replaced by this one.
    Loaded(Vec<DisplaySource>),
    /// Transport or decode failure; the prior source set stays in place.
    Failed(String),
}

/// Outcome of the record fetch.
pub enum RecordFetch {
    /// Items were read; the prior record set is replaced by this one.
    Loaded(Vec<CommunityRecord>),
    /// The response envelope carried no `value` field.
    NoData,
    /// Transport or decode failure; the prior record set stays in place.
    Failed(String),
    /// No list is selected; no request was issued.
    Skipped,
}

/// Enumerates the non-hidden lists of the site.
pub async fn fetch_sources(site_url: &str) -> SourceFetch {
    let response = Request::get(&catalog_url(site_url))
        .header("Accept", ODATA_ACCEPT)
        .send()
        .await;

    match response {
        Ok(resp) if resp.status() == 200 => match resp.text().await {
            Ok(body) => decode_catalog(&body),
            Err(err) => SourceFetch::Failed(err.to_string()),
        },
        Ok(resp) => SourceFetch::Failed(format!("unexpected status {}", resp.status())),
        Err(err) => SourceFetch::Failed(err.to_string()),
    }
}

/// Fetches the community-flagged items of the selected list. A blank or
/// whitespace-only selection short-circuits to `Skipped` without touching
/// the network.
pub async fn fetch_records(site_url: &str, list_title: &str) -> RecordFetch {
    if list_title.trim().is_empty() {
        return RecordFetch::Skipped;
    }

    let response = Request::get(&items_url(site_url, list_title))
        .header("Accept", ODATA_ACCEPT)
        .send()
        .await;

    match response {
        Ok(resp) if resp.status() == 200 => match resp.text().await {
            Ok(body) => decode_items(&body),
            Err(err) => RecordFetch::Failed(err.to_string()),
        },
        Ok(resp) => RecordFetch::Failed(format!("unexpected status {}", resp.status())),
        Err(err) => RecordFetch::Failed(err.to_string()),
    }
}

/// Catalog read, filtered to non-hidden lists.
fn catalog_url(site_url: &str) -> String {
    format!("{}/_api/web/lists?$filter=Hidden eq false", site_url)
}

/// Item read for one list, addressed by title and filtered to community
/// items.
fn items_url(site_url: &str, list_title: &str) -> String {
    format!(
        "{}/_api/web/lists/getbytitle('{}')/items?$filter=isGroupCommunity eq 1",
        site_url,
        escape_odata_literal(list_title)
    )
}

/// Doubles single quotes, the OData escape for quotes inside a string
/// literal, so a list title containing `'` cannot break out of the path
/// segment it is interpolated into.
fn escape_odata_literal(raw: &str) -> String {
    raw.replace('\'', "''")
}

fn decode_catalog(body: &str) -> SourceFetch {
    match serde_json::from_str::<ListCatalogResponse>(body) {
        Ok(catalog) => match catalog.value {
            Some(entries) => {
                SourceFetch::Loaded(entries.into_iter().map(DisplaySource::from).collect())
            }
            None => SourceFetch::Failed("response carries no `value` field".to_string()),
        },
        Err(err) => SourceFetch::Failed(err.to_string()),
    }
}

fn decode_items(body: &str) -> RecordFetch {
    match serde_json::from_str::<CommunityItemsResponse>(body) {
        Ok(response) => match response.value {
            Some(items) => {
                RecordFetch::Loaded(items.into_iter().map(CommunityRecord::from).collect())
            }
            None => RecordFetch::NoData,
        },
        Err(err) => RecordFetch::Failed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;

    #[test]
    fn catalog_url_filters_hidden_lists() {
        assert_eq!(
            catalog_url("https://contoso.example/sites/intranet"),
            "https://contoso.example/sites/intranet/_api/web/lists?$filter=Hidden eq false"
        );
    }

    #[test]
    fn items_url_addresses_list_by_title() {
        assert_eq!(
            items_url("", "Communities"),
            "/_api/web/lists/getbytitle('Communities')/items?$filter=isGroupCommunity eq 1"
        );
    }

    #[test]
    fn items_url_escapes_quotes_in_title() {
        assert!(items_url("", "O'Brien's list").contains("getbytitle('O''Brien''s list')"));
    }

    #[test]
    fn blank_selection_skips_the_network() {
        let outcome = fetch_records("", "   ")
            .now_or_never()
            .expect("skipped fetch resolves without any request");
        assert!(matches!(outcome, RecordFetch::Skipped));
    }

    #[test]
    fn catalog_decodes_titles_in_order() {
        let body = r#"{"value":[{"Title":"Communities"},{"Title":"Documents"}]}"#;
        match decode_catalog(body) {
            SourceFetch::Loaded(sources) => {
                assert_eq!(sources.len(), 2);
                assert_eq!(sources[0].key, "Communities");
                assert_eq!(sources[1].key, "Documents");
            }
            SourceFetch::Failed(reason) => panic!("unexpected failure: {}", reason),
        }
    }

    #[test]
    fn catalog_without_value_fails() {
        assert!(matches!(
            decode_catalog(r#"{"odata.error":{}}"#),
            SourceFetch::Failed(_)
        ));
    }

    #[test]
    fn malformed_catalog_body_fails() {
        assert!(matches!(
            decode_catalog("<html>Sign in</html>"),
            SourceFetch::Failed(_)
        ));
    }

    #[test]
    fn items_without_value_is_no_data() {
        assert!(matches!(decode_items(r#"{}"#), RecordFetch::NoData));
    }

    #[test]
    fn items_decode_into_records() {
        let body = r#"{"value":[{
            "Title": "Sales",
            "CommunityDescription": "All about sales",
            "CommunityURL": {"Url": "https://x/groups/abc123"},
            "MugShotURL": "https://x/img.png"
        }]}"#;
        match decode_items(body) {
            RecordFetch::Loaded(records) => {
                assert_eq!(records.len(), 1);
                assert_eq!(records[0].full_name, "Sales");
                assert_eq!(records[0].web_url, "https://x/groups/abc123");
            }
            _ => panic!("expected records"),
        }
    }
}
