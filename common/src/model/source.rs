use serde::Deserialize;

/// A selectable backend list, offered as a record source in the
/// configuration dropdown. The list title serves as both key and label.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySource {
    pub key: String,
    pub label: String,
}

/// One entry from the list-catalog endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEntry {
    #[serde(rename = "Title")]
    pub title: String,
}

/// Response envelope for the list-catalog read.
#[derive(Debug, Clone, Deserialize)]
pub struct ListCatalogResponse {
    #[serde(default)]
    pub value: Option<Vec<ListEntry>>,
}

impl From<ListEntry> for DisplaySource {
    fn from(entry: ListEntry) -> Self {
        DisplaySource {
            key: entry.title.clone(),
            label: entry.title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_title_becomes_key_and_label() {
        let source = DisplaySource::from(ListEntry {
            title: "Communities".to_string(),
        });
        assert_eq!(source.key, "Communities");
        assert_eq!(source.label, "Communities");
    }

    #[test]
    fn catalog_without_value_is_none() {
        let resp: ListCatalogResponse = serde_json::from_str(r#"{"odata.error":{}}"#).unwrap();
        assert!(resp.value.is_none());
    }
}
