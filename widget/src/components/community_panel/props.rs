//! Defines the properties for the `CommunityPanelComponent`.

use common::model::config::PanelConfig;
use yew::prelude::*;

/// Properties for the `CommunityPanelComponent`.
///
/// Both fields have defaults so the panel can be dropped into a page as
/// `<CommunityPanelComponent />` and configured interactively afterwards.
#[derive(Properties, PartialEq, Clone)]
pub struct PanelProps {
    /// Base URL of the site whose list API is queried. An empty value issues
    /// same-origin requests (`/_api/...`).
    #[prop_or_default]
    pub site_url: String,

    /// Initial configuration applied before the user edits anything in the
    /// configuration pane.
    #[prop_or_default]
    pub config: PanelConfig,
}
