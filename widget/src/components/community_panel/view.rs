//! View rendering for the community panel.
//!
//! The panel markup is produced as one full HTML string by `panel_html` —
//! header, "See all" link, then a bounded grid of community cards — and
//! injected in a single pass; nothing is patched incrementally. The
//! configuration pane rides alongside as a regular Yew subtree.

use gloo_console::log;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use common::model::community::CommunityRecord;
use common::model::config::PanelConfig;
use common::model::context::HostContext;

use super::helpers::{decode_percent, escape_html, navigation_target};
use super::property_pane::property_pane;
use super::state::CommunityPanelComponent;

/// Main view function for the community panel component.
/// Renders the grid markup plus the configuration pane.
pub fn view(component: &CommunityPanelComponent, ctx: &Context<CommunityPanelComponent>) -> Html {
    let link = ctx.link();
    let markup = panel_html(&component.records, &component.config, &component.context);
    log!(
        "Url for See All button:",
        decode_percent(&component.config.see_all_button)
    );

    html! {
        <div class="community-panel-root">
            { Html::from_html_unchecked(markup) }
            { property_pane(component, link) }
        </div>
    }
}

/// Builds the full panel markup: header block followed by the card grid.
///
/// Pure function of its inputs; every call produces a complete replacement
/// for whatever was rendered before. The grid holds the first
/// `number_of_blocks` records in their original order.
pub fn panel_html(
    records: &[CommunityRecord],
    config: &PanelConfig,
    context: &HostContext,
) -> AttrValue {
    let see_all = decode_percent(&config.see_all_button);
    let cards = records
        .iter()
        .take(config.number_of_blocks as usize)
        .map(|record| card_html(record, context))
        .collect::<String>();

    AttrValue::from(format!(
        r#"<div>
  <div class="top-section">
    <div class="community-panel-heading">Group Communities</div>
    <div><a href="{}" target="_blank">See all</a></div>
  </div>
  <section class="community-grid">{}</section>
</div>"#,
        escape_html(&see_all),
        cards
    ))
}

/// Builds one community card: an image tile linking to the selected target,
/// a clickable heading opening the same target in a new browsing context,
/// and the description paragraph.
fn card_html(record: &CommunityRecord, context: &HostContext) -> String {
    let target = navigation_target(&record.web_url, context);
    format!(
        r#"<div class="col">
  <div class="content-box">
    <div class="img-part">
      <a href="{target}" target="_blank"><img src="{img}" alt="{name}"></a>
    </div>
    <div class="contents">
      <h3 onclick="window.open('{target}')">{name}</h3>
      <p>{desc}</p>
    </div>
  </div>
</div>"#,
        target = escape_html(&target),
        img = escape_html(&record.mugshot_url),
        name = escape_html(&record.full_name),
        desc = escape_html(&record.description),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::community_panel::helpers::OUTLOOK_REDIRECT_URL;

    fn record(n: usize) -> CommunityRecord {
        CommunityRecord {
            full_name: format!("Community {}", n),
            description: format!("Description {}", n),
            web_url: format!("https://engage.example/main/groups/g{}", n),
            mugshot_url: format!("https://engage.example/img/{}.png", n),
        }
    }

    fn config(blocks: u32) -> PanelConfig {
        PanelConfig {
            number_of_blocks: blocks,
            see_all_button: "https%3A%2F%2Fx%2Fy".to_string(),
            ..PanelConfig::default()
        }
    }

    fn card_count(markup: &AttrValue) -> usize {
        markup.matches(r#"class="content-box""#).count()
    }

    #[test]
    fn grid_holds_min_of_records_and_blocks() {
        let records: Vec<_> = (0..7).map(record).collect();
        let few = panel_html(&records, &config(3), &HostContext::default());
        assert_eq!(card_count(&few), 3);
        let all = panel_html(&records, &config(10), &HostContext::default());
        assert_eq!(card_count(&all), 7);
    }

    #[test]
    fn truncation_keeps_the_first_records_in_order() {
        let records: Vec<_> = (0..5).map(record).collect();
        let markup = panel_html(&records, &config(2), &HostContext::default());
        let first = markup.find("Community 0").unwrap();
        let second = markup.find("Community 1").unwrap();
        assert!(first < second);
        assert!(!markup.contains("Community 2"));
    }

    #[test]
    fn header_link_is_percent_decoded() {
        let markup = panel_html(&[], &config(3), &HostContext::default());
        assert!(markup.contains(r#"<a href="https://x/y" target="_blank">See all</a>"#));
    }

    #[test]
    fn empty_record_set_renders_an_empty_grid() {
        let markup = panel_html(&[], &config(3), &HostContext::default());
        assert_eq!(card_count(&markup), 0);
        assert!(markup.contains("Group Communities"));
    }

    #[test]
    fn standalone_cards_use_the_plain_url() {
        let markup = panel_html(&[record(1)], &config(3), &HostContext::default());
        assert!(markup.contains(r#"href="https://engage.example/main/groups/g1""#));
    }

    #[test]
    fn embedded_teams_cards_use_the_deep_link() {
        let context = HostContext {
            is_teams: true,
            is_embedded: true,
        };
        let markup = panel_html(&[record(1)], &config(3), &context);
        assert!(markup.contains("teams.microsoft.com/l/entity"));
        assert!(markup.contains("data=group:g1"));
    }

    #[test]
    fn embedded_cards_outside_teams_use_the_redirect() {
        let context = HostContext {
            is_teams: false,
            is_embedded: true,
        };
        let markup = panel_html(&[record(1)], &config(3), &context);
        assert!(markup.contains(&format!(r#"href="{}""#, OUTLOOK_REDIRECT_URL)));
    }

    #[test]
    fn card_text_is_html_escaped() {
        let spiky = CommunityRecord {
            full_name: "R&D <Lab>".to_string(),
            description: "\"quoted\"".to_string(),
            web_url: "https://x/groups/abc".to_string(),
            mugshot_url: "https://x/img.png".to_string(),
        };
        let markup = panel_html(&[spiky], &config(1), &HostContext::default());
        assert!(markup.contains("R&amp;D &lt;Lab&gt;"));
        assert!(markup.contains("&quot;quoted&quot;"));
        assert!(!markup.contains("<Lab>"));
    }
}
