//! Community panel: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, data loading, view rendering,
//! and the configuration pane.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `PanelProps`, `CommunityPanelComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - On first render, resolve the host context once, enumerate the available
//!   lists, and trigger the record fetch for the configured list — in that
//!   order, each step awaited before the next starts.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::host;

mod helpers;
mod loader;
mod messages;
mod property_pane;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::PanelProps;
pub use state::CommunityPanelComponent;

impl Component for CommunityPanelComponent {
    type Message = Msg;
    type Properties = PanelProps;

    fn create(ctx: &Context<Self>) -> Self {
        CommunityPanelComponent::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.activated {
            self.activated = true;

            let link = ctx.link().clone();
            let site_url = ctx.props().site_url.clone();
            spawn_local(async move {
                let context = host::resolve().await;
                link.send_message(Msg::ContextResolved(context));

                let sources = loader::fetch_sources(&site_url).await;
                link.send_message(Msg::SourcesLoaded(sources));

                link.send_message(Msg::ReloadRecords);
            });
        }
    }
}
