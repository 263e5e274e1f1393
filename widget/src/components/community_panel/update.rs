//! Update function for the community panel component.
//!
//! This module contains a single `update` function following an Elm-style
//! architecture: it receives the current `CommunityPanelComponent` state,
//! the `Context`, and a `Msg`, mutates the state accordingly, and returns a
//! `bool` indicating whether the view should re-render.
//!
//! All loader outcomes are logged here; no failure propagates past this
//! module. The worst case the user ever sees is an empty or stale grid.

use gloo_console::{error, log, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::community::CommunityRecord;

use super::loader::{self, RecordFetch, SourceFetch};
use super::messages::Msg;
use super::property_pane::ConfigChange;
use super::state::CommunityPanelComponent;

/// Central update function for the component.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - May dispatch further messages via `ctx.link()` (e.g., async callbacks).
/// - Returns `true` to re-render the view, `false` to short-circuit when only side effects occur.
pub fn update(
    component: &mut CommunityPanelComponent,
    ctx: &Context<CommunityPanelComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::ContextResolved(context) => {
            component.context = context;
            true
        }
        Msg::SourcesLoaded(outcome) => match outcome {
            SourceFetch::Loaded(sources) => {
                component.sources = sources;
                true
            }
            SourceFetch::Failed(reason) => {
                error!("Error fetching available lists:", reason);
                false
            }
        },
        Msg::ReloadRecords => {
            component.fetch_seq += 1;
            let seq = component.fetch_seq;
            let link = ctx.link().clone();
            let site_url = ctx.props().site_url.clone();
            let list_title = component.config.selected_list.clone();
            spawn_local(async move {
                let outcome = loader::fetch_records(&site_url, &list_title).await;
                link.send_message(Msg::RecordsLoaded(seq, outcome));
            });
            false
        }
        Msg::RecordsLoaded(seq, outcome) => {
            if seq != component.fetch_seq {
                log!("Dropping record response from a superseded fetch");
                return false;
            }
            log_record_outcome(&outcome);
            apply_records(&mut component.records, outcome)
        }
        Msg::Configure(change) => match change {
            ConfigChange::SelectList(title) => {
                component.config.selected_list = title;
                ctx.link().send_message(Msg::ReloadRecords);
                true
            }
            ConfigChange::Description(text) => {
                component.config.description = text;
                true
            }
            ConfigChange::NumberOfBlocks(count) => {
                component.config.set_number_of_blocks(count);
                true
            }
            ConfigChange::SeeAllButton(url) => {
                component.config.see_all_button = url;
                true
            }
        },
    }
}

fn log_record_outcome(outcome: &RecordFetch) {
    match outcome {
        RecordFetch::Loaded(records) => log!("Items retrieved:", records.len() as u32),
        RecordFetch::NoData => {
            error!("Data not found in the list or no items match the filter condition.")
        }
        RecordFetch::Failed(reason) => error!("Error fetching community information:", reason),
        RecordFetch::Skipped => warn!("No valid list selected."),
    }
}

/// Applies a record-fetch outcome to the held record set and reports whether
/// the grid should re-render. Only a successful fetch replaces the records;
/// empty and failed outcomes keep the prior set but still re-render, a
/// skipped fetch does neither.
fn apply_records(records: &mut Vec<CommunityRecord>, outcome: RecordFetch) -> bool {
    match outcome {
        RecordFetch::Loaded(fetched) => {
            *records = fetched;
            true
        }
        RecordFetch::NoData | RecordFetch::Failed(_) => true,
        RecordFetch::Skipped => false,
    }
}
