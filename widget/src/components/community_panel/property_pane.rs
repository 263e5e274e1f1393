//! Configuration pane for the community panel, standing in for the hosting
//! shell's property-editing UI. Edits are reported to the component through
//! `Msg::Configure`; the list dropdown is rebuilt from the enumerated
//! sources on every render, so a fresh enumeration refreshes its options.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::config::{MAX_BLOCKS, MIN_BLOCKS};

use super::messages::Msg;
use super::state::CommunityPanelComponent;

/// A single edit coming out of the configuration pane.
pub enum ConfigChange {
    SelectList(String),
    Description(String),
    NumberOfBlocks(u32),
    SeeAllButton(String),
}

/// Renders the configuration pane: source dropdown, description field,
/// card-count slider, and the "See all" URL field.
pub fn property_pane(
    component: &CommunityPanelComponent,
    link: &Scope<CommunityPanelComponent>,
) -> Html {
    let options = component
        .sources
        .iter()
        .map(|source| {
            let selected = source.key == component.config.selected_list;
            html! {
                <option value={source.key.clone()} selected={selected}>{ source.label.clone() }</option>
            }
        })
        .collect::<Html>();

    html! {
        <div class="property-pane">
            <label class="pane-field">
                { "Select List" }
                <select onchange={link.callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    Msg::Configure(ConfigChange::SelectList(select.value()))
                })}>
                    <option value="" disabled={true} selected={component.config.selected_list.is_empty()}>
                        { "Choose a list" }
                    </option>
                    { options }
                </select>
            </label>
            <label class="pane-field">
                { "Description" }
                <input
                    type="text"
                    value={component.config.description.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::Configure(ConfigChange::Description(input.value()))
                    })}
                />
            </label>
            <label class="pane-field">
                { format!("Number of Blocks ({})", component.config.number_of_blocks) }
                <input
                    type="range"
                    min={MIN_BLOCKS.to_string()}
                    max={MAX_BLOCKS.to_string()}
                    step="1"
                    value={component.config.number_of_blocks.to_string()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        let count = input.value().parse().unwrap_or(MIN_BLOCKS);
                        Msg::Configure(ConfigChange::NumberOfBlocks(count))
                    })}
                />
            </label>
            <label class="pane-field">
                { "Url for See All button" }
                <input
                    type="text"
                    value={component.config.see_all_button.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::Configure(ConfigChange::SeeAllButton(input.value()))
                    })}
                />
            </label>
        </div>
    }
}
