//! Component state for the community panel.
//!
//! This module defines the state struct that holds the panel's runtime data
//! (records, enumerated sources, configuration, host flags) together with the
//! bookkeeping that keeps record fetches deterministic under rapid
//! reconfiguration.

use common::model::community::CommunityRecord;
use common::model::config::PanelConfig;
use common::model::context::HostContext;
use common::model::source::DisplaySource;

/// Main state container for the `CommunityPanelComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct CommunityPanelComponent {
    /// Records currently held for display. Replaced wholesale by each
    /// successful fetch; failures leave the previous set in place.
    pub records: Vec<CommunityRecord>,

    /// Lists available as record sources, shown in the configuration
    /// dropdown. Replaced wholesale by each successful enumeration.
    pub sources: Vec<DisplaySource>,

    /// Current panel configuration, edited through the configuration pane.
    pub config: PanelConfig,

    /// Host placement flags. Resolved once during activation; the default
    /// (standalone, outside Teams) applies until resolution completes.
    pub context: HostContext,

    /// Sequence number of the most recently issued record fetch. Responses
    /// carry the number they were issued with; anything older is dropped.
    pub fetch_seq: u32,

    /// Guard to avoid running first-render activation more than once.
    pub activated: bool,
}

impl CommunityPanelComponent {
    /// Constructs the pre-activation state: no data, default host context,
    /// and the configuration taken from the component properties.
    pub fn new(props: &super::PanelProps) -> Self {
        Self {
            records: Vec::new(),
            sources: Vec::new(),
            config: props.config.clone(),
            context: HostContext::default(),
            fetch_seq: 0,
            activated: false,
        }
    }
}
