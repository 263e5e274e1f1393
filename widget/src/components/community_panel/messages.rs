use common::model::context::HostContext;

use super::loader::{RecordFetch, SourceFetch};
use super::property_pane::ConfigChange;

pub enum Msg {
    ContextResolved(HostContext),
    SourcesLoaded(SourceFetch),
    ReloadRecords,
    RecordsLoaded(u32, RecordFetch),
    Configure(ConfigChange),
}
