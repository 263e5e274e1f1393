/// Host placement flags, resolved once per activation and immutable after.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostContext {
    /// Whether the widget runs inside the Microsoft Teams host.
    pub is_teams: bool,
    /// Whether the root surface carries the embedded marker class.
    pub is_embedded: bool,
}
