use serde::{Deserialize, Serialize};

/// Lower bound of the card-count slider.
pub const MIN_BLOCKS: u32 = 1;
/// Upper bound of the card-count slider.
pub const MAX_BLOCKS: u32 = 10;

/// Panel configuration, owned by the hosting surface and edited through the
/// configuration pane. The widget reads it on every render and never
/// persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Title of the backend list that records are read from.
    pub selected_list: String,
    /// Free-text description of the panel.
    pub description: String,
    /// Number of cards to display, clamped to the slider bounds.
    pub number_of_blocks: u32,
    /// Percent-encoded target of the "See all" header link.
    pub see_all_button: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            selected_list: String::new(),
            description: String::new(),
            number_of_blocks: 4,
            see_all_button: String::new(),
        }
    }
}

impl PanelConfig {
    /// Stores a new card count, clamped to the slider bounds.
    pub fn set_number_of_blocks(&mut self, count: u32) {
        self.number_of_blocks = count.clamp(MIN_BLOCKS, MAX_BLOCKS);
    }

    /// The selected list title, or `None` when the selection is absent or
    /// whitespace-only.
    pub fn selected_title(&self) -> Option<&str> {
        let trimmed = self.selected_list.trim();
        (!trimmed.is_empty()).then_some(self.selected_list.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_count_is_clamped_to_slider_bounds() {
        let mut config = PanelConfig::default();
        config.set_number_of_blocks(0);
        assert_eq!(config.number_of_blocks, MIN_BLOCKS);
        config.set_number_of_blocks(25);
        assert_eq!(config.number_of_blocks, MAX_BLOCKS);
        config.set_number_of_blocks(7);
        assert_eq!(config.number_of_blocks, 7);
    }

    #[test]
    fn blank_selection_has_no_title() {
        let mut config = PanelConfig::default();
        assert_eq!(config.selected_title(), None);
        config.selected_list = "   ".to_string();
        assert_eq!(config.selected_title(), None);
        config.selected_list = "Communities".to_string();
        assert_eq!(config.selected_title(), Some("Communities"));
    }
}
