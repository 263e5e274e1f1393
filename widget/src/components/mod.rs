pub mod community_panel;
