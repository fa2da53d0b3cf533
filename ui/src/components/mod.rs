//! Shared components used across the screens.
pub mod action_link;
pub mod chart;
pub mod empty_state;
pub mod footer;
pub mod hash_display;
pub mod metric_card;
pub mod navigation;
pub mod pico;
pub mod search_bar;
pub mod toast;
