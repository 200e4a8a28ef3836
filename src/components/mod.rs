//! UI Components
//!
//! Reusable Leptos components.

mod notice_banner;
mod room_grid;
mod status_panel;
mod auth_tabs;
mod chat_widget;

pub use notice_banner::NoticeBanner;
pub use room_grid::RoomGrid;
pub use status_panel::StatusPanel;
pub use auth_tabs::{AuthTab, AuthTabs};
pub use chat_widget::ChatWidget;
