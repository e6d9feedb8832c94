pub mod api_utils;
pub mod batch_runner;
pub mod components;
pub mod fetch;
pub mod http;
pub mod icons;
pub mod list_state;
pub mod list_utils;
pub mod modal;
pub mod notifications;
pub mod page_frame;
pub mod page_standard;
pub mod polling;
pub mod table_controls;
