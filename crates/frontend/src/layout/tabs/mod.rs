//! Tab management
//!
//! - `page` wraps the content of one open tab
//! - `registry` maps tab keys to screens
//! - `tab_labels` holds the tab titles

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
