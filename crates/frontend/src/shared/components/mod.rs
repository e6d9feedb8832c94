pub mod auto_refresh_toggle;
pub mod date_input;
pub mod filter_panel;
pub mod page_header;
pub mod pagination_controls;
pub mod table;

pub use auto_refresh_toggle::AutoRefreshToggle;
pub use date_input::{DateInput, DateRangeInput};
pub use filter_panel::{FilterPanel, FilterTag};
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
