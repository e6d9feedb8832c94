pub mod active_filter_tags;
pub mod batch_progress_overlay;
pub mod column_filter_row;
pub mod column_menu;
pub mod data_table;
pub mod sortable_header_cell;
pub mod table_cell_checkbox;
pub mod table_header_checkbox;

pub use active_filter_tags::ActiveFilterTags;
pub use batch_progress_overlay::BatchProgressOverlay;
pub use column_filter_row::ColumnFilterRow;
pub use column_menu::ColumnMenu;
pub use data_table::{CellRenderer, DataTable, RowActions};
pub use sortable_header_cell::SortableHeaderCell;
pub use table_cell_checkbox::TableCellCheckbox;
pub use table_header_checkbox::TableHeaderCheckbox;
