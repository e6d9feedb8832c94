pub mod column;
pub mod controls;
pub mod pipeline;
pub mod selection;

pub use column::{find_column, CellValue, ColumnDef, ColumnFilterKind, Keyed};
pub use controls::{ResetHooks, SortConfig, SortDirection, TableControls};
pub use pipeline::{
    active_filter_count, clamp_page, clear_column_filter, compare_cells, filter_rows, filtered_sorted_page,
    includes_value, paginate, sort_rows, total_pages, ColumnFilters, PageView,
};
pub use selection::{composite_key, SelectionSet};
