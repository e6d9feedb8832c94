//! Generic list table used by every screen.
//!
//! Header cells, filter inputs and body cells all follow the visible columns
//! of the `TableControlsHandle`. Cells render the column accessor's value
//! with the active filter highlighted; numeric columns are right-aligned and
//! formatted as amounts. Screens customize a cell through `render_cell` and
//! add per-row buttons through `row_actions`.

use std::sync::Arc;

use super::column_filter_row::ColumnFilterRow;
use super::sortable_header_cell::SortableHeaderCell;
use super::table_cell_checkbox::TableCellCheckbox;
use super::table_header_checkbox::TableHeaderCheckbox;
use crate::shared::list_utils::{format_amount, highlight_matches};
use crate::shared::table_controls::TableControlsHandle;
use contracts::shared::table::{CellValue, ColumnDef, ColumnFilters, SelectionSet};
use leptos::prelude::*;
use thaw::*;

/// Buttons rendered in the trailing "Actions" cell of a row
pub type RowActions<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

/// Per-column cell override; `None` falls back to the default rendering
pub type CellRenderer<T> = fn(&T, &'static str) -> Option<AnyView>;

fn default_cell_text<T>(column: &ColumnDef<T>, row: &T) -> String {
    match column.value(row) {
        CellValue::Number(n) if column.align_right => format_amount(n),
        value => value.as_text(),
    }
}

#[component]
pub fn DataTable<T>(
    table: TableControlsHandle<T>,

    /// Rows of the current page
    #[prop(into)]
    rows: Signal<Vec<T>>,

    filters: RwSignal<ColumnFilters>,

    key_of: fn(&T) -> String,

    #[prop(optional)]
    selection: Option<RwSignal<SelectionSet>>,

    /// Rows failing the predicate get a disabled checkbox
    #[prop(optional)]
    selectable: Option<fn(&T) -> bool>,

    #[prop(optional)]
    render_cell: Option<CellRenderer<T>>,

    #[prop(optional)]
    row_actions: Option<RowActions<T>>,

    #[prop(optional, into)]
    loading: Signal<bool>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let visible = table.visible_columns();
    let sort = table.sort();
    let has_actions = row_actions.is_some();
    let is_selectable = move |row: &T| selectable.map_or(true, |f| f(row));

    let selectable_keys = Signal::derive(move || {
        rows.with(|rows| {
            rows.iter()
                .filter(|row| is_selectable(row))
                .map(key_of)
                .collect::<Vec<_>>()
        })
    });

    let on_sort = Callback::new(move |key: String| table.toggle_sort(&key));
    let on_hide = Callback::new(move |key: String| table.hide_column(&key));

    let header_cells = move || {
        visible
            .get()
            .into_iter()
            .map(|column| {
                view! {
                    <SortableHeaderCell
                        label=column.label
                        sort_key=column.key
                        sort=sort
                        on_sort=on_sort
                        on_hide=on_hide
                        min_width=column.min_width.unwrap_or(100.0)
                        align=if column.align_right { "right" } else { "left" }
                        sortable=column.sortable
                    />
                }
            })
            .collect_view()
    };

    let body_rows = move || {
        let columns = visible.get();
        let rows = rows.get();
        let colspan = columns.len() + usize::from(selection.is_some()) + usize::from(has_actions);

        if rows.is_empty() {
            let text = if loading.get() { "Loading..." } else { "No data" };
            return view! {
                <TableRow>
                    <td class="table__empty" colspan=colspan.to_string()>{text}</td>
                </TableRow>
            }
            .into_any();
        }

        rows.into_iter()
            .map(|row| {
                let key = key_of(&row);
                let cells = columns
                    .iter()
                    .map(|column| {
                        let content = render_cell
                            .and_then(|render| render(&row, column.key))
                            .unwrap_or_else(|| {
                                let text = default_cell_text(column, &row);
                                let filter = filters.with(|f| f.get(column.key).cloned().unwrap_or_default());
                                highlight_matches(&text, &filter)
                            });
                        let class = if column.align_right { "table__cell--right" } else { "" };
                        view! {
                            <TableCell class=class>
                                <TableCellLayout truncate=true>{content}</TableCellLayout>
                            </TableCell>
                        }
                    })
                    .collect_view();

                let row_actions = row_actions.clone();
                view! {
                    <TableRow>
                        {selection.map(|selection| view! {
                            <TableCellCheckbox
                                item_key=key.clone()
                                selection=selection
                                disabled=!is_selectable(&row)
                            />
                        })}
                        {cells}
                        {row_actions.map(|actions| view! {
                            <TableCell class="table__actions">{actions(&row)}</TableCell>
                        })}
                    </TableRow>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="table-wrapper">
            <Table attr:class="data-table">
                <TableHeader>
                    <TableRow>
                        {selection.map(|selection| view! {
                            <TableHeaderCheckbox keys=selectable_keys selection=selection />
                        })}
                        {header_cells}
                        {has_actions.then(|| view! {
                            <TableHeaderCell resizable=false class="table__actions">"Actions"</TableHeaderCell>
                        })}
                    </TableRow>
                    <ColumnFilterRow
                        columns=visible
                        filters=filters
                        has_selection=selection.is_some()
                        has_actions=has_actions
                    />
                </TableHeader>
                <TableBody>{body_rows}</TableBody>
            </Table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        amount: f64,
        bank: &'static str,
    }

    #[test]
    fn test_numeric_cells_are_formatted_as_amounts() {
        let amount = ColumnDef::new("amount", "Amount", |r: &Row| CellValue::number(r.amount)).numeric();
        let bank = ColumnDef::new("bank", "Bank", |r: &Row| CellValue::text(r.bank));
        let row = Row { amount: 1250000.0, bank: "BCA" };

        assert_eq!(default_cell_text(&amount, &row), "1,250,000.00");
        assert_eq!(default_cell_text(&bank, &row), "BCA");
    }
}
