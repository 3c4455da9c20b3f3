//! Generic data table with row selection and batch actions.
//!
//! ```rust,ignore
//! let selected = RwSignal::new(SelectedIds::new());
//!
//! view! {
//!     <DataTable
//!         title="Users"
//!         add_link="/users/new"
//!         columns=vec![Column::new("name", "Name"), Column::new("email", "Email")]
//!         data=users
//!         selection=Selection::new(selected, toggle_all, toggle_one)
//!         actions=vec![BatchAction::new("Archive", |ids| archive(ids))]
//!     />
//! }
//! ```

mod actions;
mod batch_modal;
mod column;
mod selection;

pub use actions::{ActionError, ActionFuture, BatchAction, BatchDialog, BatchRunner};
pub use batch_modal::{run_and_close, BatchActionsModal};
pub use column::{cell_view, duplicate_column_keys, Column};
pub use selection::{body_placeholder, full_row_colspan, BodyPlaceholder, Selection, SelectionMode};

use crate::shared::components::table::{
    Table, TableBody, TableCell, TableHead, TableHeaderCell, TableRow,
};
use crate::shared::components::table_checkbox::{TableCheckbox, TableHeaderCheckbox};
use crate::shared::icons::icon;
use crate::shared::labels::DataTableLabels;
use contracts::DataRow;
use leptos::prelude::*;
use leptos_router::components::A;

/// "Add" control in the table header
#[derive(Clone)]
pub enum AddAction {
    /// Router path, rendered as a link
    Link(String),
    /// Rendered as a button
    Handler(Callback<()>),
}

impl From<&str> for AddAction {
    fn from(path: &str) -> Self {
        AddAction::Link(path.to_string())
    }
}

impl From<String> for AddAction {
    fn from(path: String) -> Self {
        AddAction::Link(path)
    }
}

impl From<Callback<()>> for AddAction {
    fn from(handler: Callback<()>) -> Self {
        AddAction::Handler(handler)
    }
}

#[component]
pub fn DataTable<T>(
    #[prop(into)] title: String,
    /// Path or handler of the "add" control; no control when absent
    #[prop(optional, into)]
    add_link: Option<AddAction>,
    #[prop(optional, into)] add_label: Option<String>,
    columns: Vec<Column<T>>,
    #[prop(into)] data: Signal<Vec<T>>,
    /// Suppresses the empty message while data is being fetched
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    #[prop(optional, into)] empty_message: Option<String>,
    /// `Selection` for a selectable table, `SelectionMode::Disabled` otherwise
    #[prop(into)]
    selection: SelectionMode,
    /// Batch actions in display order
    #[prop(optional)]
    actions: Option<Vec<BatchAction>>,
) -> impl IntoView
where
    T: DataRow + Clone + Send + Sync + 'static,
{
    let labels = use_context::<DataTableLabels>().unwrap_or_default();
    let add_label = add_label.unwrap_or_else(|| labels.add_label.clone());
    let empty_message = empty_message.unwrap_or_else(|| labels.empty_message.clone());

    for key in duplicate_column_keys(&columns) {
        log::warn!("data table '{}': duplicate column key '{}'", title, key);
    }

    let colspan = full_row_colspan(columns.len(), selection.is_selectable());
    let columns = StoredValue::new(columns);
    let has_actions = actions.is_some();
    let actions = StoredValue::new(actions.unwrap_or_default());
    let dialog = BatchDialog::new();
    let runner = dialog.runner;
    let close_actions = Callback::new(move |_: ()| dialog.close());

    let add_control = add_link.map(|add| {
        let content = add_control_content(add_label);
        match add {
            AddAction::Link(href) => view! {
                <A href=href attr:class="button button--primary">
                    {content}
                </A>
            }
            .into_any(),
            AddAction::Handler(handler) => view! {
                <button type="button" class="button button--primary" on:click=move |_| handler.run(())>
                    {content}
                </button>
            }
            .into_any(),
        }
    });

    let selection_banner = {
        let labels = labels.clone();
        move || {
            let sel = selection.selection()?;
            let count = sel.count();
            if count == 0 {
                return None;
            }
            let actions_label = labels.actions_button.clone();
            Some(view! {
                <div class="data-table__selection">
                    <span class="data-table__selection-count">{labels.selection_summary(count)}</span>
                    {has_actions.then(|| view! {
                        <button
                            type="button"
                            class="button button--primary button--small"
                            on:click=move |_| dialog.open()
                        >
                            {icon("list")}
                            {actions_label}
                        </button>
                    })}
                </div>
            })
        }
    };

    let header_cells = columns.with_value(|cols| {
        cols.iter()
            .map(|col| {
                let label = col.label.clone();
                view! { <TableHeaderCell>{label}</TableHeaderCell> }
            })
            .collect_view()
    });

    let header_checkbox = selection.selection().map(|sel| {
        let state = Signal::derive(move || sel.header_state(data.with(Vec::len)));
        view! { <TableHeaderCheckbox state=state on_change=sel.toggle_all /> }
    });

    let placeholder = {
        let loading_message = labels.loading_message.clone();
        move || {
            let row_count = data.with(Vec::len);
            let text = match body_placeholder(row_count, loading.get().unwrap_or(false))? {
                BodyPlaceholder::Empty => empty_message.clone(),
                BodyPlaceholder::Loading => loading_message.clone(),
            };
            Some(view! {
                <TableRow>
                    <TableCell colspan=colspan class="table__cell--placeholder">
                        {text}
                    </TableCell>
                </TableRow>
            })
        }
    };

    let batch_modal = {
        let modal_title = labels.batch_modal_title.clone();
        let close_title = labels.close_title.clone();
        move || {
            let sel = selection.selection()?;
            (dialog.is_open() && has_actions).then(|| view! {
                <BatchActionsModal
                    title=modal_title.clone()
                    actions=actions
                    selection=sel
                    runner=runner
                    on_close=close_actions
                    close_title=close_title.clone()
                />
            })
        }
    };

    view! {
        <div class="data-table">
            <div class="data-table__header">
                <h1 class="data-table__title">{title}</h1>
                {add_control}
            </div>

            {selection_banner}

            <Table>
                <TableHead>
                    <TableRow>
                        {header_checkbox}
                        {header_cells}
                    </TableRow>
                </TableHead>
                <TableBody>
                    <For
                        each=move || data.get()
                        key=|row: &T| row.id()
                        children=move |row: T| data_row(row, columns, selection)
                    />
                    {placeholder}
                </TableBody>
            </Table>

            {batch_modal}
        </div>
    }
}

fn data_row<T>(row: T, columns: StoredValue<Vec<Column<T>>>, selection: SelectionMode) -> AnyView
where
    T: DataRow + Clone + Send + Sync + 'static,
{
    let id = row.id();
    let row_class = Signal::derive(move || {
        if selection.is_selected(id) {
            "table__row--selected".to_string()
        } else {
            String::new()
        }
    });

    let checkbox = selection.selection().map(|sel| {
        view! {
            <TableCheckbox
                checked=Signal::derive(move || sel.is_selected(id))
                on_change=Callback::new(move |_: bool| sel.toggle_one.run(id))
            />
        }
    });

    let cells = columns.with_value(|cols| {
        cols.iter()
            .map(|col| {
                let cell = col.cell(&row);
                view! { <TableCell>{cell}</TableCell> }
            })
            .collect_view()
    });

    view! {
        <TableRow class=row_class>
            {checkbox}
            {cells}
        </TableRow>
    }
    .into_any()
}

/// Icon and label shared by both forms of the add control
fn add_control_content(label: String) -> AnyView {
    view! {
        {icon("plus")}
        {label}
    }
    .into_any()
}
