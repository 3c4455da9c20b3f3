//! Table layout primitives.
//!
//! Every primitive merges its base BEM class with the optional caller
//! `class` (base first). Any other attribute or listener set on the
//! component with `attr:` / `on:` is forwarded to its root element:
//!
//! ```rust,ignore
//! <Table class="table--striped" attr:id="users">
//!     <TableHead>
//!         <TableRow>
//!             <TableHeaderCell>"Name"</TableHeaderCell>
//!         </TableRow>
//!     </TableHead>
//!     <TableBody>
//!         <TableRow on:click=move |_| open(id)>
//!             <TableCell colspan=2u32>"Ann"</TableCell>
//!         </TableRow>
//!     </TableBody>
//! </Table>
//! ```

use crate::shared::class_utils::merge_class;
use leptos::prelude::*;

pub const TABLE_CLASS: &str = "table";
pub const TABLE_HEAD_CLASS: &str = "table__head";
pub const TABLE_BODY_CLASS: &str = "table__body";
pub const TABLE_ROW_CLASS: &str = "table__row";
pub const TABLE_HEADER_CELL_CLASS: &str = "table__header-cell";
pub const TABLE_CELL_CLASS: &str = "table__cell";

/// Scroll container (`div.table`) around a `table.table__data`.
/// Forwarded attributes land on the container.
#[component]
pub fn Table(
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=move || merge_class(TABLE_CLASS, class.get().as_deref())>
            <table class="table__data">{children()}</table>
        </div>
    }
}

#[component]
pub fn TableHead(
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <thead class=move || merge_class(TABLE_HEAD_CLASS, class.get().as_deref())>
            {children()}
        </thead>
    }
}

#[component]
pub fn TableBody(
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <tbody class=move || merge_class(TABLE_BODY_CLASS, class.get().as_deref())>
            {children()}
        </tbody>
    }
}

#[component]
pub fn TableRow(
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <tr class=move || merge_class(TABLE_ROW_CLASS, class.get().as_deref())>
            {children()}
        </tr>
    }
}

/// Column header cell, rendered with `scope="col"`
#[component]
pub fn TableHeaderCell(
    #[prop(optional, into)] class: MaybeProp<String>,
    #[prop(optional, into)] colspan: MaybeProp<u32>,
    children: Children,
) -> impl IntoView {
    view! {
        <th
            scope="col"
            class=move || merge_class(TABLE_HEADER_CELL_CLASS, class.get().as_deref())
            colspan=move || colspan.get().map(|n| n.to_string())
        >
            {children()}
        </th>
    }
}

#[component]
pub fn TableCell(
    #[prop(optional, into)] class: MaybeProp<String>,
    #[prop(optional, into)] colspan: MaybeProp<u32>,
    children: Children,
) -> impl IntoView {
    view! {
        <td
            class=move || merge_class(TABLE_CELL_CLASS, class.get().as_deref())
            colspan=move || colspan.get().map(|n| n.to_string())
        >
            {children()}
        </td>
    }
}
