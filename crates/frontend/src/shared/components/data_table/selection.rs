use crate::shared::components::table_checkbox::HeaderCheckState;
use contracts::{RowId, SelectedIds};
use leptos::prelude::*;

/// Row selection wiring of a selectable table.
///
/// The set is owned by the caller; the table only reports intents through
/// the two callbacks and never mutates `selected` itself.
#[derive(Clone, Copy)]
pub struct Selection {
    pub selected: Signal<SelectedIds>,
    /// Header checkbox changed; receives the new intended state
    pub toggle_all: Callback<bool>,
    /// Row checkbox changed; receives the row id
    pub toggle_one: Callback<RowId>,
}

impl Selection {
    pub fn new(
        selected: impl Into<Signal<SelectedIds>>,
        toggle_all: Callback<bool>,
        toggle_one: Callback<RowId>,
    ) -> Self {
        Self {
            selected: selected.into(),
            toggle_all,
            toggle_one,
        }
    }

    pub fn is_selected(&self, id: RowId) -> bool {
        self.selected.with(|s| s.contains(&id))
    }

    pub fn count(&self) -> usize {
        self.selected.with(|s| s.len())
    }

    /// Selected ids in the set's iteration order
    pub fn ids_untracked(&self) -> Vec<RowId> {
        self.selected.with_untracked(|s| s.iter().copied().collect())
    }

    pub fn header_state(&self, row_count: usize) -> HeaderCheckState {
        HeaderCheckState::from_counts(self.count(), row_count)
    }
}

/// Whether a table has a selection column at all
#[derive(Clone, Copy, Default)]
pub enum SelectionMode {
    #[default]
    Disabled,
    Multi(Selection),
}

impl SelectionMode {
    pub fn selection(&self) -> Option<Selection> {
        match self {
            SelectionMode::Multi(selection) => Some(*selection),
            SelectionMode::Disabled => None,
        }
    }

    pub fn is_selectable(&self) -> bool {
        matches!(self, SelectionMode::Multi(_))
    }

    pub fn is_selected(&self, id: RowId) -> bool {
        self.selection().is_some_and(|s| s.is_selected(id))
    }
}

impl From<Selection> for SelectionMode {
    fn from(selection: Selection) -> Self {
        SelectionMode::Multi(selection)
    }
}

/// Single full-width row shown instead of data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPlaceholder {
    Loading,
    Empty,
}

/// `Empty` only for an empty, fully loaded table; while loading an empty
/// table shows `Loading` and never the empty message.
pub fn body_placeholder(row_count: usize, loading: bool) -> Option<BodyPlaceholder> {
    match (row_count, loading) {
        (0, false) => Some(BodyPlaceholder::Empty),
        (0, true) => Some(BodyPlaceholder::Loading),
        _ => None,
    }
}

/// Column span of a full-width row: data columns plus the checkbox column
pub fn full_row_colspan(column_count: usize, selectable: bool) -> u32 {
    (column_count + usize::from(selectable)) as u32
}
