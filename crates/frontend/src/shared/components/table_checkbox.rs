use super::table::{TableCell, TableHeaderCell};
use leptos::prelude::*;

/// Tri-state of the "select all" checkbox in a table header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

impl HeaderCheckState {
    /// Checked only when the selection size equals a non-zero row count,
    /// so an empty table never reads as "all selected".
    pub fn from_counts(selected: usize, rows: usize) -> Self {
        if rows > 0 && selected == rows {
            HeaderCheckState::Checked
        } else if selected == 0 || rows == 0 {
            HeaderCheckState::Unchecked
        } else {
            HeaderCheckState::Indeterminate
        }
    }

    pub fn is_checked(self) -> bool {
        matches!(self, HeaderCheckState::Checked)
    }

    pub fn is_indeterminate(self) -> bool {
        matches!(self, HeaderCheckState::Indeterminate)
    }
}

/// Чекбокс в ячейке строки таблицы
///
/// Клик по чекбоксу не доходит до строки (stop_propagation).
///
/// # BEM классы
/// - `.table__cell--checkbox` - td обёртка
/// - `.table__checkbox` - input элемент
#[component]
pub fn TableCheckbox(
    /// Сигнал состояния чекбокса
    #[prop(into)]
    checked: Signal<bool>,
    /// Callback вызывается при изменении состояния
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <TableCell class="table__cell--checkbox" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                }
            />
        </TableCell>
    }
}

/// Чекбокс "выбрать все" в заголовке таблицы
///
/// `on_change` получает новое состояние из input
/// (true = выбрать все, false = снять все).
#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)]
    state: Signal<HeaderCheckState>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <TableHeaderCell class="table__header-cell--checkbox">
            <input
                type="checkbox"
                class="table__checkbox"
                aria-label="Select all"
                prop:checked=move || state.get().is_checked()
                prop:indeterminate=move || state.get().is_indeterminate()
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                }
            />
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rows_selected_is_checked() {
        for rows in 1..6 {
            assert_eq!(HeaderCheckState::from_counts(rows, rows), HeaderCheckState::Checked);
            assert!(!HeaderCheckState::from_counts(rows - 1, rows).is_checked());
        }
    }

    #[test]
    fn test_empty_table_is_never_checked() {
        assert_eq!(HeaderCheckState::from_counts(0, 0), HeaderCheckState::Unchecked);
    }

    #[test]
    fn test_partial_selection_is_indeterminate() {
        let state = HeaderCheckState::from_counts(2, 5);
        assert!(state.is_indeterminate());
        assert!(!state.is_checked());
        assert_eq!(HeaderCheckState::from_counts(0, 5), HeaderCheckState::Unchecked);
    }
}
