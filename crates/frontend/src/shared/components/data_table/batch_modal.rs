use super::actions::{ActionError, BatchAction, BatchRunner};
use super::selection::Selection;
use crate::shared::class_utils::with_modifier;
use crate::shared::modal::Modal;
use contracts::RowId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Runs `action` and closes the modal once it has succeeded.
///
/// The owner of `on_close` may be gone by the time the action settles
/// (the user navigated away); closing is then skipped.
pub async fn run_and_close(
    runner: BatchRunner,
    action: BatchAction,
    ids: Vec<RowId>,
    on_close: Callback<()>,
) -> Result<(), ActionError> {
    runner.run(&action, ids).await?;
    if on_close.try_run(()).is_none() {
        log::debug!("batch action '{}' settled after its table was unmounted", action.label());
    }
    Ok(())
}

/// Modal listing the batch actions.
///
/// A click runs the action on the current selection and closes the modal
/// once it succeeds. A failure keeps the modal open with the message shown.
/// All buttons are disabled while an action is in flight.
#[component]
pub fn BatchActionsModal(
    #[prop(into)] title: String,
    actions: StoredValue<Vec<BatchAction>>,
    selection: Selection,
    runner: BatchRunner,
    on_close: Callback<()>,
    #[prop(optional, into)] close_title: MaybeProp<String>,
) -> impl IntoView {
    let buttons = actions.with_value(|list| {
        list.iter()
            .cloned()
            .map(|action| {
                let label = action.label().to_string();
                let label_for_class = label.clone();

                let handle_click = move |_| {
                    let action = action.clone();
                    let ids = selection.ids_untracked();
                    spawn_local(async move {
                        let _ = run_and_close(runner, action, ids, on_close).await;
                    });
                };

                view! {
                    <button
                        type="button"
                        class=move || {
                            with_modifier(
                                "button button--primary batch-actions__button",
                                "button--loading",
                                runner.is_running(&label_for_class),
                            )
                        }
                        disabled=move || runner.is_busy()
                        on:click=handle_click
                    >
                        {label}
                    </button>
                }
            })
            .collect_view()
    });

    let error_box = move || {
        runner.error().map(|e| view! {
            <div class="warning-box">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{e}</span>
            </div>
        })
    };

    view! {
        <Modal on_close=on_close close_title=close_title class="batch-actions">
            <h2 class="modal-title">{title}</h2>
            {error_box}
            <div class="batch-actions__list">
                {buttons}
            </div>
        </Modal>
    }
}
