use crate::shared::class_utils::merge_class;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Overlay with a centered panel and a close button.
///
/// Always visible while mounted: the caller decides when to mount it.
/// Backdrop clicks and Escape do not close the modal, only the close button
/// does, and it only reports the click through `on_close`.
#[component]
pub fn Modal(
    /// Called once per click on the close button
    on_close: Callback<()>,
    /// Extra class for the panel (`div.modal`)
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Tooltip / accessible name of the close button
    #[prop(optional, into)]
    close_title: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let close_title = move || close_title.get().unwrap_or_else(|| "Close".to_string());

    view! {
        <div class="modal-overlay">
            <div
                class=move || merge_class("modal modal--centered", class.get().as_deref())
                role="dialog"
                aria-modal="true"
            >
                <button
                    type="button"
                    class="button button--icon modal__close"
                    title=close_title
                    aria-label=close_title
                    on:click=move |_| on_close.run(())
                >
                    {icon("x")}
                </button>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
