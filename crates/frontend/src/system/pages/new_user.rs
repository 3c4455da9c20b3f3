use leptos::prelude::*;
use leptos_router::components::A;

/// Target of the "add" link on the showcase users table
#[component]
pub fn NewUserPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"New user"</h1>
            <p>"The user form is not part of the component showcase."</p>
            <A href="/" attr:class="button button--secondary">"Back to users"</A>
        </div>
    }
}
