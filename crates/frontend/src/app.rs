use crate::shared::labels::DataTableLabels;
use crate::system::pages::new_user::NewUserPage;
use crate::system::pages::showcase::ShowcasePage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    // Labels for every DataTable in the app
    provide_context(DataTableLabels::bundled());

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p class="app__not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=ShowcasePage />
                    <Route path=path!("/users/new") view=NewUserPage />
                </Routes>
            </main>
        </Router>
    }
}
