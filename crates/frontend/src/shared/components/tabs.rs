//! Tabs widget: `Tabs` owns the active key, `Tab` buttons switch it and
//! `TabPanel`s mount their content only while active.
//!
//! ```rust,ignore
//! <Tabs default_value="general">
//!     <TabList>
//!         <Tab value="general">"General"</Tab>
//!         <Tab value="json">"JSON"</Tab>
//!     </TabList>
//!     <TabPanel value="general"><GeneralTab /></TabPanel>
//!     <TabPanel value="json"><JsonTab /></TabPanel>
//! </Tabs>
//! ```

use crate::shared::class_utils::{merge_class, with_modifier};
use leptos::prelude::*;

/// Active tab key shared by everything inside one `<Tabs>`
#[derive(Clone, Copy)]
pub struct TabsContext {
    active: RwSignal<String>,
}

impl TabsContext {
    pub fn new(default_value: impl Into<String>) -> Self {
        Self {
            active: RwSignal::new(default_value.into()),
        }
    }

    pub fn is_active(&self, value: &str) -> bool {
        self.active.with(|active| active == value)
    }

    pub fn set_active(&self, value: impl Into<String>) {
        let value = value.into();
        if self.active.with_untracked(|active| *active == value) {
            return;
        }
        log::debug!("tabs: switching to '{}'", value);
        self.active.set(value);
    }
}

/// Looks up the enclosing `<Tabs>`; panics when there is none.
pub fn use_tabs(consumer: &str) -> TabsContext {
    use_context::<TabsContext>()
        .unwrap_or_else(|| panic!("{consumer} must be used inside <Tabs>"))
}

/// Owner of the active key.
///
/// `default_value` is read once on mount; later changes are ignored.
#[component]
pub fn Tabs(
    #[prop(into)] default_value: String,
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    provide_context(TabsContext::new(default_value));

    view! {
        <div class=move || merge_class("tabs", class.get().as_deref())>
            {children()}
        </div>
    }
}

#[component]
pub fn TabList(children: Children) -> impl IntoView {
    view! {
        <div class="tabs__list" role="tablist">
            {children()}
        </div>
    }
}

#[component]
pub fn Tab(#[prop(into)] value: String, children: Children) -> impl IntoView {
    let ctx = use_tabs("Tab");
    let value_for_click = value.clone();
    let is_active = Memo::new(move |_| ctx.is_active(&value));

    view! {
        <button
            type="button"
            role="tab"
            class=move || with_modifier("tabs__tab", "tabs__tab--active", is_active.get())
            aria-selected=move || is_active.get().to_string()
            on:click=move |_| ctx.set_active(value_for_click.clone())
        >
            {children()}
        </button>
    }
}

/// Content of one tab. Unmounted (not hidden) while inactive, so its local
/// state does not survive a tab switch.
#[component]
pub fn TabPanel(#[prop(into)] value: String, children: ChildrenFn) -> impl IntoView {
    let ctx = use_tabs("TabPanel");

    move || {
        ctx.is_active(&value).then(|| {
            view! {
                <div class="tabs__panel" role="tabpanel">
                    {children()}
                </div>
            }
        })
    }
}
