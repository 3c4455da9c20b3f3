//! Showcase of the table, modal and tabs widgets

use crate::shared::components::data_table::ActionError;
use crate::shared::components::{
    AddAction, BatchAction, Column, DataTable, Selection, SelectionMode, Tab, TabList, TabPanel,
    Tabs,
};
use contracts::{field_from_serialize, CellValue, DataRow, RowId, SelectedIds};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRow {
    pub id: RowId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub active: bool,
}

impl DataRow for UserRow {
    fn id(&self) -> RowId {
        self.id
    }

    fn field(&self, key: &str) -> Option<CellValue> {
        field_from_serialize(self, key)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRow {
    pub id: RowId,
    pub name: String,
    pub members: i64,
}

impl DataRow for RoleRow {
    fn id(&self) -> RowId {
        self.id
    }

    fn field(&self, key: &str) -> Option<CellValue> {
        match key {
            "name" => Some(self.name.clone().into()),
            "members" => Some(self.members.into()),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct UsersState {
    pub users: Vec<UserRow>,
    // Множественный выбор
    pub selected: SelectedIds,
}

impl UsersState {
    pub fn toggle_one(&mut self, id: RowId) {
        if !self.selected.shift_remove(&id) {
            self.selected.insert(id);
        }
    }

    pub fn toggle_all(&mut self, checked: bool) {
        if checked {
            self.selected = self.users.iter().map(|u| u.id).collect();
        } else {
            self.selected.clear();
        }
    }

    pub fn archive(&mut self, ids: &[RowId]) {
        for user in self.users.iter_mut().filter(|u| ids.contains(&u.id)) {
            user.active = false;
        }
        self.selected.clear();
    }

    pub fn remove(&mut self, ids: &[RowId]) {
        self.users.retain(|u| !ids.contains(&u.id));
        self.selected.retain(|id| !ids.contains(id));
    }
}

fn demo_users() -> Vec<UserRow> {
    [
        (1, "Anna Petrova", "anna@example.com", "admin"),
        (2, "Boris Ivanov", "boris@example.com", "manager"),
        (3, "Chen Wei", "chen@example.com", "viewer"),
        (4, "Dana Kim", "dana@example.com", "manager"),
        (5, "Emil Novak", "emil@example.com", "viewer"),
    ]
    .into_iter()
    .map(|(id, name, email, role)| UserRow {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        active: true,
    })
    .collect()
}

#[component]
pub fn ShowcasePage() -> impl IntoView {
    let state = RwSignal::new(UsersState {
        users: demo_users(),
        selected: SelectedIds::new(),
    });
    let (loading, set_loading) = signal(false);

    let users = Signal::derive(move || state.with(|s| s.users.clone()));
    let selected = Signal::derive(move || state.with(|s| s.selected.clone()));

    let selection = Selection::new(
        selected,
        Callback::new(move |checked: bool| state.update(|s| s.toggle_all(checked))),
        Callback::new(move |id: RowId| state.update(|s| s.toggle_one(id))),
    );

    let actions = vec![
        BatchAction::new("Archive", move |ids: Vec<RowId>| async move {
            // Stands in for a request to the server
            TimeoutFuture::new(600).await;
            state.update(|s| s.archive(&ids));
            Ok(())
        }),
        BatchAction::sync("Delete", move |ids| {
            state.update(|s| s.remove(&ids));
            Ok(())
        }),
        BatchAction::new("Export", |ids: Vec<RowId>| async move {
            TimeoutFuture::new(300).await;
            Err(ActionError::failed(format!(
                "export of {} row(s) is not available in the showcase",
                ids.len()
            )))
        }),
    ];

    let user_columns = vec![
        Column::new("id", "ID"),
        Column::new("name", "Name"),
        Column::new("email", "Email").render(|u: UserRow| {
            let href = format!("mailto:{}", u.email);
            view! { <a href=href>{u.email}</a> }
        }),
        Column::new("role", "Role"),
        Column::new("active", "Status").render(|u: UserRow| {
            let (class, text) = if u.active {
                ("badge badge--success", "active")
            } else {
                ("badge badge--neutral", "archived")
            };
            view! { <span class=class>{text}</span> }
        }),
    ];

    let roles = Signal::derive(move || {
        state.with(|s| {
            ["admin", "manager", "viewer"]
                .into_iter()
                .enumerate()
                .map(|(i, role)| RoleRow {
                    id: i as RowId + 1,
                    name: role.to_string(),
                    members: s.users.iter().filter(|u| u.role == role).count() as i64,
                })
                .collect::<Vec<_>>()
        })
    });

    let add_role = Callback::new(move |_: ()| log::info!("showcase: add role requested"));
    let (clicks, set_clicks) = signal(0);

    view! {
        <div class="page">
            <div class="page__toolbar">
                <button
                    type="button"
                    class="button button--secondary"
                    on:click=move |_| set_loading.update(|l| *l = !*l)
                >
                    {move || if loading.get() { "Stop loading" } else { "Simulate loading" }}
                </button>
                <button
                    type="button"
                    class="button button--secondary"
                    on:click=move |_| state.update(|s| {
                        s.users.clear();
                        s.selected.clear();
                    })
                >
                    "Clear users"
                </button>
            </div>

            <DataTable
                title="Users"
                add_link="/users/new"
                columns=user_columns
                data=users
                loading=loading
                selection=selection
                actions=actions
            />

            <DataTable
                title="Roles"
                add_link=AddAction::Handler(add_role)
                add_label="+ Add role"
                columns=vec![Column::new("name", "Role"), Column::new("members", "Members")]
                data=roles
                empty_message="No roles defined."
                selection=SelectionMode::Disabled
            />

            <Tabs default_value="about">
                <TabList>
                    <Tab value="about">"About"</Tab>
                    <Tab value="counter">"Counter"</Tab>
                </TabList>
                <TabPanel value="about">
                    <p>"Tables above share the same DataTable component."</p>
                </TabPanel>
                <TabPanel value="counter">
                    <button
                        type="button"
                        class="button button--primary"
                        on:click=move |_| set_clicks.update(|n| *n += 1)
                    >
                        {move || format!("Clicked {} time(s)", clicks.get())}
                    </button>
                </TabPanel>
            </Tabs>
        </div>
    }
}
