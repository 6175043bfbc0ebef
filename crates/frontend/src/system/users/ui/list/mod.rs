mod state;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_label, tab_label_for_key};
use crate::shared::components::table::{Column, DataTable, PageWindow, TableRowId};
use crate::shared::date_utils::format_date_str;
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_ci, filter_list, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::permissions::apply_changes;
use crate::system::permissions::ui::PermissionTable;
use crate::system::users::api;
use contracts::system::permissions::PermissionChange;
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use state::create_state;
use thaw::*;

const TABLE_ID: &str = "sys-users-table";

impl TableRowId for User {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

impl Searchable for User {
    fn matches_filter(&self, query: &str) -> bool {
        contains_ci(&self.username, query)
            || self.full_name.as_deref().is_some_and(|v| contains_ci(v, query))
            || self.email.as_deref().is_some_and(|v| contains_ci(v, query))
    }
}

fn user_columns() -> Vec<Column<User>> {
    vec![
        Column::new("index", "#", |_: &User| None)
            .width("48px")
            .render(|_, _, index| view! { <span>{index}</span> }.into_any()),
        Column::new("username", "Login", |u: &User| Some(u.username.clone())).width("140px"),
        Column::new("full_name", "Full name", |u: &User| u.full_name.clone()),
        Column::new("email", "Email", |u: &User| u.email.clone()),
        Column::new("role", "Role", |u: &User| Some(u.role.clone())).width("120px"),
        Column::new("is_active", "Status", |u: &User| {
            Some(if u.is_active { "Active" } else { "Blocked" }.to_string())
        })
        .width("100px")
        .render(|value, user, _| {
            let modifier = if user.is_active { "badge--success" } else { "badge--neutral" };
            view! { <span class=format!("badge {}", modifier)>{value}</span> }.into_any()
        }),
        Column::new("last_login_at", "Last login", |u: &User| {
            u.last_login_at.as_deref().map(format_date_str)
        })
        .width("120px"),
    ]
}

/// Пользователи и их права: клик по строке открывает матрицу прав
#[component]
pub fn UserListContainer() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let search = RwSignal::new(String::new());

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let loaded = async {
                let users = api::fetch_users().await?;
                let menus = api::fetch_permission_menus().await?;
                Ok::<_, String>((users, menus))
            }
            .await;
            match loaded {
                Ok((users, menus)) => {
                    log::info!("Loaded {} users", users.len());
                    state.update(|s| {
                        s.window = s.window.with_total(users.len());
                        s.users = users;
                        s.menus = menus;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log::error!("Failed to load users: {}", e);
                    set_error.set(Some(format!("Failed to load users: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    // поиск меняет итог, окно прижимается к последней странице
    Effect::new(move |_| {
        let query = search.get();
        state.update(|s| {
            s.search_query = query;
            let total = filter_list(&s.users, &s.search_query).len();
            s.window = s.window.with_total(total).go_to(1);
        });
    });

    let filtered = Memo::new(move |_| state.with(|s| filter_list(&s.users, &s.search_query)));
    let window = Signal::derive(move || state.with(|s| s.window));
    let page_rows =
        Signal::derive(move || filtered.with(|rows| window.get().slice(rows).to_vec()));

    let open_permissions = move |user: User| {
        log::info!("Open permissions for '{}'", user.username);
        let user_id = user.id.clone();
        state.update(|s| s.selected_user = Some(user_id.clone()));
        ctx.update_tab_title(
            "sys_users",
            &detail_tab_label(tab_label_for_key("sys_users"), &user.username),
        );

        if state.with_untracked(|s| s.permissions.contains_key(&user_id)) {
            return;
        }
        spawn_local(async move {
            match api::fetch_user_permissions(&user_id).await {
                Ok(matrix) => state.update(|s| {
                    s.permissions.insert(user_id, matrix);
                }),
                Err(e) => {
                    log::error!("Failed to load permissions: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    // таблица прав пересоздаётся только при смене пользователя
    let selected_name = Memo::new(move |_| state.with(|s| s.selected_user_name()));

    let on_permission_toggle = Callback::new(move |changes: Vec<PermissionChange>| {
        log::debug!("Apply {} permission change(s)", changes.len());
        state.update(|s| {
            if let Some(id) = s.selected_user.clone() {
                apply_changes(s.permissions.entry(id).or_default(), &changes);
            }
        });
    });

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Users"</h1>
                    <Badge>{move || filtered.with(|f| f.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <span class="filter-panel__title">"Search"</span>
                        </div>
                        <div class="filter-panel-header__right">
                            <Input value=search placeholder="Login, name or email..." />
                        </div>
                    </div>
                </div>

                <DataTable
                    columns=user_columns()
                    data=page_rows
                    window=window
                    on_page_change=Callback::new(move |w: PageWindow| state.update(|s| s.window = w))
                    loading=Signal::derive(move || loading.get() && !state.with(|s| s.is_loaded))
                    on_row_click=Callback::new(open_permissions)
                    table_id=TABLE_ID
                />

                {move || selected_name.get().map(|name| view! {
                    <div class="card permission-card">
                        <div class="card__header">
                            {icon("shield")}
                            <h3 class="card__title">{format!("Permissions: {}", name)}</h3>
                            <button
                                class="button button--ghost button--small"
                                on:click=move |_| state.update(|s| s.selected_user = None)
                            >
                                {icon("x")}
                            </button>
                        </div>
                        <PermissionTable
                            menus=Signal::derive(move || state.with(|s| s.menus.clone()))
                            permissions=Signal::derive(move || state.with(|s| s.selected_permissions()))
                            on_toggle=on_permission_toggle
                        />
                    </div>
                })}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_search_matches_login_name_and_email() {
        let users = api::mock_users();
        let by_name = filter_list(&users, "petrova");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].username, "manager");

        let by_email = filter_list(&users, "cashier2@");
        assert_eq!(by_email.len(), 1);
        assert_eq!(filter_list(&users, "jewel.local").len(), users.len());
    }
}
