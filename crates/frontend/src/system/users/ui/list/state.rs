use crate::shared::components::table::PageWindow;
use contracts::system::permissions::{PermissionMatrix, PermissionMenu};
use contracts::system::users::User;
use leptos::prelude::*;
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct UsersListState {
    pub users: Vec<User>,
    pub menus: Vec<PermissionMenu>,
    /// Матрицы прав уже открытых пользователей, по id
    pub permissions: HashMap<String, PermissionMatrix>,
    pub selected_user: Option<String>,
    pub search_query: String,
    pub window: PageWindow,
    pub is_loaded: bool,
}

impl UsersListState {
    pub fn selected_permissions(&self) -> PermissionMatrix {
        self.selected_user
            .as_ref()
            .and_then(|id| self.permissions.get(id))
            .cloned()
            .unwrap_or_default()
    }

    pub fn selected_user_name(&self) -> Option<String> {
        let id = self.selected_user.as_ref()?;
        self.users
            .iter()
            .find(|u| &u.id == id)
            .map(|u| u.full_name.clone().unwrap_or_else(|| u.username.clone()))
    }
}

pub fn create_state() -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::default())
}
