//! Источник данных пользователей и прав.
//!
//! Сервера в этой сборке нет: функции отдают фикстуры с небольшой
//! задержкой, сохраняя асинхронный контракт загрузки.

use contracts::system::permissions::{PermissionAction, PermissionMatrix, PermissionMenu};
use contracts::system::users::User;
use gloo_timers::future::TimeoutFuture;

const LATENCY_MS: u32 = 150;

pub async fn fetch_users() -> Result<Vec<User>, String> {
    TimeoutFuture::new(LATENCY_MS).await;
    Ok(mock_users())
}

pub async fn fetch_permission_menus() -> Result<Vec<PermissionMenu>, String> {
    TimeoutFuture::new(LATENCY_MS).await;
    Ok(permission_menus())
}

pub async fn fetch_user_permissions(user_id: &str) -> Result<PermissionMatrix, String> {
    TimeoutFuture::new(LATENCY_MS).await;
    let users = mock_users();
    let user = users
        .iter()
        .find(|u| u.id == user_id)
        .ok_or_else(|| format!("User '{}' not found", user_id))?;
    Ok(default_permissions(&user.role))
}

fn user(id: &str, username: &str, full_name: &str, role: &str, active: bool, last_login: Option<&str>) -> User {
    User {
        id: id.to_string(),
        username: username.to_string(),
        full_name: Some(full_name.to_string()),
        email: Some(format!("{}@jewel.local", username)),
        role: role.to_string(),
        is_active: active,
        last_login_at: last_login.map(String::from),
    }
}

pub fn mock_users() -> Vec<User> {
    vec![
        user("u-001", "admin", "Store Administrator", "admin", true, Some("2024-05-02")),
        user("u-002", "manager", "Olga Petrova", "manager", true, Some("2024-05-01")),
        user("u-003", "cashier1", "Ivan Sokolov", "cashier", true, Some("2024-04-29")),
        user("u-004", "cashier2", "Anna Kim", "cashier", false, None),
        user("u-005", "stock", "Pavel Orlov", "storekeeper", true, Some("2024-04-18")),
    ]
}

pub fn permission_menus() -> Vec<PermissionMenu> {
    vec![
        PermissionMenu::leaf("dashboard", "Dashboard"),
        PermissionMenu::group(
            "product",
            "Product",
            vec![
                PermissionMenu::leaf("product_list", "Product List"),
                PermissionMenu::leaf("product_category", "Category"),
                PermissionMenu::leaf("product_metal", "Metal"),
                PermissionMenu::leaf("product_accessories", "Accessories"),
            ],
        ),
        PermissionMenu::leaf("pos", "POS"),
        PermissionMenu::group(
            "purchase",
            "Purchase",
            vec![
                PermissionMenu::leaf("purchase_list", "Purchase List"),
                PermissionMenu::leaf("purchase_supplier", "Supplier"),
            ],
        ),
        PermissionMenu::group(
            "settings",
            "Settings",
            vec![
                PermissionMenu::leaf("settings_users", "Users"),
                PermissionMenu::leaf("settings_permissions", "Permissions"),
            ],
        ),
        PermissionMenu::leaf("reports", "Reports"),
    ]
}

fn leaf_keys(menus: &[PermissionMenu]) -> Vec<String> {
    menus
        .iter()
        .flat_map(|m| {
            if m.is_group() {
                m.children.iter().map(|c| c.key.clone()).collect::<Vec<_>>()
            } else {
                vec![m.key.clone()]
            }
        })
        .collect()
}

/// Стартовая матрица по роли
pub fn default_permissions(role: &str) -> PermissionMatrix {
    let mut matrix = PermissionMatrix::new();
    let keys = leaf_keys(&permission_menus());
    match role {
        "admin" => {
            for key in &keys {
                matrix.apply_leaf_all(key, true);
            }
        }
        "manager" => {
            for key in keys.iter().filter(|k| !k.starts_with("settings")) {
                matrix.set(key, PermissionAction::View, true);
                matrix.set(key, PermissionAction::Add, true);
                matrix.set(key, PermissionAction::Update, true);
                matrix.set(key, PermissionAction::Print, true);
            }
        }
        "cashier" => {
            matrix.apply_leaf_all("pos", true);
            matrix.set("product_list", PermissionAction::View, true);
            matrix.set("dashboard", PermissionAction::View, true);
        }
        _ => {
            matrix.set("dashboard", PermissionAction::View, true);
            matrix.set("product_list", PermissionAction::View, true);
            matrix.set("purchase_list", PermissionAction::View, true);
        }
    }
    matrix
}
