//! Матрица прав пользователя: пункт меню → действие → флаг.
//!
//! Группы меню (например "Product") собственных флагов не имеют:
//! в матрице хранятся только листовые пункты.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionAction {
    View,
    Add,
    Update,
    Delete,
    Print,
    All,
}

impl PermissionAction {
    /// Порядок колонок в таблице прав
    pub const COLUMNS: [PermissionAction; 6] = [
        PermissionAction::View,
        PermissionAction::Add,
        PermissionAction::Update,
        PermissionAction::Delete,
        PermissionAction::Print,
        PermissionAction::All,
    ];

    /// Действия, которые включает `All`
    pub const CONCRETE: [PermissionAction; 5] = [
        PermissionAction::View,
        PermissionAction::Add,
        PermissionAction::Update,
        PermissionAction::Delete,
        PermissionAction::Print,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionAction::View => "view",
            PermissionAction::Add => "add",
            PermissionAction::Update => "update",
            PermissionAction::Delete => "delete",
            PermissionAction::Print => "print",
            PermissionAction::All => "all",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PermissionAction::View => "View",
            PermissionAction::Add => "Add",
            PermissionAction::Update => "Update",
            PermissionAction::Delete => "Delete",
            PermissionAction::Print => "Print",
            PermissionAction::All => "All",
        }
    }
}

/// Одно изменение флага, как его сообщает таблица прав
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionChange {
    pub menu_key: String,
    pub action: PermissionAction,
    pub checked: bool,
}

impl PermissionChange {
    pub fn new(menu_key: impl Into<String>, action: PermissionAction, checked: bool) -> Self {
        Self {
            menu_key: menu_key.into(),
            action,
            checked,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionMatrix {
    menus: BTreeMap<String, BTreeMap<PermissionAction, bool>>,
}

impl PermissionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Отсутствующий пункт или действие читаются как `false`
    pub fn get(&self, menu_key: &str, action: PermissionAction) -> bool {
        self.menus
            .get(menu_key)
            .and_then(|actions| actions.get(&action))
            .copied()
            .unwrap_or(false)
    }

    pub fn set(&mut self, menu_key: &str, action: PermissionAction, checked: bool) {
        self.menus
            .entry(menu_key.to_string())
            .or_default()
            .insert(action, checked);
    }

    /// Применяет пачку изменений за один проход
    pub fn apply(&mut self, changes: &[PermissionChange]) {
        for change in changes {
            self.set(&change.menu_key, change.action, change.checked);
        }
    }

    /// `All` на листе выставляет и пять конкретных действий
    pub fn apply_leaf_all(&mut self, menu_key: &str, checked: bool) {
        for action in PermissionAction::CONCRETE {
            self.set(menu_key, action, checked);
        }
        self.set(menu_key, PermissionAction::All, checked);
    }

    pub fn menu_keys(&self) -> impl Iterator<Item = &str> {
        self.menus.keys().map(String::as_str)
    }
}

/// Узел меню. Узел с детьми: группа, без детей: лист.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionMenu {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub children: Vec<PermissionMenu>,
}

impl PermissionMenu {
    pub fn leaf(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            children: Vec::new(),
        }
    }

    pub fn group(key: &str, label: &str, children: Vec<PermissionMenu>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            children,
        }
    }

    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_entries_read_as_false() {
        let matrix = PermissionMatrix::new();
        assert!(!matrix.get("product_list", PermissionAction::View));
    }

    #[test]
    fn leaf_all_sets_every_action() {
        let mut matrix = PermissionMatrix::new();
        matrix.apply_leaf_all("product_list", true);
        for action in PermissionAction::COLUMNS {
            assert!(matrix.get("product_list", action), "{action:?}");
        }
        matrix.apply_leaf_all("product_list", false);
        assert!(!matrix.get("product_list", PermissionAction::Delete));
    }

    #[test]
    fn apply_batch_touches_only_named_menus() {
        let mut matrix = PermissionMatrix::new();
        matrix.set("users", PermissionAction::View, true);
        matrix.apply(&[
            PermissionChange::new("product_list", PermissionAction::Add, true),
            PermissionChange::new("category", PermissionAction::Add, true),
        ]);
        assert!(matrix.get("product_list", PermissionAction::Add));
        assert!(matrix.get("category", PermissionAction::Add));
        assert!(matrix.get("users", PermissionAction::View));
        assert!(!matrix.get("users", PermissionAction::Add));
    }

    #[test]
    fn matrix_serializes_as_plain_map() {
        let mut matrix = PermissionMatrix::new();
        matrix.set("users", PermissionAction::Print, true);
        let json = serde_json::to_value(&matrix).unwrap();
        assert_eq!(json, serde_json::json!({ "users": { "print": true } }));
    }
}
