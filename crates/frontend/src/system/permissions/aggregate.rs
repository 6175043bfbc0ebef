//! Агрегация прав по группам меню и порядок строк таблицы прав.
//!
//! Состояние группы нигде не хранится: оно каждый раз вычисляется из флагов
//! дочерних пунктов, поэтому не может разойтись с ними.

use crate::shared::components::ui::CheckState;
use contracts::system::permissions::{
    PermissionAction, PermissionChange, PermissionMatrix, PermissionMenu,
};
use std::collections::HashSet;

/// Строка таблицы прав в порядке отображения
#[derive(Debug, Clone, PartialEq)]
pub enum PermissionRow {
    Group { menu: PermissionMenu, expanded: bool },
    Child { menu: PermissionMenu, group_key: String },
    Single { menu: PermissionMenu },
}

impl PermissionRow {
    pub fn menu(&self) -> &PermissionMenu {
        match self {
            PermissionRow::Group { menu, .. }
            | PermissionRow::Child { menu, .. }
            | PermissionRow::Single { menu } => menu,
        }
    }
}

pub fn group_state(
    matrix: &PermissionMatrix,
    group: &PermissionMenu,
    action: PermissionAction,
) -> CheckState {
    let checked = group
        .children
        .iter()
        .filter(|child| matrix.get(&child.key, action))
        .count();
    CheckState::from_counts(checked, group.children.len())
}

/// Изменения для клика по ячейке группы: все дети получают одно значение.
/// Полностью отмеченная группа снимается, иначе отмечается целиком.
pub fn group_toggle_changes(
    matrix: &PermissionMatrix,
    group: &PermissionMenu,
    action: PermissionAction,
) -> Vec<PermissionChange> {
    let checked = !group_state(matrix, group, action).is_checked();
    group
        .children
        .iter()
        .map(|child| PermissionChange::new(child.key.clone(), action, checked))
        .collect()
}

/// Применяет пачку изменений от таблицы. `All` на пункте раскрывается
/// в пять конкретных действий этого пункта.
pub fn apply_changes(matrix: &mut PermissionMatrix, changes: &[PermissionChange]) {
    for change in changes {
        if change.action == PermissionAction::All {
            matrix.apply_leaf_all(&change.menu_key, change.checked);
        } else {
            matrix.set(&change.menu_key, change.action, change.checked);
        }
    }
}

/// Сначала все группы (за раскрытой группой идут её дети), затем одиночные пункты
pub fn visible_rows(menus: &[PermissionMenu], expanded: &HashSet<String>) -> Vec<PermissionRow> {
    let mut rows = Vec::new();

    for group in menus.iter().filter(|m| m.is_group()) {
        let is_expanded = expanded.contains(&group.key);
        rows.push(PermissionRow::Group {
            menu: group.clone(),
            expanded: is_expanded,
        });
        if is_expanded {
            rows.extend(group.children.iter().map(|child| PermissionRow::Child {
                menu: child.clone(),
                group_key: group.key.clone(),
            }));
        }
    }

    rows.extend(
        menus
            .iter()
            .filter(|m| !m.is_group())
            .map(|menu| PermissionRow::Single { menu: menu.clone() }),
    );

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_group() -> PermissionMenu {
        PermissionMenu::group(
            "product",
            "Product",
            vec![
                PermissionMenu::leaf("product_list", "Product List"),
                PermissionMenu::leaf("product_category", "Category"),
                PermissionMenu::leaf("product_metal", "Metal"),
            ],
        )
    }

    fn menus() -> Vec<PermissionMenu> {
        vec![
            PermissionMenu::leaf("dashboard", "Dashboard"),
            product_group(),
            PermissionMenu::leaf("pos", "POS"),
            PermissionMenu::group(
                "purchase",
                "Purchase",
                vec![PermissionMenu::leaf("purchase_list", "Purchase List")],
            ),
        ]
    }

    #[test]
    fn test_group_state_follows_children() {
        let group = product_group();
        let mut matrix = PermissionMatrix::new();
        assert_eq!(group_state(&matrix, &group, PermissionAction::View), CheckState::Unchecked);

        matrix.set("product_list", PermissionAction::View, true);
        assert_eq!(group_state(&matrix, &group, PermissionAction::View), CheckState::Indeterminate);

        matrix.set("product_category", PermissionAction::View, true);
        matrix.set("product_metal", PermissionAction::View, true);
        assert_eq!(group_state(&matrix, &group, PermissionAction::View), CheckState::Checked);
        // другое действие не затронуто
        assert_eq!(group_state(&matrix, &group, PermissionAction::Add), CheckState::Unchecked);
    }

    #[test]
    fn test_group_toggle_sets_every_child() {
        let group = product_group();
        let mut matrix = PermissionMatrix::new();
        matrix.set("product_list", PermissionAction::Update, true);

        let changes = group_toggle_changes(&matrix, &group, PermissionAction::Update);
        assert_eq!(changes.len(), 3);
        assert!(changes.iter().all(|c| c.checked && c.action == PermissionAction::Update));

        apply_changes(&mut matrix, &changes);
        assert_eq!(group_state(&matrix, &group, PermissionAction::Update), CheckState::Checked);

        let changes = group_toggle_changes(&matrix, &group, PermissionAction::Update);
        assert!(changes.iter().all(|c| !c.checked));
        apply_changes(&mut matrix, &changes);
        assert_eq!(group_state(&matrix, &group, PermissionAction::Update), CheckState::Unchecked);
    }

    #[test]
    fn test_group_without_children_is_unchecked() {
        let group = PermissionMenu::group("empty", "Empty", Vec::new());
        let matrix = PermissionMatrix::new();
        assert_eq!(group_state(&matrix, &group, PermissionAction::View), CheckState::Unchecked);
        assert!(group_toggle_changes(&matrix, &group, PermissionAction::View).is_empty());
    }

    #[test]
    fn test_all_on_leaf_expands_to_concrete_actions() {
        let mut matrix = PermissionMatrix::new();
        apply_changes(
            &mut matrix,
            &[PermissionChange::new("pos", PermissionAction::All, true)],
        );
        for action in PermissionAction::COLUMNS {
            assert!(matrix.get("pos", action), "{:?} should be set", action);
        }
    }

    #[test]
    fn test_rows_put_groups_before_singles() {
        let collapsed = visible_rows(&menus(), &HashSet::new());
        let keys: Vec<&str> = collapsed.iter().map(|r| r.menu().key.as_str()).collect();
        assert_eq!(keys, vec!["product", "purchase", "dashboard", "pos"]);

        let expanded: HashSet<String> = ["product".to_string()].into_iter().collect();
        let rows = visible_rows(&menus(), &expanded);
        let keys: Vec<&str> = rows.iter().map(|r| r.menu().key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "product",
                "product_list",
                "product_category",
                "product_metal",
                "purchase",
                "dashboard",
                "pos"
            ]
        );
        assert!(matches!(rows[0], PermissionRow::Group { expanded: true, .. }));
        assert!(matches!(rows[4], PermissionRow::Group { expanded: false, .. }));
    }
}
