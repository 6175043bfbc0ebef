use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Состояние оболочки: открытые табы, активный таб, видимость сайдбара
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Синхронизирует активный таб с `?active=...` в адресной строке
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get("active").cloned() {
            log::debug!("Restoring tab from URL: '{}'", active_key);
            let exists = self
                .opened
                .with_untracked(|tabs| tab_index(tabs, &active_key).is_some());
            if !exists {
                let title = super::tabs::tab_label_for_key(&active_key);
                let title = if title.is_empty() { active_key.as_str() } else { title };
                self.open_tab(&active_key, title);
            } else {
                self.activate_tab(&active_key);
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let added = self
            .opened
            .try_update(|tabs| push_tab(tabs, key, title))
            .unwrap_or(false);
        if added {
            log::debug!("Tab opened: key='{}', title='{}'", key, title);
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        self.opened.update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                tab.title = new_title.to_string();
            }
        });
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("Tab closed: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

fn tab_index(tabs: &[Tab], key: &str) -> Option<usize> {
    tabs.iter().position(|tab| tab.key == key)
}

/// Добавляет таб, если ключа ещё нет. Возвращает `true`, если таб добавлен.
fn push_tab(tabs: &mut Vec<Tab>, key: &str, title: &str) -> bool {
    if tab_index(tabs, key).is_some() {
        return false;
    }
    tabs.push(Tab {
        key: key.to_string(),
        title: title.to_string(),
    });
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_tab_keeps_keys_unique() {
        let mut tabs = Vec::new();
        assert!(push_tab(&mut tabs, "a001_product", "Products"));
        assert!(push_tab(&mut tabs, "sys_users", "Users"));
        assert!(!push_tab(&mut tabs, "a001_product", "Products again"));
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].title, "Products");
        assert_eq!(tab_index(&tabs, "sys_users"), Some(1));
    }

    #[test]
    fn test_push_tab_stores_key_and_title_only() {
        let mut tabs = Vec::new();
        push_tab(&mut tabs, "a002_purchase", "Purchases");
        assert_eq!(
            tabs,
            vec![Tab {
                key: "a002_purchase".to_string(),
                title: "Purchases".to_string(),
            }]
        );
    }
}
