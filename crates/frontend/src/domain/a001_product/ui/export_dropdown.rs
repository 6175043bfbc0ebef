//! Выпадающий список выгрузки каталога в CSV

use leptos::prelude::*;

const VALUE_FILTERED: &str = "filtered";
const VALUE_SELECTED: &str = "selected";
const CATEGORY_PREFIX: &str = "category:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportScope {
    /// Все строки после фильтра
    Filtered,
    Selected,
    Category(String),
}

/// Значение `<option>` → область выгрузки.
/// Категория должна присутствовать в текущем списке категорий.
pub fn resolve_export_scope(value: &str, categories: &[String]) -> Result<ExportScope, String> {
    match value {
        VALUE_FILTERED => Ok(ExportScope::Filtered),
        VALUE_SELECTED => Ok(ExportScope::Selected),
        other => {
            let category = other
                .strip_prefix(CATEGORY_PREFIX)
                .ok_or_else(|| format!("Unknown export option '{}'", other))?;
            categories
                .iter()
                .find(|c| c.as_str() == category)
                .cloned()
                .map(ExportScope::Category)
                .ok_or_else(|| format!("Category '{}' is not available", category))
        }
    }
}

#[component]
pub fn ExportDropdown(
    #[prop(into)]
    categories: Signal<Vec<String>>,

    #[prop(into)]
    selected_count: Signal<usize>,

    on_export: Callback<ExportScope>,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        let select = event_target::<web_sys::HtmlSelectElement>(&ev);
        let value = select.value();
        // список снова показывает подсказку
        select.set_value("");
        if value.is_empty() {
            return;
        }
        match resolve_export_scope(&value, &categories.get_untracked()) {
            Ok(scope) => on_export.run(scope),
            // выгрузка молча отменяется
            Err(e) => log::warn!("Export aborted: {}", e),
        }
    };

    view! {
        <select class="export-dropdown" on:change=on_change>
            <option value="" selected=true>"Export CSV..."</option>
            <option value=VALUE_FILTERED>"All filtered rows"</option>
            <option value=VALUE_SELECTED disabled=move || selected_count.get() == 0>
                {move || format!("Selected ({})", selected_count.get())}
            </option>
            <optgroup label="By category">
                {move || categories.get().into_iter().map(|category| {
                    let value = format!("{}{}", CATEGORY_PREFIX, category);
                    view! { <option value=value>{category}</option> }
                }).collect_view()}
            </optgroup>
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cats() -> Vec<String> {
        vec!["Rings".to_string(), "Accessories".to_string()]
    }

    #[test]
    fn test_resolves_known_options() {
        assert_eq!(resolve_export_scope("filtered", &cats()), Ok(ExportScope::Filtered));
        assert_eq!(resolve_export_scope("selected", &cats()), Ok(ExportScope::Selected));
        assert_eq!(
            resolve_export_scope("category:Accessories", &cats()),
            Ok(ExportScope::Category("Accessories".to_string()))
        );
    }

    #[test]
    fn test_unknown_category_fails() {
        assert!(resolve_export_scope("category:Watches", &cats()).is_err());
        assert!(resolve_export_scope("everything", &cats()).is_err());
    }
}
