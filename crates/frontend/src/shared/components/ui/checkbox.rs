use leptos::prelude::*;

/// Состояние чекбокса с тремя значениями
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckState {
    #[default]
    Unchecked,
    Checked,
    Indeterminate,
}

impl CheckState {
    /// Сводит "отмечено k из n" к одному состоянию. Пустой набор: `Unchecked`.
    pub fn from_counts(checked: usize, total: usize) -> Self {
        if total == 0 || checked == 0 {
            CheckState::Unchecked
        } else if checked >= total {
            CheckState::Checked
        } else {
            CheckState::Indeterminate
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, CheckState::Checked)
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, CheckState::Indeterminate)
    }

    /// Значение после клика: из `Checked` в `false`, из остальных в `true`
    pub fn next_value(&self) -> bool {
        !self.is_checked()
    }
}

impl From<bool> for CheckState {
    fn from(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }
}

/// Checkbox component with checked / indeterminate / unchecked states.
///
/// The component is controlled: `on_change` receives the value the caller
/// should store, and the visual state follows `state` only.
#[component]
pub fn Checkbox(
    /// Current state
    #[prop(into)]
    state: Signal<CheckState>,
    /// Receives the requested value (`true` = check)
    on_change: Callback<bool>,
    /// Optional label text
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
    /// Additional CSS classes for wrapper
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate существует только как DOM-свойство
    Effect::new(move |_| {
        let indeterminate = state.get().is_indeterminate();
        if let Some(input) = input_ref.get() {
            input.set_indeterminate(indeterminate);
        }
    });

    let wrapper_class = move || {
        let extra = class.get().unwrap_or_default();
        if disabled {
            format!("form__checkbox-wrapper form__checkbox-wrapper--disabled {}", extra)
        } else {
            format!("form__checkbox-wrapper {}", extra)
        }
    };

    view! {
        <label class=wrapper_class>
            <input
                node_ref=input_ref
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || state.get().is_checked()
                disabled=disabled
                on:change=move |_| on_change.run(state.get_untracked().next_value())
            />
            {move || label.get().map(|text| view! { <span class="form__checkbox-label">{text}</span> })}
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_counts() {
        assert_eq!(CheckState::from_counts(0, 0), CheckState::Unchecked);
        assert_eq!(CheckState::from_counts(0, 3), CheckState::Unchecked);
        assert_eq!(CheckState::from_counts(2, 3), CheckState::Indeterminate);
        assert_eq!(CheckState::from_counts(3, 3), CheckState::Checked);
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(CheckState::from(true), CheckState::Checked);
        assert_eq!(CheckState::from(false), CheckState::Unchecked);
    }

    #[test]
    fn test_next_value() {
        assert!(CheckState::Unchecked.next_value());
        assert!(CheckState::Indeterminate.next_value());
        assert!(!CheckState::Checked.next_value());
    }
}
