use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Модальное окно: закрывается по Escape, клику по подложке и кнопке ×.
/// Закрытие только сообщает `on_close`; содержимое не трогается.
#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: Signal<String>,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Optional action buttons (Confirm, Cancel, etc.) rendered in the footer
    #[prop(optional)]
    action_buttons: Option<ChildrenFn>,
    /// Extra modifier class, e.g. `modal--lightbox`
    #[prop(optional)]
    class: &'static str,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let escape_listener = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape_listener.remove());

    let modal_class = if class.is_empty() {
        "modal".to_string()
    } else {
        format!("modal {class}")
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class=modal_class on:click=|e: ev::MouseEvent| e.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {action_buttons.map(|buttons| view! { <div class="modal-footer">{buttons()}</div> })}
            </div>
        </div>
    }
}
