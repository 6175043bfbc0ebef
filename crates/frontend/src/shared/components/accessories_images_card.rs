//! AccessoriesImagesCard: изображения изделия: выбор, drag&drop, вставка из буфера.
//!
//! Список файлов живёт в сигнале владельца (`files`). Все операции читают
//! его через `get_untracked()` в момент события и пишут синхронно, поэтому
//! два быстрых drop подряд видят результат друг друга.
//!
//! Превью: объектные URL из `PreviewCache`: после каждого изменения списка
//! кэш освобождает URL удалённых файлов и создаёт URL для новых; при
//! размонтировании освобождается всё.

use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::upload::{
    files_from_list, BrowserFile, FileKey, ImageList, ObjectUrlBackend, PreviewCache, UploadFile,
    ALLOWED_IMAGE_TYPES, DEFAULT_MAX_IMAGES,
};
use leptos::ev;
use leptos::prelude::*;
use std::collections::{BTreeMap, HashMap};
use wasm_bindgen::JsCast;

#[component]
pub fn AccessoriesImagesCard(
    /// Текущий список файлов (читается и пишется карточкой)
    files: RwSignal<Vec<BrowserFile>, LocalStorage>,

    /// Максимум файлов, по умолчанию DEFAULT_MAX_IMAGES
    #[prop(optional)]
    max: Option<usize>,

    /// Прогресс загрузки: `FileKey::to_string()` → проценты
    #[prop(optional, into)]
    progress: Option<Signal<HashMap<String, u8>>>,

    #[prop(optional, into)]
    title: MaybeProp<String>,
) -> impl IntoView {
    let max = max.unwrap_or(DEFAULT_MAX_IMAGES);
    let cache = StoredValue::new_local(PreviewCache::new(ObjectUrlBackend));
    let previews: RwSignal<BTreeMap<FileKey, String>> = RwSignal::new(BTreeMap::new());
    let viewing: RwSignal<Option<FileKey>> = RwSignal::new(None);
    let (is_dragging, set_is_dragging) = signal(false);

    // Список длиннее лимита или с повторными ключами (ошибка владельца)
    // исправляется один раз и записывается обратно; исправленный список
    // повторной правки не требует.
    Effect::new(move |_| {
        let current = files.get();
        let (list, corrected) = ImageList::from_external(current, max);
        if corrected {
            log::warn!("Image list corrected to {} unique files (limit {})", list.len(), max);
            files.set(list.into_files());
            return;
        }
        cache.update_value(|c| c.sync(list.files()));
        previews.set(cache.with_value(|c| c.snapshot()));
    });

    on_cleanup(move || {
        cache.try_update_value(|c| c.release_all());
    });

    let add_files = move |incoming: Vec<BrowserFile>| {
        if incoming.is_empty() {
            return;
        }
        let (mut list, _) = ImageList::from_external(files.get_untracked(), max);
        let outcome = list.add(incoming);
        if outcome.rejected_type > 0 || outcome.over_capacity > 0 || outcome.duplicate > 0 {
            log::debug!(
                "Images skipped: {} unsupported type, {} already added, {} over the limit of {}",
                outcome.rejected_type,
                outcome.duplicate,
                outcome.over_capacity,
                max
            );
        }
        files.set(list.into_files());
    };

    let remove_at = move |index: usize| {
        files.update(|current| {
            if index < current.len() {
                current.remove(index);
            }
        });
    };

    let remove_all = move |_| files.update(|current| current.clear());

    let on_input_change = move |ev: ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        add_files(files_from_list(input.files()));
        // тот же файл можно выбрать повторно
        input.set_value("");
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
        add_files(files_from_list(ev.data_transfer().and_then(|dt| dt.files())));
    };

    let on_paste = move |ev: ev::ClipboardEvent| {
        let pasted = files_from_list(ev.clipboard_data().and_then(|dt| dt.files()));
        if !pasted.is_empty() {
            ev.prevent_default();
            add_files(pasted);
        }
    };

    let count_label = move || format!("{} / {}", files.with(|f| f.len()), max);
    let is_full = move || files.with(|f| f.len() >= max);

    let thumbnails = move || {
        let urls = previews.get();
        let percents = progress.map(|p| p.get()).unwrap_or_default();
        let keys: Vec<FileKey> = files.with(|f| f.iter().map(UploadFile::key).collect());

        keys.into_iter()
            .enumerate()
            .map(|(index, key)| {
                let url = urls.get(&key).cloned();
                let percent = percents.get(&key.to_string()).copied();
                let name = key.name.clone();
                let key_for_view = key.clone();
                view! {
                    <div class="images-card__item" title=name.clone()>
                        {match url {
                            Some(src) => view! {
                                <img
                                    class="images-card__thumb"
                                    src=src
                                    alt=name.clone()
                                    on:click=move |_| viewing.set(Some(key_for_view.clone()))
                                />
                            }.into_any(),
                            None => view! { <div class="images-card__thumb images-card__thumb--empty">{icon("image")}</div> }.into_any(),
                        }}
                        {percent.filter(|p| *p < 100).map(|p| view! {
                            <div class="images-card__progress">
                                <div class="images-card__progress-bar" style=format!("width: {}%;", p)></div>
                            </div>
                        })}
                        <button
                            class="button button--icon images-card__remove"
                            title="Remove"
                            on:click=move |_| remove_at(index)
                        >
                            {icon("x")}
                        </button>
                    </div>
                }
            })
            .collect_view()
    };

    let lightbox = move || {
        let key = viewing.get()?;
        let url = previews.with(|p| p.get(&key).cloned())?;
        let name = key.name.clone();
        Some(view! {
            <Modal
                title=name.clone()
                on_close=Callback::new(move |_| viewing.set(None))
                class="modal--lightbox"
            >
                <img class="lightbox__image" src=url alt=name />
            </Modal>
        })
    };

    view! {
        <div
            class="card images-card"
            class:images-card--dragging=is_dragging
            tabindex="0"
            on:dragover=move |ev: ev::DragEvent| {
                ev.prevent_default();
                set_is_dragging.set(true);
            }
            on:dragleave=move |_| set_is_dragging.set(false)
            on:drop=on_drop
            on:paste=on_paste
        >
            <div class="card__header">
                <h3 class="card__title">
                    {move || title.get().unwrap_or_else(|| "Images".to_string())}
                </h3>
                <span class="images-card__count">{count_label}</span>
                <button
                    class="button button--ghost button--small"
                    disabled=move || files.with(|f| f.is_empty())
                    on:click=remove_all
                >
                    {icon("trash")}
                    " Remove all"
                </button>
            </div>
            <div class="images-card__grid">
                {thumbnails}
                <Show when=move || !is_full()>
                    <label class="images-card__add">
                        {icon("upload")}
                        <span>"Add images"</span>
                        <input
                            type="file"
                            class="images-card__input"
                            accept=ALLOWED_IMAGE_TYPES.join(",")
                            multiple=true
                            on:change=on_input_change
                        />
                    </label>
                </Show>
            </div>
            <p class="images-card__hint">"Drop, paste or choose JPEG, PNG, WebP or GIF files"</p>
            {lightbox}
        </div>
    }
}
