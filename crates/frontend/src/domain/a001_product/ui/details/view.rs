use super::model::ProductForm;
use super::view_model::ProductDetailsViewModel;
use crate::shared::components::AccessoriesImagesCard;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_product::{ProductDto, ProductStatus};
use leptos::prelude::*;
use thaw::*;

fn form_field(
    vm: ProductDetailsViewModel,
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    get: fn(&ProductForm) -> String,
    set: fn(&mut ProductForm, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type="text"
                id=id
                prop:value=move || vm.form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.form.update(|f| set(f, value));
                }
                placeholder=placeholder
            />
        </div>
    }
}

/// Карточка изделия: новая (`id = None`) или существующая
#[component]
pub fn ProductFormPage(
    id: Option<String>,
    on_saved: Callback<ProductDto>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new();
    vm.load_if_needed(id);

    view! {
        <PageFrame page_id="a001_product--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if vm.is_edit_mode() { "Edit product" } else { "New product" }}
                    </h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save_command(on_saved)
                        disabled=Signal::derive(move || vm.loading.get() || vm.uploading.get())
                    >
                        {move || if vm.is_edit_mode() { "Save" } else { "Create" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                        {icon("x")}
                        " Cancel"
                    </Button>
                </div>
            </div>

            <div class="page__content details-form">
                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <Show when=move || vm.loading.get()>
                    <div class="alert alert--info">"Loading..."</div>
                </Show>

                <div class="details-grid">
                    <div class="card">
                        {form_field(vm, "code", "Code", "RNG-1001", |f| f.code.clone(), |f, v| f.code = v)}
                        {form_field(vm, "name", "Name", "Product name", |f| f.name.clone(), |f, v| f.name = v)}
                        {form_field(vm, "category", "Category", "Rings, Necklaces...", |f| f.category.clone(), |f, v| f.category = v)}
                        {form_field(vm, "metal", "Metal", "Gold 585", |f| f.metal.clone(), |f, v| f.metal = v)}
                        {form_field(vm, "weight", "Weight, g", "0.00", |f| f.weight.clone(), |f, v| f.weight = v)}
                        {form_field(vm, "price", "Price", "0.00", |f| f.price.clone(), |f, v| f.price = v)}
                        {form_field(vm, "stock", "Stock", "0", |f| f.stock.clone(), |f, v| f.stock = v)}
                        <label class="form__checkbox-wrapper">
                            <input
                                type="checkbox"
                                class="form__checkbox"
                                prop:checked=move || vm.form.with(|f| f.status.is_active())
                                on:change=move |ev| {
                                    let status = if event_target_checked(&ev) {
                                        ProductStatus::Active
                                    } else {
                                        ProductStatus::Inactive
                                    };
                                    vm.form.update(|f| f.status = status);
                                }
                            />
                            <span class="form__checkbox-label">"Active"</span>
                        </label>
                    </div>

                    <div>
                        <AccessoriesImagesCard
                            files=vm.images
                            progress=vm.progress
                            title="Product images"
                        />
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| vm.upload_images()
                            disabled=Signal::derive(move || {
                                vm.uploading.get() || vm.images.with(|f| f.is_empty())
                            })
                        >
                            {icon("upload")}
                            {move || if vm.uploading.get() { " Uploading..." } else { " Upload" }}
                        </Button>
                        {move || {
                            let uploaded = vm.form.with(|f| f.images.clone());
                            (!uploaded.is_empty()).then(|| view! {
                                <ul class="images-card__uploaded">
                                    {uploaded.into_iter().map(|path| view! { <li>{path}</li> }).collect_view()}
                                </ul>
                            })
                        }}
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
