use super::model::ProductForm;
use crate::domain::a001_product::mock;
use crate::shared::upload::{BrowserFile, UploadFile};
use contracts::domain::a001_product::ProductDto;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;

const UPLOAD_STEP_MS: u32 = 150;
const UPLOAD_STEPS: [u8; 5] = [20, 40, 60, 80, 100];

/// ViewModel формы изделия
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductForm>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub images: RwSignal<Vec<BrowserFile>, LocalStorage>,
    /// `FileKey::to_string()` → проценты
    pub progress: RwSignal<HashMap<String, u8>>,
    pub uploading: RwSignal<bool>,
}

impl ProductDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProductForm::default()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            images: RwSignal::new_local(Vec::new()),
            progress: RwSignal::new(HashMap::new()),
            uploading: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.is_edit_mode())
    }

    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(id) = id else {
            return;
        };
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match mock::fetch_product(&id).await {
                Ok(dto) => this.form.set(ProductForm::from_dto(&dto)),
                Err(e) => {
                    log::error!("Failed to load product {}: {}", id, e);
                    this.error.set(Some(e));
                }
            }
            this.loading.set(false);
        });
    }

    /// Имитация загрузки: прогресс по каждому файлу, затем пути в форму
    pub fn upload_images(&self) {
        let (keys, names): (Vec<String>, Vec<String>) = self.images.with_untracked(|files| {
            files
                .iter()
                .map(|f| (f.key().to_string(), f.name()))
                .unzip()
        });
        if keys.is_empty() || self.uploading.get_untracked() {
            return;
        }

        let this = *self;
        this.uploading.set(true);
        this.progress
            .set(keys.iter().map(|k| (k.clone(), 0)).collect());

        spawn_local(async move {
            for step in UPLOAD_STEPS {
                TimeoutFuture::new(UPLOAD_STEP_MS).await;
                this.progress.update(|p| {
                    for key in &keys {
                        p.insert(key.clone(), step);
                    }
                });
            }
            log::info!("Uploaded {} image(s)", names.len());
            this.form.update(|f| {
                f.images = names.iter().map(|n| format!("uploads/{}", n)).collect();
            });
            this.uploading.set(false);
        });
    }

    pub fn save_command(&self, on_saved: Callback<ProductDto>) {
        match self.form.with_untracked(ProductForm::to_dto) {
            Ok(dto) => {
                self.error.set(None);
                log::info!("Product {} saved", dto.code);
                on_saved.run(dto);
            }
            Err(e) => {
                log::debug!("Product form rejected: {}", e);
                self.error.set(Some(e));
            }
        }
    }
}
