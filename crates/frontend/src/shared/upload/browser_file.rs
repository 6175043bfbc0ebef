use super::image_list::{FileKey, UploadFile};
use super::preview_cache::PreviewBackend;
use web_sys::{File, FileList, Url};

/// Обёртка над `web_sys::File` из input, drop или paste
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserFile(pub File);

impl BrowserFile {
    pub fn name(&self) -> String {
        self.0.name()
    }
}

impl UploadFile for BrowserFile {
    fn key(&self) -> FileKey {
        FileKey {
            name: self.0.name(),
            size: self.0.size() as u64,
            modified: self.0.last_modified() as i64,
        }
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }
}

pub fn files_from_list(list: Option<FileList>) -> Vec<BrowserFile> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(BrowserFile)
        .collect()
}

/// Превью через `URL.createObjectURL` / `URL.revokeObjectURL`
#[derive(Debug, Default)]
pub struct ObjectUrlBackend;

impl PreviewBackend for ObjectUrlBackend {
    type File = BrowserFile;
    type Handle = String;

    fn create(&mut self, file: &BrowserFile) -> Result<String, String> {
        Url::create_object_url_with_blob(&file.0)
            .map_err(|e| format!("Failed to create object URL: {:?}", e))
    }

    fn release(&mut self, handle: String) {
        if let Err(e) = Url::revoke_object_url(&handle) {
            log::warn!("Failed to revoke object URL {}: {:?}", handle, e);
        }
    }
}
