/// Выгрузка строк таблицы в CSV (открывается в Excel)
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Тип, который умеет превращаться в строку CSV
pub trait CsvExportable {
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

/// Собирает CSV: BOM, заголовки, строки через `;`
pub fn build_csv<T: CsvExportable>(data: &[T]) -> Result<String, String> {
    if data.is_empty() {
        return Err("Nothing to export".to_string());
    }

    // BOM, чтобы Excel распознал UTF-8
    let mut csv = String::from('\u{FEFF}');
    csv.push_str(&T::headers().join(";"));
    csv.push('\n');

    for item in data {
        let row: Vec<String> = item.to_csv_row().iter().map(|cell| escape_csv_cell(cell)).collect();
        csv.push_str(&row.join(";"));
        csv.push('\n');
    }

    Ok(csv)
}

/// Собирает CSV и инициирует скачивание в браузере
pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    let csv = build_csv(data)?;
    let blob = create_csv_blob(&csv)?;
    download_blob(&blob, filename)
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let result = body
        .append_child(&anchor)
        .map(|_| anchor.click())
        .and_then(|_| body.remove_child(&anchor).map(|_| ()))
        .map_err(|e| format!("Failed to trigger download: {:?}", e));

    // URL освобождается при любом исходе
    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line {
        code: &'static str,
        note: &'static str,
    }

    impl CsvExportable for Line {
        fn headers() -> Vec<&'static str> {
            vec!["Code", "Note"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.code.to_string(), self.note.to_string()]
        }
    }

    #[test]
    fn test_build_csv_escapes_cells() {
        let csv = build_csv(&[
            Line { code: "RNG-1001", note: "plain" },
            Line { code: "CHN-1001", note: "18\" chain; gold" },
        ])
        .unwrap();
        assert_eq!(
            csv,
            "\u{FEFF}Code;Note\nRNG-1001;plain\nCHN-1001;\"18\"\" chain; gold\"\n"
        );
    }

    #[test]
    fn test_build_csv_rejects_empty() {
        assert!(build_csv::<Line>(&[]).is_err());
    }
}
