//! Описание колонки таблицы: ключ, заголовок, ширина и способ отображения.

use super::cell_format::display_or_dash;
use leptos::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

type ValueFn<T> = Arc<dyn Fn(&T) -> Option<String> + Send + Sync>;
type RenderFn<T> = Arc<dyn Fn(Option<String>, &T, usize) -> AnyView + Send + Sync>;

pub struct Column<T> {
    pub key: &'static str,
    pub header: String,
    /// CSS-ширина, например `"120px"`
    pub width: Option<String>,
    interactive: bool,
    value: ValueFn<T>,
    render: Option<RenderFn<T>>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            header: self.header.clone(),
            width: self.width.clone(),
            interactive: self.interactive,
            value: self.value.clone(),
            render: self.render.clone(),
        }
    }
}

impl<T> Column<T> {
    /// `value` читает поле строки; строку нельзя изменять при отображении
    pub fn new(
        key: &'static str,
        header: impl Into<String>,
        value: impl Fn(&T) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            header: header.into(),
            width: None,
            interactive: false,
            value: Arc::new(value),
            render: None,
        }
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Переопределяет отображение: `(значение, строка, абсолютный номер)`
    pub fn render(
        mut self,
        render: impl Fn(Option<String>, &T, usize) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    /// Клики внутри ячейки не доходят до обработчика строки
    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn value(&self, row: &T) -> Option<String> {
        (self.value)(row)
    }

    pub fn cell_text(&self, row: &T) -> String {
        display_or_dash(self.value(row).as_deref())
    }

    pub fn render_cell(&self, row: &T, absolute_index: usize) -> AnyView {
        match &self.render {
            Some(render) => render(self.value(row), row, absolute_index),
            None => {
                let text = self.cell_text(row);
                view! { <span>{text}</span> }.into_any()
            }
        }
    }
}

/// Ключи колонок должны быть уникальны в пределах таблицы
pub fn validate_columns<T>(columns: &[Column<T>]) -> Result<(), String> {
    let mut seen = HashSet::new();
    for column in columns {
        if !seen.insert(column.key) {
            return Err(format!("Duplicate column key '{}'", column.key));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ring {
        code: String,
        metal: Option<String>,
    }

    fn columns() -> Vec<Column<Ring>> {
        vec![
            Column::new("code", "Code", |r: &Ring| Some(r.code.clone())),
            Column::new("metal", "Metal", |r: &Ring| r.metal.clone()).width("120px"),
        ]
    }

    #[test]
    fn test_cell_text_falls_back_to_dash() {
        let ring = Ring {
            code: "RNG-1001".into(),
            metal: Some("  ".into()),
        };
        let cols = columns();
        assert_eq!(cols[0].cell_text(&ring), "RNG-1001");
        assert_eq!(cols[1].cell_text(&ring), "-");
        assert_eq!(cols[1].width.as_deref(), Some("120px"));
    }

    #[test]
    fn test_validate_columns() {
        let mut cols = columns();
        assert!(validate_columns(&cols).is_ok());
        cols.push(Column::new("code", "Code again", |r: &Ring| Some(r.code.clone())));
        let err = validate_columns(&cols).unwrap_err();
        assert!(err.contains("code"));
    }

    #[test]
    fn test_interactive_flag() {
        let col = Column::new("actions", "", |_: &Ring| None).interactive();
        assert!(col.is_interactive());
        assert!(!columns()[0].is_interactive());
    }
}
