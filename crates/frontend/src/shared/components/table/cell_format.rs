//! Форматирование ячеек таблицы по умолчанию

/// Плейсхолдер для пустых значений
pub const EMPTY_CELL: &str = "-";

/// Пустое, `None` или строка из одних пробелов превращаются в `"-"`.
pub fn display_or_dash(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => EMPTY_CELL.to_string(),
    }
}

/// Стабильный идентификатор строки таблицы
pub trait TableRowId {
    fn row_id(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_or_dash() {
        assert_eq!(display_or_dash(Some("Gold 585")), "Gold 585");
        assert_eq!(display_or_dash(Some("")), "-");
        assert_eq!(display_or_dash(Some("   \t")), "-");
        assert_eq!(display_or_dash(None), "-");
        assert_eq!(display_or_dash(Some(" 0 ")), " 0 ");
    }
}
