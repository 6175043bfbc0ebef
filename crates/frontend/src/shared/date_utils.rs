/// Форматирование дат для таблиц
use chrono::NaiveDate;

/// `2024-03-15` → `15.03.2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// ISO-строка даты или даты-времени → `15.03.2024`; нераспознанное возвращается как есть
pub fn format_date_str(value: &str) -> String {
    let date_part = value.split('T').next().unwrap_or(value);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => format_date(date),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(date), "05.03.2024");
    }

    #[test]
    fn test_format_date_str() {
        assert_eq!(format_date_str("2024-03-15T14:02:26Z"), "15.03.2024");
        assert_eq!(format_date_str("2024-03-15"), "15.03.2024");
        assert_eq!(format_date_str("yesterday"), "yesterday");
    }
}
