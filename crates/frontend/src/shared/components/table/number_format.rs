//! Числа в ячейках: цены, вес, количество

/// Разделитель тысяч: запятая, дробная часть через точку: `1,234.50`
pub fn format_amount(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, fraction) = match formatted.split_once('.') {
        Some((int, frac)) => (int.to_string(), Some(frac.to_string())),
        None => (formatted.clone(), None),
    };

    let digits: Vec<char> = integer_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    match fraction {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

pub fn format_price(value: f64) -> String {
    format!("${}", format_amount(value, 2))
}

/// Вес изделия в граммах
pub fn format_weight(grams: f64) -> String {
    format!("{} g", format_amount(grams, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1234.5, 2), "1,234.50");
        assert_eq!(format_amount(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_amount(999.0, 0), "999");
        assert_eq!(format_amount(0.0, 2), "0.00");
        assert_eq!(format_amount(-1500.0, 0), "-1,500");
        assert_eq!(format_amount(-0.001, 2), "0.00");
    }

    #[test]
    fn test_price_and_weight() {
        assert_eq!(format_price(2450.0), "$2,450.00");
        assert_eq!(format_weight(3.456), "3.46 g");
    }
}
