//! Привязки изделия к таблице и выгрузке

use crate::shared::components::table::{format_amount, TableRowId, EMPTY_CELL};
use crate::shared::export::CsvExportable;
use contracts::domain::a001_product::ProductDto;

impl TableRowId for ProductDto {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

impl CsvExportable for ProductDto {
    fn headers() -> Vec<&'static str> {
        vec!["Code", "Name", "Category", "Metal", "Weight, g", "Price", "Stock", "Status"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.name.clone(),
            self.category.clone(),
            self.metal.clone().unwrap_or_else(|| EMPTY_CELL.to_string()),
            self.weight_grams
                .map(|w| format_amount(w, 2))
                .unwrap_or_else(|| EMPTY_CELL.to_string()),
            format_amount(self.price, 2),
            self.stock.to_string(),
            self.status.label().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::mock::mock_products;
    use crate::shared::export::build_csv;

    #[test]
    fn test_csv_row_uses_dash_for_missing_values() {
        let products = mock_products();
        let gift = products.iter().find(|p| p.code == "CHN-1001").unwrap();
        let row = gift.to_csv_row();
        assert_eq!(row[3], "-");
        assert_eq!(row[4], "-");
        assert_eq!(row[5], "45.00");
    }

    #[test]
    fn test_csv_has_header_and_one_line_per_product() {
        let csv = build_csv(&mock_products()).unwrap();
        assert_eq!(csv.lines().count(), 6);
        assert!(csv.starts_with("\u{FEFF}Code;Name;Category"));
    }
}
