use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseStatus {
    Draft,
    Ordered,
    Received,
    Cancelled,
}

impl PurchaseStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PurchaseStatus::Draft => "Draft",
            PurchaseStatus::Ordered => "Ordered",
            PurchaseStatus::Received => "Received",
            PurchaseStatus::Cancelled => "Cancelled",
        }
    }

    /// BEM-модификатор бейджа
    pub fn badge_modifier(&self) -> &'static str {
        match self {
            PurchaseStatus::Draft => "neutral",
            PurchaseStatus::Ordered => "warning",
            PurchaseStatus::Received => "success",
            PurchaseStatus::Cancelled => "error",
        }
    }
}

/// Документ закупки у поставщика
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseDto {
    pub id: String,
    pub document_no: String,
    pub document_date: NaiveDate,
    pub supplier: String,
    /// Комментарий закупщика, может быть пустым
    pub note: Option<String>,
    pub lines_count: u32,
    pub total_amount: f64,
    pub status: PurchaseStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchase_round_trips_through_json() {
        let dto = PurchaseDto {
            id: "p-1".into(),
            document_no: "PO-0001".into(),
            document_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            supplier: "Aurum Supply".into(),
            note: None,
            lines_count: 3,
            total_amount: 1250.5,
            status: PurchaseStatus::Ordered,
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["document_date"], "2024-03-15");
        assert_eq!(json["status"], "ordered");
        let back: PurchaseDto = serde_json::from_value(json).unwrap();
        assert_eq!(back, dto);
    }
}
