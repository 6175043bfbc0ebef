use chrono::NaiveDate;
use contracts::domain::a002_purchase::{PurchaseDto, PurchaseStatus};
use gloo_timers::future::TimeoutFuture;

const SUPPLIERS: [&str; 4] = ["Aurum Supply", "Silverline Ltd", "Gem House", "Pack & Gift"];

pub fn mock_purchases() -> Vec<PurchaseDto> {
    let statuses = [
        PurchaseStatus::Received,
        PurchaseStatus::Received,
        PurchaseStatus::Ordered,
        PurchaseStatus::Draft,
        PurchaseStatus::Cancelled,
    ];
    (1..=12u32)
        .map(|n| PurchaseDto {
            id: format!("po-{:04}", n),
            document_no: format!("PO-{:04}", n),
            document_date: NaiveDate::from_ymd_opt(2024, 1 + (n - 1) / 3, 1 + (n * 7) % 28)
                .unwrap_or_default(),
            supplier: SUPPLIERS[(n as usize - 1) % SUPPLIERS.len()].to_string(),
            note: (n % 4 == 0).then(|| "Urgent restock".to_string()),
            lines_count: 1 + n % 5,
            total_amount: 1_000.0 + f64::from(n) * 437.25,
            status: statuses[(n as usize - 1) % statuses.len()],
        })
        .collect()
}

pub async fn fetch_purchases() -> Result<Vec<PurchaseDto>, String> {
    TimeoutFuture::new(200).await;
    Ok(mock_purchases())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_purchases_are_unique_and_dated() {
        let rows = mock_purchases();
        assert_eq!(rows.len(), 12);
        let mut ids: Vec<&str> = rows.iter().map(|p| p.id.as_str()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 12);
        assert!(rows.iter().all(|p| p.document_date != NaiveDate::default()));
    }
}
