use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Status
// ============================================================================

/// Статус карточки изделия в каталоге
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
}

impl ProductStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, ProductStatus::Active)
    }

    pub fn toggled(&self) -> Self {
        match self {
            ProductStatus::Active => ProductStatus::Inactive,
            ProductStatus::Inactive => ProductStatus::Active,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Active => "Active",
            ProductStatus::Inactive => "Inactive",
        }
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Изделие каталога (кольцо, цепь, серьги и т.д.)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: String,

    /// Артикул, например `RNG-1001`
    pub code: String,

    pub name: String,

    /// Категория каталога: Rings, Necklaces, Accessories, ...
    pub category: String,

    /// Металл и проба, например `Gold 585`
    pub metal: Option<String>,

    /// Вес в граммах
    #[serde(rename = "weightGrams")]
    pub weight_grams: Option<f64>,

    pub price: f64,

    pub stock: u32,

    pub status: ProductStatus,

    /// Пути к изображениям на стороне хранилища
    #[serde(default)]
    pub images: Vec<String>,
}

impl ProductDto {
    /// Новый идентификатор для карточки, ещё не сохранённой на сервере
    pub fn new_id() -> String {
        Uuid::new_v4().to_string()
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_toggle_flips_between_two_states() {
        assert_eq!(ProductStatus::Active.toggled(), ProductStatus::Inactive);
        assert_eq!(ProductStatus::Inactive.toggled(), ProductStatus::Active);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&ProductStatus::Inactive).unwrap();
        assert_eq!(json, "\"inactive\"");
    }

    #[test]
    fn new_ids_are_unique() {
        assert_ne!(ProductDto::new_id(), ProductDto::new_id());
    }
}
