use contracts::domain::a001_product::{ProductDto, ProductStatus};

/// Поля формы в том виде, в каком их редактирует пользователь
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub id: Option<String>,
    pub code: String,
    pub name: String,
    pub category: String,
    pub metal: String,
    pub weight: String,
    pub price: String,
    pub stock: String,
    pub status: ProductStatus,
    pub images: Vec<String>,
}

impl ProductForm {
    pub fn from_dto(dto: &ProductDto) -> Self {
        Self {
            id: Some(dto.id.clone()),
            code: dto.code.clone(),
            name: dto.name.clone(),
            category: dto.category.clone(),
            metal: dto.metal.clone().unwrap_or_default(),
            weight: dto.weight_grams.map(|w| w.to_string()).unwrap_or_default(),
            price: dto.price.to_string(),
            stock: dto.stock.to_string(),
            status: dto.status,
            images: dto.images.clone(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    /// Проверяет форму и собирает DTO; новая карточка получает новый id
    pub fn to_dto(&self) -> Result<ProductDto, String> {
        let code = self.code.trim();
        if code.is_empty() {
            return Err("Code is required".to_string());
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required".to_string());
        }
        let category = self.category.trim();
        if category.is_empty() {
            return Err("Category is required".to_string());
        }

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| format!("Invalid price '{}'", self.price))?;
        if price < 0.0 {
            return Err("Price cannot be negative".to_string());
        }

        let weight_grams = match self.weight.trim() {
            "" => None,
            value => Some(
                value
                    .parse::<f64>()
                    .map_err(|_| format!("Invalid weight '{}'", value))?,
            ),
        };

        let stock = match self.stock.trim() {
            "" => 0,
            value => value
                .parse::<u32>()
                .map_err(|_| format!("Invalid stock '{}'", value))?,
        };

        let metal = self.metal.trim();

        Ok(ProductDto {
            id: self.id.clone().unwrap_or_else(ProductDto::new_id),
            code: code.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            metal: (!metal.is_empty()).then(|| metal.to_string()),
            weight_grams,
            price,
            stock,
            status: self.status,
            images: self.images.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::mock::mock_products;

    fn filled() -> ProductForm {
        ProductForm {
            code: " RNG-2001 ".into(),
            name: "Eternity Ring".into(),
            category: "Rings".into(),
            price: "980.5".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_form_gets_fresh_id() {
        let dto = filled().to_dto().unwrap();
        assert_eq!(dto.code, "RNG-2001");
        assert!(!dto.id.is_empty());
        assert_eq!(dto.metal, None);
        assert_eq!(dto.weight_grams, None);
        assert_eq!(dto.stock, 0);
    }

    #[test]
    fn test_round_trip_keeps_existing_id() {
        let source = mock_products().remove(0);
        let dto = ProductForm::from_dto(&source).to_dto().unwrap();
        assert_eq!(dto, source);
    }

    #[test]
    fn test_validation_errors() {
        let mut form = filled();
        form.price = "abc".into();
        assert!(form.to_dto().is_err());

        let mut form = filled();
        form.name = "   ".into();
        assert_eq!(form.to_dto().unwrap_err(), "Name is required");

        let mut form = filled();
        form.stock = "-1".into();
        assert!(form.to_dto().is_err());
    }
}
