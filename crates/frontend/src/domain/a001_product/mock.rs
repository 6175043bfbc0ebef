//! Демонстрационный каталог вместо серверного API

use contracts::domain::a001_product::{ProductDto, ProductStatus};
use gloo_timers::future::TimeoutFuture;

const LATENCY_MS: u32 = 200;

fn product(
    id: &str,
    code: &str,
    name: &str,
    category: &str,
    metal: Option<&str>,
    weight_grams: Option<f64>,
    price: f64,
    stock: u32,
    status: ProductStatus,
) -> ProductDto {
    ProductDto {
        id: id.to_string(),
        code: code.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        metal: metal.map(String::from),
        weight_grams,
        price,
        stock,
        status,
        images: Vec::new(),
    }
}

pub fn mock_products() -> Vec<ProductDto> {
    vec![
        product(
            "p-1001",
            "RNG-1001",
            "Solitaire Ring",
            "Rings",
            Some("Gold 585"),
            Some(3.2),
            1250.0,
            4,
            ProductStatus::Active,
        ),
        product(
            "p-1002",
            "NCK-1001",
            "Pearl Necklace",
            "Necklaces",
            Some("Silver 925"),
            Some(18.5),
            890.0,
            2,
            ProductStatus::Active,
        ),
        product(
            "p-1003",
            "BRC-1001",
            "Tennis Bracelet",
            "Bracelets",
            Some("White gold 750"),
            Some(9.8),
            3400.0,
            1,
            ProductStatus::Inactive,
        ),
        product(
            "p-1004",
            "ERG-1001",
            "Drop Earrings",
            "Earrings",
            Some("Gold 585"),
            Some(4.1),
            760.0,
            6,
            ProductStatus::Active,
        ),
        product(
            "p-1005",
            "CHN-1001",
            "Gift Box Set",
            "Accessories",
            None,
            None,
            45.0,
            30,
            ProductStatus::Active,
        ),
    ]
}

pub async fn fetch_products() -> Result<Vec<ProductDto>, String> {
    TimeoutFuture::new(LATENCY_MS).await;
    Ok(mock_products())
}

pub async fn fetch_product(id: &str) -> Result<ProductDto, String> {
    TimeoutFuture::new(LATENCY_MS).await;
    mock_products()
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(|| format!("Product '{}' not found", id))
}
