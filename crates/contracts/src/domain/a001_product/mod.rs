pub mod aggregate;

pub use aggregate::{ProductDto, ProductStatus};
