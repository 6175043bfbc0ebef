pub mod aggregate;

pub use aggregate::{PurchaseDto, PurchaseStatus};
