pub mod details;
pub mod export_dropdown;
pub mod list;
pub mod product_table;

pub use export_dropdown::{ExportDropdown, ExportScope};
pub use product_table::ProductTable;
