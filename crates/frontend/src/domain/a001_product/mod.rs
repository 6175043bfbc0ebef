pub mod filter;
pub mod mock;
pub mod model;
pub mod ui;
