pub mod checkbox;

pub use checkbox::{CheckState, Checkbox};
