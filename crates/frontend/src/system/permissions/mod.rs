pub mod aggregate;
pub mod ui;

pub use aggregate::{apply_changes, group_state, group_toggle_changes, visible_rows, PermissionRow};
