pub mod permission_table;

pub use permission_table::PermissionTable;
