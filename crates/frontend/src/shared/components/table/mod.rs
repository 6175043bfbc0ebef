pub mod cell_format;
pub mod column;
pub mod data_table;
pub mod number_format;
pub mod page_window;
pub mod selection;
pub mod table_cell_checkbox;
pub mod table_header;
pub mod table_header_checkbox;
pub mod table_pagination;

pub use cell_format::{display_or_dash, TableRowId, EMPTY_CELL};
pub use column::Column;
pub use data_table::{placeholder_row, render_row_cells, DataTable};
pub use number_format::*;
pub use page_window::{PageSizeChangePolicy, PageWindow, PAGE_SIZE_OPTIONS};
pub use selection::SelectionSet;
pub use table_cell_checkbox::TableCellCheckbox;
pub use table_header::TableHeader;
pub use table_header_checkbox::TableHeaderCheckbox;
pub use table_pagination::TablePagination;
