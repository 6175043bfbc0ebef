//! Табы центральной зоны
//!
//! - `page`: обёртка контента таба
//! - `registry`: таблица `tab.key → View`
//! - `tab_labels`: заголовки табов по ключу

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{detail_tab_label, tab_label_for_key};
