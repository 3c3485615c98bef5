pub mod artwork_table;
pub mod bulk_select_overlay;
pub mod page_controls;
pub mod selection_summary;
