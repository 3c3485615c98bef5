//! Artwork Table Common Library
//!
//! CLIとWeb(WASM)で共有される型・ページ計算・行選択の整合・ビュー状態

pub mod types;
pub mod error;
pub mod pagination;
pub mod selection;
pub mod loader;
pub mod view;

pub use types::{Artwork, ArtworkId, ArtworkPage, Column, PLACEHOLDER};
pub use error::{Error, Result};
pub use pagination::{PAGE_SIZE, PAGE_LINK_SIZE, Paginator, global_index, page_from_offset};
pub use selection::{Selection, SelectionReconciler, PageCheckState, parse_bulk_input};
pub use loader::{ARTIC_API_URL, PageLoader, page_url, parse_page_response};
pub use view::{ViewState, PageRequest, LoadOutcome, RowView};
