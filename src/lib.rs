//! artwork-table CLI
//!
//! 共通ライブラリのビュー状態を端末から操作する

pub mod browse;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod render;
