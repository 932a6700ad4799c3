pub mod config;
pub mod consts;
pub mod dialog;
pub mod error;
pub mod export;
pub mod fits;
pub mod header;
pub mod menu;
pub mod overlay;
pub mod render;
pub mod stretch;
pub mod viewer;
