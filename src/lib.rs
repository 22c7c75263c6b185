pub mod caption;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod generator;
pub mod headless;
pub mod logging;
pub mod ui;
