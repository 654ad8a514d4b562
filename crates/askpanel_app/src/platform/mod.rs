mod app;
mod cli;
mod config;
mod effects;
mod sink;
mod ui;

pub use app::run_app;
