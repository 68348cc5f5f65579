pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod services;
pub mod state;
pub mod ui;
