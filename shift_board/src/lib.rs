pub mod app;
pub mod commands;
pub mod configuration;
pub mod render;
