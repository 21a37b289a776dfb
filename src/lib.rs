pub mod banner;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod consts;
pub mod engine;
pub mod generator;
pub mod logging;
pub mod pantry;
pub mod query;
pub mod random;
pub mod recipe;
pub mod render;
pub mod saved;
pub mod session;
pub mod spinner;
pub mod state;
pub mod store;
