pub mod card;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod github;
pub mod models;
pub mod patcher;
pub mod ranking;
pub mod types;
pub mod updater;
