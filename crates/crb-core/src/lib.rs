//! Core domain + application logic for the chat relay bot.
//!
//! This crate is intentionally framework-agnostic. Telegram and the completion
//! API live behind ports (traits) implemented in adapter crates.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod menu;
pub mod messaging;
pub mod model;
pub mod relay;
pub mod supervisor;

pub use errors::{Error, Result};
