//! Unsplash TUI - a terminal photo browser for the Unsplash API
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod models;
pub mod startup;
pub mod state;
pub mod terminal;
pub mod thumbnails;
pub mod traits;
pub mod ui;
pub mod unsplash;
