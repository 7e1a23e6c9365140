//! Command implementations for Ultrac CLI

pub mod build;
pub mod completions;
pub mod helpers;
pub mod list;
pub mod version;
