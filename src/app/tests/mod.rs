//! Tests for the app module.
//!
//! This module is organized into submodules by tab:
//! - `helpers` - Shared test utilities
//! - `workshop` - Idea workshop conversation and report saving
//! - `style_builder` - Style profile generation
//! - `fact_library` - Fact library editing, saving and loading
//! - `checkers` - Fact, style and consistency checks
//! - `ui` - Navigation, dialogs, paste handling and rendering

#[allow(clippy::unwrap_used, clippy::expect_used)]
mod fact_library;
#[allow(clippy::unwrap_used, clippy::expect_used)]
pub mod helpers;
