//! `Bookwright` - TUI writing companion
//!
//! Five tabs share one generation client and three saved artifacts: an idea
//! workshop that ends in a report, a style builder that produces a style
//! profile, a hand-kept fact library, and checkers that review manuscript
//! text against each of them.

pub mod app;
pub mod cli;
pub mod core;
pub mod fs;
pub mod logging;
pub mod tui;
