//! Custom TUI widgets.

pub mod dialog;
pub mod output;
pub mod status_bar;

pub use dialog::{DialogKind, DialogWidget};
pub use output::{
    OutputLine, OutputLineType, OutputWidget, calculate_visual_line_count, lines_to_text,
};
pub use status_bar::StatusBarWidget;
