//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_author_list, format_author_report, format_magazine_line, format_magazine_list,
    format_magazine_report, format_summary,
};
