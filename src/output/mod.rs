//! Output renderers: styled terminal listing and JSON.

pub mod json;
pub mod terminal;

use clap::ValueEnum;

use crate::models::UserRecord;

/// Trait for rendering a user listing to an output format.
pub trait OutputRenderer {
    /// Render `users` in the given order. No filtering or truncation.
    fn render(&self, users: &[UserRecord]) -> String;
}

/// Output format selectable from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl OutputFormat {
    /// Renderer for this format.
    pub fn renderer(self) -> Box<dyn OutputRenderer> {
        match self {
            OutputFormat::Terminal => Box::new(terminal::TerminalRenderer),
            OutputFormat::Json => Box::new(json::JsonRenderer),
        }
    }
}
