//! Terminal rendering of plans, logs and status lines.
//!
//! Markdown goes through termimad when rich output is enabled and is printed
//! verbatim otherwise.

use std::io::{self, Write};

use anyhow::Result;
use dayplan_core::{display::StatusKind, OperationStatus};
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.table.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Tables are laid out by termimad as a whole; other lines inline
            // so that header hashes stay visible.
            if markdown.lines().any(|line| line.starts_with('|')) {
                self.skin.print_text(markdown);
                return Ok(());
            }
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[34m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        io::stdout().flush()?;
        Ok(())
    }

    /// Render a one-line status, colored by its kind
    pub fn render_status(&self, status: &OperationStatus) -> Result<()> {
        if self.rich_enabled {
            let color = match status.kind {
                StatusKind::Success => "32",
                StatusKind::Warning => "33",
                StatusKind::Failure => "31",
            };
            print!("\x1b[{color}m{status}\x1b[0m");
        } else {
            print!("{status}");
        }
        io::stdout().flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}
