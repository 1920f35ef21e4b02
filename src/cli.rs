//! CLI argument parsing for glyphterm

use std::path::PathBuf;

use clap::Parser;

use glyphterm_app::Config;
use glyphterm_core::Color;

fn parse_color(text: &str) -> Result<Color, String> {
    Color::parse(text).ok_or_else(|| format!("unknown color '{}'", text))
}

/// glyphterm - Render text through a virtual terminal grid
#[derive(Parser, Debug)]
#[command(name = "glyphterm")]
#[command(about = "Render text through a virtual terminal grid")]
#[command(version)]
pub struct Cli {
    /// Grid width, overriding the config file
    #[arg(short = 'c', long = "columns")]
    pub columns: Option<usize>,

    /// Grid height, overriding the config file
    #[arg(short = 'r', long = "rows")]
    pub rows: Option<usize>,

    /// Config file path (defaults to the platform config directory)
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(long = "log-level", default_value = "info")]
    pub log_level: String,

    /// Text to write instead of reading stdin
    #[arg(short = 't', long = "text")]
    pub text: Option<String>,

    /// Foreground color: a name, `idx:N` or `#rrggbb`
    #[arg(long = "foreground", value_parser = parse_color)]
    pub foreground: Option<Color>,

    /// Draw the cursor in the rendered frame
    #[arg(long = "show-cursor")]
    pub show_cursor: bool,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Apply command-line overrides on top of a loaded config
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(columns) = self.columns {
            config.terminal.columns = columns;
        }
        if let Some(rows) = self.rows {
            config.terminal.rows = rows;
        }
        if let Some(color) = self.foreground {
            config.style.foreground = color;
        }
        if self.show_cursor {
            config.render.show_cursor = true;
        }
    }
}
