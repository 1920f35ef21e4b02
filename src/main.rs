//! glyphterm - Render text through a virtual terminal grid
//!
//! Writes text from stdin (or `--text`) into a terminal sized from the
//! config file and prints the rendered frame.

mod cli;

use std::io::{self, Read, Write};

use anyhow::Context;

use cli::Cli;
use glyphterm_app::{load_config, load_config_from, Session};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    let mut config = match &cli.config {
        Some(path) => load_config_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => load_config().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}, using defaults", e);
            Default::default()
        }),
    };
    cli.apply_to(&mut config);
    config.validate()?;

    let text = match cli.text {
        Some(ref text) => text.clone(),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            text
        }
    };

    let session = Session::new(&config);
    session.write_str(text.trim_end_matches('\n'));
    let repainted = session.render_frame();
    log::debug!("Repainted {} cells", repainted);
    session.close();

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", session.frame_text())?;
    Ok(())
}
