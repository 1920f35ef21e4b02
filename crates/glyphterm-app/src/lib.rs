//! glyphterm-app: Application layer for glyphterm
//!
//! Configuration management, a headless renderer and the session that
//! wires a terminal to both.

pub mod config;
pub mod headless;
pub mod session;

pub use config::{load_config, load_config_from, save_config, Config, ConfigError};
pub use headless::HeadlessRenderer;
pub use session::{InputBatch, Session};
