//! Spotify Top Tracks Client Library
//!
//! This library signs a user in to the Spotify Web API with the authorization
//! code flow and PKCE, reads their profile and top tracks, and turns those
//! tracks into a private playlist. The same operations back a small local web
//! application (served with axum and driven from the browser) and a
//! command-line interface.
//!
//! # Modules
//!
//! - `api` - HTTP handlers of the local web application
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `management` - Persisted session state
//! - `server` - Router and shared application state
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `ui` - HTML rendering and the preview player state machine
//! - `utils` - PKCE helpers and formatting utilities
//!
//! # Example
//!
//! ```
//! use toptracks::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> toptracks::Res<()> {
//!     config::load_env().await?;
//!     // Use CLI functions...
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod ui;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used at the edges of the application (CLI commands, startup) where the
/// concrete error type no longer matters and only its message is shown.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Starting authentication process...");
/// info!("Found {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Authentication completed successfully");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for fatal errors in CLI commands. Library code and request
/// handlers return errors instead of calling this.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// This is the diagnostic channel for failed requests: the failing sequence
/// logs here and aborts.
///
/// # Example
///
/// ```
/// warning!("Error creating playlist: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a dimmed diagnostic line when `TOPTRACKS_DEBUG` is set.
///
/// Secrets must go through [`utils::mask_secret`] before being passed here.
///
/// # Example
///
/// ```
/// debug!("Auth URL: {}", url);
/// ```
#[macro_export]
macro_rules! debug {
  ($($arg:tt)*) => ({
    if std::env::var_os("TOPTRACKS_DEBUG").is_some() {
      use colored::Colorize;
      println!("[{}] {}", "~".dimmed(), std::format!($($arg)*).dimmed());
    }
  })
}
