use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use toptracks::{cli, config, types::TimeRange, utils, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the local web app and sign in with Spotify
    Serve(ServeOptions),

    /// Show the signed in user's profile
    Profile,

    /// List your top tracks
    TopTracks(TracksOptions),

    #[clap(about = "Create a private playlist from your top tracks")]
    Playlist(TracksOptions),

    /// Show whether a session is stored
    Status,

    /// Forget the stored session
    Logout,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Do not open the browser
    #[clap(long)]
    pub no_browser: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct TracksOptions {
    /// Listening window: short (~4 weeks), medium (~6 months) or long (~1 year)
    #[clap(long, default_value = "short", value_parser = utils::parse_time_range)]
    pub time_range: TimeRange,

    /// Number of tracks (1-50)
    #[clap(long, default_value_t = utils::DEFAULT_TRACK_LIMIT, value_parser = utils::parse_track_limit)]
    pub limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Serve(opt) => cli::serve(!opt.no_browser).await,
        Command::Profile => cli::profile().await,
        Command::TopTracks(opt) => cli::top_tracks(opt.time_range, opt.limit).await,
        Command::Playlist(opt) => cli::playlist(opt.time_range, opt.limit).await,
        Command::Status => cli::status().await,
        Command::Logout => cli::logout().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
