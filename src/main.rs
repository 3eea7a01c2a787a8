use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use splcli::{cli, config, error, types::PkceToken};
use tokio::sync::Mutex;

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
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Display the currently playing track
    Now,

    /// Display information about a track by ID or URL
    Show(ShowOptions),

    /// Show all playlists
    Playlists,

    /// List tracks in a playlist
    List(PlaylistNameOptions),

    /// Create a new playlist
    New(PlaylistNameOptions),

    /// Delete (unfollow) a playlist
    Del(PlaylistNameOptions),

    /// Remove all tracks from a playlist
    Clear(PlaylistNameOptions),

    /// Add the currently playing track to a playlist
    Ato(PlaylistNameOptions),

    /// Add a track by ID or URL to a playlist
    Aid(AddByIdOptions),

    /// Add a track by name to a playlist
    Add(AddByNameOptions),

    /// Remove a track from a playlist by name, ID, or URL
    Rm(RemoveOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ShowOptions {
    /// ID or URL of the track to display
    #[clap(long)]
    tid: String,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistNameOptions {
    /// Name of the playlist
    #[clap(long, short = 'p')]
    playlist: String,
}

#[derive(Parser, Debug, Clone)]
pub struct AddByIdOptions {
    /// ID or URL of the track to add
    #[clap(long)]
    tid: String,

    /// Name of the playlist to add the track to
    #[clap(long, short = 'p')]
    playlist: String,
}

#[derive(Parser, Debug, Clone)]
pub struct AddByNameOptions {
    /// Name of the track to add
    #[clap(long, short = 't')]
    track: String,

    /// Name of the playlist to add the track to
    #[clap(long, short = 'p')]
    playlist: String,
}

#[derive(Parser, Debug, Clone)]
pub struct RemoveOptions {
    /// Name, ID, or URL of the track to remove
    #[clap(long, short = 't')]
    track: String,

    /// Name of the playlist to remove the track from
    #[clap(long, short = 'p')]
    playlist: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Now => cli::now().await,
        Command::Show(opt) => cli::show(opt.tid).await,
        Command::Playlists => cli::playlists().await,
        Command::List(opt) => cli::list(opt.playlist).await,
        Command::New(opt) => cli::new(opt.playlist).await,
        Command::Del(opt) => cli::del(opt.playlist).await,
        Command::Clear(opt) => cli::clear(opt.playlist).await,
        Command::Ato(opt) => cli::add_current(opt.playlist).await,
        Command::Aid(opt) => cli::add_by_id(opt.tid, opt.playlist).await,
        Command::Add(opt) => cli::add_by_name(opt.track, opt.playlist).await,
        Command::Rm(opt) => cli::remove(opt.track, opt.playlist).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
