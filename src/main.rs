use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotlookup::{cli, config, error, warning};

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
  args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Artist to search for (prompted when omitted)
    #[clap(long, short)]
    artist: Option<String>,

    /// One of artist_name, artist_id, most_popular_song, song_countries
    /// (prompted when omitted)
    #[clap(long, short)]
    mode: Option<String>,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn main() {
    env_logger::init();

    if let Err(e) = config::load_env() {
        warning!("Cannot load environment file. Err: {}", e);
    }

    let cli = Cli::parse();

    if let Some(Command::Completions(opt)) = cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    match cli::run(cli.artist, cli.mode) {
        Ok(answer) => println!("{}", answer),
        Err(e) => error!("{}", e),
    }
}
