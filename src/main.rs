use std::{path::PathBuf, process::ExitCode};

use clap::{
    Args, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotsafe::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightGreen.on_default())
        .placeholder(AnsiColor::BrightBlue.on_default())
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
    /// Log in through the browser and print the access token
    Login(TokenOptions),

    /// List playlists
    Playlists(PlaylistsOptions),

    /// Export the tracks of all playlists to CSV
    Export(ExportOptions),

    /// Show or accept the consent notice
    Consent(ConsentOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Args, Debug, Clone)]
pub struct TokenOptions {
    /// Access token to use instead of logging in
    #[clap(long, conflicts_with = "redirect_url")]
    pub token: Option<String>,

    /// URL the browser was redirected to after login
    #[clap(long)]
    pub redirect_url: Option<String>,
}

impl From<TokenOptions> for cli::TokenSource {
    fn from(opt: TokenOptions) -> Self {
        cli::TokenSource {
            token: opt.token,
            redirect_url: opt.redirect_url,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistsOptions {
    /// Only show playlists whose name contains this text (case-insensitive)
    #[clap(long)]
    pub filter: Option<String>,

    #[clap(flatten)]
    pub token: TokenOptions,
}

#[derive(Parser, Debug, Clone)]
pub struct ExportOptions {
    /// File to write the CSV to
    #[clap(long, short, default_value = config::EXPORT_FILE_NAME)]
    pub output: PathBuf,

    #[clap(flatten)]
    pub token: TokenOptions,
}

#[derive(Parser, Debug, Clone)]
pub struct ConsentOptions {
    /// Accept the notice so it is no longer shown
    #[clap(long)]
    pub accept: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
            ExitCode::SUCCESS
        }
        Command::Consent(opt) => cli::consent(opt.accept).await,
        Command::Login(opt) => {
            cli::banner().await;
            cli::login(opt.into()).await
        }
        Command::Playlists(opt) => {
            cli::banner().await;
            cli::playlists(opt.filter, opt.token.into()).await
        }
        Command::Export(opt) => {
            cli::banner().await;
            cli::export(opt.output, opt.token.into()).await
        }
    }
}
