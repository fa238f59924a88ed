//! jurify - terminal client for the JuriFy legal-assistance service
//!
//! Authenticates users, submits legal issue descriptions to the backend AI
//! service, renders the structured results, and layers history browsing,
//! XP/badges, voice dictation, PDF export, and local analytics on top.

use anyhow::Result;
use clap::{Parser, Subcommand};
use jurify_cli::client::ApiClient;
use jurify_cli::commands::{self, ask::AskArgs, App};
use jurify_cli::store::{self, session};
use jurify_common::config::{self, ConfigFile};
use jurify_common::locale::{is_supported_language, Locale, SUPPORTED_LANGUAGES};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "jurify", version, about = "AI-powered legal assistance client")]
struct Cli {
    /// Backend server URL (overrides JURIFY_SERVER and config.toml)
    #[arg(long, global = true)]
    server: Option<String>,

    /// Local data directory (overrides JURIFY_DATA_DIR and config.toml)
    #[arg(long, global = true)]
    data_dir: Option<String>,

    /// Response language code (en/hi/mr/ta/bn)
    #[arg(long, short = 'l', global = true)]
    language: Option<String>,

    /// Disable the typewriter reveal when rendering results
    #[arg(long, global = true)]
    no_typewriter: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create an account
    Register {
        name: String,
        email: String,
        password: String,
    },
    /// Log in and store the session token
    Login { email: String, password: String },
    /// Discard the stored session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Submit a legal issue and render the structured result
    Ask(AskArgs),
    /// Browse past queries
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },
    /// Show XP, level, and badges
    Xp,
    /// Show free-tier quota for this machine
    Status,
    /// Backend response-cache maintenance
    Cache {
        #[command(subcommand)]
        command: CacheCommand,
    },
    /// Export a notice to PDF
    Export {
        /// Export a specific history item instead of the last response
        #[arg(long)]
        id: Option<i64>,
        /// Output path (default: jurify-notice-<date>.pdf)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Show local usage analytics
    Stats {
        /// Zero all counters
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
enum HistoryCommand {
    /// List past queries, newest first
    List {
        /// Filter on issue text (server-side)
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one past query in full
    Show { id: i64 },
    /// Delete one past query
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum CacheCommand {
    /// Show backend cache statistics
    Stats,
    /// Clear cached responses
    Clear {
        /// Only remove expired entries
        #[arg(long)]
        expired_only: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        "jurify v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let cli = Cli::parse();
    let config = ConfigFile::load()?;

    let server_url = config::resolve_server_url(cli.server.as_deref(), &config);
    let data_dir = config::resolve_data_dir(cli.data_dir.as_deref(), &config);

    let language = cli
        .language
        .clone()
        .or_else(|| config.language.clone())
        .unwrap_or_else(|| "en".to_string());
    if !is_supported_language(&language) {
        let codes: Vec<&str> = SUPPORTED_LANGUAGES.iter().map(|(c, _)| *c).collect();
        anyhow::bail!(
            "Unsupported language '{}'; supported: {}",
            language,
            codes.join(", ")
        );
    }

    let locale_dir = config::locale_dir();
    let locale = Locale::load(&language, locale_dir.as_deref())?;

    let db = store::open(&data_dir).await?;
    let token = session::load_token(&db).await?;
    let client = ApiClient::new(&server_url)?.with_token(token);

    let typewriter =
        !cli.no_typewriter && config.typewriter.unwrap_or(true) && std::io::stdout().is_terminal();

    let app = App {
        db,
        client,
        locale,
        typewriter,
        language,
        transcriber_command: config.transcriber_command.clone(),
    };

    match &cli.command {
        Command::Register {
            name,
            email,
            password,
        } => commands::auth::register(&app, name, email, password).await,
        Command::Login { email, password } => commands::auth::login(&app, email, password).await,
        Command::Logout => commands::auth::logout(&app).await,
        Command::Whoami => commands::auth::whoami(&app).await,
        Command::Ask(args) => commands::ask::run(&app, args).await,
        Command::History { command } => match command {
            HistoryCommand::List { search } => {
                commands::history::list(&app, search.as_deref()).await
            }
            HistoryCommand::Show { id } => commands::history::show(&app, *id).await,
            HistoryCommand::Delete { id } => commands::history::delete(&app, *id).await,
        },
        Command::Xp => commands::xp::run(&app).await,
        Command::Status => commands::free::status(&app).await,
        Command::Cache { command } => match command {
            CacheCommand::Stats => commands::cache::stats(&app).await,
            CacheCommand::Clear { expired_only } => {
                commands::cache::clear(&app, *expired_only).await
            }
        },
        Command::Export { id, out } => commands::export::run(&app, *id, out.clone()).await,
        Command::Stats { reset } => commands::stats::run(&app, *reset).await,
    }
}
