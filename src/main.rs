use anyhow::Context;
use clap::{Parser, Subcommand};
use nba_scores::client::Client;
use nba_scores::data_provider::ScoresDataProvider;
use nba_scores::dev::MockClient;
use nba_scores::{commands, config, tui};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "nba-scores")]
#[command(about = "NBA scores browser", long_about = "NBA scores browser\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Scores service base URL (overrides api_base_url from the config file)
    #[arg(short = 'u', long, global = true)]
    base_url: Option<String>,

    /// Serve fixture data instead of calling the scores service
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display the games for a date
    Scores {
        /// Date in YYYY-MM-DD format (optional, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Also print each team's logo asset path
        #[arg(long)]
        logos: bool,
    },
    /// Display the box score for a specific game
    Boxscore {
        /// Game ID as reported by the scores listing
        game_id: String,
    },
    /// Display current configuration
    Config,
}

fn create_provider(
    mock: bool,
    base_url: Option<&str>,
    config: &config::Config,
) -> anyhow::Result<Arc<dyn ScoresDataProvider>> {
    if mock {
        tracing::info!("Using fixture data provider");
        return Ok(Arc::new(MockClient::new()));
    }

    let base_url = base_url.unwrap_or(&config.api_base_url);
    let client = Client::new(base_url, config.request_timeout())
        .with_context(|| format!("Failed to create scores client for '{}'", base_url))?;
    tracing::info!("Using scores service at {}", client.base_url());
    Ok(Arc::new(client))
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &config::Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("api_base_url: {}", cfg.api_base_url);
    println!("request_timeout: {} seconds", cfg.request_timeout().as_secs());
    println!("assets_dir: {}", cfg.assets_dir);
    println!();
    println!("[theme]");
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
    println!("live_fg: {:?}", cfg.theme.live_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    client: &dyn ScoresDataProvider,
    config: &config::Config,
    command: Commands,
) -> anyhow::Result<()> {
    match command {
        Commands::Config => {
            handle_config_command(config);
            Ok(())
        }
        Commands::Scores { date, logos } => {
            let assets_dir = logos.then_some(config.assets_dir.as_str());
            commands::scores::run(client, date, assets_dir).await
        }
        Commands::Boxscore { game_id } => commands::boxscore::run(client, &game_id).await,
    }
}

async fn run(cli: Cli, config: config::Config) -> anyhow::Result<()> {
    let Cli { base_url, mock, command, .. } = cli;

    match command {
        // Config command doesn't need a provider
        Some(Commands::Config) => {
            handle_config_command(&config);
            Ok(())
        }
        None => {
            let provider = create_provider(mock, base_url.as_deref(), &config)?;
            tui::run(provider, config).await.context("Error running TUI")
        }
        Some(command) => {
            let provider = create_provider(mock, base_url.as_deref(), &config)?;
            execute_command(provider.as_ref(), &config, command).await
        }
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    if let Err(e) = run(cli, config).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
