use std::io::{BufRead, Write};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use userdir_config::{load as load_config, AppConfig};
use userdir_users::AccountService;

mod console;
mod directory;
mod telemetry;

use console::Reply;

#[derive(Parser)]
#[command(name = "userdir")]
#[command(about = "In-memory user directory (console by default)")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start interactive console (default)
    Console,
    /// Print the seeded accounts as JSON
    List,
    /// Validate the seed accounts in the configuration
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config().context("failed to load configuration")?;
    telemetry::init_tracing(&config.logging.filter).context("failed to initialise tracing")?;

    match cli.command.unwrap_or(Commands::Console) {
        Commands::Console => run_console(&config),
        Commands::List => list_accounts(&config),
        Commands::Check => check_seed(&config),
    }
}

fn list_accounts(config: &AppConfig) -> anyhow::Result<()> {
    let store = directory::build_store(&config.directory)?;
    let users = directory::sorted_accounts(store.list_all());

    let json = serde_json::to_string_pretty(&users).context("failed to serialise accounts")?;
    println!("{json}");
    Ok(())
}

fn check_seed(config: &AppConfig) -> anyhow::Result<()> {
    let store = directory::build_store(&config.directory)?;
    println!("Configuration OK: {} accounts", store.count());
    Ok(())
}

fn run_console(config: &AppConfig) -> anyhow::Result<()> {
    info!("starting interactive console");

    let store = directory::build_store(&config.directory)?;
    let mut service = AccountService::new(store);

    println!("User Directory Interactive Console");
    println!("Type commands like '/help', '/users', '/login', '/register', '/quit'");
    println!("Use Ctrl+D or '/quit' to exit");
    println!("---");

    let stdin = std::io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        line.clear();
        let bytes_read = reader
            .read_line(&mut line)
            .context("failed to read console input")?;
        if bytes_read == 0 {
            break; // EOF
        }

        match console::execute(&mut service, &line) {
            Reply::Continue(text) => {
                if !text.is_empty() {
                    println!("{text}");
                }
            }
            Reply::Quit(text) => {
                println!("{text}");
                break;
            }
        }
    }

    info!(accounts = service.repository().count(), "console closed");
    Ok(())
}
