use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use kursy::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Bypass the rate cache and fetch fresh data
    #[arg(short, long, global = true)]
    refresh: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for kursy::AppCommand {
    fn from(cmd: Commands) -> kursy::AppCommand {
        match cmd {
            Commands::Convert { amount, from, to } => {
                kursy::AppCommand::Convert { amount, from, to }
            }
            Commands::Rates { currency } => kursy::AppCommand::Rates { currency },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount between two currencies
    Convert {
        /// Amount to convert
        amount: f64,
        /// Source currency, alpha or numeric code (defaults from config)
        from: Option<String>,
        /// Target currency, alpha or numeric code (defaults from config)
        to: Option<String>,
    },
    /// Display the current exchange rate table
    Rates {
        /// Show only rates involving this currency
        #[arg(long)]
        currency: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => setup(),
        Some(cmd) => kursy::run_command(cmd.into(), cli.config_path.as_deref(), cli.refresh).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

fn setup() -> anyhow::Result<()> {
    use anyhow::Context;

    let path = kursy::config::AppConfig::default_config_path()?;

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let default_config = r#"---
provider:
  base_url: "https://api.monobank.ua"

# Anchor currency (numeric ISO 4217) for cross rates.
anchor: 980

cache_ttl_secs: 1800

default_from: "USD"
default_to: "UAH"
"#;

    std::fs::write(&path, default_config)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}
