//! CRYP wallet command-line host for the history view and address issuance.

use clap::Parser;
use std::path::PathBuf;

use cryp_history::{Presenter, TransactionStore};
use cryp_receive::{AddressIssuanceController, IssueOutcome, RpcAccountService, SharedAddressStore};
use cryp_types::{AddressKind, Clock, SystemClock};
use cryp_utils::{init_logging, LogFormat};
use cryp_wallet::{render, WalletConfig};

#[derive(Parser)]
#[command(name = "cryp-wallet", about = "CRYP wallet history and receive addresses")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "CRYP_CONFIG")]
    config: Option<PathBuf>,

    /// Node JSON-RPC URL.
    #[arg(long, env = "CRYP_RPC_URL")]
    rpc_url: Option<String>,

    /// Node JSON-RPC user.
    #[arg(long, env = "CRYP_RPC_USER")]
    rpc_user: Option<String>,

    /// Node JSON-RPC password.
    #[arg(long, env = "CRYP_RPC_PASSWORD", hide_env_values = true)]
    rpc_password: Option<String>,

    /// Locale tag for number formatting, e.g. "en" or "de-DE".
    #[arg(long, env = "CRYP_LOCALE")]
    locale: Option<String>,

    /// Viewer timezone as minutes east of UTC; defaults to the system timezone.
    #[arg(long, env = "CRYP_UTC_OFFSET_MINUTES", allow_hyphen_values = true)]
    utc_offset_minutes: Option<i32>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "CRYP_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "CRYP_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Render a `listtransactions` JSON dump.
    History {
        /// JSON file holding an array of transaction records.
        #[arg(long)]
        file: PathBuf,

        /// Show the detail block and explorer links under every row.
        #[arg(long)]
        expanded: bool,
    },
    /// Issue a new receive address through the node.
    Receive {
        /// "transparent" or "shielded".
        #[arg(long, default_value = "transparent")]
        kind: AddressKind,
    },
}

fn load_config(cli: &Cli) -> anyhow::Result<WalletConfig> {
    let mut config = match &cli.config {
        Some(path) => WalletConfig::from_toml_file(&path.to_string_lossy())?,
        None => WalletConfig::default(),
    };

    if let Some(url) = &cli.rpc_url {
        config.rpc.url = url.clone();
    }
    if let Some(user) = &cli.rpc_user {
        config.rpc.user = user.clone();
    }
    if let Some(password) = &cli.rpc_password {
        config.rpc.password = password.clone();
    }
    if let Some(locale) = &cli.locale {
        config.locale = locale.clone();
    }
    if let Some(minutes) = cli.utc_offset_minutes {
        config.utc_offset_minutes = Some(minutes);
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_logging(config.log_format, &config.log_level);

    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    match cli.command {
        Command::History { file, expanded } => {
            let locale = config.locale()?;
            let catalog = config.catalog()?;
            let store = TransactionStore::new();
            let count = store.load_json_file(&file)?;
            tracing::info!(count, file = %file.display(), "loaded transaction history");

            let presenter = Presenter::new(&locale, &catalog, &config.explorers, &config.unit);
            let views = presenter.render(&store.records(), SystemClock.now());
            print!("{}", render::listing(&views, expanded));
        }
        Command::Receive { kind } => {
            let catalog = config.catalog()?;
            let service = RpcAccountService::new(config.rpc.clone())?;
            let addresses = SharedAddressStore::new();
            let controller = AddressIssuanceController::new(service, addresses);

            let outcome = controller.issue(kind).await;
            println!("{}", render::issue_outcome(kind, &outcome, &catalog));
            if let IssueOutcome::Failed(e) = outcome {
                return Err(e.into());
            }
        }
    }

    Ok(())
}
