use clap::Parser;
use colored::Colorize;
use dotenv::dotenv;
use nutrition_analyzer::{AppError, CommandHandler, FoodConfig, TerminalConsole, UsdaClient};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Look up and compare USDA nutrition data", long_about = None)]
struct Args {
    /// FoodData Central API key (defaults to USDA_API_KEY, then DEMO_KEY)
    #[arg(short, long)]
    api_key: Option<String>,

    /// Override the FoodData Central base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    #[arg(long)]
    no_color: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if args.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(args).await {
        eprintln!("{}", e.to_string().red());
        return Err(e.into());
    }

    Ok(())
}

async fn run(args: Args) -> Result<(), AppError> {
    let config = FoodConfig::from_env()
        .with_api_key(args.api_key)
        .with_base_url(args.base_url)
        .with_timeout_secs(args.timeout);
    log::info!(
        "Using {} with a {}s timeout",
        config.base_url,
        config.timeout.as_secs()
    );

    let client = UsdaClient::new(config)?;
    let mut console = TerminalConsole::new()?;
    CommandHandler::new(client).run(&mut console).await
}
