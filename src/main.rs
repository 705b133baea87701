use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use browse_happy::config::{self, Config};
use browse_happy::logging;
use browse_happy::tracker::BrowserTracker;

#[derive(Parser)]
#[command(name = "browse-happy")]
#[command(version, about = "Latest stable releases of major web browsers")]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Fetch from Wikipedia even if today's cache exists
    #[arg(long, global = true)]
    refresh: bool,

    /// Log to stderr instead of the log file
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List every tracked browser with its latest version
    List {
        /// Print the browser list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the latest version of one browser
    Latest {
        /// Browser id (e.g., "firefox")
        id: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_path = config::log_path();
    let _guard = logging::init_subscriber((!cli.verbose).then_some(log_path.as_path()))
        .with_context(|| format!("failed to open log file {:?}", log_path))?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let tracker = BrowserTracker::from_config(&config)?.with_force_refresh(cli.refresh);
    tracker.init().await?;

    match cli.command.unwrap_or(Command::List { json: false }) {
        Command::List { json: true } => {
            println!("{}", serde_json::to_string_pretty(&tracker.browsers())?);
        }
        Command::List { json: false } => {
            for browser in tracker.browsers() {
                println!(
                    "{:<10} {:<20} {}",
                    browser.id,
                    browser.name,
                    browser.latest_version.as_deref().unwrap_or("-")
                );
            }
        }
        Command::Latest { id } => {
            let version = tracker
                .latest_version(&id)?
                .with_context(|| format!("no version known for {}", id))?;
            println!("{}", version);
        }
    }

    Ok(())
}
