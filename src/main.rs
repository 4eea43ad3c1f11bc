use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};
use indicatif::{ProgressBar, ProgressStyle};
use inquire::{CustomType, Select};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;

mod api;
mod config;
mod dashboard;
mod error;
mod format;
mod icons;
mod logger;
mod page;
mod render;
mod simulator;
mod state;
mod theme;

use api::{DataProvider, DemoApi, FixtureApi, Latency, PoolId};
use config::{ConfigChanges, DashboardConfig};
use dashboard::{Dashboard, LOADING_MESSAGE};
use page::{ids, Page, TableRow, ToastKind};

#[derive(Parser)]
#[command(name = "beans-dash")]
#[command(author, version)]
#[command(about = "☕ $BEANS token dashboard and staking simulator")]
#[command(long_about = None)]
#[command(after_help = format!("\n{}\n  {}\n  {}\n  {}\n  {}\n",
    "EXAMPLES:".bright_yellow().bold(),
    "beans-dash                                  # Interactive dashboard".dimmed(),
    "beans-dash snapshot --instant               # Print every panel once".dimmed(),
    "beans-dash simulate --amount 1000 --days 90 --pool 90days".dimmed(),
    "beans-dash config --tx-limit 20             # Show more transactions".dimmed(),
))]
#[command(styles = get_styles())]
struct Cli {
    /// Config file (defaults to ~/.beans/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Serve data from a JSON fixture bundle instead of the demo generator
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,

    /// Skip the simulated network latency
    #[arg(long, global = true)]
    instant: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive terminal dashboard (default)
    Dashboard,

    /// Load everything once and print it as tables
    Snapshot,

    /// Project staking rewards for an amount, duration and pool
    Simulate {
        /// Amount of BEANS to stake (prompted when omitted)
        #[arg(long)]
        amount: Option<f64>,

        /// Staking duration in days (prompted when omitted)
        #[arg(long)]
        days: Option<u32>,

        /// Pool: flexible, 30days or 90days (prompted when omitted)
        #[arg(long)]
        pool: Option<PoolId>,
    },

    /// View or change dashboard settings
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Number of transactions to load
        #[arg(long)]
        tx_limit: Option<usize>,

        /// Number of top holders to load
        #[arg(long)]
        holder_limit: Option<usize>,

        /// How long notifications stay on screen
        #[arg(long)]
        toast_timeout_ms: Option<u64>,

        /// Address used by the demo wallet connect
        #[arg(long)]
        wallet_address: Option<String>,

        /// Log filter used when RUST_LOG is unset (e.g. "beans_dash=debug")
        #[arg(long)]
        log_level: Option<String>,
    },
}

fn get_styles() -> clap::builder::Styles {
    use clap::builder::styling::*;
    clap::builder::Styles::styled()
        .header(AnsiColor::BrightYellow.on_default().bold())
        .usage(AnsiColor::Yellow.on_default().bold())
        .literal(AnsiColor::BrightGreen.on_default())
        .placeholder(AnsiColor::Magenta.on_default())
        .error(AnsiColor::BrightRed.on_default().bold())
        .valid(AnsiColor::BrightCyan.on_default())
        .invalid(AnsiColor::BrightYellow.on_default())
}

fn print_banner() {
    println!();
    println!("{}", "   ( (                                   ".yellow());
    println!("{}", "    ) )      $ B E A N S                 ".bright_yellow().bold());
    println!("{}", "  ........   CoffeeHolics token dashboard".yellow());
    println!("{}", "  |      |]                              ".yellow());
    println!("{}", "  \\      /                               ".yellow());
    println!("{}", "   `----'                                ".yellow());
    println!();
}

fn spinner(message: &str) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.yellow} {msg}")
            .context("Invalid spinner template")?,
    );
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(message.to_string());
    Ok(spinner)
}

fn build_provider(fixture: Option<&Path>, latency: Latency) -> Arc<dyn DataProvider> {
    match fixture {
        Some(path) => Arc::new(FixtureApi::new(path)),
        None => Arc::new(DemoApi::new(latency)),
    }
}

/// Config, data provider and log guard shared by every command that shows data
fn prepare(
    config_path: Option<&Path>,
    fixture: Option<&Path>,
    instant: bool,
) -> Result<(DashboardConfig, Arc<dyn DataProvider>, Option<WorkerGuard>)> {
    let mut config = DashboardConfig::load(config_path)?;
    if instant {
        config.latency = Latency::zero();
    }

    // Logging is best effort; the dashboard works without it
    let guard = match config.resolved_log_dir().and_then(|dir| logger::init(&dir, &config.log_level)) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("{} logging disabled: {:#}", "Warning:".yellow().bold(), e);
            None
        }
    };

    let provider = build_provider(fixture, config.latency);
    Ok((config, provider, guard))
}

#[tokio::main]
async fn main() -> Result<()> {
    let Cli {
        config: config_path,
        fixture,
        instant,
        command,
    } = Cli::parse();

    match command.unwrap_or(Commands::Dashboard) {
        Commands::Dashboard => {
            let (config, provider, _guard) = prepare(config_path.as_deref(), fixture.as_deref(), instant)?;
            let mut dashboard = Dashboard::new(config, provider)?;
            dashboard.run()?;
        }

        Commands::Snapshot => {
            let (config, provider, _guard) = prepare(config_path.as_deref(), fixture.as_deref(), instant)?;
            print_banner();
            cmd_snapshot(config, provider).await?;
        }

        Commands::Simulate { amount, days, pool } => {
            let (_, provider, _guard) = prepare(config_path.as_deref(), fixture.as_deref(), instant)?;
            print_banner();
            cmd_simulate(provider, amount, days, pool).await?;
        }

        // Loaded without validation so an invalid file can be fixed from here.
        // --instant is a per-run flag, never persisted.
        Commands::Config {
            show,
            tx_limit,
            holder_limit,
            toast_timeout_ms,
            wallet_address,
            log_level,
        } => {
            print_banner();
            println!("{}", "CONFIGURATION".bright_yellow().bold());
            println!("{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".yellow());
            println!();

            let mut config = DashboardConfig::load_unchecked(config_path.as_deref())?;
            let changed = config.apply(ConfigChanges {
                tx_limit,
                holder_limit,
                toast_timeout_ms,
                wallet_address,
                log_level,
            });

            if changed {
                let saved = config.save(config_path.as_deref())?;
                println!("{} Configuration saved to {}", "✓".green().bold(), saved.display().to_string().dimmed());
                println!();
            }

            if show || changed {
                print_config(&config, config_path.as_deref())?;
            } else {
                println!("{}", "Usage:".bold());
                println!("  beans-dash config --show                 # Show current config");
                println!("  beans-dash config --tx-limit <N>         # Transactions to load");
                println!("  beans-dash config --holder-limit <N>     # Holders to load");
                println!("  beans-dash config --wallet-address <A>   # Demo wallet address");
            }
        }
    }

    Ok(())
}

fn print_config(config: &DashboardConfig, path: Option<&Path>) -> Result<()> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => DashboardConfig::default_path()?,
    };

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Setting".bright_white().to_string(), "Value".bright_white().to_string()]);
    let rows = [
        ("Config file", config_path.display().to_string()),
        ("Transactions", config.tx_limit.to_string()),
        ("Top holders", config.holder_limit.to_string()),
        ("Toast timeout", format!("{} ms", config.toast_timeout_ms)),
        (
            "Demo latency",
            format!(
                "stats {} / tx {} / staking {} / holders {} ms",
                config.latency.stats_ms, config.latency.transactions_ms, config.latency.staking_ms, config.latency.holders_ms
            ),
        ),
        ("Wallet address", config.wallet_address.clone()),
        ("Log directory", config.resolved_log_dir()?.display().to_string()),
        ("Log level", config.log_level.clone()),
    ];
    for (name, value) in rows {
        table.add_row(vec![name.bright_cyan().to_string(), value]);
    }
    println!("{}", table);
    Ok(())
}

/// Text of a page element for plain output; skeletons print as the placeholder
fn page_value(page: &Page, id: &str) -> String {
    match page.element(id) {
        Some(el) if !el.skeleton => el.text.clone(),
        _ => format::PLACEHOLDER.to_string(),
    }
}

fn rows_table(page: &Page, id: &str, header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(header.iter().map(|h| h.bright_white().to_string()).collect::<Vec<_>>());

    for row in page.rows(id).unwrap_or_default() {
        match row {
            TableRow::Cells(cells) => {
                table.add_row(cells.iter().map(|c| c.text.clone()).collect::<Vec<_>>());
            }
            TableRow::Placeholder { message, .. } => {
                table.add_row(vec![message.dimmed().to_string()]);
            }
        }
    }
    table
}

async fn cmd_snapshot(config: DashboardConfig, provider: Arc<dyn DataProvider>) -> Result<()> {
    let mut dashboard = Dashboard::new(config, provider)?;

    let spinner = spinner(LOADING_MESSAGE)?;
    dashboard.init();
    dashboard.settle().await;
    spinner.finish_and_clear();

    let page = &dashboard.page;
    let errors: Vec<String> = page
        .toasts
        .as_ref()
        .map(|t| t.iter().filter(|t| t.kind == ToastKind::Error).map(|t| t.message.clone()).collect())
        .unwrap_or_default();
    if errors.is_empty() {
        println!("{} {}", "✓".bright_green().bold(), "Data loaded".bright_white());
    }
    for message in &errors {
        println!("{} {}", "✗".bright_red().bold(), message.red());
    }
    println!();

    println!("{}", "TOKEN STATS".bright_yellow().bold());
    let mut stats = Table::new();
    stats.load_preset(UTF8_FULL);
    stats.set_header(vec!["Metric".bright_white().to_string(), "Value".bright_white().to_string()]);
    let stat_ids = [
        ("Total supply", ids::TOTAL_SUPPLY),
        ("Circulating supply", ids::CIRCULATING_SUPPLY),
        ("Total burned", ids::TOTAL_BURNED),
        ("Total reflections", ids::TOTAL_REFLECTIONS),
        ("Holders", ids::WALLET_COUNT),
        ("Transactions", ids::TX_COUNT),
        ("Market cap", ids::MARKET_CAP),
        ("Token price", ids::TOKEN_PRICE),
        ("Volume", ids::VOL_24H),
        ("Burned 24h", ids::BURN_24H),
        ("Reflections 24h", ids::REFL_24H),
    ];
    for (name, id) in stat_ids {
        stats.add_row(vec![name.bright_cyan().to_string(), page_value(page, id)]);
    }
    println!("{}", stats);
    println!();

    println!("{}", "LATEST TRANSACTIONS".bright_yellow().bold());
    println!("{}", rows_table(page, ids::LATEST_TX_BODY, &["Hash", "From", "To", "Amount", "Time"]));
    println!();

    println!("{}", "TOP HOLDERS".bright_yellow().bold());
    println!("{}", rows_table(page, ids::HOLDERS_BODY, &["Rank", "Address", "Balance", "Share"]));
    println!();

    println!("{}", "STAKING".bright_yellow().bold());
    let mut staking = Table::new();
    staking.load_preset(UTF8_FULL);
    staking.set_header(vec!["Pool", "APR", "TVL", "Your stake", "Rewards"].into_iter().map(|h| h.bright_white().to_string()).collect::<Vec<_>>());
    for pool in PoolId::ALL {
        let mut row = vec![pool.label().bright_cyan().to_string()];
        for field in page::POOL_FIELDS {
            row.push(page_value(page, &page::pool_element(pool, field)));
        }
        staking.add_row(row);
    }
    println!("{}", staking);
    println!(
        "  {} {}   {} {}   {} {}   {} {}",
        "Wallet:".bold(),
        page_value(page, ids::CONNECTED_WALLET),
        "Balance:".bold(),
        page_value(page, ids::WALLET_BALANCE),
        "Staked:".bold(),
        page_value(page, ids::TOTAL_STAKED),
        "Pending:".bold(),
        page_value(page, ids::TOTAL_PENDING_REWARDS),
    );
    println!();
    println!("{}", format!("(c) {} CoffeeHolics", page_value(page, ids::CURRENT_YEAR)).dimmed());

    Ok(())
}

async fn cmd_simulate(
    provider: Arc<dyn DataProvider>,
    amount: Option<f64>,
    days: Option<u32>,
    pool: Option<PoolId>,
) -> Result<()> {
    let amount = match amount {
        Some(a) => a,
        None => CustomType::<f64>::new("Amount of BEANS to stake:")
            .with_default(1000.0)
            .with_error_message("Please type a number")
            .prompt()?,
    };
    let days = match days {
        Some(d) => d,
        None => CustomType::<u32>::new("Duration in days:")
            .with_default(30)
            .with_error_message("Please type a whole number of days")
            .prompt()?,
    };
    let pool = match pool {
        Some(p) => p,
        None => Select::new("Pool:", PoolId::ALL.to_vec()).prompt()?,
    };

    let spinner = spinner("Fetching pool rates...")?;
    let staking = match provider.fetch_staking_data().await {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            warn!(error = %e, "staking data unavailable, using default rates");
            None
        }
    };
    spinner.finish_and_clear();
    if staking.is_none() {
        println!("{} {}", "!".yellow().bold(), "Pool rates unavailable, using default APRs".yellow());
    }

    let view = simulator::simulator_view(staking.as_ref(), &amount.to_string(), &days.to_string(), pool.as_str());

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["".to_string(), "Projection".bright_white().to_string()]);
    table
        .add_row(vec!["Pool".bright_cyan().to_string(), pool.label().to_string()])
        .add_row(vec!["Amount".bright_cyan().to_string(), format::beans(amount)])
        .add_row(vec!["Days".bright_cyan().to_string(), days.to_string()])
        .add_row(vec!["APR".bright_cyan().to_string(), view.apr])
        .add_row(vec!["Rewards".bright_cyan().to_string(), view.rewards.bright_green().to_string()])
        .add_row(vec!["Total".bright_cyan().to_string(), view.total])
        .add_row(vec!["Daily yield".bright_cyan().to_string(), view.daily_yield]);

    println!("{}", table);
    Ok(())
}
