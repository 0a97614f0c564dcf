//! `affiliate-cli`: terminal client for the affiliate dashboard REST API.
//!
//! Every command maps to one backend call (two for `auth login`, which also
//! adopts the issued tokens) and prints the JSON answer. Tokens come from
//! flags or the environment; when they rotate mid-run the new pair is printed
//! on stderr as `export` lines so a shell can `eval` them.

mod api;
mod commands;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::io::Write;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use records::{ApiError, TokenPair};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use crate::api::ApiClient;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("{0}")]
    Invalid(&'static str),
    #[error("invalid bulk item {0:?}; expected TWEET_ID=TIME")]
    BulkItem(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("output failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "affiliate-cli", about = "Affiliate dashboard REST API client")]
struct Cli {
    #[arg(long, env = "AFFILIATE_API_URL", default_value = "http://127.0.0.1:5000/api")]
    base_url: String,

    #[arg(long, env = "AFFILIATE_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    #[arg(long, env = "AFFILIATE_REFRESH_TOKEN", hide_env_values = true)]
    refresh_token: Option<String>,

    /// Debug logs on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the backend is up.
    Health,
    Auth(AuthCommand),
    Campaigns(CampaignsCommand),
    Tweets(TweetsCommand),
    Links(LinksCommand),
    Analytics(AnalyticsCommand),
}

#[derive(Args, Debug)]
struct AuthCommand {
    #[command(subcommand)]
    command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
enum AuthSubcommand {
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "AFFILIATE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "AFFILIATE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Profile,
    Logout,
}

#[derive(Args, Debug)]
struct CampaignsCommand {
    #[command(subcommand)]
    command: CampaignsSubcommand,
}

#[derive(Subcommand, Debug)]
enum CampaignsSubcommand {
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        per_page: Option<u32>,
    },
    Show {
        id: i64,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        niche: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        niche: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    Activate {
        id: i64,
    },
    Pause {
        id: i64,
    },
    Delete {
        id: i64,
    },
    Performance {
        id: i64,
    },
}

#[derive(Args, Debug)]
struct TweetsCommand {
    #[command(subcommand)]
    command: TweetsSubcommand,
}

#[derive(Subcommand, Debug)]
enum TweetsSubcommand {
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        campaign_id: Option<i64>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        per_page: Option<u32>,
    },
    Show {
        id: i64,
    },
    Create {
        #[arg(long)]
        content: String,
        #[arg(long)]
        campaign_id: Option<i64>,
        #[arg(long)]
        affiliate_link_id: Option<i64>,
        /// ISO-8601 time, for example `2024-05-01T10:30:00`.
        #[arg(long)]
        scheduled_time: Option<String>,
    },
    Schedule {
        id: i64,
        #[arg(long)]
        at: String,
    },
    Cancel {
        id: i64,
    },
    /// Publish to X immediately.
    Post {
        id: i64,
    },
    Delete {
        id: i64,
    },
    Performance {
        id: i64,
    },
    BulkSchedule {
        /// `TWEET_ID=TIME`, repeatable.
        #[arg(long = "item", required = true)]
        items: Vec<String>,
    },
}

#[derive(Args, Debug)]
struct LinksCommand {
    #[command(subcommand)]
    command: LinksSubcommand,
}

#[derive(Subcommand, Debug)]
enum LinksSubcommand {
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value_t = false)]
        active_only: bool,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        per_page: Option<u32>,
    },
    Create {
        #[arg(long)]
        url: String,
        #[arg(long)]
        product_name: String,
        /// Percentage in 0..=100.
        #[arg(long)]
        commission_rate: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        utm_source: Option<String>,
        #[arg(long)]
        utm_medium: Option<String>,
        #[arg(long)]
        utm_campaign: Option<String>,
    },
    Toggle {
        id: i64,
    },
    Delete {
        id: i64,
    },
    /// Engagement and estimated revenue for one link.
    Performance {
        id: i64,
        #[arg(long, default_value_t = records::query::DEFAULT_DAYS)]
        days: u32,
    },
    /// Catalog search ordered by commission.
    Search {
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        brand: Option<String>,
        #[arg(long)]
        min_commission: Option<f64>,
        #[arg(long)]
        max_commission: Option<f64>,
        /// Include inactive links.
        #[arg(long, default_value_t = false)]
        all: bool,
        #[arg(long)]
        limit: Option<u32>,
    },
    Categories,
}

#[derive(Args, Debug)]
struct AnalyticsCommand {
    #[command(subcommand)]
    command: AnalyticsSubcommand,
}

#[derive(Subcommand, Debug)]
enum AnalyticsSubcommand {
    Dashboard {
        #[arg(long, default_value_t = records::query::DEFAULT_DAYS)]
        days: u32,
    },
    Trends {
        #[arg(long, default_value_t = records::query::DEFAULT_DAYS)]
        days: u32,
        #[arg(long, default_value = "daily")]
        granularity: String,
    },
    TopTweets {
        #[arg(long, default_value_t = records::query::DEFAULT_DAYS)]
        days: u32,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    CampaignPerformance {
        #[arg(long, default_value_t = records::query::DEFAULT_DAYS)]
        days: u32,
        #[arg(long)]
        campaign_id: Option<i64>,
    },
    AffiliatePerformance {
        #[arg(long, default_value_t = records::query::DEFAULT_DAYS)]
        days: u32,
        #[arg(long)]
        link_id: Option<i64>,
    },
    /// Report over an ISO date range (defaults to the last 30 days).
    Report {
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        /// summary, detailed, campaign or affiliate.
        #[arg(long = "type", default_value = "summary")]
        report_type: String,
    },
    Compare {
        #[arg(long)]
        period1_start: String,
        #[arg(long)]
        period1_end: String,
        #[arg(long)]
        period2_start: String,
        #[arg(long)]
        period2_end: String,
    },
    Export {
        /// json or csv.
        #[arg(long, default_value = "json")]
        format: String,
        /// summary, tweets, campaigns or affiliate_links.
        #[arg(long, default_value = "summary")]
        data_type: String,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut api = ApiClient::new(&cli.base_url, cli.access_token, cli.refresh_token)?;
    let outcome = commands::run(&mut api, cli.command).await;

    // Report rotated tokens even when the command itself failed afterwards.
    if let Some(pair) = api.rotated_tokens() {
        eprint!("{}", export_lines(&pair));
    }
    print_json(&outcome?)
}

fn export_lines(pair: &TokenPair) -> String {
    format!(
        "export AFFILIATE_ACCESS_TOKEN={}\nexport AFFILIATE_REFRESH_TOKEN={}\n",
        pair.access_token, pair.refresh_token
    )
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    let mut out = std::io::stdout().lock();
    writeln!(out, "{rendered}")?;
    Ok(())
}
