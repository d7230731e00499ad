use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use jobscout_client::UpstreamScraper;
use jobscout_core::SearchService;
use jobscout_core::models::{DEFAULT_RESULTS_WANTED, JobType, SearchQuery, Site};

#[derive(Parser)]
#[command(
    name = "jobscout",
    version,
    about = "Search job boards through the jobscout scraping backend"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a job search and print the postings as JSON
    Search {
        /// Job search term
        #[arg(short, long)]
        search_term: String,

        /// Job location
        #[arg(short, long)]
        location: Option<String>,

        /// Site to search (repeatable); defaults to all known sites
        #[arg(long = "site", value_name = "SITE")]
        sites: Vec<String>,

        /// Number of results per site
        #[arg(short, long, default_value_t = DEFAULT_RESULTS_WANTED)]
        results_wanted: u32,

        /// Employment type: fulltime, parttime, internship, contract
        #[arg(long)]
        job_type: Option<String>,

        /// Only postings newer than this many hours
        #[arg(long)]
        hours_old: Option<u32>,

        /// Only remote jobs
        #[arg(long, default_value_t = false)]
        remote: bool,

        /// Base URL of the scraping backend
        #[arg(long, env = "SCRAPER_BASE_URL")]
        scraper_url: String,
    },

    /// List the supported job boards
    Sites,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            search_term,
            location,
            sites,
            results_wanted,
            job_type,
            hours_old,
            remote,
            scraper_url,
        } => {
            let query = build_query(
                search_term,
                location,
                &sites,
                results_wanted,
                job_type,
                hours_old,
                remote,
            )?;
            cmd_search(&query, &scraper_url).await?;
        }
        Commands::Sites => cmd_sites(),
    }

    Ok(())
}

fn build_query(
    search_term: String,
    location: Option<String>,
    sites: &[String],
    results_wanted: u32,
    job_type: Option<String>,
    hours_old: Option<u32>,
    remote: bool,
) -> Result<SearchQuery> {
    let mut query = SearchQuery::new(search_term);
    query.location = location;
    query.results_wanted = results_wanted;
    query.hours_old = hours_old;

    if !sites.is_empty() {
        query.sites = sites
            .iter()
            .map(|s| s.parse::<Site>().map_err(anyhow::Error::msg))
            .collect::<Result<Vec<Site>>>()?;
    }

    query.job_type = job_type
        .map(|s| s.parse::<JobType>().map_err(anyhow::Error::msg))
        .transpose()?;

    if remote {
        query.is_remote = Some(true);
    }

    Ok(query)
}

async fn cmd_search(query: &SearchQuery, scraper_url: &str) -> Result<()> {
    let scraper =
        UpstreamScraper::new(scraper_url).context("Failed to create scraper client")?;
    let service = SearchService::new(scraper);

    let outcome = service.search(query).await?;

    tracing::info!(
        "Found {} jobs in {:.2} seconds",
        outcome.total,
        outcome.elapsed_secs
    );

    println!("{}", serde_json::to_string_pretty(&outcome.jobs)?);

    Ok(())
}

fn cmd_sites() {
    println!("Supported job boards:\n");
    for site in Site::all() {
        match site.limitations() {
            Some(limits) => {
                println!("  {:<15} {} — {}", site.as_str(), site.coverage(), limits)
            }
            None => println!("  {:<15} {}", site.as_str(), site.coverage()),
        }
    }
}
